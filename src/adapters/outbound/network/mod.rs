/// Network adapters for the compliance REST API.
pub mod remote_api;
pub mod rest_client;

pub use rest_client::RestClient;
