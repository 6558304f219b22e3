/// Application layer: DTOs, the client state store, and use cases.
pub mod dto;
pub mod store;
pub mod use_cases;
