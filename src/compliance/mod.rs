/// Compliance domain: entity models and the services that project over them.
pub mod domain;
pub mod services;
