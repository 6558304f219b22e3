/// Use cases orchestrating ports against the state store.
pub mod browse;
pub mod dashboard;
pub mod frameworks;
pub mod mutate;
pub mod session;
