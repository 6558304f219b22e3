#![allow(dead_code)]
/// Shared fixtures and mock implementations for integration tests
pub mod fixtures;
pub mod http_stub;
pub mod mocks;
