/// Mock implementations for testing
mod mock_auth_api;
mod mock_compliance_api;
mod mock_session_store;

pub use mock_auth_api::MockAuthApi;
pub use mock_compliance_api::MockComplianceApi;
pub use mock_session_store::MemorySessionStore;
