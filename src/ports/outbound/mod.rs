/// Outbound ports (driven ports) - infrastructure interfaces
///
/// These ports define the interfaces the application core uses to talk
/// to the outside world: the compliance REST API and the session store.
pub mod api;
pub mod session_store;

pub use api::{AuthApi, FindingApi, FrameworkApi, IncidentApi, PolicyApi, TrainingApi};
pub use session_store::SessionStore;
