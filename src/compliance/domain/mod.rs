/// Domain models mirrored from the compliance API.
///
/// These are plain records: the server owns persistence and workflow
/// enforcement, the client validates lifecycle transitions only as a
/// convenience before dispatching a request.
pub mod finding;
pub mod framework;
pub mod incident;
pub mod policy;
pub mod training;
pub mod user;

pub use finding::{
    Comment, EvidenceRef, Finding, FindingStatus, HistoryEntry, RemediationTask, RiskLevel,
    Severity,
};
pub use framework::{Control, ControlGroup, Framework, ImplementationStatus};
pub use incident::{Incident, IncidentStatus, IncidentUpdate};
pub use policy::{DocumentRef, Policy, PolicyStatus};
pub use training::{AssignmentStatus, CompletionStats, CourseStatus, TrainingAssignment, TrainingCourse};
pub use user::{Role, User};

use uuid::Uuid;

/// Anything addressable by a stable server-assigned id.
///
/// The state layer keys its indexed collections on this, so every entity
/// that lives in a slice implements it.
pub trait Identified {
    fn id(&self) -> Uuid;
}
