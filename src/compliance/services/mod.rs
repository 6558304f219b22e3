/// Domain services: pure functions over domain models.
pub mod compliance_score;

pub use compliance_score::{apply_control_update, implementation_progress, project_score};
