/// Data transfer objects crossing the application boundary.
pub mod drafts;
pub mod list_query;
pub mod page;
pub mod session;

pub use drafts::{FindingPatch, NewFinding, NewIncident, NewPolicy, PolicyPatch};
pub use list_query::{ListFilters, ListQuery};
pub use page::Page;
pub use session::{LoginResponse, SessionTokens, StoredSession};
