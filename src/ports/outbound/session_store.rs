use crate::application::dto::StoredSession;
use crate::shared::Result;

/// SessionStore port for persisting the session between invocations
///
/// The console analogue of the dashboard's browser storage: a token and
/// the serialized user record under fixed keys, cleared on logout.
pub trait SessionStore: Send + Sync {
    /// Persists the session, replacing any previous one.
    fn save(&self, session: &StoredSession) -> Result<()>;

    /// Loads the persisted session. `Ok(None)` when no session exists;
    /// a corrupt or unreadable store is an error.
    fn load(&self) -> Result<Option<StoredSession>>;

    /// Removes the persisted session. Clearing an empty store is fine.
    fn clear(&self) -> Result<()>;
}
