use std::sync::Mutex;

use grc_console::application::dto::StoredSession;
use grc_console::prelude::*;

/// In-memory SessionStore for tests that do not touch the filesystem.
#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<StoredSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &StoredSession) -> Result<()> {
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<StoredSession>> {
        Ok(self.session.lock().unwrap().clone())
    }

    fn clear(&self) -> Result<()> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}
