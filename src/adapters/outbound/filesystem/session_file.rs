use crate::application::dto::StoredSession;
use crate::ports::outbound::SessionStore;
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;

/// FileSessionStore adapter persisting the session as a JSON file.
///
/// Plays the role browser storage plays for the web dashboard: the token
/// and serialized user survive between invocations and are removed on
/// logout. The file is written with owner-only permissions since it
/// holds a live bearer token.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &StoredSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create session directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json).with_context(|| {
            format!("Failed to write session file: {}", self.path.display())
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&self.path, permissions).with_context(|| {
                format!(
                    "Failed to restrict session file permissions: {}",
                    self.path.display()
                )
            })?;
        }

        Ok(())
    }

    fn load(&self) -> Result<Option<StoredSession>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).with_context(|| {
            format!("Failed to read session file: {}", self.path.display())
        })?;
        let session = serde_json::from_str(&content).with_context(|| {
            format!(
                "Session file is corrupt: {}\n\n💡 Hint: Run 'grc-console logout' to reset it",
                self.path.display()
            )
        })?;
        Ok(Some(session))
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to remove session file: {}", self.path.display())
            }),
        }
    }
}
