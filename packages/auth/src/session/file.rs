// ABOUTME: TOML-file backed session store
// ABOUTME: Reads the file on every access so external rotations are picked up immediately

use std::fs;
use std::path::{Path, PathBuf};

use cms_core::User;
use tracing::{debug, warn};

use super::{SessionRecord, SessionStore};
use crate::error::{SessionError, SessionResult};

/// Session persisted to a TOML file (by default `~/.cms/session.toml`)
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location under the user's home directory
    pub fn default_location() -> Self {
        Self::new(cms_core::session_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable files read as an empty session
    fn load(&self) -> SessionRecord {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return SessionRecord::default(),
            Err(e) => {
                warn!("Could not read session file {}: {}", self.path.display(), e);
                return SessionRecord::default();
            }
        };

        match toml::from_str(&content) {
            Ok(record) => record,
            Err(e) => {
                warn!(
                    "Ignoring corrupt session file {}: {}",
                    self.path.display(),
                    e
                );
                SessionRecord::default()
            }
        }
    }

    fn save(&self, record: &SessionRecord) -> SessionResult<()> {
        if self.path.is_dir() {
            return Err(SessionError::Storage(format!(
                "Session path {} is a directory",
                self.path.display()
            )));
        }

        if record.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
                debug!("Removed session file {}", self.path.display());
            }
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(record)?;
        fs::write(&self.path, content)?;
        restrict_permissions(&self.path)?;

        debug!("Wrote session file {}", self.path.display());
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> SessionResult<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> SessionResult<()> {
    Ok(())
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.load().auth_token
    }

    fn user(&self) -> Option<User> {
        self.load().user
    }

    fn store(&self, token: &str, user: &User) -> SessionResult<()> {
        self.save(&SessionRecord {
            auth_token: Some(token.to_string()),
            user: Some(user.clone()),
        })
    }

    fn clear_token(&self) -> SessionResult<()> {
        let mut record = self.load();
        record.auth_token = None;
        self.save(&record)
    }

    fn clear(&self) -> SessionResult<()> {
        self.save(&SessionRecord::default())
    }
}
