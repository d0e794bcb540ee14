//! Persisted login session.
//!
//! Stores the bearer token and user identity in `${PWX_HOME}/session.json`
//! with restricted permissions (0600). The file is read once at startup to
//! seed in-memory state; it is never re-read while the app runs.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// Session file name under the pwx home directory.
const SESSION_FILE: &str = "session.json";

/// Authenticated user identity as the service returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUser {
    pub id: i64,
    pub username: String,
}

/// A logged-in session: the bearer token plus the user it belongs to.
///
/// This is exactly the body of a successful login or register response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: ApiUser,
}

/// Returns the path to the session file.
pub fn session_path() -> PathBuf {
    paths::pwx_home().join(SESSION_FILE)
}

/// Loads the persisted session from the default path, if any.
pub fn load() -> Result<Option<Session>> {
    load_from(&session_path())
}

/// Loads a session from a specific path.
/// Returns `None` if the file doesn't exist.
pub fn load_from(path: &Path) -> Result<Option<Session>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session from {}", path.display()))?;

    let session = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse session from {}", path.display()))?;

    Ok(Some(session))
}

/// Saves the session to the default path.
pub fn save(session: &Session) -> Result<()> {
    save_to(&session_path(), session)
}

/// Saves a session to a specific path with restricted permissions (0600).
pub fn save_to(path: &Path, session: &Session) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let contents = serde_json::to_string_pretty(session).context("Failed to serialize session")?;

    // Write with restricted permissions
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)
            .with_context(|| format!("Failed to open {} for writing", path.display()))?;
        file.write_all(contents.as_bytes())
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    }

    #[cfg(not(unix))]
    {
        fs::write(path, contents)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    }

    Ok(())
}

/// Removes the persisted session at the default path.
/// Returns whether a session existed.
pub fn clear() -> Result<bool> {
    clear_at(&session_path())
}

/// Removes a session file at a specific path. Ok when no file exists.
pub fn clear_at(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn sample_session() -> Session {
        Session {
            token: "tok-123".to_string(),
            user: ApiUser {
                id: 7,
                username: "bob".to_string(),
            },
        }
    }

    /// Loading from a missing file yields no session.
    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        assert_eq!(load_from(&path).unwrap(), None);
    }

    /// Save then load round-trips the token and user.
    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = sample_session();
        save_to(&path, &session).unwrap();

        assert_eq!(load_from(&path).unwrap(), Some(session));
    }

    /// The session file is written with owner-only permissions.
    #[cfg(unix)]
    #[test]
    fn test_save_sets_restricted_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        save_to(&path, &sample_session()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    /// Save creates intermediate directories.
    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        save_to(&path, &sample_session()).unwrap();

        assert!(path.exists());
    }

    /// Saving twice overwrites in place, keeping a single session.
    #[test]
    fn test_save_overwrites_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        save_to(&path, &sample_session()).unwrap();

        let updated = Session {
            token: "tok-456".to_string(),
            ..sample_session()
        };
        save_to(&path, &updated).unwrap();

        assert_eq!(load_from(&path).unwrap(), Some(updated));
    }

    /// Clearing a missing session is not an error.
    #[test]
    fn test_clear_missing_is_ok() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        assert!(!clear_at(&path).unwrap());
    }

    /// Clear removes an existing session file.
    #[test]
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        save_to(&path, &sample_session()).unwrap();
        assert!(clear_at(&path).unwrap());
        assert!(!path.exists());
        assert_eq!(load_from(&path).unwrap(), None);
    }
}
