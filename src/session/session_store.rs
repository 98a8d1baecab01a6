use crate::session::session_context::SessionContext;

use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that may occur while loading or saving the session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("session I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("session file is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key/value storage holding the [`SessionContext`] between runs.
pub trait SessionStore {
    /// Reads the stored context, or the default one if nothing was stored yet.
    fn load(&self) -> Result<SessionContext, SessionError>;

    fn save(&self, context: &SessionContext) -> Result<(), SessionError>;
}

/// Stores the session as a JSON file.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<SessionContext, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("No session at {}, starting fresh", self.path.display());
                Ok(SessionContext::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, context: &SessionContext) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(context)?)?;
        debug!("Saved session to {}", self.path.display());
        Ok(())
    }
}

/// Default location of the session file under the platform data directory.
pub fn default_session_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "csgo-explorer", "csgo-explorer")
        .map(|dirs| dirs.data_dir().join("session.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::session_context::ThemeMode;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_default_session() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));

        assert_eq!(store.load().unwrap(), SessionContext::default());
    }

    #[test]
    fn session_round_trips_through_the_file() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));
        let context = SessionContext::default()
            .with_steam_id("76561198000000000")
            .with_theme_mode(ThemeMode::Dark.toggled())
            .with_menu_item("Friends");

        store.save(&context).unwrap();

        assert_eq!(store.load().unwrap(), context);
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"steamId": "1"}"#).unwrap();

        let context = FileSessionStore::new(&path).load().unwrap();

        assert_eq!(context.steam_id.as_deref(), Some("1"));
        assert_eq!(context.theme_mode, ThemeMode::Dark);
        assert_eq!(context.selected_menu_item, "Dashboard");
    }

    #[test]
    fn corrupt_files_are_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let err = FileSessionStore::new(&path).load().unwrap_err();

        assert!(matches!(err, SessionError::Serialization(_)));
    }
}
