//! Persisted login session.
//!
//! One typed repository replaces the scattered per-page storage lookups
//! (raw token, auth flag, user blob, cached name, cached cédula) that the
//! views used to read under slightly different keys. Every route guard and
//! view goes through `SessionStore`; authentication is a single predicate
//! derived from token presence, never a second flag kept alongside it.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config;

// ═══════════════════════════════════════════════════════════
// Session
// ═══════════════════════════════════════════════════════════

/// The logged-in account as the front end knows it.
///
/// Created on successful login, destroyed on logout. No expiry is tracked
/// client-side; the token is trusted until the backend rejects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token from `/Usuarios/Login`.
    pub token: String,
    /// National id of the account.
    pub cedula: String,
    /// Role string as reported by the backend, once fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rol: Option<String>,
    /// Cached display name (resolved lazily from the médicos list).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, cedula: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            cedula: cedula.into(),
            rol: None,
            nombre: None,
        }
    }

    /// The one authentication signal: a non-empty token.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Display name with the standard placeholder.
    pub fn display_name(&self) -> &str {
        self.nombre.as_deref().filter(|n| !n.is_empty()).unwrap_or("Usuario")
    }
}

// ═══════════════════════════════════════════════════════════
// SessionStore
// ═══════════════════════════════════════════════════════════

/// File-backed session repository with explicit save/load/clear.
pub struct SessionStore {
    path: PathBuf,
}

/// Errors from persisting a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("No se pudo guardar la sesión: {0}")]
    Io(#[from] std::io::Error),
    #[error("No se pudo serializar la sesión: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SessionStore {
    /// Store backed by an explicit file path (tests use a temp dir).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the standard location under the app data dir.
    pub fn at_default_location() -> Self {
        Self::new(config::session_file())
    }

    /// Persist the session. No validation of token shape is performed.
    pub fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// The last saved session, or `None` when absent.
    ///
    /// A missing or unreadable file both report "absent"; a corrupted file
    /// is logged and treated the same way rather than propagated — the user
    /// just sees the login view again.
    pub fn load(&self) -> Option<Session> {
        let text = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&text) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Sesión guardada corrupta, se descarta: {e}");
                None
            }
        }
    }

    /// Remove all persisted session state.
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Convenience: token of the current session, if any.
    pub fn token(&self) -> Option<String> {
        self.load().map(|s| s.token).filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("session.json"))
    }

    #[test]
    fn load_without_save_reports_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut session = Session::new("tok-abc123", "1234567890");
        session.rol = Some("medico".to_string());
        session.nombre = Some("Ana Suárez".to_string());

        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), session);
    }

    #[test]
    fn save_overwrites_previous_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&Session::new("tok-1", "111")).unwrap();
        store.save(&Session::new("tok-2", "222")).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.token, "tok-2");
        assert_eq!(loaded.cedula, "222");
    }

    #[test]
    fn clear_then_load_reports_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&Session::new("tok", "123")).unwrap();
        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn clear_without_save_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.clear().unwrap();
    }

    #[test]
    fn corrupted_file_reports_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = SessionStore::new(&path);
        assert!(store.load().is_none());
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested/deeper/session.json"));
        store.save(&Session::new("tok", "123")).unwrap();
        assert!(store.load().is_some());
    }

    #[test]
    fn authentication_derives_from_token_presence() {
        assert!(Session::new("tok", "123").is_authenticated());
        assert!(!Session::new("", "123").is_authenticated());
    }

    #[test]
    fn empty_token_is_not_returned_by_token_accessor() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&Session::new("", "123")).unwrap();
        assert!(store.token().is_none());
    }

    #[test]
    fn display_name_falls_back_to_placeholder() {
        let mut s = Session::new("tok", "123");
        assert_eq!(s.display_name(), "Usuario");
        s.nombre = Some(String::new());
        assert_eq!(s.display_name(), "Usuario");
        s.nombre = Some("Carlos Mena".to_string());
        assert_eq!(s.display_name(), "Carlos Mena");
    }

    #[test]
    fn role_is_optional_in_serialized_form() {
        let s = Session::new("tok", "123");
        let json = serde_json::to_string(&s).unwrap();
        assert!(!json.contains("rol"));
        let back: Session = serde_json::from_str(&json).unwrap();
        assert!(back.rol.is_none());
    }
}
