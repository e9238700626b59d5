//! Bearer token providers.
//!
//! The HTTP client never reaches into global storage for credentials; it
//! asks an injected [`TokenProvider`] on every request.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use serde_json::{Map, Value};
use thiserror::Error;

/// Key the token is stored under in persistent storage.
pub const TOKEN_KEY: &str = "token";

/// Errors from persistent token storage.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Token storage is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}

/// Source of the bearer token attached to outgoing requests.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Provider that never authenticates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Fixed token, e.g. from a command-line flag.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// In-memory token that can be replaced at any time, e.g. after login.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: ArcSwapOption<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: impl Into<String>) {
        self.inner.store(Some(Arc::new(token.into())));
    }

    pub fn clear(&self) {
        self.inner.store(None);
    }
}

impl TokenProvider for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.inner.load_full().map(|t| t.as_ref().clone())
    }
}

/// Token persisted as a JSON object `{"token": "..."}` on disk.
///
/// A missing file, a missing key or an empty string all mean "no token".
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token.
    pub fn load(&self) -> Result<Option<String>, TokenError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let doc: Map<String, Value> = serde_json::from_str(&content)?;
        Ok(doc
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_string))
    }

    /// Persist a token, keeping any other keys already in the file.
    pub fn save(&self, token: &str) -> Result<(), TokenError> {
        let mut doc = self.read_doc()?;
        doc.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_doc(&doc)
    }

    /// Remove the token. Succeeds when nothing was stored.
    pub fn clear(&self) -> Result<(), TokenError> {
        let mut doc = self.read_doc()?;
        if doc.remove(TOKEN_KEY).is_some() {
            self.write_doc(&doc)?;
        }
        Ok(())
    }

    fn read_doc(&self) -> Result<Map<String, Value>, TokenError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_doc(&self, doc: &Map<String, Value>) -> Result<(), TokenError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(doc)?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path)?;

        // `mode` only applies on create; tighten files left by older versions.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))?;
        }

        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl TokenProvider for FileTokenStore {
    fn token(&self) -> Option<String> {
        match self.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Ignoring unreadable token file");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("synergysphere-token-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryTokenStore::new();
        assert!(store.token().is_none());
        store.set("abc");
        assert_eq!(store.token().as_deref(), Some("abc"));
        store.clear();
        assert!(store.token().is_none());
    }

    #[test]
    fn test_file_store_lifecycle() {
        let path = temp_path("lifecycle.json");
        let store = FileTokenStore::new(&path);

        assert!(store.token().is_none());

        store.save("jwt-1").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("jwt-1"));

        store.save("jwt-2").unwrap();
        assert_eq!(store.token().as_deref(), Some("jwt-2"));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let path = temp_path("other-keys.json");
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let store = FileTokenStore::new(&path);
        store.save("jwt").unwrap();
        store.clear().unwrap();

        let doc: Map<String, Value> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc.get("theme"), Some(&Value::String("dark".into())));
        assert!(!doc.contains_key(TOKEN_KEY));

        let _ = fs::remove_file(&path);
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let path = temp_path("mode.json");
        let _ = fs::remove_file(&path);
        let store = FileTokenStore::new(&path);
        store.save("secret-jwt").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0, "token file mode is {:o}", mode & 0o777);

        // A pre-existing world-readable file is tightened on save.
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
        store.save("secret-jwt-2").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_yields_no_token() {
        let path = temp_path("corrupt.json");
        fs::write(&path, "not json").unwrap();

        let store = FileTokenStore::new(&path);
        assert!(matches!(store.load(), Err(TokenError::Json(_))));
        assert!(store.token().is_none());

        let _ = fs::remove_file(&path);
    }
}
