use gloo::storage::{LocalStorage, Storage};
use shared::CredentialProvider;

/// Reads the bearer token the login page stored in `localStorage`.
///
/// The value is stored as a bare string, not JSON, so this reads through
/// `LocalStorage::raw()` rather than gloo's serde helpers.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalStorageToken {
    key: String,
}

impl LocalStorageToken {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl CredentialProvider for LocalStorageToken {
    fn token(&self) -> Option<String> {
        LocalStorage::raw().get_item(&self.key).ok().flatten()
    }
}
