/// Source of the bearer token attached to API requests.
///
/// Production code reads browser storage; tests hand in a fixed value.
pub trait CredentialProvider {
    fn token(&self) -> Option<String>;
}

/// A token fixed at construction time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticToken(pub Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}
