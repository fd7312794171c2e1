use std::collections::HashMap;

use async_trait::async_trait;
use dashshare_core::identity::SignedInUser;

/// Resolves a bearer token into the user it belongs to.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> Option<SignedInUser>;
}

/// Authenticator backed by a fixed token table.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAuthenticator {
    tokens: HashMap<String, SignedInUser>,
}

impl StaticTokenAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>, user: SignedInUser) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    /// Number of registered tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[async_trait]
impl Authenticator for StaticTokenAuthenticator {
    async fn authenticate(&self, token: &str) -> Option<SignedInUser> {
        self.tokens.get(token).cloned()
    }
}
