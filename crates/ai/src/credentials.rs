//! Credential lookup for the remote provider.
//!
//! Keys are read on every call, so a key added or rotated at runtime takes
//! effect without a restart.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Value shipped in example env files; treated as absent.
const PLACEHOLDER_KEY: &str = "your_gemini_api_key_here";

/// Whether a usable key is configured and, if so, whether the provider
/// accepted it on the last call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyStatus {
    Missing,
    Invalid,
    Valid,
}

/// Trims the raw value and drops blanks and the placeholder.
pub fn usable_key(raw: Option<String>) -> Option<String> {
    raw.map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && k != PLACEHOLDER_KEY)
}

/// Source of the provider API key.
pub trait CredentialSource: Send + Sync {
    /// Returns the key, or `None` when no usable key is configured.
    fn api_key(&self) -> Option<String>;
}

/// Reads the key from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredentialSource {
    var: String,
}

impl EnvCredentialSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentialSource {
    fn default() -> Self {
        Self::new(GEMINI_API_KEY_ENV)
    }
}

impl CredentialSource for EnvCredentialSource {
    fn api_key(&self) -> Option<String> {
        usable_key(std::env::var(&self.var).ok())
    }
}

/// Fixed key, mainly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticCredential(Option<String>);

impl StaticCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl CredentialSource for StaticCredential {
    fn api_key(&self) -> Option<String> {
        usable_key(self.0.clone())
    }
}

/// Key that can be replaced at runtime, falling back to another source
/// while unset.
pub struct OverridableCredential {
    override_key: RwLock<Option<String>>,
    fallback: Arc<dyn CredentialSource>,
}

impl OverridableCredential {
    pub fn new(fallback: Arc<dyn CredentialSource>) -> Self {
        Self {
            override_key: RwLock::new(None),
            fallback,
        }
    }

    pub fn set(&self, key: Option<String>) {
        let mut guard = self
            .override_key
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = usable_key(key);
    }
}

impl CredentialSource for OverridableCredential {
    fn api_key(&self) -> Option<String> {
        let current = self
            .override_key
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        current.or_else(|| self.fallback.api_key())
    }
}
