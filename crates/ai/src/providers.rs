//! Text-generation providers.

use async_trait::async_trait;

use crate::error::AiError;

pub mod gemini;

pub use gemini::{GeminiClient, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};

/// A remote model that turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Whether a credential is configured. Checked before every call so
    /// that an unconfigured client never touches the network.
    fn is_configured(&self) -> bool;

    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}
