//! FinanceGPT AI - financial advice over a remote text model.
//!
//! The advisor never fails: without a key, or when the provider errors, it
//! answers from canned content so the dashboard always has something to
//! show.
//!
//! # Architecture
//!
//! - `advisor`: [`FinancialAdvisor`], the entry point used by the server
//! - `providers`: [`TextGenerator`] trait and the Gemini REST client
//! - `credentials`: API key sources and [`ApiKeyStatus`]
//! - `fallback`: ordered keyword table of canned answers
//! - `prompts`: prompt text
//! - `types`: request/response DTOs
//!
//! # Example
//!
//! ```ignore
//! use financegpt_ai::{AdvisorConfig, EnvCredentialSource, FinancialAdvisor};
//!
//! let advisor = FinancialAdvisor::gemini(
//!     Arc::new(EnvCredentialSource::default()),
//!     &AdvisorConfig::default(),
//! )?;
//! let answer = advisor.generate_financial_advice("What is a SIP?", None).await;
//! ```

pub mod advisor;
pub mod credentials;
pub mod error;
pub mod fallback;
pub mod prompts;
pub mod providers;
pub mod types;

pub use advisor::{AdvisorConfig, FinancialAdvisor};
pub use credentials::{
    ApiKeyStatus, CredentialSource, EnvCredentialSource, OverridableCredential, StaticCredential,
};
pub use error::AiError;
pub use fallback::FallbackTable;
pub use providers::{GeminiClient, TextGenerator};
pub use types::{AdviceContext, ExpenseAnalysis};
