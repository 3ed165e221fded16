//! Financial advice facade over a [`TextGenerator`].
//!
//! No method here returns an error. A missing key, a rejected key, a network
//! failure, or an unreadable reply is logged and answered from fixed
//! content instead.

use log::{debug, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use financegpt_core::{Expense, Goal};

use crate::credentials::{ApiKeyStatus, CredentialSource};
use crate::error::AiError;
use crate::fallback::FallbackTable;
use crate::prompts::{expense_analysis_prompt, financial_advice_prompt, investment_strategy_prompt};
use crate::providers::{GeminiClient, TextGenerator, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::types::{AdviceContext, ExpenseAnalysis};

// ============================================================================
// Configuration
// ============================================================================

/// Settings for the remote provider.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

// ============================================================================
// Fixed content
// ============================================================================

const STRATEGY_NOT_CONFIGURED: &str = "For personalized investment strategies, please add your Gemini API key. Meanwhile, consider a diversified portfolio with equity mutual funds for long-term goals and debt funds for short-term needs.";

const STRATEGY_UNAVAILABLE: &str = "Unable to generate strategy at the moment. Consider consulting with a financial advisor for personalized investment planning.";

fn analysis_not_configured() -> ExpenseAnalysis {
    ExpenseAnalysis {
        insights: vec![
            "Your largest expense category needs attention".to_string(),
            "Consider tracking daily expenses for better insights".to_string(),
            "Look for subscription services you might not be using".to_string(),
        ],
        recommendations: vec![
            "Set up automated savings for better money management".to_string(),
            "Review and optimize your monthly subscriptions".to_string(),
            "Create a budget plan based on the 50/30/20 rule".to_string(),
        ],
        trends: "Add your Gemini API key to get AI-powered expense analysis and personalized insights."
            .to_string(),
    }
}

fn analysis_unavailable() -> ExpenseAnalysis {
    ExpenseAnalysis {
        insights: vec!["Analysis temporarily unavailable".to_string()],
        recommendations: vec!["Please try again later".to_string()],
        trends: "Unable to analyze at the moment".to_string(),
    }
}

const DEFAULT_INSIGHT: &str = "Analysis completed";
const DEFAULT_RECOMMENDATION: &str = "Review your spending patterns";
const DEFAULT_TRENDS: &str = "Monitor your expenses regularly";

/// Removes a surrounding Markdown code fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn non_empty_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Reads the model's reply as JSON, or derives an analysis from its first
/// three lines when it is not JSON.
pub(crate) fn parse_expense_analysis(text: &str) -> ExpenseAnalysis {
    if let Ok(mut parsed) = serde_json::from_str::<ExpenseAnalysis>(strip_code_fence(text)) {
        parsed.insights.retain(|s| !s.trim().is_empty());
        parsed.recommendations.retain(|s| !s.trim().is_empty());
        if parsed.insights.is_empty() {
            parsed.insights.push(DEFAULT_INSIGHT.to_string());
        }
        if parsed.recommendations.is_empty() {
            parsed.recommendations.push(DEFAULT_RECOMMENDATION.to_string());
        }
        if parsed.trends.trim().is_empty() {
            parsed.trends = DEFAULT_TRENDS.to_string();
        }
        return parsed;
    }

    let lines: Vec<&str> = text.split('\n').collect();
    ExpenseAnalysis {
        insights: vec![non_empty_or(lines.first().copied(), DEFAULT_INSIGHT)],
        recommendations: vec![non_empty_or(lines.get(1).copied(), DEFAULT_RECOMMENDATION)],
        trends: non_empty_or(lines.get(2).copied(), DEFAULT_TRENDS),
    }
}

// ============================================================================
// Advisor
// ============================================================================

pub struct FinancialAdvisor {
    generator: Arc<dyn TextGenerator>,
    fallbacks: FallbackTable,
    key_rejected: AtomicBool,
}

impl FinancialAdvisor {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            fallbacks: FallbackTable::new(),
            key_rejected: AtomicBool::new(false),
        }
    }

    /// Advisor backed by Gemini.
    pub fn gemini(
        credential: Arc<dyn CredentialSource>,
        config: &AdvisorConfig,
    ) -> Result<Self, AiError> {
        let client = GeminiClient::new(
            credential,
            config.base_url.clone(),
            config.model.clone(),
            config.timeout,
        )?;
        Ok(Self::new(Arc::new(client)))
    }

    /// `Missing` without a usable key, `Invalid` after the provider rejected
    /// the key on its most recent call, `Valid` otherwise.
    pub fn api_key_status(&self) -> ApiKeyStatus {
        if !self.generator.is_configured() {
            ApiKeyStatus::Missing
        } else if self.key_rejected.load(Ordering::Relaxed) {
            ApiKeyStatus::Invalid
        } else {
            ApiKeyStatus::Valid
        }
    }

    /// Forgets a previous key rejection, e.g. after the key was replaced.
    pub fn reset_key_status(&self) {
        self.key_rejected.store(false, Ordering::Relaxed);
    }

    /// `None` when no key is configured; otherwise the remote result.
    async fn call(&self, operation: &str, prompt: String) -> Option<Result<String, AiError>> {
        if !self.generator.is_configured() {
            debug!("{}: no API key configured, using fallback", operation);
            return None;
        }
        let result = self.generator.generate(&prompt).await;
        match &result {
            Ok(_) => self.key_rejected.store(false, Ordering::Relaxed),
            Err(AiError::InvalidApiKey(_)) => {
                self.key_rejected.store(true, Ordering::Relaxed);
                warn!("{}: API key rejected by provider", operation);
            }
            Err(e) => warn!("{} failed ({}): {}", operation, e.code(), e),
        }
        Some(result)
    }

    pub async fn generate_financial_advice(
        &self,
        message: &str,
        context: Option<&AdviceContext>,
    ) -> String {
        let prompt = financial_advice_prompt(message, context);
        match self.call("financial advice", prompt).await {
            Some(Ok(answer)) => answer,
            _ => self.fallbacks.respond(message),
        }
    }

    pub async fn analyze_expenses(&self, expenses: &[Expense]) -> ExpenseAnalysis {
        if expenses.is_empty() {
            return analysis_not_configured();
        }
        match self
            .call("expense analysis", expense_analysis_prompt(expenses))
            .await
        {
            None => analysis_not_configured(),
            Some(Ok(text)) => parse_expense_analysis(&text),
            Some(Err(_)) => analysis_unavailable(),
        }
    }

    pub async fn generate_investment_strategy(&self, goals: &[Goal]) -> String {
        match self
            .call("investment strategy", investment_strategy_prompt(goals))
            .await
        {
            None => STRATEGY_NOT_CONFIGURED.to_string(),
            Some(Ok(strategy)) => strategy,
            Some(Err(_)) => STRATEGY_UNAVAILABLE.to_string(),
        }
    }
}
