//! Prompt text sent to the model.

use financegpt_core::{Expense, Goal};
use log::warn;

use crate::types::AdviceContext;

const ADVISOR_INSTRUCTIONS: &str = "You are an expert financial advisor and mentor. Your role is to provide personalized, practical, and easy-to-understand financial advice.

Guidelines:
- Always provide actionable advice
- Use simple language and avoid jargon
- Include specific numbers and examples when relevant
- Focus on Indian financial context (₹ currency, Indian investment options like SIP, mutual funds, etc.)
- Be encouraging and supportive
- If asked about investments, always mention risk factors
- Suggest diversification and long-term thinking
- For complex topics, break them down into simple steps";

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        warn!("Could not serialize prompt data: {}", e);
        "[]".to_string()
    })
}

pub fn financial_advice_prompt(question: &str, context: Option<&AdviceContext>) -> String {
    let mut prompt = String::from(ADVISOR_INSTRUCTIONS);
    prompt.push_str("\n\n");
    if let Some(context) = context.filter(|c| !c.is_empty()) {
        prompt.push_str("User's financial data (JSON): ");
        prompt.push_str(&to_json(context));
        prompt.push_str("\n\n");
    }
    prompt.push_str("User's question: ");
    prompt.push_str(question);
    prompt.push_str("\n\nPlease provide a helpful, personalized response (keep it under 200 words):");
    prompt
}

pub fn expense_analysis_prompt(expenses: &[Expense]) -> String {
    format!(
        "Analyze these expense data and provide insights, recommendations, and trends: {}

Return a JSON response with:
- insights: array of 3-4 key insights about spending patterns
- recommendations: array of 3-4 actionable recommendations
- trends: string describing overall spending trends

Focus on Indian financial context and practical advice.",
        to_json(expenses)
    )
}

pub fn investment_strategy_prompt(goals: &[Goal]) -> String {
    format!(
        "Based on these financial goals: {}, provide a comprehensive investment strategy including:
- Asset allocation recommendations
- Specific investment products for Indian market
- Risk assessment
- Timeline considerations
Keep it practical and under 300 words.",
        to_json(goals)
    )
}
