//! Canned answers used when the remote model is unavailable.
//!
//! Rules are checked in order against the lower-cased question and the
//! first match wins; the order is part of the contract.

use log::debug;

type Predicate = fn(&str) -> bool;

struct FallbackRule {
    name: &'static str,
    matches: Predicate,
    response: &'static str,
}

const SAVINGS_RATE: &str = "Great goal! To save 20% of your salary, try the 50/30/20 rule: 50% for needs, 30% for wants, 20% for savings. Start by automating your savings - transfer money to a separate account right after salary. Cut unnecessary subscriptions and cook more at home. You'll reach your goal in no time!";

const INVESTMENT_HORIZON: &str = "For a 5-year investment goal, consider a mix of equity mutual funds (60%) and debt funds (40%). With monthly SIP in diversified equity funds, you could potentially accumulate good returns (assuming 10-12% returns). Start with index funds like Nifty 50 for lower risk. Remember: longer tenure = higher equity allocation.";

const COMPOUND_INTEREST: &str = "Think of compound interest as 'money making money'! 🌱 If you invest ₹1000 at 10% interest: Year 1: ₹1100, Year 2: ₹1210 (extra ₹10 from interest earning interest!), Year 3: ₹1331. The magic happens when your returns also earn returns. Einstein called it the 8th wonder of the world. Start early, stay invested!";

const EMERGENCY_FUND: &str = "Your emergency fund should cover 6 months of expenses. Keep it in liquid funds or high-yield savings accounts for easy access. Don't invest emergency funds in stocks - you need guaranteed access. Build it gradually. This protects you from job loss, medical emergencies, or major repairs.";

const SIP_VS_LUMP_SUM: &str = "SIP vs Lump Sum? SIP wins for most people! 🎯 SIP advantages: Rupee cost averaging (buy more units when prices are low), removes timing pressure, builds discipline. Lump sum works only if you can time the market perfectly (which is very difficult!).";

fn asks_savings_rate(q: &str) -> bool {
    q.contains("save") && q.contains("20%")
}

fn asks_investment_horizon(q: &str) -> bool {
    q.contains("investment") && q.contains('5')
}

fn asks_compound_interest(q: &str) -> bool {
    q.contains("compound interest")
}

fn asks_emergency_fund(q: &str) -> bool {
    q.contains("emergency fund")
}

fn asks_sip_vs_lump_sum(q: &str) -> bool {
    q.contains("sip") || q.contains("lump sum")
}

const RULES: &[FallbackRule] = &[
    FallbackRule {
        name: "savings_rate",
        matches: asks_savings_rate,
        response: SAVINGS_RATE,
    },
    FallbackRule {
        name: "investment_horizon",
        matches: asks_investment_horizon,
        response: INVESTMENT_HORIZON,
    },
    FallbackRule {
        name: "compound_interest",
        matches: asks_compound_interest,
        response: COMPOUND_INTEREST,
    },
    FallbackRule {
        name: "emergency_fund",
        matches: asks_emergency_fund,
        response: EMERGENCY_FUND,
    },
    FallbackRule {
        name: "sip_vs_lump_sum",
        matches: asks_sip_vs_lump_sum,
        response: SIP_VS_LUMP_SUM,
    },
];

/// First rule in table order that matches `question`, case-insensitively.
fn find_rule(question: &str) -> Option<&'static FallbackRule> {
    let lowered = question.to_lowercase();
    RULES.iter().find(|rule| (rule.matches)(&lowered))
}

/// Keyword table of canned financial answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackTable;

impl FallbackTable {
    pub fn new() -> Self {
        Self
    }

    /// Name of the rule that would answer `question`, or `"default"`.
    pub fn topic(&self, question: &str) -> &'static str {
        find_rule(question)
            .map(|rule| rule.name)
            .unwrap_or("default")
    }

    pub fn respond(&self, question: &str) -> String {
        match find_rule(question) {
            Some(rule) => {
                debug!("Fallback rule '{}' matched", rule.name);
                rule.response.to_string()
            }
            None => format!(
                "I understand you're asking about \"{}\". Here's my advice: Focus on building an emergency fund first, then start a monthly SIP in diversified equity funds. Keep your debt-to-income ratio below 30%. Track expenses regularly - small leaks sink big ships! For personalized advice, please add your Gemini API key to enable full AI capabilities.",
                question
            ),
        }
    }
}
