// 🤖 Advisory Layer - free-text Q&A over recent financials
//
// Two implementations behind one trait:
// - KeywordAdvisor: canned answers picked by keyword, no network
// - GeminiAdvisor: remote generative model, constructed once and reused
//
// Failures never escape `ask`; they become a user-visible message.

use crate::error::{HealthError, Result};
use crate::records::{DerivedRecord, FinancialRecord};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::time::Duration;

/// Number of most recent months handed to an advisor.
pub const ADVISOR_CONTEXT_MONTHS: usize = 5;

pub trait Advisor: Send + Sync {
    /// Short name for logs and UI.
    fn name(&self) -> &str;

    fn advise(&self, question: &str, recent: &[FinancialRecord]) -> Result<String>;
}

/// Ask an advisor and always come back with text to show the user.
pub fn ask(advisor: &dyn Advisor, question: &str, recent: &[FinancialRecord]) -> String {
    if question.trim().is_empty() {
        return "Please type a question first.".to_string();
    }

    match advisor.advise(question, recent) {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!(advisor = advisor.name(), error = %e, "Advisor request failed");
            format!("AI Error: {}", e)
        }
    }
}

/// Owned copies of the last rows, for handing to an advisor.
pub fn recent_records(tail: &[DerivedRecord<'_>]) -> Vec<FinancialRecord> {
    tail.iter().map(|row| row.record.clone()).collect()
}

// ============================================================================
// KEYWORD ADVISOR
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct KeywordAdvisor;

impl KeywordAdvisor {
    /// Checked in order; the first keyword found wins.
    const RULES: &'static [(&'static str, &'static str)] = &[
        ("profit", "Reduce operational expenses and improve pricing strategy."),
        ("loan", "Maintain strong cash flow and reduce existing liabilities."),
        ("risk", "Monitor expenses, loan EMI, and receivables."),
        ("investment", "Show revenue growth and positive cash flow to attract investors."),
    ];

    const FALLBACK: &'static str =
        "Focus on revenue growth, cost optimization, and financial discipline.";

    pub fn new() -> Self {
        KeywordAdvisor
    }

    pub fn answer(&self, question: &str) -> &'static str {
        let query = question.to_lowercase();
        Self::RULES
            .iter()
            .find(|(keyword, _)| query.contains(keyword))
            .map(|(_, answer)| *answer)
            .unwrap_or(Self::FALLBACK)
    }
}

impl Advisor for KeywordAdvisor {
    fn name(&self) -> &str {
        "keyword"
    }

    fn advise(&self, question: &str, _recent: &[FinancialRecord]) -> Result<String> {
        Ok(self.answer(question).to_string())
    }
}

// ============================================================================
// GEMINI ADVISOR
// ============================================================================

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub const API_KEY_VAR: &'static str = "GEMINI_API_KEY";
    pub const DEFAULT_MODEL: &'static str = "gemini-flash-latest";
    pub const DEFAULT_ENDPOINT: &'static str = "https://generativelanguage.googleapis.com/v1beta";

    pub fn new(api_key: impl Into<String>) -> Self {
        GeminiConfig {
            api_key: api_key.into(),
            model: Self::DEFAULT_MODEL.to_string(),
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Read the API key from `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        match std::env::var(Self::API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key.trim())),
            _ => Err(HealthError::Config(format!(
                "{} not found in environment variables",
                Self::API_KEY_VAR
            ))),
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text)
            .filter(|t| !t.trim().is_empty())
    }
}

/// Client for the remote model. Create once at startup and share it;
/// no teardown beyond dropping it.
pub struct GeminiAdvisor {
    config: GeminiConfig,
    client: reqwest::blocking::Client,
}

impl GeminiAdvisor {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| HealthError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(GeminiAdvisor { config, client })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl Advisor for GeminiAdvisor {
    fn name(&self) -> &str {
        "gemini"
    }

    fn advise(&self, question: &str, recent: &[FinancialRecord]) -> Result<String> {
        let prompt = build_prompt(question, recent);
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };

        tracing::debug!(model = %self.config.model, "Sending advisor request");

        let response = self
            .client
            .post(self.url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .map_err(|e| HealthError::ExternalService(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(HealthError::ExternalService(format!(
                "HTTP {} - {}",
                status, text
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| HealthError::ExternalService(format!("invalid response: {}", e)))?;

        parsed
            .first_text()
            .ok_or_else(|| HealthError::ExternalService("empty response from model".to_string()))
    }
}

/// CFO-style prompt carrying the recent months as a small table.
pub fn build_prompt(question: &str, recent: &[FinancialRecord]) -> String {
    let mut table = String::from("Month | Revenue | Expenses | Inventory | Receivables | Payables | Loan EMI | Tax Paid\n");
    for r in recent {
        let _ = writeln!(
            table,
            "{} | {:.0} | {:.0} | {:.0} | {:.0} | {:.0} | {:.0} | {:.0}",
            r.month, r.revenue, r.expenses, r.inventory, r.receivables, r.payables, r.loan_emi, r.tax_paid
        );
    }

    format!(
        "You are a professional CFO financial consultant.\n\n\
         Company recent financial data:\n{}\n\
         User Question:\n{}\n\n\
         Give highly specific financial advice.\n\
         Mention numbers, risk level, actions, and strategy.\n",
        table,
        question.trim()
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingAdvisor;

    impl Advisor for FailingAdvisor {
        fn name(&self) -> &str {
            "failing"
        }

        fn advise(&self, _question: &str, _recent: &[FinancialRecord]) -> Result<String> {
            Err(HealthError::ExternalService("quota exceeded".to_string()))
        }
    }

    fn record(month: &str) -> FinancialRecord {
        FinancialRecord {
            month: month.to_string(),
            revenue: 500000.0,
            expenses: 300000.0,
            inventory: 120000.0,
            receivables: 80000.0,
            payables: 60000.0,
            loan_emi: 40000.0,
            tax_paid: 25000.0,
        }
    }

    #[test]
    fn test_keyword_priority() {
        let advisor = KeywordAdvisor::new();

        assert_eq!(
            advisor.answer("How can I improve PROFIT?"),
            "Reduce operational expenses and improve pricing strategy."
        );
        // "profit" is checked before "loan"
        assert_eq!(
            advisor.answer("Will a loan hurt profit?"),
            "Reduce operational expenses and improve pricing strategy."
        );
        assert_eq!(
            advisor.answer("Am I eligible for a loan?"),
            "Maintain strong cash flow and reduce existing liabilities."
        );
        assert_eq!(advisor.answer("hello"), KeywordAdvisor::FALLBACK);
    }

    #[test]
    fn test_ask_turns_failures_into_messages() {
        let answer = ask(&FailingAdvisor, "What is my risk?", &[]);
        assert_eq!(answer, "AI Error: External service error: quota exceeded");
    }

    #[test]
    fn test_ask_rejects_blank_question() {
        let answer = ask(&KeywordAdvisor, "   ", &[]);
        assert_eq!(answer, "Please type a question first.");
    }

    #[test]
    fn test_prompt_contains_data_and_question() {
        let prompt = build_prompt("  Should I expand?  ", &[record("Jan"), record("Feb")]);

        assert!(prompt.starts_with("You are a professional CFO financial consultant."));
        assert!(prompt.contains("Feb | 500000 | 300000"));
        assert!(prompt.contains("User Question:\nShould I expand?\n"));
    }

    #[test]
    fn test_response_text_extraction() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"Cut costs."}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.first_text(), Some("Cut costs.".to_string()));

        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.first_text(), None);
    }

    #[test]
    fn test_config_url() {
        let mut config = GeminiConfig::new("k");
        config.endpoint = "http://localhost:9/v1beta/".to_string();
        let advisor = GeminiAdvisor::new(config).unwrap();

        assert_eq!(
            advisor.url(),
            "http://localhost:9/v1beta/models/gemini-flash-latest:generateContent"
        );
    }
}
