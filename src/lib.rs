// SME Financial Health - Core Library
// Exposes all modules for use in the CLI, API server, and tests

pub mod error;
pub mod logging;
pub mod thresholds;    // Business-rule cut-offs, loadable from JSON
pub mod records;       // Data Provider - CSV → RecordSet
pub mod metrics;       // Derived Metrics - Profit / Cash Flow
pub mod stats;
pub mod risk;          // Risk Engine - categorical verdicts
pub mod health_score;  // 0-100 composite score
pub mod forecast;      // Next-month linear trend
pub mod advisor;       // Keyword / remote-model Q&A
pub mod report;        // Text + PDF report

// Re-export commonly used types
pub use error::{HealthError, Result};
pub use thresholds::{HealthThresholds, RiskThresholds};
pub use records::{
    FinancialRecord, RecordSet, DerivedRecord,
    load_csv, load_from_reader, REQUIRED_COLUMNS,
};
pub use metrics::{DerivedMetrics, derive_metrics};
pub use risk::{
    RiskEngine, RiskAssessment, RiskFactor, Tone,
    RiskLevel, LoanEligibility, BankruptcyRisk, FraudSignal, InvestorScore,
};
pub use health_score::HealthScoreCalculator;
pub use forecast::{Forecast, Forecaster};
pub use advisor::{Advisor, KeywordAdvisor, GeminiAdvisor, GeminiConfig, ask};
pub use report::{FinancialReport, FinancialSummary, DEFAULT_COMPANY, DEFAULT_REPORT_FILE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "dataset/sme_financial_data.csv";
