// 🎚️ Scoring Thresholds - Rules as Data
// Business-rule cut-offs for the risk engine and health score.
// Defaults are the production values; a JSON file may override any subset.

use crate::error::{HealthError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// RISK ENGINE THRESHOLDS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// mean(Expenses) above this share of mean(Revenue) is a risk factor
    pub expense_ratio: f64,

    /// mean(Loan EMI) above this share of mean(Revenue) is a risk factor
    pub loan_ratio: f64,

    /// Population std of monthly profit above this scores 1 (and flags volatility)
    pub volatility_medium: f64,

    /// Population std of monthly profit above this scores 2
    pub volatility_high: f64,

    /// Investor check: expense ratio must stay below this
    pub investor_expense_ratio: f64,

    /// Loan EMI share of revenue below which a profitable business is eligible
    pub loan_eligibility_ratio: f64,

    pub bankruptcy_expense_ratio: f64,
    pub bankruptcy_loan_pressure: f64,

    /// Largest period-over-period change (fraction) tolerated in revenue/expenses
    pub fraud_change: f64,

    /// Sample std of Tax Paid above this is a tax irregularity
    pub tax_std: f64,

    pub health: HealthThresholds,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        RiskThresholds {
            expense_ratio: 0.7,
            loan_ratio: 0.3,
            volatility_medium: 25_000.0,
            volatility_high: 50_000.0,
            investor_expense_ratio: 0.7,
            loan_eligibility_ratio: 0.4,
            bankruptcy_expense_ratio: 0.8,
            bankruptcy_loan_pressure: 0.5,
            fraud_change: 0.4,
            tax_std: 10_000.0,
            health: HealthThresholds::default(),
        }
    }
}

// ============================================================================
// HEALTH SCORE THRESHOLDS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthThresholds {
    pub expense_ratio_high: f64,
    pub expense_ratio_moderate: f64,
    pub loan_ratio: f64,
    pub high_expense_penalty: u32,
    pub moderate_expense_penalty: u32,
    pub loan_penalty: u32,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        HealthThresholds {
            expense_ratio_high: 0.7,
            expense_ratio_moderate: 0.5,
            loan_ratio: 0.3,
            high_expense_penalty: 20,
            moderate_expense_penalty: 10,
            loan_penalty: 15,
        }
    }
}

impl RiskThresholds {
    /// Load thresholds from a JSON file. Missing keys keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let thresholds: RiskThresholds = serde_json::from_str(&content).map_err(|e| {
            HealthError::Config(format!("Failed to parse thresholds {:?}: {}", path, e))
        })?;

        thresholds.validate()?;
        tracing::debug!(path = %path.display(), "Loaded risk thresholds");
        Ok(thresholds)
    }

    /// Reject configurations that would make the tiers overlap or go negative.
    pub fn validate(&self) -> Result<()> {
        let ratios = [
            ("expense_ratio", self.expense_ratio),
            ("loan_ratio", self.loan_ratio),
            ("investor_expense_ratio", self.investor_expense_ratio),
            ("loan_eligibility_ratio", self.loan_eligibility_ratio),
            ("bankruptcy_expense_ratio", self.bankruptcy_expense_ratio),
            ("bankruptcy_loan_pressure", self.bankruptcy_loan_pressure),
            ("fraud_change", self.fraud_change),
            ("volatility_medium", self.volatility_medium),
            ("volatility_high", self.volatility_high),
            ("tax_std", self.tax_std),
            ("health.expense_ratio_high", self.health.expense_ratio_high),
            ("health.expense_ratio_moderate", self.health.expense_ratio_moderate),
            ("health.loan_ratio", self.health.loan_ratio),
        ];

        for (name, value) in ratios {
            if !value.is_finite() || value < 0.0 {
                return Err(HealthError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.volatility_high < self.volatility_medium {
            return Err(HealthError::Config(
                "volatility_high must not be below volatility_medium".to_string(),
            ));
        }

        if self.health.expense_ratio_high < self.health.expense_ratio_moderate {
            return Err(HealthError::Config(
                "health.expense_ratio_high must not be below health.expense_ratio_moderate"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_business_rules() {
        let t = RiskThresholds::default();
        assert_eq!(t.expense_ratio, 0.7);
        assert_eq!(t.loan_ratio, 0.3);
        assert_eq!(t.volatility_medium, 25_000.0);
        assert_eq!(t.volatility_high, 50_000.0);
        assert_eq!(t.tax_std, 10_000.0);
        assert_eq!(t.health.high_expense_penalty, 20);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "fraud_change": 0.5, "health": {{ "loan_penalty": 25 }} }}"#).unwrap();

        let t = RiskThresholds::from_file(file.path()).unwrap();
        assert_eq!(t.fraud_change, 0.5);
        assert_eq!(t.health.loan_penalty, 25);
        assert_eq!(t.expense_ratio, 0.7);
        assert_eq!(t.health.high_expense_penalty, 20);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = RiskThresholds::from_file(file.path()).unwrap_err();
        assert!(matches!(err, HealthError::Config(_)));
    }

    #[test]
    fn test_inverted_volatility_rejected() {
        let t = RiskThresholds {
            volatility_medium: 60_000.0,
            ..RiskThresholds::default()
        };
        assert!(t.validate().is_err());
    }
}
