// ❤️ Health Score - 0-100 composite, independent of the risk engine

use crate::error::{HealthError, Result};
use crate::records::RecordSet;
use crate::stats::mean;
use crate::thresholds::HealthThresholds;

pub const MAX_SCORE: u32 = 100;

pub struct HealthScoreCalculator {
    revenue_avg: f64,
    expense_avg: f64,
    loan_avg: f64,
    thresholds: HealthThresholds,
}

impl HealthScoreCalculator {
    pub fn new(records: &RecordSet) -> Result<Self> {
        Self::with_thresholds(records, HealthThresholds::default())
    }

    pub fn with_thresholds(records: &RecordSet, thresholds: HealthThresholds) -> Result<Self> {
        if records.is_empty() {
            return Err(HealthError::EmptyInput);
        }

        Ok(HealthScoreCalculator {
            revenue_avg: mean(&records.revenues()),
            expense_avg: mean(&records.expenses()),
            loan_avg: mean(&records.loan_emis()),
            thresholds,
        })
    }

    /// Start at 100, deduct for expense and loan pressure, floor at 0.
    pub fn calculate_score(&self) -> u32 {
        let t = &self.thresholds;
        let mut deductions = 0;

        if self.expense_avg > t.expense_ratio_high * self.revenue_avg {
            deductions += t.high_expense_penalty;
        } else if self.expense_avg > t.expense_ratio_moderate * self.revenue_avg {
            deductions += t.moderate_expense_penalty;
        }

        if self.loan_avg > t.loan_ratio * self.revenue_avg {
            deductions += t.loan_penalty;
        }

        MAX_SCORE.saturating_sub(deductions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::FinancialRecord;

    fn single(revenue: f64, expenses: f64, loan_emi: f64) -> RecordSet {
        RecordSet::new(vec![FinancialRecord {
            month: "Jan".to_string(),
            revenue,
            expenses,
            inventory: 0.0,
            receivables: 20_000.0,
            payables: 5_000.0,
            loan_emi,
            tax_paid: 5_000.0,
        }])
        .unwrap()
    }

    #[test]
    fn test_stable_business_scores_full() {
        let set = single(100_000.0, 40_000.0, 10_000.0);
        assert_eq!(HealthScoreCalculator::new(&set).unwrap().calculate_score(), 100);
    }

    #[test]
    fn test_deductions() {
        let moderate = single(100_000.0, 60_000.0, 10_000.0);
        assert_eq!(HealthScoreCalculator::new(&moderate).unwrap().calculate_score(), 90);

        let strained = single(100_000.0, 80_000.0, 35_000.0);
        assert_eq!(HealthScoreCalculator::new(&strained).unwrap().calculate_score(), 65);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let thresholds = HealthThresholds {
            high_expense_penalty: 80,
            loan_penalty: 50,
            ..HealthThresholds::default()
        };
        let set = single(100_000.0, 90_000.0, 40_000.0);
        let calc = HealthScoreCalculator::with_thresholds(&set, thresholds).unwrap();
        assert_eq!(calc.calculate_score(), 0);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            HealthScoreCalculator::new(&RecordSet::default()),
            Err(HealthError::EmptyInput)
        ));
    }
}
