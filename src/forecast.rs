// 📈 Forecasting Helper - next-month linear trend for revenue and expenses

use crate::error::{HealthError, Result};
use crate::records::RecordSet;
use crate::stats::{round_to, LinearTrend};
use serde::Serialize;

pub const MIN_HISTORY: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Forecast {
    pub predicted_revenue: f64,
    pub predicted_expenses: f64,
}

impl Forecast {
    pub fn predicted_profit(&self) -> f64 {
        round_to(self.predicted_revenue - self.predicted_expenses, 2)
    }
}

/// Two independent index-vs-value fits, one for revenue and one for expenses.
pub struct Forecaster {
    revenue: LinearTrend,
    expenses: LinearTrend,
    next_index: usize,
}

impl Forecaster {
    pub fn new(records: &RecordSet) -> Result<Self> {
        let insufficient = || HealthError::InsufficientHistory {
            required: MIN_HISTORY,
            actual: records.len(),
        };

        let revenue = LinearTrend::fit(&records.revenues()).ok_or_else(insufficient)?;
        let expenses = LinearTrend::fit(&records.expenses()).ok_or_else(insufficient)?;

        Ok(Forecaster {
            revenue,
            expenses,
            next_index: records.len(),
        })
    }

    /// Extrapolate one step past the last record, rounded to 2 decimals.
    pub fn predict_next_month(&self) -> Forecast {
        let x = self.next_index as f64;
        let forecast = Forecast {
            predicted_revenue: round_to(self.revenue.predict(x), 2),
            predicted_expenses: round_to(self.expenses.predict(x), 2),
        };

        tracing::debug!(
            revenue = forecast.predicted_revenue,
            expenses = forecast.predicted_expenses,
            "Next-month forecast"
        );
        forecast
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::FinancialRecord;

    fn set(points: &[(f64, f64)]) -> RecordSet {
        let records = points
            .iter()
            .enumerate()
            .map(|(i, (revenue, expenses))| FinancialRecord {
                month: format!("M{}", i),
                revenue: *revenue,
                expenses: *expenses,
                inventory: 0.0,
                receivables: 0.0,
                payables: 0.0,
                loan_emi: 0.0,
                tax_paid: 0.0,
            })
            .collect();
        RecordSet::new(records).unwrap()
    }

    #[test]
    fn test_linear_growth_extrapolates() {
        let records = set(&[(100.0, 50.0), (200.0, 60.0), (300.0, 70.0)]);
        let forecast = Forecaster::new(&records).unwrap().predict_next_month();

        assert_eq!(forecast.predicted_revenue, 400.0);
        assert_eq!(forecast.predicted_expenses, 80.0);
        assert_eq!(forecast.predicted_profit(), 320.0);
    }

    #[test]
    fn test_noisy_series_rounded() {
        let records = set(&[(100.0, 10.0), (110.0, 10.0), (125.0, 10.0), (120.0, 10.0)]);
        let forecast = Forecaster::new(&records).unwrap().predict_next_month();

        // slope 7.5, intercept 102.5
        assert_eq!(forecast.predicted_revenue, 132.5);
        assert_eq!(forecast.predicted_expenses, 10.0);
    }

    #[test]
    fn test_exact_tie_rounds_to_even() {
        // trend lands exactly on 1.125
        let records = set(&[(0.875, 10.0), (1.0, 10.0)]);
        let forecast = Forecaster::new(&records).unwrap().predict_next_month();

        assert_eq!(forecast.predicted_revenue, 1.12);
    }

    #[test]
    fn test_insufficient_history() {
        let records = set(&[(100.0, 50.0)]);
        match Forecaster::new(&records) {
            Err(HealthError::InsufficientHistory { required, actual }) => {
                assert_eq!(required, 2);
                assert_eq!(actual, 1);
            }
            _ => panic!("expected InsufficientHistory"),
        }
    }
}
