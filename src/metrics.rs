// 🧮 Derived Metrics - Profit and Cash Flow projections
// Pure functions of the raw record; recomputed whenever a RecordSet is built.

use crate::records::FinancialRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedMetrics {
    /// Revenue - Expenses
    pub profit: f64,

    /// Revenue - (Expenses + Loan EMI + Tax Paid)
    pub cash_flow: f64,
}

impl DerivedMetrics {
    pub fn from_record(record: &FinancialRecord) -> Self {
        DerivedMetrics {
            profit: record.revenue - record.expenses,
            cash_flow: record.revenue - (record.expenses + record.loan_emi + record.tax_paid),
        }
    }
}

/// Derive metrics for every record, preserving order.
pub fn derive_metrics(records: &[FinancialRecord]) -> Vec<DerivedMetrics> {
    records.iter().map(DerivedMetrics::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(revenue: f64, expenses: f64, loan_emi: f64, tax_paid: f64) -> FinancialRecord {
        FinancialRecord {
            month: "Jan".to_string(),
            revenue,
            expenses,
            inventory: 0.0,
            receivables: 0.0,
            payables: 0.0,
            loan_emi,
            tax_paid,
        }
    }

    #[test]
    fn test_profit_and_cash_flow() {
        let m = DerivedMetrics::from_record(&record(500_000.0, 300_000.0, 40_000.0, 25_000.0));
        assert_eq!(m.profit, 200_000.0);
        assert_eq!(m.cash_flow, 135_000.0);
    }

    #[test]
    fn test_negative_cash_flow() {
        let m = DerivedMetrics::from_record(&record(100.0, 90.0, 20.0, 5.0));
        assert_eq!(m.profit, 10.0);
        assert_eq!(m.cash_flow, -15.0);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let records = vec![record(10.0, 4.0, 1.0, 1.0), record(20.0, 5.0, 2.0, 1.0)];
        assert_eq!(derive_metrics(&records), derive_metrics(&records));
        assert_eq!(derive_metrics(&records).len(), 2);
    }
}
