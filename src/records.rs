// 📂 Data Provider - monthly financial records loaded from CSV
// One row per month; order is the order of the file, never re-sorted.

use crate::error::{HealthError, Result};
use crate::metrics::{derive_metrics, DerivedMetrics};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;
use std::path::Path;

/// Columns every input file must carry, in the order they are checked.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Month",
    "Revenue",
    "Expenses",
    "Inventory",
    "Receivables",
    "Payables",
    "Loan EMI",
    "Tax Paid",
];

/// One month of raw figures. All amounts are non-negative.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FinancialRecord {
    #[serde(rename = "Month")]
    pub month: String,

    #[serde(rename = "Revenue")]
    pub revenue: f64,

    #[serde(rename = "Expenses")]
    pub expenses: f64,

    #[serde(rename = "Inventory")]
    pub inventory: f64,

    #[serde(rename = "Receivables")]
    pub receivables: f64,

    #[serde(rename = "Payables")]
    pub payables: f64,

    #[serde(rename = "Loan EMI")]
    pub loan_emi: f64,

    #[serde(rename = "Tax Paid")]
    pub tax_paid: f64,
}

impl FinancialRecord {
    fn amounts(&self) -> [(&'static str, f64); 7] {
        [
            ("Revenue", self.revenue),
            ("Expenses", self.expenses),
            ("Inventory", self.inventory),
            ("Receivables", self.receivables),
            ("Payables", self.payables),
            ("Loan EMI", self.loan_emi),
            ("Tax Paid", self.tax_paid),
        ]
    }

    /// Check the record invariants; `row` is the 1-based data row for messages.
    pub fn validate(&self, row: usize) -> Result<()> {
        for (column, value) in self.amounts() {
            if !value.is_finite() || value < 0.0 {
                return Err(HealthError::InvalidValue {
                    row,
                    column: column.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// A raw record joined with its derived metrics, for display and export.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedRecord<'a> {
    #[serde(flatten)]
    pub record: &'a FinancialRecord,
    #[serde(rename = "Profit")]
    pub profit: f64,
    #[serde(rename = "Cash Flow")]
    pub cash_flow: f64,
}

// ============================================================================
// RECORD SET
// ============================================================================

/// Ordered, immutable sequence of monthly records with derived metrics.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    records: Vec<FinancialRecord>,
    derived: Vec<DerivedMetrics>,
}

impl RecordSet {
    /// Build a record set, validating amounts and month uniqueness.
    pub fn new(records: Vec<FinancialRecord>) -> Result<Self> {
        let mut seen = HashSet::new();

        for (i, record) in records.iter().enumerate() {
            record.validate(i + 1)?;
            if !seen.insert(record.month.as_str()) {
                return Err(HealthError::DuplicateMonth {
                    month: record.month.clone(),
                });
            }
        }

        let derived = derive_metrics(&records);
        Ok(RecordSet { records, derived })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[FinancialRecord] {
        &self.records
    }

    pub fn derived(&self) -> &[DerivedMetrics] {
        &self.derived
    }

    pub fn get(&self, index: usize) -> Option<&FinancialRecord> {
        self.records.get(index)
    }

    /// Records joined with their derived metrics.
    pub fn rows(&self) -> impl Iterator<Item = DerivedRecord<'_>> {
        self.records
            .iter()
            .zip(self.derived.iter())
            .map(|(record, m)| DerivedRecord {
                record,
                profit: m.profit,
                cash_flow: m.cash_flow,
            })
    }

    /// The last `n` rows (fewer if the set is shorter).
    pub fn tail(&self, n: usize) -> Vec<DerivedRecord<'_>> {
        let skip = self.len().saturating_sub(n);
        self.rows().skip(skip).collect()
    }

    /// Index of the record with the given month label.
    pub fn find_month(&self, month: &str) -> Option<usize> {
        self.records.iter().position(|r| r.month == month)
    }

    pub fn months(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.month.as_str()).collect()
    }

    pub fn revenues(&self) -> Vec<f64> {
        self.column(|r| r.revenue)
    }

    pub fn expenses(&self) -> Vec<f64> {
        self.column(|r| r.expenses)
    }

    pub fn inventories(&self) -> Vec<f64> {
        self.column(|r| r.inventory)
    }

    pub fn loan_emis(&self) -> Vec<f64> {
        self.column(|r| r.loan_emi)
    }

    pub fn payables(&self) -> Vec<f64> {
        self.column(|r| r.payables)
    }

    pub fn receivables(&self) -> Vec<f64> {
        self.column(|r| r.receivables)
    }

    pub fn taxes_paid(&self) -> Vec<f64> {
        self.column(|r| r.tax_paid)
    }

    pub fn profits(&self) -> Vec<f64> {
        self.derived.iter().map(|m| m.profit).collect()
    }

    pub fn cash_flows(&self) -> Vec<f64> {
        self.derived.iter().map(|m| m.cash_flow).collect()
    }

    fn column<F: Fn(&FinancialRecord) -> f64>(&self, f: F) -> Vec<f64> {
        self.records.iter().map(f).collect()
    }
}

// ============================================================================
// CSV LOADING
// ============================================================================

/// Load and validate a record set from a CSV file.
pub fn load_csv(csv_path: &Path) -> Result<RecordSet> {
    tracing::info!(path = %csv_path.display(), "Loading financial records");
    let file = std::fs::File::open(csv_path)?;
    load_from_reader(file)
}

/// Load and validate a record set from any CSV source.
pub fn load_from_reader<R: io::Read>(reader: R) -> Result<RecordSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            tracing::warn!(column, "Required column missing");
            return Err(HealthError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: FinancialRecord = result?;
        records.push(record);
    }

    let set = RecordSet::new(records)?;
    tracing::info!(records = set.len(), "Financial records loaded");
    Ok(set)
}

// ============================================================================
// TESTS
// ============================================================================
