// 🚦 Risk Engine - rule-based verdicts over a monthly record set
// Every verdict is a pure function of the whole RecordSet; nothing is cached.

use crate::error::{HealthError, Result};
use crate::records::RecordSet;
use crate::stats::{max_abs_pct_change, mean, mean_pct_change, population_std, sample_std};
use crate::thresholds::RiskThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// VERDICTS
// ============================================================================

/// How a verdict should be presented: good news, needs attention, or bad news.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Good,
    Caution,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Map the combined rule + volatility score to a tier.
    pub fn from_total(total: u8) -> Self {
        match total {
            0 | 1 => RiskLevel::Low,
            2 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Medium => "MEDIUM RISK",
            RiskLevel::High => "HIGH RISK",
        }
    }

    /// Position on the 1-3 risk meter.
    pub fn tier(&self) -> u8 {
        match self {
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            RiskLevel::Low => Tone::Good,
            RiskLevel::Medium => Tone::Caution,
            RiskLevel::High => Tone::Alert,
        }
    }

    /// Closing paragraph for reports.
    pub fn conclusion(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Business is financially stable. Focus on scaling, maintaining profit margin, and improving cash flow planning.",
            RiskLevel::Medium => "Business is moderately stable. Expense control and receivable management are required for better stability.",
            RiskLevel::High => "Business is under high risk. Immediate restructuring, cost optimization, and loan management is recommended.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanEligibility {
    Eligible,
    Conditional,
    RejectionRisk,
}

impl LoanEligibility {
    pub fn label(&self) -> &'static str {
        match self {
            LoanEligibility::Eligible => "ELIGIBLE FOR BUSINESS LOAN",
            LoanEligibility::Conditional => "LOAN POSSIBLE WITH CONDITIONS",
            LoanEligibility::RejectionRisk => "HIGH LOAN REJECTION RISK",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            LoanEligibility::Eligible => Tone::Good,
            LoanEligibility::Conditional => Tone::Caution,
            LoanEligibility::RejectionRisk => Tone::Alert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankruptcyRisk {
    Low,
    Moderate,
    High,
}

impl BankruptcyRisk {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => BankruptcyRisk::Low,
            2 => BankruptcyRisk::Moderate,
            _ => BankruptcyRisk::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BankruptcyRisk::Low => "LOW BANKRUPTCY RISK",
            BankruptcyRisk::Moderate => "MODERATE BANKRUPTCY RISK",
            BankruptcyRisk::High => "HIGH BANKRUPTCY RISK",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            BankruptcyRisk::Low => Tone::Good,
            BankruptcyRisk::Moderate => Tone::Caution,
            BankruptcyRisk::High => Tone::Alert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FraudSignal {
    None,
    TaxIrregularity,
    ManipulationSuspected,
}

impl FraudSignal {
    pub fn label(&self) -> &'static str {
        match self {
            FraudSignal::None => "NO FRAUD SIGNALS",
            FraudSignal::TaxIrregularity => "TAX IRREGULARITY DETECTED",
            FraudSignal::ManipulationSuspected => "POSSIBLE FINANCIAL MANIPULATION DETECTED",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            FraudSignal::None => Tone::Good,
            FraudSignal::TaxIrregularity | FraudSignal::ManipulationSuspected => Tone::Alert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestorScore {
    Strong,
    Moderate,
    Weak,
}

impl InvestorScore {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => InvestorScore::Weak,
            2 => InvestorScore::Moderate,
            _ => InvestorScore::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvestorScore::Strong => "STRONG INVESTMENT OPPORTUNITY",
            InvestorScore::Moderate => "MODERATE INVESTMENT OPPORTUNITY",
            InvestorScore::Weak => "HIGH INVESTMENT RISK",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            InvestorScore::Strong => Tone::Good,
            InvestorScore::Moderate => Tone::Caution,
            InvestorScore::Weak => Tone::Alert,
        }
    }
}

macro_rules! impl_display_label {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

impl_display_label!(RiskLevel, LoanEligibility, BankruptcyRisk, FraudSignal, InvestorScore);

// ============================================================================
// RISK FACTORS
// ============================================================================

/// Conditions that feed the explanation and recommendation lists, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    HighExpenseRatio,
    HeavyLoanBurden,
    PayablesExceedReceivables,
    CashFlowVolatility,
}

impl RiskFactor {
    pub fn explanation(&self) -> &'static str {
        match self {
            RiskFactor::HighExpenseRatio => "High operational expenses",
            RiskFactor::HeavyLoanBurden => "Heavy loan burden",
            RiskFactor::PayablesExceedReceivables => "More payables than receivables",
            RiskFactor::CashFlowVolatility => "Unstable cash flow",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskFactor::HighExpenseRatio => "Reduce operational expenses",
            RiskFactor::HeavyLoanBurden => "Restructure or refinance loans",
            RiskFactor::PayablesExceedReceivables => "Improve receivable collection",
            RiskFactor::CashFlowVolatility => "Stabilize cash flow planning",
        }
    }
}

pub const STABLE_EXPLANATION: &str = "Stable financial performance";
pub const STABLE_RECOMMENDATION: &str = "Business financially stable - consider expansion";

// ============================================================================
// ASSESSMENT
// ============================================================================

/// Every verdict for one record set, ready to serialize.
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub rule_score: u8,
    pub volatility_score: u8,
    pub risk_level: RiskLevel,
    pub explanations: Vec<String>,
    pub recommendations: Vec<String>,
    pub investor_score: InvestorScore,
    pub loan_eligibility: LoanEligibility,
    pub bankruptcy_risk: BankruptcyRisk,
    pub fraud_signal: FraudSignal,
}

// ============================================================================
// RISK ENGINE
// ============================================================================

/// Column means shared by most rules.
#[derive(Debug, Clone, Copy)]
struct Averages {
    revenue: f64,
    expenses: f64,
    loan_emi: f64,
    payables: f64,
    receivables: f64,
    /// mean(Revenue - Expenses); also the investor "cash flow" check
    profit: f64,
}

pub struct RiskEngine<'a> {
    records: &'a RecordSet,
    thresholds: RiskThresholds,
    avg: Averages,
    /// Population std of monthly profit (Revenue - Expenses)
    volatility: f64,
}

impl<'a> RiskEngine<'a> {
    /// Engine with default thresholds. Fails on an empty record set.
    pub fn new(records: &'a RecordSet) -> Result<Self> {
        Self::with_thresholds(records, RiskThresholds::default())
    }

    pub fn with_thresholds(records: &'a RecordSet, thresholds: RiskThresholds) -> Result<Self> {
        if records.is_empty() {
            return Err(HealthError::EmptyInput);
        }

        let profits = records.profits();
        let avg = Averages {
            revenue: mean(&records.revenues()),
            expenses: mean(&records.expenses()),
            loan_emi: mean(&records.loan_emis()),
            payables: mean(&records.payables()),
            receivables: mean(&records.receivables()),
            profit: mean(&profits),
        };

        Ok(RiskEngine {
            records,
            thresholds,
            avg,
            volatility: population_std(&profits),
        })
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    fn expense_ratio(&self) -> f64 {
        self.avg.expenses / self.avg.revenue
    }

    fn loan_pressure(&self) -> f64 {
        self.avg.loan_emi / self.avg.revenue
    }

    /// Risk factors that currently hold, in fixed check order.
    pub fn triggered_factors(&self) -> Vec<RiskFactor> {
        let t = &self.thresholds;
        let mut factors = Vec::new();

        if self.avg.expenses > t.expense_ratio * self.avg.revenue {
            factors.push(RiskFactor::HighExpenseRatio);
        }
        if self.avg.loan_emi > t.loan_ratio * self.avg.revenue {
            factors.push(RiskFactor::HeavyLoanBurden);
        }
        if self.avg.payables > self.avg.receivables {
            factors.push(RiskFactor::PayablesExceedReceivables);
        }
        if self.volatility > t.volatility_medium {
            factors.push(RiskFactor::CashFlowVolatility);
        }

        factors
    }

    /// 0-3: one point each for high expenses, heavy loans, payables over receivables.
    pub fn rule_based_risk(&self) -> u8 {
        self.triggered_factors()
            .iter()
            .filter(|f| **f != RiskFactor::CashFlowVolatility)
            .count() as u8
    }

    /// 0-2 from the volatility of monthly profit.
    pub fn ml_risk_score(&self) -> u8 {
        if self.volatility > self.thresholds.volatility_high {
            2
        } else if self.volatility > self.thresholds.volatility_medium {
            1
        } else {
            0
        }
    }

    pub fn final_risk_level(&self) -> RiskLevel {
        RiskLevel::from_total(self.rule_based_risk() + self.ml_risk_score())
    }

    pub fn risk_explanation(&self) -> Vec<String> {
        let reasons: Vec<String> = self
            .triggered_factors()
            .iter()
            .map(|f| f.explanation().to_string())
            .collect();

        if reasons.is_empty() {
            vec![STABLE_EXPLANATION.to_string()]
        } else {
            reasons
        }
    }

    pub fn recommendations(&self) -> Vec<String> {
        let suggestions: Vec<String> = self
            .triggered_factors()
            .iter()
            .map(|f| f.recommendation().to_string())
            .collect();

        if suggestions.is_empty() {
            vec![STABLE_RECOMMENDATION.to_string()]
        } else {
            suggestions
        }
    }

    pub fn investor_score(&self) -> InvestorScore {
        let mut score = 0;

        // Undefined growth (one month, or only 0 -> 0 moves) never counts
        if mean_pct_change(&self.records.revenues()).is_some_and(|g| g > 0.0) {
            score += 1;
        }
        if self.expense_ratio() < self.thresholds.investor_expense_ratio {
            score += 1;
        }
        if self.avg.profit > 0.0 {
            score += 1;
        }

        InvestorScore::from_score(score)
    }

    pub fn loan_eligibility(&self) -> LoanEligibility {
        let profitable = self.avg.profit > 0.0;

        if profitable
            && self.avg.loan_emi < self.thresholds.loan_eligibility_ratio * self.avg.revenue
        {
            LoanEligibility::Eligible
        } else if profitable {
            LoanEligibility::Conditional
        } else {
            LoanEligibility::RejectionRisk
        }
    }

    pub fn bankruptcy_risk(&self) -> BankruptcyRisk {
        let mut score = 0;

        if self.avg.profit < 0.0 {
            score += 2;
        }
        if self.expense_ratio() > self.thresholds.bankruptcy_expense_ratio {
            score += 1;
        }
        if self.loan_pressure() > self.thresholds.bankruptcy_loan_pressure {
            score += 1;
        }

        BankruptcyRisk::from_score(score)
    }

    /// Manipulation (sudden revenue/expense swings) takes precedence over tax variation.
    pub fn fraud_detection(&self) -> FraudSignal {
        let limit = self.thresholds.fraud_change;
        let swings = |values: Vec<f64>| max_abs_pct_change(&values).is_some_and(|c| c > limit);

        if swings(self.records.revenues()) || swings(self.records.expenses()) {
            FraudSignal::ManipulationSuspected
        } else if sample_std(&self.records.taxes_paid()).is_some_and(|s| s > self.thresholds.tax_std) {
            FraudSignal::TaxIrregularity
        } else {
            FraudSignal::None
        }
    }

    /// Compute every verdict in one pass.
    pub fn assess(&self) -> RiskAssessment {
        let assessment = RiskAssessment {
            rule_score: self.rule_based_risk(),
            volatility_score: self.ml_risk_score(),
            risk_level: self.final_risk_level(),
            explanations: self.risk_explanation(),
            recommendations: self.recommendations(),
            investor_score: self.investor_score(),
            loan_eligibility: self.loan_eligibility(),
            bankruptcy_risk: self.bankruptcy_risk(),
            fraud_signal: self.fraud_detection(),
        };

        tracing::debug!(
            risk = %assessment.risk_level,
            loan = %assessment.loan_eligibility,
            fraud = %assessment.fraud_signal,
            "Risk assessment computed"
        );
        assessment
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::FinancialRecord;

    #[derive(Clone, Copy)]
    struct Row {
        revenue: f64,
        expenses: f64,
        loan_emi: f64,
        payables: f64,
        receivables: f64,
        tax_paid: f64,
    }

    const STABLE: Row = Row {
        revenue: 100_000.0,
        expenses: 40_000.0,
        loan_emi: 10_000.0,
        payables: 5_000.0,
        receivables: 20_000.0,
        tax_paid: 5_000.0,
    };

    fn record_set(rows: &[Row]) -> RecordSet {
        let records = rows
            .iter()
            .enumerate()
            .map(|(i, r)| FinancialRecord {
                month: format!("M{}", i + 1),
                revenue: r.revenue,
                expenses: r.expenses,
                inventory: 50_000.0,
                receivables: r.receivables,
                payables: r.payables,
                loan_emi: r.loan_emi,
                tax_paid: r.tax_paid,
            })
            .collect();
        RecordSet::new(records).unwrap()
    }

    #[test]
    fn test_stable_scenario() {
        let set = record_set(&[STABLE, STABLE, STABLE]);
        let engine = RiskEngine::new(&set).unwrap();

        assert_eq!(engine.rule_based_risk(), 0);
        assert_eq!(engine.ml_risk_score(), 0);
        assert_eq!(engine.final_risk_level(), RiskLevel::Low);
        assert_eq!(engine.loan_eligibility(), LoanEligibility::Eligible);
        assert_eq!(engine.bankruptcy_risk(), BankruptcyRisk::Low);
        assert_eq!(engine.fraud_detection(), FraudSignal::None);
        assert_eq!(engine.risk_explanation(), vec![STABLE_EXPLANATION.to_string()]);
        assert_eq!(engine.recommendations(), vec![STABLE_RECOMMENDATION.to_string()]);
    }

    #[test]
    fn test_empty_input_fails_fast() {
        let set = RecordSet::default();
        assert!(matches!(RiskEngine::new(&set), Err(HealthError::EmptyInput)));
    }

    #[test]
    fn test_revenue_jump_flags_manipulation() {
        let jump = Row { revenue: 200_000.0, ..STABLE };
        let set = record_set(&[STABLE, jump]);
        let engine = RiskEngine::new(&set).unwrap();

        assert_eq!(engine.fraud_detection(), FraudSignal::ManipulationSuspected);
    }

    #[test]
    fn test_expense_spike_flags_manipulation() {
        let spike = Row { expenses: 60_000.0, ..STABLE };
        let set = record_set(&[STABLE, spike]);
        let engine = RiskEngine::new(&set).unwrap();

        assert_eq!(engine.fraud_detection(), FraudSignal::ManipulationSuspected);
    }

    #[test]
    fn test_tax_irregularity() {
        let rows = [
            STABLE,
            Row { tax_paid: 30_000.0, ..STABLE },
            Row { tax_paid: 5_000.0, ..STABLE },
        ];
        let set = record_set(&rows);
        let engine = RiskEngine::new(&set).unwrap();

        assert_eq!(engine.fraud_detection(), FraudSignal::TaxIrregularity);
    }

    #[test]
    fn test_manipulation_takes_precedence_over_tax() {
        let rows = [STABLE, Row { revenue: 200_000.0, tax_paid: 40_000.0, ..STABLE }];
        let set = record_set(&rows);
        let engine = RiskEngine::new(&set).unwrap();

        assert_eq!(engine.fraud_detection(), FraudSignal::ManipulationSuspected);
    }

    #[test]
    fn test_single_record_has_no_tax_variation() {
        let set = record_set(&[Row { tax_paid: 90_000.0, ..STABLE }]);
        let engine = RiskEngine::new(&set).unwrap();

        assert_eq!(engine.fraud_detection(), FraudSignal::None);
    }

    #[test]
    fn test_all_rule_factors_trigger() {
        let strained = Row {
            revenue: 100_000.0,
            expenses: 75_000.0,
            loan_emi: 35_000.0,
            payables: 30_000.0,
            receivables: 10_000.0,
            tax_paid: 5_000.0,
        };
        let set = record_set(&[strained, strained]);
        let engine = RiskEngine::new(&set).unwrap();

        assert_eq!(engine.rule_based_risk(), 3);
        assert_eq!(engine.final_risk_level(), RiskLevel::High);
        assert_eq!(
            engine.risk_explanation(),
            vec![
                "High operational expenses",
                "Heavy loan burden",
                "More payables than receivables",
            ]
        );
        assert_eq!(
            engine.recommendations(),
            vec![
                "Reduce operational expenses",
                "Restructure or refinance loans",
                "Improve receivable collection",
            ]
        );
    }

    #[test]
    fn test_volatility_scores() {
        // profits 60k and 0k: population std 30k
        let rows = [STABLE, Row { expenses: 100_000.0, ..STABLE }];
        let set = record_set(&rows);
        let engine = RiskEngine::new(&set).unwrap();

        assert_eq!(engine.ml_risk_score(), 1);
        assert!(engine.triggered_factors().contains(&RiskFactor::CashFlowVolatility));
        assert_eq!(engine.risk_explanation().last().unwrap(), "Unstable cash flow");

        // profits 60k and -60k: population std 60k
        let rows = [STABLE, Row { expenses: 160_000.0, ..STABLE }];
        let set = record_set(&rows);
        let engine = RiskEngine::new(&set).unwrap();
        assert_eq!(engine.ml_risk_score(), 2);
    }

    #[test]
    fn test_volatility_alone_is_not_a_rule_point() {
        let rows = [STABLE, Row { expenses: 100_000.0, ..STABLE }];
        let set = record_set(&rows);
        let engine = RiskEngine::new(&set).unwrap();

        // mean expenses 70k is not > 0.7 * 100k
        assert_eq!(engine.rule_based_risk(), 0);
        assert_eq!(engine.final_risk_level(), RiskLevel::Low);
    }

    #[test]
    fn test_risk_level_is_monotonic() {
        let mut previous = RiskLevel::from_total(0);
        for total in 0..=5 {
            let level = RiskLevel::from_total(total);
            assert!(level >= previous);
            previous = level;
        }
        assert_eq!(RiskLevel::from_total(2), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_total(3), RiskLevel::High);
    }

    #[test]
    fn test_investor_score() {
        let growing = [STABLE, Row { revenue: 110_000.0, ..STABLE }];
        let set = record_set(&growing);
        assert_eq!(RiskEngine::new(&set).unwrap().investor_score(), InvestorScore::Strong);

        // flat revenue: no growth point
        let set = record_set(&[STABLE, STABLE]);
        assert_eq!(RiskEngine::new(&set).unwrap().investor_score(), InvestorScore::Moderate);

        // flat and costly: only positive cash flow remains
        let costly = Row { expenses: 80_000.0, ..STABLE };
        let set = record_set(&[costly, costly]);
        assert_eq!(RiskEngine::new(&set).unwrap().investor_score(), InvestorScore::Weak);
    }

    #[test]
    fn test_loan_eligibility() {
        let heavy = Row { loan_emi: 45_000.0, ..STABLE };
        let set = record_set(&[heavy]);
        assert_eq!(RiskEngine::new(&set).unwrap().loan_eligibility(), LoanEligibility::Conditional);

        // losses mean rejection risk regardless of loan burden
        let loss = Row { expenses: 120_000.0, loan_emi: 0.0, ..STABLE };
        let set = record_set(&[loss]);
        assert_eq!(RiskEngine::new(&set).unwrap().loan_eligibility(), LoanEligibility::RejectionRisk);

        let breakeven = Row { expenses: 100_000.0, ..STABLE };
        let set = record_set(&[breakeven]);
        assert_eq!(RiskEngine::new(&set).unwrap().loan_eligibility(), LoanEligibility::RejectionRisk);
    }

    #[test]
    fn test_loss_with_heavy_loan_is_rejection_risk() {
        let loss = Row { expenses: 120_000.0, loan_emi: 60_000.0, ..STABLE };
        let set = record_set(&[loss]);
        assert_eq!(RiskEngine::new(&set).unwrap().loan_eligibility(), LoanEligibility::RejectionRisk);

        let loss = Row { expenses: 120_000.0, loan_emi: 10_000.0, ..STABLE };
        let set = record_set(&[loss]);
        assert_eq!(RiskEngine::new(&set).unwrap().loan_eligibility(), LoanEligibility::RejectionRisk);
    }

    #[test]
    fn test_bankruptcy_risk() {
        let loss = Row { expenses: 120_000.0, ..STABLE };
        let set = record_set(&[loss]);
        // loss (2) + expense ratio 1.2 (1)
        assert_eq!(RiskEngine::new(&set).unwrap().bankruptcy_risk(), BankruptcyRisk::High);

        let tight = Row { expenses: 85_000.0, loan_emi: 55_000.0, ..STABLE };
        let set = record_set(&[tight]);
        assert_eq!(RiskEngine::new(&set).unwrap().bankruptcy_risk(), BankruptcyRisk::Moderate);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = RiskThresholds {
            expense_ratio: 0.3,
            ..RiskThresholds::default()
        };
        let set = record_set(&[STABLE]);
        let engine = RiskEngine::with_thresholds(&set, thresholds).unwrap();

        assert_eq!(engine.rule_based_risk(), 1);
        assert_eq!(engine.triggered_factors(), vec![RiskFactor::HighExpenseRatio]);
    }

    #[test]
    fn test_labels_and_tones() {
        assert_eq!(RiskLevel::Medium.to_string(), "MEDIUM RISK");
        assert_eq!(LoanEligibility::Eligible.to_string(), "ELIGIBLE FOR BUSINESS LOAN");
        assert_eq!(FraudSignal::TaxIrregularity.tone(), Tone::Alert);
        assert_eq!(InvestorScore::Moderate.tone(), Tone::Caution);
        assert_eq!(RiskLevel::High.tier(), 3);
    }

    #[test]
    fn test_assessment_serializes_verdicts() {
        let set = record_set(&[STABLE, STABLE, STABLE]);
        let assessment = RiskEngine::new(&set).unwrap().assess();
        let json = serde_json::to_value(&assessment).unwrap();

        assert_eq!(json["risk_level"], "LOW");
        assert_eq!(json["loan_eligibility"], "ELIGIBLE");
        assert_eq!(json["fraud_signal"], "NONE");
        assert_eq!(json["investor_score"], "MODERATE");
    }
}
