// End-to-end checks against the bundled sample dataset

use sme_health::{
    load_csv, BankruptcyRisk, FinancialReport, Forecaster, FraudSignal, HealthScoreCalculator,
    InvestorScore, LoanEligibility, RecordSet, RiskEngine, RiskLevel, RiskThresholds,
};
use std::io::Write;
use std::path::PathBuf;

fn sample_data() -> RecordSet {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(sme_health::DEFAULT_DATA_PATH);
    load_csv(&path).unwrap()
}

#[test]
fn test_sample_dataset_loads_twelve_months() {
    let records = sample_data();

    assert_eq!(records.len(), 12);
    assert_eq!(records.months().first(), Some(&"Jan"));
    assert_eq!(records.months().last(), Some(&"Dec"));
    assert_eq!(records.profits().iter().sum::<f64>(), 2_006_000.0);
}

#[test]
fn test_sample_dataset_assessment() {
    let records = sample_data();
    let engine = RiskEngine::new(&records).unwrap();
    let a = engine.assess();

    assert_eq!(a.rule_score, 0);
    assert_eq!(a.volatility_score, 0);
    assert_eq!(a.risk_level, RiskLevel::Low);
    assert_eq!(a.explanations, vec!["Stable financial performance".to_string()]);
    assert_eq!(a.investor_score, InvestorScore::Strong);
    assert_eq!(a.loan_eligibility, LoanEligibility::Eligible);
    assert_eq!(a.bankruptcy_risk, BankruptcyRisk::Low);
    assert_eq!(a.fraud_signal, FraudSignal::None);

    // Expense ratio ~0.68 sits between the moderate and high bands
    let score = HealthScoreCalculator::new(&records).unwrap().calculate_score();
    assert_eq!(score, 90);
}

#[test]
fn test_tighter_thresholds_from_file_raise_risk() {
    let records = sample_data();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"expense_ratio": 0.6, "volatility_medium": 15000}}"#).unwrap();
    let thresholds = RiskThresholds::from_file(file.path()).unwrap();

    let engine = RiskEngine::with_thresholds(&records, thresholds).unwrap();
    let a = engine.assess();

    assert_eq!(a.rule_score, 1);
    assert_eq!(a.volatility_score, 1);
    assert_eq!(a.risk_level, RiskLevel::Medium);
    assert_eq!(a.explanations.len(), 2);
    assert_eq!(a.recommendations.len(), 2);
}

#[test]
fn test_sample_dataset_forecast() {
    let records = sample_data();
    let forecast = Forecaster::new(&records).unwrap().predict_next_month();

    assert!((forecast.predicted_revenue - 602_242.42).abs() < 0.01);
    assert!((forecast.predicted_expenses - 403_530.30).abs() < 0.01);
}

#[test]
fn test_sample_dataset_report() {
    let records = sample_data();
    let engine = RiskEngine::new(&records).unwrap();
    let report = FinancialReport::build(&records, &engine, chrono::Local::now()).unwrap();

    let text = report.render_text();
    assert!(text.contains("Total Revenue:         INR 6,283,000"));
    assert!(text.contains("Overall Risk Level: LOW RISK"));
    assert!(text.contains("Health Score: 90/100"));
    assert_eq!(report.recent.len(), 5);
    assert_eq!(report.recent[0].month, "Aug");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    report.write_pdf(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
