// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use sme_health::advisor::{recent_records, ADVISOR_CONTEXT_MONTHS};
use sme_health::logging::init_logging;
use sme_health::{
    ask, load_csv, Advisor, FinancialReport, Forecaster, GeminiAdvisor, GeminiConfig,
    HealthScoreCalculator, KeywordAdvisor, RecordSet, RiskEngine, RiskThresholds,
    DEFAULT_COMPANY, DEFAULT_DATA_PATH, DEFAULT_REPORT_FILE,
};

#[derive(Parser, Debug)]
#[command(name = "sme-health")]
#[command(version)]
#[command(about = "Financial health monitoring for small and medium businesses", long_about = None)]
struct Cli {
    /// Monthly financial data (CSV)
    #[arg(long, global = true, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// JSON file overriding scoring thresholds
    #[arg(long, global = true)]
    thresholds: Option<PathBuf>,

    /// Company name shown in the dashboard header and the report
    #[arg(long, global = true, default_value = DEFAULT_COMPANY)]
    company: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive terminal dashboard (default)
    Dashboard {
        /// Use the offline keyword advisor even if GEMINI_API_KEY is set
        #[arg(long)]
        offline: bool,

        /// Month label to select on start, e.g. "Mar"
        #[arg(long)]
        month: Option<String>,
    },
    /// Print the risk assessment and business-intelligence verdicts
    Assess {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Generate the financial report
    Report {
        /// Output PDF path
        #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
        output: PathBuf,

        /// Print the report as text instead of writing a PDF
        #[arg(long)]
        text: bool,
    },
    /// Predict next month's revenue and expenses
    Forecast,
    /// Ask the financial advisor a question
    Ask {
        question: String,

        /// Use the offline keyword advisor
        #[arg(long)]
        offline: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Dashboard {
        offline: false,
        month: None,
    });

    // The dashboard owns the terminal; only log there when RUST_LOG asks for it
    match command {
        Commands::Dashboard { .. } if std::env::var_os("RUST_LOG").is_none() => {}
        _ => init_logging(&cli.log_level, cli.log_json),
    }

    let thresholds = match &cli.thresholds {
        Some(path) => RiskThresholds::from_file(path)
            .with_context(|| format!("Failed to load thresholds from {:?}", path))?,
        None => RiskThresholds::default(),
    };

    let records = load_csv(&cli.data)
        .with_context(|| format!("Failed to load financial data from {:?}", cli.data))?;

    match command {
        Commands::Dashboard { offline, month } => {
            run_dashboard(records, thresholds, offline, &cli.company, month.as_deref())
        }
        Commands::Assess { json } => run_assess(&records, thresholds, json),
        Commands::Report { output, text } => {
            run_report(&records, thresholds, &cli.company, &output, text)
        }
        Commands::Forecast => run_forecast(&records),
        Commands::Ask { question, offline } => run_ask(&records, &question, offline),
    }
}

/// Remote advisor when configured, keyword advisor otherwise.
fn build_advisor(offline: bool) -> Box<dyn Advisor> {
    if offline {
        return Box::new(KeywordAdvisor::new());
    }

    match GeminiConfig::from_env().and_then(GeminiAdvisor::new) {
        Ok(advisor) => Box::new(advisor),
        Err(e) => {
            tracing::info!(reason = %e, "Remote advisor unavailable, using keyword advisor");
            Box::new(KeywordAdvisor::new())
        }
    }
}

fn run_assess(records: &RecordSet, thresholds: RiskThresholds, json: bool) -> Result<()> {
    let health_thresholds = thresholds.health.clone();
    let engine = RiskEngine::with_thresholds(records, thresholds)?;
    let assessment = engine.assess();
    let score = HealthScoreCalculator::with_thresholds(records, health_thresholds)?.calculate_score();

    if json {
        let value = serde_json::json!({
            "assessment": assessment,
            "health_score": score,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("📊 Risk Assessment ({} months)", records.len());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Overall Risk:  {}", assessment.risk_level);
    println!(
        "  rule score {} + volatility score {}",
        assessment.rule_score, assessment.volatility_score
    );
    println!("\n⚠  Explanation:");
    for reason in &assessment.explanations {
        println!("  • {}", reason);
    }
    println!("\n✅ Recommendations:");
    for rec in &assessment.recommendations {
        println!("  • {}", rec);
    }
    println!("\n💼 Business Intelligence:");
    println!("  Loan:        {}", assessment.loan_eligibility);
    println!("  Bankruptcy:  {}", assessment.bankruptcy_risk);
    println!("  Fraud:       {}", assessment.fraud_signal);
    println!("  Investor:    {}", assessment.investor_score);
    println!("  Health:      {}/100", score);

    Ok(())
}

fn run_report(
    records: &RecordSet,
    thresholds: RiskThresholds,
    company: &str,
    output: &Path,
    text: bool,
) -> Result<()> {
    let engine = RiskEngine::with_thresholds(records, thresholds)?;
    let report = FinancialReport::build(records, &engine, chrono::Local::now())?.with_company(company);

    if text {
        print!("{}", report.render_text());
        return Ok(());
    }

    report.write_pdf(output)?;
    println!("✓ Report written to {}", output.display());
    Ok(())
}

fn run_forecast(records: &RecordSet) -> Result<()> {
    let forecast = Forecaster::new(records)?.predict_next_month();

    println!("📈 Next Month Forecast");
    println!("  Revenue:  {:.2}", forecast.predicted_revenue);
    println!("  Expenses: {:.2}", forecast.predicted_expenses);
    println!("  Profit:   {:.2}", forecast.predicted_profit());
    Ok(())
}

fn run_ask(records: &RecordSet, question: &str, offline: bool) -> Result<()> {
    let advisor = build_advisor(offline);
    let recent = recent_records(&records.tail(ADVISOR_CONTEXT_MONTHS));

    println!("{}", ask(advisor.as_ref(), question, &recent));
    Ok(())
}

#[cfg(feature = "tui")]
fn run_dashboard(
    records: RecordSet,
    thresholds: RiskThresholds,
    offline: bool,
    company: &str,
    month: Option<&str>,
) -> Result<()> {
    let advisor = build_advisor(offline);

    let mut app = ui::App::new(records, thresholds, advisor)?.with_company(company);
    if let Some(label) = month {
        if !app.select_month_label(label) {
            anyhow::bail!("Month {:?} not found in the dataset", label);
        }
    }
    ui::run_ui(&mut app)?;

    println!("\n✅ Dashboard closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_dashboard(
    _records: RecordSet,
    _thresholds: RiskThresholds,
    _offline: bool,
    _company: &str,
    _month: Option<&str>,
) -> Result<()> {
    eprintln!("❌ Dashboard not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use: sme-health assess / sme-health report");
    std::process::exit(1);
}
