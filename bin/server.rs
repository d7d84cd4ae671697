// SME Financial Health - Web Server
// JSON API over the same records, verdicts, forecast and advisor as the CLI

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use sme_health::advisor::{recent_records, ADVISOR_CONTEXT_MONTHS};
use sme_health::logging::init_logging;
use sme_health::{
    ask, load_csv, Advisor, DerivedRecord, FinancialReport, Forecaster, GeminiAdvisor,
    GeminiConfig, HealthError, HealthScoreCalculator, KeywordAdvisor, RecordSet, RiskAssessment,
    RiskEngine, RiskThresholds, DEFAULT_COMPANY, DEFAULT_DATA_PATH, DEFAULT_REPORT_FILE, VERSION,
};

#[derive(Parser, Debug)]
#[command(name = "sme-server")]
#[command(version)]
#[command(about = "HTTP API for SME financial health", long_about = None)]
struct Args {
    /// Monthly financial data (CSV)
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// JSON file overriding scoring thresholds
    #[arg(long)]
    thresholds: Option<PathBuf>,

    /// Company name used in the PDF report
    #[arg(long, default_value = DEFAULT_COMPANY)]
    company: String,

    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:3000")]
    addr: String,

    /// Use the offline keyword advisor even if GEMINI_API_KEY is set
    #[arg(long)]
    offline: bool,

    #[arg(long, default_value = "info")]
    log_level: String,

    #[arg(long)]
    log_json: bool,
}

/// Shared application state
#[derive(Clone)]
struct AppState {
    records: Arc<RecordSet>,
    thresholds: Arc<RiskThresholds>,
    advisor: Arc<dyn Advisor>,
    company: Arc<String>,
}

impl AppState {
    fn engine(&self) -> Result<RiskEngine<'_>, HealthError> {
        RiskEngine::with_thresholds(&self.records, (*self.thresholds).clone())
    }
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn failed(message: String) -> Self {
        Self {
            success: false,
            data: (),
            error: Some(message),
        }
    }
}

fn error_response(status: StatusCode, err: impl Display) -> Response {
    tracing::error!(status = %status, error = %err, "Request failed");
    (status, Json(ApiResponse::failed(err.to_string()))).into_response()
}

/// Domain errors map to 4xx when the data itself is the problem.
fn status_for(err: &HealthError) -> StatusCode {
    match err {
        HealthError::EmptyInput | HealthError::InsufficientHistory { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        HealthError::ExternalService(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Serialize)]
struct ScoreResponse {
    health_score: u32,
}

#[derive(Serialize)]
struct ForecastResponse {
    predicted_revenue: f64,
    predicted_expenses: f64,
    predicted_profit: f64,
}

#[derive(Deserialize)]
struct AdviceRequest {
    question: String,
}

#[derive(Serialize)]
struct AdviceResponse {
    advisor: String,
    answer: String,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/records - Monthly records with profit and cash flow
async fn get_records(State(state): State<AppState>) -> Response {
    let rows: Vec<DerivedRecord<'_>> = state.records.rows().collect();
    (StatusCode::OK, Json(ApiResponse::ok(rows))).into_response()
}

/// GET /api/assessment - Risk level, explanations and verdicts
async fn get_assessment(State(state): State<AppState>) -> Response {
    match state.engine() {
        Ok(engine) => {
            let assessment: RiskAssessment = engine.assess();
            (StatusCode::OK, Json(ApiResponse::ok(assessment))).into_response()
        }
        Err(e) => error_response(status_for(&e), e),
    }
}

/// GET /api/score - 0-100 health score
async fn get_score(State(state): State<AppState>) -> Response {
    match HealthScoreCalculator::with_thresholds(&state.records, state.thresholds.health.clone()) {
        Ok(calc) => {
            let body = ScoreResponse { health_score: calc.calculate_score() };
            (StatusCode::OK, Json(ApiResponse::ok(body))).into_response()
        }
        Err(e) => error_response(status_for(&e), e),
    }
}

/// GET /api/forecast - Next month revenue and expenses
async fn get_forecast(State(state): State<AppState>) -> Response {
    match Forecaster::new(&state.records) {
        Ok(forecaster) => {
            let f = forecaster.predict_next_month();
            let body = ForecastResponse {
                predicted_revenue: f.predicted_revenue,
                predicted_expenses: f.predicted_expenses,
                predicted_profit: f.predicted_profit(),
            };
            (StatusCode::OK, Json(ApiResponse::ok(body))).into_response()
        }
        Err(e) => error_response(status_for(&e), e),
    }
}

/// POST /api/advice - Ask the advisor; the request blocks, so it runs off the async workers
async fn post_advice(State(state): State<AppState>, Json(req): Json<AdviceRequest>) -> Response {
    let recent = recent_records(&state.records.tail(ADVISOR_CONTEXT_MONTHS));
    let advisor = state.advisor.clone();

    let result = tokio::task::spawn_blocking(move || {
        let answer = ask(advisor.as_ref(), &req.question, &recent);
        AdviceResponse {
            advisor: advisor.name().to_string(),
            answer,
        }
    })
    .await;

    match result {
        Ok(body) => (StatusCode::OK, Json(ApiResponse::ok(body))).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

/// GET /api/report - PDF report download
async fn get_report(State(state): State<AppState>) -> Response {
    let result = tokio::task::spawn_blocking(move || -> anyhow::Result<Vec<u8>> {
        let engine = state.engine()?;
        let report = FinancialReport::build(&state.records, &engine, chrono::Local::now())?
            .with_company(state.company.as_str());
        report.to_pdf_bytes()
    })
    .await;

    match result {
        Ok(Ok(bytes)) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", DEFAULT_REPORT_FILE),
                ),
            ],
            bytes,
        )
            .into_response(),
        Ok(Err(e)) => error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e)),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

/// GET / - Serve index.html
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/records", get(get_records))
        .route("/assessment", get(get_assessment))
        .route("/score", get(get_score))
        .route("/forecast", get(get_forecast))
        .route("/advice", post(post_advice))
        .route("/report", get(get_report))
        .with_state(state);

    Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

fn build_advisor(offline: bool) -> Arc<dyn Advisor> {
    if offline {
        return Arc::new(KeywordAdvisor::new());
    }

    match GeminiConfig::from_env().and_then(GeminiAdvisor::new) {
        Ok(advisor) => Arc::new(advisor),
        Err(e) => {
            tracing::info!(reason = %e, "Remote advisor unavailable, using keyword advisor");
            Arc::new(KeywordAdvisor::new())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
    }
    tracing::info!("Shutting down");
}

// ============================================================================
// Main Server
// ============================================================================

// The advisor's blocking HTTP client must be created and dropped outside the
// async runtime, so main stays synchronous and drives the runtime itself.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level, args.log_json);

    println!("🌐 SME Financial Health - Web Server v{}", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let thresholds = match &args.thresholds {
        Some(path) => RiskThresholds::from_file(path)?,
        None => RiskThresholds::default(),
    };

    let records = load_csv(&args.data)?;
    println!("✓ Loaded {} months from {:?}", records.len(), args.data);

    let advisor = build_advisor(args.offline);
    println!("✓ Advisor: {}", advisor.name());

    let state = AppState {
        records: Arc::new(records),
        thresholds: Arc::new(thresholds),
        advisor: advisor.clone(),
        company: Arc::new(args.company.clone()),
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(&args.addr).await?;

        println!("\n🚀 Server running on http://{}", args.addr);
        println!("   API: http://{}/api/assessment", args.addr);
        println!("\n   Press Ctrl+C to stop\n");

        axum::serve(listener, build_router(state))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok::<(), anyhow::Error>(())
    })?;

    drop(runtime);
    drop(advisor);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&HealthError::EmptyInput), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            status_for(&HealthError::InsufficientHistory { required: 2, actual: 1 }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for(&HealthError::ExternalService("down".to_string())),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_banner_version_matches_package() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_failed_response_shape() {
        let json = serde_json::to_value(ApiResponse::failed("boom".to_string())).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert!(json["data"].is_null());
    }
}
