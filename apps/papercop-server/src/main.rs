//! PaperCop Server
//!
//! Accepts an academic paper as base64 PDF and returns an estimate of how
//! likely it is to warrant retraction, with a summary and the model's full
//! reasoning. REST API endpoints:
//!
//! - `POST /api/analyze` - retraction analysis
//! - `GET /health` - liveness and configuration status
//!
//! ## Architecture
//!
//! The server is a thin layer over `retraction-analyzer`:
//!
//! - Configuration is read once at startup (flags, environment, `.env`)
//! - Rate limiting via tower-governor protects the paid capability
//! - Each request performs exactly one bounded capability call

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use clap::{ArgAction, Parser};
use retraction_analyzer::{anthropic::DEFAULT_BASE_URL, config, AnalyzerConfig};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
mod state;

use api::{handle_analyze, handle_health};
use state::AppState;

/// Room for JSON framing and a data-URI prefix around the base64 payload
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

/// Command-line arguments for the PaperCop server
#[derive(Parser, Debug)]
#[command(name = "papercop-server")]
#[command(about = "PaperCop server: retraction-likelihood analysis of academic papers")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Anthropic API key; without it every analysis is rejected
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the Messages API
    #[arg(long, env = "ANTHROPIC_BASE_URL", default_value = DEFAULT_BASE_URL)]
    api_base_url: String,

    /// Model to request
    #[arg(long, env = "PAPERCOP_MODEL", default_value = config::DEFAULT_MODEL)]
    model: String,

    /// Maximum reply length in tokens
    #[arg(long, default_value_t = config::DEFAULT_MAX_OUTPUT_TOKENS)]
    max_output_tokens: u32,

    /// Request a visible chain of thought
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    extended_reasoning: bool,

    /// Thinking budget in tokens when extended reasoning is on
    #[arg(long, default_value_t = config::DEFAULT_THINKING_BUDGET_TOKENS)]
    thinking_budget_tokens: u32,

    /// Timeout of the capability call in milliseconds
    #[arg(long, default_value_t = config::DEFAULT_REQUEST_TIMEOUT_MS)]
    request_timeout_ms: u64,

    /// Deadline for a whole analysis in seconds
    #[arg(long, default_value_t = config::DEFAULT_OVERALL_DEADLINE_S)]
    overall_deadline_s: u64,

    /// Maximum uploaded document size in megabytes
    #[arg(long, default_value = "10")]
    max_upload_mb: usize,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            model: self.model.clone(),
            max_output_tokens: self.max_output_tokens,
            allow_extended_reasoning: self.extended_reasoning,
            thinking_budget_tokens: self.thinking_budget_tokens,
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            overall_deadline: Duration::from_secs(self.overall_deadline_s),
        }
    }
}

/// Upload cap in bytes for a size given in megabytes
fn upload_limit_bytes(max_upload_mb: usize) -> anyhow::Result<usize> {
    max_upload_mb
        .checked_mul(1024 * 1024)
        .ok_or_else(|| anyhow!("--max-upload-mb {} is too large", max_upload_mb))
}

/// Token replenish interval for `rate_limit` requests per second
fn replenish_interval_ms(rate_limit: u32) -> anyhow::Result<u64> {
    if rate_limit == 0 {
        bail!("--rate-limit must be at least 1 request per second");
    }
    Ok((1000 / u64::from(rate_limit)).max(1))
}

/// Routes and per-request layers shared by `main` and the tests
pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .max_upload_bytes
        .div_ceil(3)
        .saturating_mul(4)
        .saturating_add(BODY_OVERHEAD_BYTES);

    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/analyze", post(handle_analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PaperCop server on {}:{}", args.host, args.port);

    let state = AppState::new(
        args.api_key.as_deref(),
        &args.api_base_url,
        args.analyzer_config(),
        upload_limit_bytes(args.max_upload_mb)?,
    )?;

    if !state.is_configured() {
        warn!("ANTHROPIC_API_KEY is not set; analysis requests will be rejected");
    }

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_interval_ms(args.rate_limit)?)
            .burst_size(args.rate_limit.saturating_mul(2))
            .finish()
            .ok_or_else(|| anyhow!("Invalid rate limit: {}", args.rate_limit))?,
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = build_router(state)
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Model: {}", args.model);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);
    info!(
        "Capability timeout: {}ms, analysis deadline: {}s",
        args.request_timeout_ms, args.overall_deadline_s
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
