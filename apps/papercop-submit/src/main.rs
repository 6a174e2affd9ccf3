//! papercop-submit - send a paper to a PaperCop server
//!
//! ```text
//! papercop-submit paper.pdf --server http://localhost:3000 --show-reasoning
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use papercop_submit::{
    render_verdict, size_limit_bytes, DocumentFile, Submitter, SubmitterConfig, DEFAULT_SERVER_URL,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "papercop-submit")]
#[command(about = "Estimate how likely a paper is to be retracted")]
#[command(version)]
struct Args {
    /// PDF file to analyze
    file: PathBuf,

    /// PaperCop server base URL
    #[arg(long, env = "PAPERCOP_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Maximum file size in MB
    #[arg(long, default_value = "10")]
    max_size_mb: usize,

    /// Print the full reasoning after the summary
    #[arg(long)]
    show_reasoning: bool,

    /// Print the verdict as JSON
    #[arg(long)]
    json: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "70")]
    timeout_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout carries the report
    let level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("papercop_submit={level},verdict_core={level}").into()
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let document = DocumentFile::from_path(&args.file, size_limit_bytes(args.max_size_mb)?)?;

    let submitter = Submitter::new(&SubmitterConfig {
        server_url: args.server.clone(),
        timeout: Duration::from_secs(args.timeout_secs),
    })?;

    let verdict = submitter
        .submit(&document)
        .await
        .with_context(|| format!("Could not analyze {}", document.name()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        print!("{}", render_verdict(&verdict, args.show_reasoning));
    }

    Ok(())
}
