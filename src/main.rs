//! Interactive entry point: wire the console collaborators to the pipeline.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use codetriad::config::{self, PipelineConfig};
use codetriad::console::{ConsoleProgress, StdinInput};
use codetriad::llm::{AnthropicClient, CompletionBackend};
use codetriad::pipeline::{Pipeline, RunStatus};

#[derive(Parser, Debug)]
#[command(name = "codetriad", about = "Three-agent software development pipeline")]
struct Cli {
    /// Maximum requirements-gathering interactions before a forced summary.
    #[arg(long, default_value_t = config::DEFAULT_MAX_INTERACTIONS)]
    max_interactions: usize,

    /// Maximum verify-revise iterations.
    #[arg(long, default_value_t = config::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Model alias (opus/sonnet/haiku) or full model ID.
    #[arg(long, default_value = config::DEFAULT_MODEL)]
    model: String,

    /// Per-response token ceiling.
    #[arg(long, default_value_t = config::DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Override the API base URL (mock servers, proxies).
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Credential resolved before any agent exists; failure here is fatal.
    let mut client = AnthropicClient::from_env(&cli.model, cli.max_tokens)
        .context("no API credential available")?;
    if let Some(base_url) = cli.base_url {
        client.set_base_url(base_url);
    }
    let backend: Arc<dyn CompletionBackend> = Arc::new(client);

    let pipeline_config = PipelineConfig {
        max_interactions: cli.max_interactions,
        max_iterations: cli.max_iterations,
        model: cli.model,
        max_tokens: cli.max_tokens,
    };

    let pipeline = Pipeline::new(backend, pipeline_config);
    let mut input = StdinInput;
    let progress = ConsoleProgress;

    let outcome = pipeline
        .run(&mut input, &progress)
        .await
        .context("pipeline run failed")?;

    if outcome.status == RunStatus::NeedsReview {
        std::process::exit(2);
    }

    Ok(())
}
