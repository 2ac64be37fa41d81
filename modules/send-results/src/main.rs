use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "send-results",
    version,
    about = "Submit team-to-group assignments to the assignment API"
)]
struct Cli {
    /// JSON file mapping team ids to group ids
    result_file: PathBuf,

    /// Path to the KEY=value config file. Recognised keys: ASSIGNMENT_ENDPOINT,
    /// TOKEN and ASSIGNMENT_INPUT_TYPE (GraphQL input type of the `data` list,
    /// default TeamAssignmentInput)
    #[arg(long, env = "SEND_RESULTS_CONFIG", default_value = "config.ini")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("send_results=info,assignment_client=info")),
        )
        .init();

    let cli = Cli::parse();

    let report = send_results::send_results(&cli.result_file, &cli.config)
        .await
        .with_context(|| format!("Failed to submit {}", cli.result_file.display()))?;

    tracing::info!(chunks = report.chunks, entries = report.entries, "Done");
    Ok(())
}
