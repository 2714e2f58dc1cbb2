use clap::Parser;

use signin_flow::cli::{self, Cli};
use signin_flow::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing();

    let state = cli::run(args).await?;
    tracing::info!(state = %state, "Sign-in form closed");
    Ok(())
}
