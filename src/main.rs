use anyhow::Result;
use clap::Parser;
use skyboard::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    skyboard::run(cli).await
}
