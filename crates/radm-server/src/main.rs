use clap::Parser;
use radm_server::run;

/// Command line interface for the repository admin server
#[derive(Parser, Debug)]
#[command(name = "radm")]
#[command(about = "Repository admin service - diagnostics, node inspection and reindexing")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await?;
    Ok(())
}
