use anyhow::{Context, Result};
use clap::Parser;
use tdlib_inspect::{Cli, Config, InputSource, Inspector};
use tokio::fs::File;
use tokio::io::{self, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load()?;
    tdlib_logging::init_logging(&config.logging.level, config.logging.format)?;

    let inspector = Inspector::from_config(&config);
    let mut stdout = io::stdout();

    match cli.input_source(&config) {
        InputSource::File(path) => {
            info!("Reading payloads from {}", path.display());
            let file = File::open(&path)
                .await
                .with_context(|| format!("Failed to open {}", path.display()))?;
            inspector.run(BufReader::new(file), &mut stdout).await?;
        }
        InputSource::Stdin => {
            info!("Reading payloads from stdin");
            inspector.run(BufReader::new(io::stdin()), &mut stdout).await?;
        }
    }

    Ok(())
}
