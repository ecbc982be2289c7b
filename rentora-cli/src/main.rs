use clap::Parser;
use rentora_cli::{run, AppState, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = rentora_store::app_config::Config::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(storage = %config.storage.dir.display(), "Using listing storage");

    let state = AppState::from_config(&config);
    let mut stdout = std::io::stdout().lock();
    run(cli, &state, &mut stdout).await
}
