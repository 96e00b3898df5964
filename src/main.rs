//! Library Desk - console library catalogue

use anyhow::Context;
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use library_desk::{
    cli::Console,
    config::{AppConfig, LoggingConfig},
    repository::{items::ItemsRepository, Repository},
    services::Services,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    tracing::info!("Starting Library Desk v{}", env!("CARGO_PKG_VERSION"));

    let items = ItemsRepository::load(&config.catalogue);
    let services = Services::new(&config);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    let Some(user) = console.prompt_user()? else {
        tracing::info!("No user given, exiting");
        return Ok(());
    };

    let mut repo = Repository::new(items, user);
    tracing::info!("Catalogue ready: {}", services.catalog.summary(&repo));

    console.run(&mut repo, &services)?;

    tracing::info!("Session closed: {}", services.catalog.summary(&repo));
    Ok(())
}

/// Logs go to stderr so the menu on stdout stays readable
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_desk={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }
}
