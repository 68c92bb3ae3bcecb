use std::time::Duration;

use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::info;

use inkpost::api::ApiClient;
use inkpost::cli::Cli;
use inkpost::config::Config;
use inkpost::logging::init_tracing;
use inkpost::session::{AuthContext, SessionStore};
use inkpost::ui::{self, UiOptions};

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    let store = SessionStore::new(config.session_path());

    if cli.logout {
        store
            .clear()
            .with_context(|| format!("Failed to remove session at {}", store.path().display()))?;
        info!("stored session removed");
        println!("Signed out");
        return Ok(());
    }

    let initial_route = cli.initial_route().map_err(|e| anyhow!(e))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let auth = AuthContext::restore(store);
    let client = ApiClient::new(&config.api, auth.clone())?;
    info!(base_url = client.base_url(), "starting");

    if config.session.revalidate_on_start {
        runtime.block_on(auth.revalidate(&client));
    }

    let options = UiOptions {
        tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
        language: config.ui.language,
        initial_route,
    };
    ui::run(options, auth, client, runtime.handle()).context("Terminal UI failed")?;
    Ok(())
}
