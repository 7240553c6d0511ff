use anyhow::Context;
use clap::Parser;
use expertconnect::catalog::Catalog;
use expertconnect::cli::Cli;
use expertconnect::config::Config;
use expertconnect::logging::init_tracing;
use expertconnect::router::Router;
use expertconnect::shutdown::ShutdownHandle;
use expertconnect::ui::app::App;
use expertconnect::ui::runtime;
use std::time::Duration;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;

    let router = Router::new(&config.ui.base_path);
    let start = cli.route.as_deref().unwrap_or(&config.ui.start_route);
    let route = router.resolve(start)?;

    let catalog = match cli.catalog.as_ref().or(config.catalog.path.as_ref()) {
        Some(path) => Catalog::load(path)?,
        None => Catalog::sample()?,
    };

    init_tracing(&config.logging).context("failed to initialize logging")?;
    tracing::info!(
        route = %route,
        projects = catalog.projects.len(),
        "Starting expertconnect"
    );

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("failed to install signal handlers")?;

    let app = App::new(catalog, router, route);
    runtime::run(app, Duration::from_millis(config.ui.tick_rate_ms), shutdown)
        .context("terminal UI failed")?;
    Ok(())
}
