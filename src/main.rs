use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use worknest::domain::ports::CatalogPort;
use worknest::infrastructure::{
    AppConfig, CliArgs, StaticCatalog, StorageManager, build_session_store,
};
use worknest::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    // The terminal belongs to the UI, so logs only ever go to a file.
    let Some(log_path) = config.effective_log_path() else {
        tracing_subscriber::registry().with(filter).init();
        return Ok(());
    };

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    info!(path = %log_path.display(), "Logging initialized");
    Ok(())
}

fn create_app() -> Result<App> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(
        version = worknest::VERSION,
        store = %config.session_store,
        level = ?config.log_level.to_tracing_level(),
        "Starting WorkNest"
    );

    let store = build_session_store(config.session_store, &storage);
    let catalog: Arc<dyn CatalogPort> = Arc::new(StaticCatalog::new());

    Ok(App::new(store, catalog, &config))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
