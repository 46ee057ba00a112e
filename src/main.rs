use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use bier_reminder::infrastructure::{AppConfig, CliArgs, ConfigStore, ReminderClient};
use bier_reminder::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
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
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let store = ConfigStore::new(args.config.as_deref())?;
    let mut config = store.load()?;
    config.merge_with_args(args);
    Ok(config)
}

fn create_app() -> Result<Option<App>> {
    let config = load_config()?;

    init_logging(&config)?;

    info!(
        name = bier_reminder::NAME,
        version = bier_reminder::VERSION,
        "Starting"
    );

    let client = ReminderClient::with_url(config.api.url.clone(), config.api.timeout())?;
    info!(url = client.url(), "Reminder endpoint configured");

    let mut app = App::new(
        Arc::new(client),
        config.notifications.timings(),
        config.validation.rules(),
    );

    if !app.attach() {
        error!("Form could not be attached");
        return Ok(None);
    }

    Ok(Some(app))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let Some(app) = create_app()? else {
        return Ok(());
    };

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
