use anyhow::Context;
use clap::Parser;
use employee_tracker::core::ConfigProvider;
use employee_tracker::utils::{logger, render};
use employee_tracker::{CliConfig, Dispatcher, SqliteStore, TerminalPrompter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.log_format);
    tracing::info!("Starting employee-tracker");

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::debug!("Settings: {:?}", settings);

    // No connection, no menu.
    let store = match SqliteStore::connect(settings.database_url(), settings.init_schema()).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("❌ Could not open {}: {}", settings.database_url(), e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if settings.init_schema() {
        store
            .apply_schema()
            .await
            .context("failed to apply the bundled schema")?;
    }

    if settings.show_banner() {
        println!("{}", render::banner(settings.title()));
    }

    let dispatcher = Dispatcher::new(store, TerminalPrompter);
    dispatcher
        .run()
        .await
        .context("the menu prompt stopped responding")?;

    Ok(())
}
