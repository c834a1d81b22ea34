use std::process::ExitCode;

use url_alias_store::{app, config, logging};

#[tokio::main]
async fn main() -> ExitCode {
    if dotenvy::dotenv().is_err() {
        eprintln!(".env file not found, using process environment");
    }

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.app.env);

    tracing::info!(env = %config.app.env, "starting url-alias-store");
    tracing::debug!("debug messages are enabled");
    config.print_summary();

    match app::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("shutting down: {e:#}");
            ExitCode::FAILURE
        }
    }
}
