use bento_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment and configuration
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. Logging: explicit LOG_LEVEL wins, otherwise quieter in production
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| if config.is_production() { "info" } else { "debug" }.into());
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(Some(&log_level), log_dir.as_deref());

    print_banner();

    tracing::info!(environment = %config.environment, "🍱 Bento server starting...");

    // 3. Initialize server state (opens and seeds the store)
    let state = ServerState::initialize(&config)?;

    // 4. Run the HTTP server until ctrl-c
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
