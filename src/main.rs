use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lcc_catalog::infrastructure::AppState;
use lcc_catalog::{config, modules, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lcc_catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    modules::cataloguing_pro::init();

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to load classification table: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Using classification table '{}' (title cutter: {})",
        state.table_version(),
        config.title_cutter
    );

    let app = server::build_router(state, &config.cors_allowed_origins);

    if let Err(e) = server::serve(app, config.port).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
