use scoreboard_api::api;
use scoreboard_api::config::AppConfig;
use scoreboard_api::infrastructure::SharedScoreboard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    tracing::info!(?config, "Configuration loaded");

    let board = SharedScoreboard::new();
    let app = api::router(board);

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
