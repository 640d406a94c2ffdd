use mock_server::Dex;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    // Comma-separated species that should answer 500.
    let failing = std::env::var("MOCK_FAIL").unwrap_or_default();
    let dex = Dex::with_failing(
        failing
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty()),
    );

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    mock_server::run_with(listener, dex).await
}
