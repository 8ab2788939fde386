use anyhow::Context;
use dotenvy::dotenv;
use q2bank::logging::init_tracing;
use q2bank::router::init_router;
use q2bank::state::init_app_state;
use q2bank_config::ServerConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();
    let state = init_app_state().await?;
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&server_config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", server_config.addr))?;

    info!(addr = %server_config.addr, "Server running");
    info!("Scalar UI available at /scalar");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
