mod youtube;
mod models;
mod errors;
mod format;
mod config;
mod logging;
mod api;

use std::error::Error;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = config::Config::from_env()?;
    let _log_guard = logging::init(&config)?;

    let bind_addr = config.bind_addr;
    let app = api::create_router(config);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Server starting on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
