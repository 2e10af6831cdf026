use ramen_store::allocator::HttpOrderIdAllocator;
use ramen_store::config::StoreConfig;
use ramen_store::http::router;
use ramen_store::lifecycle::{setup_tracing, StoreSystem};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StoreConfig::load_default().map_err(|e| e.to_string())?;
    let allocator = HttpOrderIdAllocator::new(&config.allocator).map_err(|e| e.to_string())?;
    info!(endpoint = %allocator.endpoint(), "Using remote order id allocator");

    let system = StoreSystem::new(
        Arc::new(allocator),
        &config.persistence,
        config.allocator.timeout(),
    );
    system
        .seed_catalog(&config.catalog)
        .await
        .map_err(|e| e.to_string())?;

    let app = router(system.api_state(config.api_key, &config.image_placeholder));
    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| e.to_string())?;
    info!(address = %address, "Ramen store listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await;
    if let Err(e) = served {
        error!("Server error: {}", e);
    }

    system.shutdown().await?;

    info!("Application shutdown complete");
    Ok(())
}
