use std::sync::Arc;

use orderdesk_gateway::{ContentStoreClient, RemoteStoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    orderdesk_observability::init();

    // Missing remote-store credentials are a deployment error: refuse to
    // start rather than serve with a broken backend.
    let config = RemoteStoreConfig::from_env()?;
    let store = Arc::new(ContentStoreClient::new(config));

    let app = orderdesk_api::app::build_app(store);

    let port: u16 = match std::env::var("PORT") {
        Ok(raw) => raw.parse()?,
        Err(_) => 8080,
    };
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
