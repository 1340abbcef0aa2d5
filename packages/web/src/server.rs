//! Fullstack server: renders the app on the server and serves its assets.

use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;
use crate::App;

pub async fn launch() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::new()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&settings.log.filter)?)
        .init();

    let serve_config = ServeConfig::new().map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let router = axum::Router::new().serve_dioxus_application(serve_config, App);

    let addr = settings.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
