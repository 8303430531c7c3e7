//! # Masterblog Docs Server
//!
//! Serves the landing page and the API documentation viewer.

use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod config;
mod routes;

use config::DocsConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = DocsConfig::from_env();
    init_tracing(config.json_logs);

    tracing::info!(
        "Starting Masterblog Docs Server on {}:{}",
        config.host,
        config.port
    );

    HttpServer::new(|| {
        App::new()
            .wrap(TracingLogger::default())
            .configure(routes::configure_routes)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}

fn init_tracing(json_logs: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,docs_server=debug"));

    let registry = tracing_subscriber::registry().with(env_filter);
    if json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }
}
