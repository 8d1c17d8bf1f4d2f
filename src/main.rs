use anyhow::Context;
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use verificador_pagos::models::payment::Identification;
use verificador_pagos::services::{MercadoPagoClient, PayloadSettings, VerificationService};
use verificador_pagos::{build_router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().unwrap_or_else(|e| e.exit());
    info!("Starting payment verifier on port {}", config.server_port);

    let processor = MercadoPagoClient::new(&config.api_base_url, config.access_token.clone())
        .context("invalid MP_API_BASE_URL")?;
    info!("Processor endpoint: {}", processor.payments_url());

    let identification = match (config.payer_id_type.clone(), config.payer_id_number.clone()) {
        (Some(kind), Some(number)) => Some(Identification { kind, number }),
        _ => None,
    };
    let settings = PayloadSettings {
        currency_id: config.currency_id.clone(),
        identification,
    };

    let service = VerificationService::new(Arc::new(processor), settings);
    let app = build_router(AppState::new(service, config.public_dir.clone()));

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
