use axum::{
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::handlers::{assets, payments, states};
use crate::services::VerificationService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<VerificationService>,
    pub public_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(service: VerificationService, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            service: Arc::new(service),
            public_dir: Arc::new(public_dir.into()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(assets::index))
        .route("/obtener-estados", get(states::get_states))
        .route("/procesar-pago", post(payments::process_payment))
        .fallback(assets::asset)
        .with_state(state)
}
