use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::app::router::AppState;
use crate::error::PaymentError;
use crate::models::payment::{PaymentForm, PaymentVerdict};

pub async fn process_payment(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> (StatusCode, Json<PaymentVerdict>) {
    let request_id = Uuid::new_v4();
    let span = info_span!("procesar_pago", %request_id);

    async move {
        let form = match parse_form(payload) {
            Ok(form) => form,
            Err(e) => {
                error!("Invalid payment request: {}", e);
                return (e.status_code(), Json(PaymentVerdict::error(e.to_string())));
            }
        };

        info!("Received payment request");
        let outcome = state.service.verify(form).await;
        info!(
            "Payment verdict {:?} (HTTP {})",
            outcome.verdict.status, outcome.http_status
        );
        (outcome.http_status, Json(outcome.verdict))
    }
    .instrument(span)
    .await
}

fn parse_form(payload: Result<Json<Value>, JsonRejection>) -> Result<PaymentForm, PaymentError> {
    let Json(body) = payload.map_err(|rejection| {
        PaymentError::Validation(format!(
            "El cuerpo de la solicitud debe ser JSON: {}",
            rejection.body_text()
        ))
    })?;

    if !body.is_object() {
        return Err(PaymentError::Validation(
            "El cuerpo de la solicitud debe ser un objeto JSON".to_string(),
        ));
    }

    serde_json::from_value(body).map_err(|e| {
        PaymentError::Validation(format!("Solicitud de pago inválida: {}", e))
    })
}
