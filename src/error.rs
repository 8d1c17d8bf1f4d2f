use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("{0}")]
    Validation(String),
    #[error("Valor inválido para '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("No se pudo contactar al procesador de pagos: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Respuesta inválida del procesador de pagos: {0}")]
    Decode(#[from] serde_json::Error),
}

impl PaymentError {
    pub fn missing_field(field: &str) -> Self {
        PaymentError::Validation(format!("Falta el campo requerido: {}", field))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            PaymentError::Validation(_) | PaymentError::InvalidField { .. } => {
                StatusCode::BAD_REQUEST
            }
            PaymentError::Transport(_) | PaymentError::Decode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
