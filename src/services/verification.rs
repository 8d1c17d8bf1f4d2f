use crate::error::PaymentError;
use crate::models::payment::{
    Identification, Payer, PaymentForm, PaymentPayload, PaymentVerdict, ProcessorReply,
    VerdictStatus,
};
use crate::services::processor_client::PaymentProcessor;
use crate::services::status_messages;
use crate::utils::money::{parse_amount, parse_installments};
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{info, warn};

pub const PAYMENT_DESCRIPTION: &str = "Prueba de tarjeta de crédito";
pub const APPROVED_MESSAGE: &str = "Tarjeta aprobada (Live)";
const SYNTHETIC_FIRST_NAME: &str = "Test";
const SYNTHETIC_LAST_NAME: &str = "User";

#[derive(Debug, Clone)]
pub struct PayloadSettings {
    pub currency_id: String,
    pub identification: Option<Identification>,
}

impl Default for PayloadSettings {
    fn default() -> Self {
        Self {
            currency_id: "PEN".to_string(),
            identification: None,
        }
    }
}

/// A verdict plus the HTTP status it is served with.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub http_status: StatusCode,
    pub verdict: PaymentVerdict,
}

impl From<PaymentError> for Outcome {
    fn from(err: PaymentError) -> Self {
        Self {
            http_status: err.status_code(),
            verdict: PaymentVerdict::error(err.to_string()),
        }
    }
}

pub struct VerificationService {
    processor: Arc<dyn PaymentProcessor>,
    settings: PayloadSettings,
}

impl VerificationService {
    pub fn new(processor: Arc<dyn PaymentProcessor>, settings: PayloadSettings) -> Self {
        Self { processor, settings }
    }

    pub async fn verify(&self, form: PaymentForm) -> Outcome {
        let payload = match self.build_payload(form) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Rejected payment request before contacting processor: {}", e);
                return e.into();
            }
        };

        info!(
            "Creating payment: method={} amount={} installments={}",
            payload.payment_method_id, payload.transaction_amount, payload.installments
        );

        match self.processor.create_payment(&payload).await {
            Ok(reply) => interpret(reply),
            Err(e) => {
                warn!("Processor call failed: {}", e);
                e.into()
            }
        }
    }

    pub fn build_payload(&self, form: PaymentForm) -> Result<PaymentPayload, PaymentError> {
        let token = required_text(form.token, "token")?;
        let payment_method_id = required_text(form.payment_method_id, "payment_method_id")?;
        let email = required_text(form.cardholder_email, "cardholderEmail")?;
        let amount = form
            .transaction_amount
            .filter(|v| !v.is_null())
            .ok_or_else(|| PaymentError::missing_field("transaction_amount"))?;
        let installments = form
            .installments
            .filter(|v| !v.is_null())
            .ok_or_else(|| PaymentError::missing_field("installments"))?;

        let (first_name, last_name) = split_name(form.cardholder_name.as_deref());

        Ok(PaymentPayload {
            transaction_amount: parse_amount(&amount)?,
            token,
            description: PAYMENT_DESCRIPTION.to_string(),
            installments: parse_installments(&installments)?,
            payment_method_id,
            issuer_id: form.issuer_id.filter(|v| !v.is_null()),
            currency_id: self.settings.currency_id.clone(),
            payer: Payer {
                email,
                first_name,
                last_name,
                identification: self.settings.identification.clone(),
            },
        })
    }
}

/// Maps a processor reply onto the live/dead/error verdict.
pub fn interpret(reply: ProcessorReply) -> Outcome {
    if !reply.is_success() {
        let body = &reply.body;
        let message = body
            .message
            .clone()
            .or_else(|| body.cause.iter().find_map(|c| c.description.clone()))
            .or_else(|| body.error.clone())
            .unwrap_or_else(|| format!("Error del procesador (HTTP {})", reply.http_status));
        return Outcome {
            http_status: StatusCode::BAD_REQUEST,
            verdict: PaymentVerdict::error(message),
        };
    }

    let body = reply.body;
    if body.status.as_deref() == Some("approved") {
        return Outcome {
            http_status: StatusCode::OK,
            verdict: PaymentVerdict {
                status: VerdictStatus::Live,
                message: APPROVED_MESSAGE.to_string(),
                payment_id: body.id,
            },
        };
    }

    Outcome {
        http_status: StatusCode::OK,
        verdict: PaymentVerdict {
            status: VerdictStatus::Dead,
            message: status_messages::decline_message(body.status_detail.as_deref()),
            payment_id: None,
        },
    }
}

fn required_text(value: Option<String>, field: &str) -> Result<String, PaymentError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| PaymentError::missing_field(field))
}

fn split_name(name: Option<&str>) -> (String, String) {
    let mut parts = name.unwrap_or_default().split_whitespace();
    match parts.next() {
        Some(first) => {
            let rest = parts.collect::<Vec<_>>().join(" ");
            let last = if rest.is_empty() {
                SYNTHETIC_LAST_NAME.to_string()
            } else {
                rest
            };
            (first.to_string(), last)
        }
        None => (
            SYNTHETIC_FIRST_NAME.to_string(),
            SYNTHETIC_LAST_NAME.to_string(),
        ),
    }
}
