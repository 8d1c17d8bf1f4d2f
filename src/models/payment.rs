use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Body posted by the checkout form. Numeric fields stay raw until the service parses them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentForm {
    pub token: Option<String>,
    pub payment_method_id: Option<String>,
    pub issuer_id: Option<Value>,
    pub installments: Option<Value>,
    pub transaction_amount: Option<Value>,
    #[serde(rename = "cardholderEmail")]
    pub cardholder_email: Option<String>,
    #[serde(rename = "cardholderName")]
    pub cardholder_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identification {
    #[serde(rename = "type")]
    pub kind: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payer {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<Identification>,
}

// Payload para crear el pago en el procesador
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentPayload {
    #[serde(with = "rust_decimal::serde::float")]
    pub transaction_amount: Decimal,
    pub token: String,
    pub description: String,
    pub installments: u32,
    pub payment_method_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_id: Option<Value>,
    pub currency_id: String,
    pub payer: Payer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProcessorCause {
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProcessorResponse {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub cause: Vec<ProcessorCause>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorReply {
    pub http_status: u16,
    pub body: ProcessorResponse,
}

impl ProcessorReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.http_status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    Live,
    Dead,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentVerdict {
    pub status: VerdictStatus,
    pub message: String,
    #[serde(rename = "paymentId", skip_serializing_if = "Option::is_none", default)]
    pub payment_id: Option<Value>,
}

impl PaymentVerdict {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: VerdictStatus::Error,
            message: message.into(),
            payment_id: None,
        }
    }
}
