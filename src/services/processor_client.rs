use crate::error::PaymentError;
use crate::models::payment::{PaymentPayload, ProcessorReply, ProcessorResponse};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};
use url::Url;

#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn create_payment(&self, payload: &PaymentPayload) -> Result<ProcessorReply, PaymentError>;
}

pub struct MercadoPagoClient {
    client: Client,
    payments_url: Url,
    access_token: String,
}

impl MercadoPagoClient {
    pub fn new(base_url: &str, access_token: impl Into<String>) -> anyhow::Result<Self> {
        let base = Url::parse(base_url)?;
        let payments_url = base.join("/v1/payments")?;

        Ok(Self {
            client: Client::builder().build()?,
            payments_url,
            access_token: access_token.into(),
        })
    }

    pub fn payments_url(&self) -> &Url {
        &self.payments_url
    }
}

#[async_trait]
impl PaymentProcessor for MercadoPagoClient {
    async fn create_payment(&self, payload: &PaymentPayload) -> Result<ProcessorReply, PaymentError> {
        let response = self
            .client
            .post(self.payments_url.clone())
            .bearer_auth(&self.access_token)
            .json(payload)
            .send()
            .await?;

        let http_status = response.status().as_u16();
        let raw = response.text().await?;
        info!("Processor response (HTTP {}): {}", http_status, raw);

        let body = match serde_json::from_str::<ProcessorResponse>(&raw) {
            Ok(body) => body,
            Err(e) if !(200..300).contains(&http_status) => {
                // Error pages from gateways are not always JSON
                warn!("Non-JSON error body from processor: {}", e);
                ProcessorResponse {
                    message: Some(raw).filter(|text| !text.trim().is_empty()),
                    ..Default::default()
                }
            }
            Err(e) => return Err(e.into()),
        };

        Ok(ProcessorReply { http_status, body })
    }
}
