use async_trait::async_trait;
use axum::Router;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use verificador_pagos::models::payment::{PaymentPayload, ProcessorReply, ProcessorResponse};
use verificador_pagos::services::{PayloadSettings, PaymentProcessor, VerificationService};
use verificador_pagos::{build_router, AppState, PaymentError};

pub enum Canned {
    Reply(ProcessorReply),
    Unreachable,
}

/// Replays a fixed processor answer and remembers every payload it was sent.
pub struct FakeProcessor {
    canned: Canned,
    calls: AtomicUsize,
    payloads: Mutex<Vec<PaymentPayload>>,
}

impl FakeProcessor {
    pub fn replying(http_status: u16, body: ProcessorResponse) -> Arc<Self> {
        Arc::new(Self {
            canned: Canned::Reply(ProcessorReply { http_status, body }),
            calls: AtomicUsize::new(0),
            payloads: Mutex::new(Vec::new()),
        })
    }

    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            canned: Canned::Unreachable,
            calls: AtomicUsize::new(0),
            payloads: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_payload(&self) -> Option<PaymentPayload> {
        self.payloads.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl PaymentProcessor for FakeProcessor {
    async fn create_payment(&self, payload: &PaymentPayload) -> Result<ProcessorReply, PaymentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().unwrap().push(payload.clone());
        match &self.canned {
            Canned::Reply(reply) => Ok(reply.clone()),
            Canned::Unreachable => {
                let port = std::net::TcpListener::bind("127.0.0.1:0")
                    .unwrap()
                    .local_addr()
                    .unwrap()
                    .port();
                // listener dropped: the port now refuses connections
                let err = reqwest::Client::new()
                    .get(format!("http://127.0.0.1:{}/", port))
                    .send()
                    .await
                    .expect_err("closed port must refuse the connection");
                Err(err.into())
            }
        }
    }
}

pub fn router_with(processor: Arc<FakeProcessor>) -> Router {
    router_with_public_dir(processor, PathBuf::from("does-not-exist"))
}

pub fn router_with_public_dir(processor: Arc<FakeProcessor>, public_dir: PathBuf) -> Router {
    let service = VerificationService::new(processor, PayloadSettings::default());
    build_router(AppState::new(service, public_dir))
}
