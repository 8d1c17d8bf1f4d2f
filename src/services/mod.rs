pub mod processor_client;
pub mod status_messages;
pub mod verification;

pub use processor_client::{MercadoPagoClient, PaymentProcessor};
pub use verification::{Outcome, PayloadSettings, VerificationService};
