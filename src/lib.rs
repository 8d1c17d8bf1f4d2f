pub mod app;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

pub use app::config::Config;
pub use app::router::{build_router, AppState};
pub use error::PaymentError;
