use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "verificador-pagos", about = "Backend de verificación de pagos con tarjeta")]
pub struct Config {
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub server_port: u16,

    #[arg(long, env = "MP_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: String,

    #[arg(long, env = "MP_API_BASE_URL", default_value = "https://api.mercadopago.com")]
    pub api_base_url: String,

    #[arg(long, env = "MP_CURRENCY_ID", default_value = "PEN")]
    pub currency_id: String,

    #[arg(long, env = "MP_PAYER_ID_TYPE")]
    pub payer_id_type: Option<String>,

    #[arg(long, env = "MP_PAYER_ID_NUMBER")]
    pub payer_id_number: Option<String>,

    #[arg(long, env = "PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
