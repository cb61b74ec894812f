use serde::Deserialize;

use crate::{access::PaginationConfig, auth::token_service::TokenServiceConfig};

///
/// Contents of `config.json`. Secrets are read from the environment instead.
///
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_server_address")]
    pub server_address: String,
    pub token_svc_config: TokenServiceConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

fn default_server_address() -> String {
    String::from("0.0.0.0:3000")
}
