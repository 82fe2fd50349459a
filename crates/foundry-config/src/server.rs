use std::net::SocketAddr;

use serde::Deserialize;

use crate::{cors::CorsConfig, health::HealthConfig};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    #[serde(default)]
    pub health: HealthConfig,
    /// CORS settings; when absent the server allows every origin, which is
    /// the contract the browser client relies on
    #[serde(default)]
    pub cors: Option<CorsConfig>,
}
