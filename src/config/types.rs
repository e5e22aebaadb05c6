use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Beacon configuration, as read from the `--config-file` path.
///
/// Key names follow the on-disk format shared with the beacon client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconConfig {
    /// Seconds between two "Hello" broadcasts.
    pub broadcast_interval: f64,
    /// Address the server socket binds to ("0.0.0.0" = any).
    pub server_addr: String,
    /// Address the client listener binds to.
    pub client_addr: String,
    /// Port the server broadcasts from.
    pub server_port: u16,
    /// Port clients listen on.
    pub client_port: u16,
    /// Port of the REST API advertised in the "Hello" message.
    #[serde(rename = "apiPort")]
    pub api_port: u16,
    /// Path of the REST API advertised in the "Hello" message.
    #[serde(rename = "apiUrl")]
    pub api_url: String,
    /// Largest "Hello" datagram a client accepts, in bytes.
    #[serde(rename = "helloMaxLength")]
    pub hello_max_length: u32,
}

impl BeaconConfig {
    /// Broadcast interval as a `Duration`.
    ///
    /// Saturates to `Duration::MAX` for intervals that fail validation.
    pub fn broadcast_period(&self) -> Duration {
        Duration::try_from_secs_f64(self.broadcast_interval).unwrap_or(Duration::MAX)
    }

    /// REST endpoint a client derives from a "Hello" sent by `host`.
    pub fn api_endpoint(&self, host: &str) -> String {
        format!("http://{}:{}{}", host, self.api_port, self.api_url)
    }
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self {
            broadcast_interval: 1.0,
            server_addr: "0.0.0.0".to_string(),
            client_addr: "0.0.0.0".to_string(),
            server_port: 50000,
            client_port: 50001,
            api_port: 8080,
            api_url: "/api".to_string(),
            hello_max_length: 1024,
        }
    }
}
