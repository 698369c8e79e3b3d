use serde::Deserialize;

/// Listener for the web UI and REST API
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct WebUIConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// `localhost` binds to 127.0.0.1
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for WebUIConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    9990
}

fn default_enabled() -> bool {
    true
}

fn default_host() -> String {
    "localhost".to_string()
}
