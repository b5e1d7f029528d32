//! Development server configuration types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings handed to the external development server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerOptions {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory containing static assets to serve in development
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl DevServerOptions {
    /// Address the server will listen on.
    pub fn address(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("assets")
}
