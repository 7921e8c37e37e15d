use crate::api::DEFAULT_API_URL;
use serde::Deserialize;
use std::path::PathBuf;

/// Read from `Rocket.toml` and `ROCKET_*` variables alongside Rocket's own settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            public_dir: default_public_dir(),
        }
    }
}
