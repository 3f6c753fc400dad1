use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Account mode the client was opened with.
///
/// Standard accounts talk to the remote API; demo accounts work against a
/// local snapshot so the application is usable without a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountMode {
    Standard,
    Demo,
}

impl AccountMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountMode::Standard => "standard",
            AccountMode::Demo => "demo",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "demo" => AccountMode::Demo,
            _ => AccountMode::Standard,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_account_mode")]
    pub account_mode: AccountMode,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_account_mode() -> AccountMode {
    AccountMode::Standard
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_snapshot_path() -> String {
    "demo-snapshot.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("CLIENT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
