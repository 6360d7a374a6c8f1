//! Configuration handling for the order form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default order service address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
/// Default path of the create-order endpoint
pub const DEFAULT_ORDERS_PATH: &str = "/api/orders";

const BASE_URL_ENV: &str = "ORDER_FORM_BASE_URL";
const ORDERS_PATH_ENV: &str = "ORDER_FORM_ORDERS_PATH";

/// User configuration for the order form
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormConfig {
    /// Scheme, host and port of the order service
    pub base_url: Option<String>,
    /// Path of the orders resource, routed to the backend by the ingress
    pub orders_path: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "orderapp", "order-form-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config = Self::load_file()?;
        Ok(config.with_overrides(
            std::env::var(BASE_URL_ENV).ok(),
            std::env::var(ORDERS_PATH_ENV).ok(),
        ))
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Replace fields with non-empty override values
    pub fn with_overrides(mut self, base_url: Option<String>, orders_path: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|v| !v.is_empty()) {
            self.base_url = Some(url);
        }
        if let Some(path) = orders_path.filter(|v| !v.is_empty()) {
            self.orders_path = Some(path);
        }
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn orders_path(&self) -> &str {
        self.orders_path.as_deref().unwrap_or(DEFAULT_ORDERS_PATH)
    }

    /// Full URL of the create-order endpoint
    pub fn orders_url(&self) -> String {
        let base = self.base_url().trim_end_matches('/');
        let path = self.orders_path().trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Full URL of the health endpoint
    pub fn health_url(&self) -> String {
        format!("{}/health", self.orders_url().trim_end_matches('/'))
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        ProjectDirs::from("io", "orderapp", "order-form-tui")
            .map(|dirs| dirs.data_local_dir().to_path_buf())
    }
}
