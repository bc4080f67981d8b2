// src/core/config_manager.rs
//! Environment-driven configuration for the intake service

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;

use crate::extract::OcrConfig;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ADDRESS: &str = "0.0.0.0";
const DEFAULT_INTAKE_SERVICE_URL: &str = "http://127.0.0.1:5555";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub server: ServerSettings,
    pub service: ServiceConfig,
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub address: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the external add-resumes service
    pub intake_service_url: String,
    /// Applied to every outbound call when set; unset means no timeout
    pub timeout_seconds: Option<u64>,
}

impl ServiceConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl ConfigManager {
    /// Load all configurations from the process environment
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server = Self::load_server(&lookup)?;
        let service = Self::load_service(&lookup)?;
        let ocr = Self::load_ocr(&lookup);

        Ok(Self {
            server,
            service,
            ocr,
        })
    }

    fn load_server<F>(lookup: &F) -> Result<ServerSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").or_else(|| lookup("ROCKET_PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        let address = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        Ok(ServerSettings { address, port })
    }

    fn load_service<F>(lookup: &F) -> Result<ServiceConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let intake_service_url = lookup("INTAKE_SERVICE_URL")
            .unwrap_or_else(|| DEFAULT_INTAKE_SERVICE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        info!("Intake service URL: {}", intake_service_url);

        let timeout_seconds = lookup("HTTP_TIMEOUT_SECS")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("HTTP_TIMEOUT_SECS must be seconds, got {:?}", raw))
            })
            .transpose()?;

        Ok(ServiceConfig {
            intake_service_url,
            timeout_seconds,
        })
    }

    fn load_ocr<F>(lookup: &F) -> OcrConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = OcrConfig::default();
        OcrConfig {
            command: lookup("TESSERACT_CMD").unwrap_or(defaults.command),
            language: lookup("OCR_LANG").unwrap_or(defaults.language),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ConfigManager> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigManager::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.address, "0.0.0.0");
        assert_eq!(config.service.intake_service_url, "http://127.0.0.1:5555");
        assert_eq!(config.service.timeout(), None);
        assert_eq!(config.ocr.command, "tesseract");
        assert_eq!(config.ocr.language, "eng");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("ROCKET_PORT", "9000"),
            ("INTAKE_SERVICE_URL", "https://intake.example.com/"),
            ("HTTP_TIMEOUT_SECS", "30"),
            ("OCR_LANG", "fra"),
        ])
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.service.intake_service_url, "https://intake.example.com");
        assert_eq!(config.service.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.ocr.language, "fra");
    }

    #[test]
    fn test_port_takes_precedence() {
        let config = load(&[("PORT", "7000"), ("ROCKET_PORT", "9000")]).unwrap();
        assert_eq!(config.server.port, 7000);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(load(&[("PORT", "eighty")]).is_err());
        assert!(load(&[("HTTP_TIMEOUT_SECS", "-1")]).is_err());
    }
}
