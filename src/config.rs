use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to create config directory")]
    CreateDirError,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SmtpSecurity {
    None,
    StartTLS,
    SSL,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpSettings {
    pub server: String,
    pub port: u16,
    pub security: SmtpSecurity,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            server: "smtp.gmail.com".to_string(),
            port: 465,
            security: SmtpSecurity::SSL,
        }
    }
}

/// Defaults applied when the send command omits the matching flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendDefaults {
    pub subject: String,
    pub body_template: String,
    pub delay_seconds: f64,
}

impl Default for SendDefaults {
    fn default() -> Self {
        Self {
            subject: "Seu arquivo PDF".to_string(),
            body_template: "Olá {nome},\n\nSegue em anexo o seu arquivo PDF conforme solicitado.\n\nAtenciosamente,\nEquipe de Suporte".to_string(),
            delay_seconds: 2.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub smtp: SmtpSettings,
    pub defaults: SendDefaults,
    /// Last-used sender address, pre-filled on the next run.
    pub sender: Option<String>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let path = Path::new(path);

        // If the file doesn't exist, return default config
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;

        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let path = Path::new(path);

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|_| ConfigError::CreateDirError)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }
}
