use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs;
use std::path::Path;

use crate::artifacts::ModelArtifact;
use crate::validation::ValidationRule;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Validation gate rule set
    #[serde(default)]
    pub validation: ValidationRule,

    /// Language detection settings
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Translation settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// HTTP server settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address to bind the listener to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
        }
    }
}

/// Language detection backend type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DetectorKind {
    /// Local trigram-based detection
    #[default]
    Whatlang,
    /// Deterministic fake, for tests and dry runs
    Mock,
}

impl DetectorKind {
    /// Lowercase identifier for the backend
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Whatlang => "whatlang".to_string(),
            Self::Mock => "mock".to_string(),
        }
    }
}

impl std::fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for DetectorKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "whatlang" => Ok(Self::Whatlang),
            "mock" => Ok(Self::Mock),
            _ => Err(anyhow!("Invalid detector type: {}", s)),
        }
    }
}

/// Translation backend type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslatorKind {
    /// HTTP translation inference endpoint
    #[default]
    Remote,
    /// Deterministic fake, for tests and dry runs
    Mock,
}

impl TranslatorKind {
    /// Lowercase identifier for the backend
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Remote => "remote".to_string(),
            Self::Mock => "mock".to_string(),
        }
    }
}

impl std::fmt::Display for TranslatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for TranslatorKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "mock" => Ok(Self::Mock),
            _ => Err(anyhow!("Invalid translator type: {}", s)),
        }
    }
}

/// Language detection settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DetectionConfig {
    /// Backend to use
    #[serde(default)]
    pub kind: DetectorKind,

    /// Model artifacts to ensure present before the server starts
    #[serde(default)]
    pub artifacts: Vec<ModelArtifact>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            kind: DetectorKind::default(),
            artifacts: Vec::new(),
        }
    }
}

/// Translation settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Backend to use
    #[serde(default)]
    pub kind: TranslatorKind,

    /// Inference endpoint URL (remote backend)
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,

    /// Model name to request (remote backend)
    #[serde(default = "default_translation_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            kind: TranslatorKind::default(),
            endpoint: default_translation_endpoint(),
            model: default_translation_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_translation_endpoint() -> String {
    "http://localhost:8080".to_string()
}

fn default_translation_model() -> String {
    "opus-mt-mul-en".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load the configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write a default configuration file
    pub fn create_default_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::default();
        let content = serde_json::to_string_pretty(&config)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load the configuration, creating a default file when none exists
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Self::create_default_file(path)
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        self.validation.validate()?;

        if self.translation.kind == TranslatorKind::Remote && self.translation.endpoint.is_empty() {
            return Err(anyhow!("Translation endpoint is required for the remote backend"));
        }
        if self.translation.timeout_secs == 0 {
            return Err(anyhow!("Translation timeout must be at least 1 second"));
        }
        for artifact in &self.detection.artifacts {
            if artifact.url.is_empty() {
                return Err(anyhow!(
                    "Model artifact {:?} has no download URL configured",
                    artifact.path
                ));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig::default(),
            validation: ValidationRule::default(),
            detection: DetectionConfig::default(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
