use anyhow::Result;
use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::Translator;

/// Translation client for an HTTP inference endpoint
///
/// Speaks a minimal JSON protocol against a model server hosting a
/// translation model (e.g. an opus-mt style multilingual-to-English model):
/// `POST {base_url}/translate` with the request body below, answered with a
/// `TranslationResponse`.
#[derive(Debug)]
pub struct RemoteTranslator {
    /// Base URL of the inference endpoint
    base_url: String,
    /// Model name to request
    model: String,
    /// HTTP client for making requests
    client: Client,
}

/// Translation request for the inference endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Model name to use
    model: String,
    /// Text to translate
    text: String,
    /// Target language code
    target: String,
}

/// Translation response from the inference endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationResponse {
    /// Translated text
    pub translation: String,
}

impl RemoteTranslator {
    /// Create a new translation client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the inference endpoint
    /// * `model` - Model name to request
    /// * `timeout_secs` - Request timeout in seconds
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client,
        })
    }

    /// Endpoint URL for translation requests
    fn translate_url(&self) -> String {
        format!("{}/translate", self.base_url)
    }
}

#[async_trait]
impl Translator for RemoteTranslator {
    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        let request = TranslationRequest {
            model: self.model.clone(),
            text: text.to_string(),
            target: "en".to_string(),
        };

        let response = self
            .client
            .post(self.translate_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Translation endpoint returned {}: {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: TranslationResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(body.translation)
    }
}
