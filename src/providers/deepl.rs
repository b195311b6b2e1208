use std::time::Duration;
use async_trait::async_trait;
use log::error;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::{LanguageDirection, LanguageOption, TranslationProvider};

/// Default endpoint for DeepL API Pro keys
pub const PRO_ENDPOINT: &str = "https://api.deepl.com";

/// Default endpoint for DeepL API Free keys
pub const FREE_ENDPOINT: &str = "https://api-free.deepl.com";

/// DeepL client for interacting with the DeepL REST API
#[derive(Debug)]
pub struct DeepL {
    /// HTTP client for API requests
    client: Client,
    /// Auth key for authentication
    auth_key: String,
    /// API endpoint URL
    endpoint: String,
}

/// DeepL translation request body
#[derive(Debug, Serialize)]
pub struct TranslateRequest<'a> {
    /// The texts to translate, order is preserved in the response
    text: &'a [String],

    /// Language code of the input texts
    source_lang: &'a str,

    /// Language code to translate into
    target_lang: &'a str,
}

/// DeepL translation response
#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    /// One translation per input text, in request order
    pub translations: Vec<Translation>,
}

/// Individual translation in a DeepL response
#[derive(Debug, Deserialize)]
pub struct Translation {
    /// The translated text
    pub text: String,
}

/// Individual language in a DeepL languages response
#[derive(Debug, Deserialize)]
pub struct Language {
    /// Language code, e.g. "EN-GB"
    pub language: String,

    /// Human-readable name, e.g. "English (British)"
    pub name: String,
}

/// Select the API host matching an auth key.
///
/// DeepL issues free-plan keys with an `:fx` suffix; those keys are only
/// valid against the free host.
pub fn endpoint_for_key(auth_key: &str) -> &'static str {
    if auth_key.ends_with(":fx") {
        FREE_ENDPOINT
    } else {
        PRO_ENDPOINT
    }
}

impl DeepL {
    /// Create a new DeepL client.
    ///
    /// # Arguments
    /// * `auth_key` - DeepL auth key, free or pro
    /// * `endpoint` - API endpoint override, empty to derive from the key
    pub fn new(auth_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        let auth_key = auth_key.into();
        let endpoint = endpoint.into();
        let endpoint = if endpoint.is_empty() {
            endpoint_for_key(&auth_key).to_string()
        } else {
            endpoint.trim_end_matches('/').to_string()
        };

        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap_or_default(),
            auth_key,
            endpoint,
        }
    }

    /// Authorization header value for this client's key
    fn auth_header(&self) -> String {
        format!("DeepL-Auth-Key {}", self.auth_key)
    }

    /// Map a failed response to a typed provider error
    async fn error_for_status(status: StatusCode, response: reqwest::Response) -> ProviderError {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to get error response text".to_string());
        error!("DeepL API error ({}): {}", status, message);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ProviderError::AuthenticationError(format!(
                    "auth key rejected by DeepL: {}",
                    message
                ))
            }
            StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimitExceeded(message),
            _ if status.as_u16() == 456 => ProviderError::QuotaExceeded(message),
            _ => ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            },
        }
    }

    /// Map a transport failure to a typed provider error
    fn transport_error(e: reqwest::Error) -> ProviderError {
        if e.is_connect() || e.is_timeout() {
            ProviderError::ConnectionError(e.to_string())
        } else {
            ProviderError::RequestFailed(e.to_string())
        }
    }
}

#[async_trait]
impl TranslationProvider for DeepL {
    async fn languages(
        &self,
        direction: LanguageDirection,
    ) -> Result<Vec<LanguageOption>, ProviderError> {
        let kind = match direction {
            LanguageDirection::Source => "source",
            LanguageDirection::Target => "target",
        };
        let api_url = format!("{}/v2/languages", self.endpoint);

        let response = self
            .client
            .get(&api_url)
            .query(&[("type", kind)])
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_for_status(status, response).await);
        }

        let languages = response
            .json::<Vec<Language>>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(languages
            .into_iter()
            .map(|l| LanguageOption {
                name: l.name,
                code: l.language,
            })
            .collect())
    }

    async fn translate(
        &self,
        texts: &[String],
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Vec<String>, ProviderError> {
        if texts.is_empty() {
            return Err(ProviderError::RequestFailed(
                "translation batch is empty".to_string(),
            ));
        }

        let api_url = format!("{}/v2/translate", self.endpoint);
        let request = TranslateRequest {
            text: texts,
            source_lang,
            target_lang,
        };

        let response = self
            .client
            .post(&api_url)
            .header("Authorization", self.auth_header())
            .json(&request)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_for_status(status, response).await);
        }

        let translate_response = response
            .json::<TranslateResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(translate_response
            .translations
            .into_iter()
            .map(|t| t.text)
            .collect())
    }
}
