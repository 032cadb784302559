use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::core::config::TranslateConfig;
use crate::core::error::{AppError, Result};
use crate::modules::translation::{Lang, Translator};

/// Client for the unofficial Google Translate endpoint.
///
/// Calls `/translate_a/single` with `client=gtx`, the same endpoint the
/// free tier of most translation wrappers uses. No API key required.
pub struct GoogleTranslateClient {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslateClient {
    pub fn new(config: &TranslateConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("SavdoCore/0.1 (cms-backend)")
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn request_url(&self, text: &str, target: Lang) -> String {
        format!(
            "{}/translate_a/single?client=gtx&sl=auto&tl={}&dt=t&q={}",
            self.base_url,
            target.code(),
            urlencoding::encode(text)
        )
    }
}

/// Extract the translated text from the provider's nested-array response.
///
/// The payload looks like `[[["salut","hello",...],["monde","world",...]],...]`;
/// the first element of each inner array is one translated segment.
fn parse_translation(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    let mut out = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(Value::as_str) {
            out.push_str(text);
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

#[async_trait]
impl Translator for GoogleTranslateClient {
    async fn translate(&self, text: &str, target: Lang) -> Result<String> {
        let url = self.request_url(text, target);

        tracing::debug!("Translating {} chars to {}", text.len(), target.code());

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Translation request failed: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Translation provider returned status {}",
                response.status()
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Invalid translation response: {}", e))
        })?;

        parse_translation(&body).ok_or_else(|| {
            AppError::ExternalServiceError("Translation response contained no text".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_translation_single_segment() {
        let body = json!([[["Привет мир", "Salom dunyo", null, null, 10]], null, "uz"]);
        assert_eq!(parse_translation(&body), Some("Привет мир".to_string()));
    }

    #[test]
    fn test_parse_translation_concatenates_segments() {
        let body = json!([
            [
                ["Hello. ", "Salom. ", null],
                ["How are you?", "Qalaysiz?", null]
            ],
            null,
            "uz"
        ]);
        assert_eq!(
            parse_translation(&body),
            Some("Hello. How are you?".to_string())
        );
    }

    #[test]
    fn test_parse_translation_rejects_malformed_body() {
        assert_eq!(parse_translation(&json!(null)), None);
        assert_eq!(parse_translation(&json!([])), None);
        assert_eq!(parse_translation(&json!([[]])), None);
        assert_eq!(parse_translation(&json!([[[42]]])), None);
    }

    #[test]
    fn test_request_url_encodes_query() {
        let config = TranslateConfig {
            base_url: "https://translate.example.com/".to_string(),
            timeout_secs: 5,
        };
        let client = GoogleTranslateClient::new(&config).unwrap();
        let url = client.request_url("salom dunyo", Lang::En);
        assert_eq!(
            url,
            "https://translate.example.com/translate_a/single?client=gtx&sl=auto&tl=en&dt=t&q=salom%20dunyo"
        );
    }
}
