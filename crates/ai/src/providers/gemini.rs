//! Google Gemini `generateContent` over plain REST.

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use super::TextGenerator;
use crate::credentials::CredentialSource;
use crate::error::AiError;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

const PROVIDER: &str = "gemini";

/// The key travels in a header so it never appears in request URLs.
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Maps a non-success status and body to an error.
///
/// Gemini reports a bad key either as 401/403 or as 400 with
/// `API_KEY_INVALID` in the body.
pub(crate) fn classify_error(status: u16, body: &str) -> AiError {
    let snippet: String = body.chars().take(200).collect();
    match status {
        401 | 403 => AiError::InvalidApiKey(PROVIDER.to_string()),
        400 if body.contains("API_KEY_INVALID") => AiError::InvalidApiKey(PROVIDER.to_string()),
        429 => AiError::QuotaExceeded(PROVIDER.to_string()),
        500..=599 => AiError::Provider(format!("HTTP {}", status)),
        _ => AiError::Provider(format!("HTTP {}: {}", status, snippet)),
    }
}

/// Text of the first part of the first candidate.
pub(crate) fn extract_text(body: &str) -> Result<String, AiError> {
    let data: GenerateContentResponse = serde_json::from_str(body)?;
    data.candidates
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.content)
        .and_then(|c| c.parts)
        .and_then(|p| p.into_iter().next())
        .and_then(|p| p.text)
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AiError::MalformedResponse("response carried no text".to_string()))
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    credential: Arc<dyn CredentialSource>,
}

impl GeminiClient {
    pub fn new(
        credential: Arc<dyn CredentialSource>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .pool_max_idle_per_host(2)
            .build()
            .map_err(|e| AiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            credential,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn is_configured(&self) -> bool {
        self.credential.api_key().is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let api_key = self
            .credential
            .api_key()
            .ok_or_else(|| AiError::MissingApiKey(PROVIDER.to_string()))?;
        let mut key_header = HeaderValue::from_str(&api_key)
            .map_err(|_| AiError::InvalidApiKey(PROVIDER.to_string()))?;
        key_header.set_sensitive(true);

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!("Calling Gemini model {}", self.model);
        let response = self
            .http
            .post(self.endpoint())
            .header(API_KEY_HEADER, key_header)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(classify_error(status.as_u16(), &body));
        }
        extract_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StaticCredential;

    #[test]
    fn test_classify_error() {
        assert!(matches!(classify_error(401, ""), AiError::InvalidApiKey(_)));
        assert!(matches!(classify_error(403, ""), AiError::InvalidApiKey(_)));
        assert!(matches!(
            classify_error(400, r#"{"error":{"details":[{"reason":"API_KEY_INVALID"}]}}"#),
            AiError::InvalidApiKey(_)
        ));
        assert!(matches!(classify_error(400, "bad request"), AiError::Provider(_)));
        assert!(matches!(classify_error(429, ""), AiError::QuotaExceeded(_)));
        assert!(matches!(classify_error(503, ""), AiError::Provider(_)));
    }

    #[test]
    fn test_extract_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Start a SIP."}]}}]}"#;
        assert_eq!(extract_text(body).unwrap(), "Start a SIP.");

        assert!(matches!(
            extract_text(r#"{"candidates":[]}"#),
            Err(AiError::MalformedResponse(_))
        ));
        assert!(matches!(
            extract_text("<html>"),
            Err(AiError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_endpoint_format() {
        let client = GeminiClient::new(
            Arc::new(StaticCredential::none()),
            "https://example.test/",
            "gemini-pro",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-pro:generateContent"
        );
        assert!(!client.is_configured());
    }

    #[tokio::test]
    async fn test_generate_without_key_makes_no_request() {
        let client = GeminiClient::new(
            Arc::new(StaticCredential::none()),
            "http://127.0.0.1:9",
            "gemini-pro",
            Duration::from_secs(1),
        )
        .unwrap();
        assert!(matches!(
            client.generate("hi").await,
            Err(AiError::MissingApiKey(_))
        ));
    }

    #[tokio::test]
    async fn test_network_error_does_not_carry_the_key() {
        let key = format!("AIza{}", "SECRET".repeat(6));
        let client = GeminiClient::new(
            Arc::new(StaticCredential::new(key.clone())),
            "http://127.0.0.1:9",
            "gemini-pro",
            Duration::from_secs(2),
        )
        .unwrap();

        let err = client.generate("hi").await.unwrap_err();
        assert!(matches!(err, AiError::Network(_)), "got {:?}", err);
        assert!(!err.to_string().contains(&key));
        assert!(!format!("{:?}", err).contains("SECRET"));
    }
}
