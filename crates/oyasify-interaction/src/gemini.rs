//! GeminiResponder - Direct REST API implementation for Gemini.
//!
//! Calls the Gemini `generateContent` REST API directly.
//! Configuration is loaded from secret.json

use crate::config::load_secret_config;
use crate::error::ResponderError;
use crate::imagen::ImagenClient;
use crate::responder::{Attachment, Responder};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use reqwest::{Client, StatusCode, header::HeaderValue};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Upstream calls are external network collaborators with no defined
/// timeout upstream; a hang is treated as a transport failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Responder implementation that talks to the Gemini HTTP API for text and
/// delegates image generation to the Imagen endpoint.
#[derive(Clone)]
pub struct GeminiResponder {
    client: Client,
    api_key: String,
    model: String,
    imagen: ImagenClient,
}

impl GeminiResponder {
    /// Creates a new responder with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            imagen: ImagenClient::new(client.clone(), api_key.clone()),
            client,
            api_key,
            model: model.into(),
        }
    }

    /// Loads configuration from secret.json
    ///
    /// Model name defaults to `gemini-2.5-flash` if not specified.
    pub fn try_from_config() -> Result<Self, ResponderError> {
        let secret_config = load_secret_config().map_err(ResponderError::Request)?;

        let gemini_config = secret_config
            .gemini
            .ok_or_else(|| {
                ResponderError::Request("Gemini configuration not found in secret.json".to_string())
            })?;

        let model = gemini_config
            .model_name
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        Ok(Self::new(gemini_config.api_key, model))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn build_parts(&self, prompt: &str, attachments: &[Attachment]) -> Result<Vec<Part>, ResponderError> {
        let mut parts = Vec::new();
        if !prompt.trim().is_empty() {
            parts.push(Part::Text {
                text: prompt.to_string(),
            });
        }

        for attachment in attachments {
            let data = BASE64_STANDARD.encode(&attachment.bytes);
            parts.push(Part::InlineData {
                inline_data: InlineDataPayload {
                    mime_type: attachment.mime_type.clone(),
                    data,
                },
            });
        }

        if parts.is_empty() {
            return Err(ResponderError::Request(
                "Gemini payload must include text or attachments".into(),
            ));
        }

        Ok(parts)
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String, ResponderError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| ResponderError::Transport {
                message: format!("Gemini API request failed: {err}"),
                is_retryable: err.is_connect() || err.is_timeout(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text, retry_after));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            ResponderError::InvalidResponse(format!("Failed to parse Gemini response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl Responder for GeminiResponder {
    async fn generate_text(
        &self,
        prompt: &str,
        attachments: &[Attachment],
    ) -> Result<String, ResponderError> {
        let contents = vec![Content {
            role: "user".to_string(),
            parts: self.build_parts(prompt, attachments)?,
        }];

        let request = GenerateContentRequest { contents };
        self.send_request(&request).await
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<Vec<u8>>, ResponderError> {
        self.imagen.generate(prompt).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineDataPayload,
    },
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct InlineDataPayload {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: Option<i32>,
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String, ResponderError> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            ResponderError::InvalidResponse(
                "Gemini API returned no text in the response candidates".into(),
            )
        })
}

pub(crate) fn map_http_error(
    status: StatusCode,
    body: String,
    retry_after: Option<Duration>,
) -> ResponderError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    ResponderError::Provider {
        status_code: status.as_u16(),
        message,
        is_retryable,
        retry_after,
    }
}

pub(crate) fn parse_retry_after(header: Option<&HeaderValue>) -> Option<Duration> {
    let value = header?.to_str().ok()?;
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    // Retry-After HTTP-date parsing is omitted for simplicity
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_after_parses_seconds() {
        let header = HeaderValue::from_static("12");
        assert_eq!(
            parse_retry_after(Some(&header)),
            Some(Duration::from_secs(12))
        );
    }

    #[test]
    fn retry_after_ignores_http_dates() {
        let header = HeaderValue::from_static("Wed, 21 Oct 2026 07:28:00 GMT");
        assert_eq!(parse_retry_after(Some(&header)), None);
    }

    #[test]
    fn http_error_maps_rate_limit_as_retryable() {
        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"code":429,"message":"quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#
                .to_string(),
            Some(Duration::from_secs(30)),
        );
        assert!(err.is_retryable());
        assert_eq!(err.retry_after(), Some(Duration::from_secs(30)));
        assert!(err.to_string().contains("RESOURCE_EXHAUSTED"));
    }

    #[test]
    fn http_error_keeps_unparsable_body() {
        let err = map_http_error(StatusCode::BAD_REQUEST, "not json".to_string(), None);
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("not json"));
    }

    #[test]
    fn empty_payload_is_rejected() {
        let responder = GeminiResponder::new("key", DEFAULT_GEMINI_MODEL);
        let err = responder.build_parts("   ", &[]).unwrap_err();
        assert!(matches!(err, ResponderError::Request(_)));
    }

    #[test]
    fn attachments_are_inlined_as_base64() {
        let responder = GeminiResponder::new("key", DEFAULT_GEMINI_MODEL);
        let parts = responder
            .build_parts("describe", &[Attachment::new(vec![1, 2, 3], "image/png")])
            .unwrap();
        assert_eq!(parts.len(), 2);
    }
}
