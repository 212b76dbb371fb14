//! Imagen REST client for image generation.
//!
//! Calls the Imagen `predict` endpoint with a single-sample request and
//! returns the decoded PNG bytes, or `None` when the provider completes
//! without producing an image.

use crate::error::ResponderError;
use crate::gemini::{map_http_error, parse_retry_after};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_IMAGEN_MODEL: &str = "imagen-4.0-generate-001";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Clone)]
pub(crate) struct ImagenClient {
    client: Client,
    api_key: String,
    model: String,
}

impl ImagenClient {
    pub(crate) fn new(client: Client, api_key: String) -> Self {
        Self {
            client,
            api_key,
            model: DEFAULT_IMAGEN_MODEL.to_string(),
        }
    }

    pub(crate) async fn generate(&self, prompt: &str) -> Result<Option<Vec<u8>>, ResponderError> {
        if prompt.trim().is_empty() {
            return Err(ResponderError::Request(
                "Imagen prompt must not be empty".into(),
            ));
        }

        let url = format!(
            "{}/{model}:predict?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let request = PredictRequest {
            instances: vec![Instance {
                prompt: prompt.to_string(),
            }],
            parameters: Parameters {
                sample_count: 1,
                output_mime_type: "image/png".to_string(),
            },
        };

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|err| ResponderError::Transport {
                message: format!("Imagen API request failed: {err}"),
                is_retryable: err.is_connect() || err.is_timeout(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Imagen error body".to_string());
            return Err(map_http_error(status, body_text, retry_after));
        }

        let parsed: PredictResponse = response.json().await.map_err(|err| {
            ResponderError::InvalidResponse(format!("Failed to parse Imagen response: {err}"))
        })?;

        let Some(prediction) = parsed
            .predictions
            .unwrap_or_default()
            .into_iter()
            .next()
        else {
            return Ok(None);
        };

        let bytes = BASE64_STANDARD
            .decode(prediction.bytes_base64_encoded)
            .map_err(|err| {
                ResponderError::InvalidResponse(format!("Imagen returned invalid base64: {err}"))
            })?;

        Ok(Some(bytes))
    }
}

#[derive(Serialize)]
struct PredictRequest {
    instances: Vec<Instance>,
    parameters: Parameters,
}

#[derive(Serialize)]
struct Instance {
    prompt: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Parameters {
    sample_count: u32,
    output_mime_type: String,
}

#[derive(Deserialize)]
struct PredictResponse {
    predictions: Option<Vec<Prediction>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: String,
}
