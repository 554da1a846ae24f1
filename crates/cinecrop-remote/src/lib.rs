//! Remote film-style client.
//!
//! Implements the [`StyleApplier`] capability by delegating to a hosted
//! generative image API instead of the local filter engine: the cropped
//! image is shipped inline with a prose description of the requested style,
//! and the edited image comes back in the response payload.
//!
//! This crate is a network wrapper only. It performs no retries; the caller
//! decides whether and when to try again.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

use cinecrop_core::decode::detect_mime;
use cinecrop_core::{FilmStyle, StyleApplier, StyleError};

/// Default API base used when none is configured.
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default image-editing model.
const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// A [`StyleApplier`] that calls a hosted generative image API.
#[derive(Debug, Clone)]
pub struct RemoteStyler {
    http: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl RemoteStyler {
    /// Create a client against the default endpoint and model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the API base URL (primarily for tests and proxies).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

impl StyleApplier for RemoteStyler {
    fn apply_style(&self, image: &[u8], style: FilmStyle) -> Result<Vec<u8>, StyleError> {
        let mime = detect_mime(image)
            .ok_or_else(|| StyleError::Upstream("unrecognized input image format".to_string()))?;

        let body = GenerateRequest::styled_image(image, mime, style);

        let response = self
            .http
            .post(self.request_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .map_err(|e| StyleError::Upstream(e.to_string()))?
            .error_for_status()
            .map_err(|e| StyleError::Upstream(e.to_string()))?;

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| StyleError::Upstream(format!("malformed response: {e}")))?;

        response_to_image(parsed)
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Content,
    generation_config: GenerationConfig,
}

impl GenerateRequest {
    fn styled_image(image: &[u8], mime_type: &str, style: FilmStyle) -> Self {
        let prompt = format!(
            "Apply the following artistic style to this image: {}. Do not add \
             any text, watermarks, or logos to the image. Only return the \
             edited image.",
            style.description()
        );
        Self {
            contents: Content {
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: mime_type.to_string(),
                            data: BASE64.encode(image),
                        }),
                        text: None,
                    },
                    Part {
                        inline_data: None,
                        text: Some(prompt),
                    },
                ],
            },
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Map a parsed response to image bytes, or the matching failure.
///
/// An empty candidate list with a block reason is a policy decline; without
/// one it means no image came back. A candidate that finished for a reason
/// other than `STOP` is an upstream failure.
fn response_to_image(response: GenerateResponse) -> Result<Vec<u8>, StyleError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        if let Some(reason) = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
        {
            return Err(StyleError::BlockedContent(reason));
        }
        return Err(StyleError::NoImageReturned);
    };

    if let Some(content) = candidate.content {
        for part in content.parts {
            if let Some(inline) = part.inline_data {
                return BASE64
                    .decode(inline.data.as_bytes())
                    .map_err(|e| StyleError::Upstream(format!("invalid image payload: {e}")));
            }
        }
    }

    if let Some(reason) = candidate.finish_reason.filter(|reason| reason != "STOP") {
        return Err(StyleError::Upstream(format!(
            "image generation failed: {reason}"
        )));
    }

    Err(StyleError::NoImageReturned)
}
