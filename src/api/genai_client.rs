// src/api/genai_client.rs
//
// Minimal client for the external Content Generation Service. The API key is
// supplied through the hosting environment; the base URL is carried in
// AppState so tests can point it at a mock server.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const GENAI_API_BASE: &str = "https://generativelanguage.googleapis.com";

pub const ASSISTANT_MODEL: &str = "gemini-3-flash-preview";
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const PRO_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";
pub const VIDEO_MODEL: &str = "veo-3.1-fast-generate-preview";

#[derive(Debug)]
pub enum GenAiError {
    Http(reqwest::Error),
    Api { status: u16, body: String },
    InvalidResponse(String),
}

impl fmt::Display for GenAiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenAiError::Http(e) => write!(f, "http error: {e}"),
            GenAiError::Api { status, body } => {
                write!(f, "genai api error status={status} body={body}")
            }
            GenAiError::InvalidResponse(e) => write!(f, "invalid response: {e}"),
        }
    }
}

impl From<reqwest::Error> for GenAiError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Default, Serialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part {
            text: Some(text.into()),
            ..Part::default()
        }
    }

    pub fn media(data: InlineData) -> Self {
        Part {
            inline_data: Some(data),
            ..Part::default()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Content {
            parts: vec![Part::text(text)],
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct GenerationConfig {
    #[serde(rename = "responseModalities", skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
    #[serde(rename = "aspectRatio", skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Tool {
    #[serde(rename = "googleSearch", skip_serializing_if = "Option::is_none")]
    pub google_search: Option<Value>,
}

impl Tool {
    pub fn google_search() -> Self {
        Tool {
            google_search: Some(json!({})),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    #[serde(rename = "groundingMetadata")]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
    #[serde(rename = "inlineData")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
pub struct GroundingMetadata {
    #[serde(rename = "groundingChunks", default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
pub struct GroundingChunk {
    pub web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
pub struct WebSource {
    pub uri: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Citation {
    pub uri: String,
    pub title: Option<String>,
}

pub async fn generate_content(
    base: &str,
    api_key: &str,
    model: &str,
    req: &GenerateRequest,
) -> Result<GenerateResponse, GenAiError> {
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/v1beta/models/{model}:generateContent?key={api_key}"))
        .json(req)
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(GenAiError::Api {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str::<GenerateResponse>(&body)
        .map_err(|e| GenAiError::InvalidResponse(format!("{e}; body={body}")))
}

/// Concatenated text of the first candidate.
pub fn first_text(resp: &GenerateResponse) -> Option<String> {
    let content = resp.candidates.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// First inline image of the first candidate.
pub fn first_image(resp: &GenerateResponse) -> Option<InlineData> {
    resp.candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .find_map(|p| p.inline_data.clone())
}

/// Web grounding sources of the first candidate, relayed as citations.
pub fn citations(resp: &GenerateResponse) -> Vec<Citation> {
    let Some(candidate) = resp.candidates.first() else {
        return Vec::new();
    };
    let Some(metadata) = candidate.grounding_metadata.as_ref() else {
        return Vec::new();
    };
    metadata
        .grounding_chunks
        .iter()
        .filter_map(|c| c.web.as_ref())
        .filter_map(|w| {
            w.uri.clone().map(|uri| Citation {
                uri,
                title: w.title.clone(),
            })
        })
        .collect()
}

/// Starts a long-running video generation and returns the operation name.
pub async fn start_video_generation(
    base: &str,
    api_key: &str,
    prompt: &str,
    image: Option<&InlineData>,
    aspect_ratio: &str,
    resolution: &str,
) -> Result<String, GenAiError> {
    let client = reqwest::Client::new();

    let mut instance = json!({ "prompt": prompt });
    if let Some(image) = image {
        instance["image"] = json!({
            "bytesBase64Encoded": image.data,
            "mimeType": image.mime_type,
        });
    }
    let body = json!({
        "instances": [instance],
        "parameters": {
            "sampleCount": 1,
            "aspectRatio": aspect_ratio,
            "resolution": resolution,
        }
    });

    let resp = client
        .post(format!(
            "{base}/v1beta/models/{VIDEO_MODEL}:predictLongRunning?key={api_key}"
        ))
        .json(&body)
        .send()
        .await?;

    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(GenAiError::Api {
            status: status.as_u16(),
            body: text,
        });
    }

    let parsed: Value = serde_json::from_str(&text)
        .map_err(|e| GenAiError::InvalidResponse(format!("{e}; body={text}")))?;
    parsed["name"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| GenAiError::InvalidResponse(format!("no operation name in {text}")))
}

#[derive(Debug, Clone)]
pub struct VideoOperation {
    pub done: bool,
    pub video_uri: Option<String>,
    pub error: Option<String>,
}

/// One status read of a long-running video operation.
pub async fn fetch_video_operation(
    base: &str,
    api_key: &str,
    operation: &str,
) -> Result<VideoOperation, GenAiError> {
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/v1beta/{operation}?key={api_key}"))
        .send()
        .await?;

    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(GenAiError::Api {
            status: status.as_u16(),
            body: text,
        });
    }

    let parsed: Value = serde_json::from_str(&text)
        .map_err(|e| GenAiError::InvalidResponse(format!("{e}; body={text}")))?;

    let video_uri = parsed["response"]["generateVideoResponse"]["generatedSamples"][0]["video"]
        ["uri"]
        .as_str()
        .map(|s| s.to_string());

    Ok(VideoOperation {
        done: parsed["done"].as_bool().unwrap_or(false),
        video_uri,
        error: parsed["error"]["message"].as_str().map(|s| s.to_string()),
    })
}
