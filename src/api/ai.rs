// src/api/ai.rs
//
// Thin wrappers over the Content Generation Service: image generation and
// editing, the pro/high-resolution image studio, the grounded assistant, and
// the long-running video flow. Failures surface as a localized generic error
// and are never retried automatically.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::api::genai_client::{
    self, Content, GenerateRequest, GenerationConfig, InlineData, Part, Tool,
};
use crate::api::resolve_lang;
use crate::i18n::messages;
use crate::AppState;

/// Fixed poll cadence for pending video operations; the wait is open-ended.
pub const VIDEO_POLL_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Serialize)]
pub struct VideoJob {
    pub id: String,
    pub status: String, // processing | ready | failed
    pub video_uri: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub type VideoJobs = Arc<Mutex<HashMap<String, VideoJob>>>;

#[derive(Debug, Deserialize)]
pub struct MediaBody {
    pub mime_type: String,
    pub data: String,
}

impl MediaBody {
    fn into_inline(self) -> InlineData {
        InlineData {
            mime_type: self.mime_type,
            data: self.data,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    pub prompt: String,
    pub image: Option<MediaBody>,
    pub lang: Option<String>,
}

#[post("/api/ai/image")]
pub async fn generate_image(
    state: web::Data<AppState>,
    payload: web::Json<ImageRequest>,
) -> impl Responder {
    let payload = payload.into_inner();
    let lang = resolve_lang(&state.pool, payload.lang.as_deref()).await;

    let mut parts = vec![Part::text(payload.prompt)];
    if let Some(media) = payload.image {
        parts.push(Part::media(media.into_inline()));
    }
    let request = GenerateRequest {
        contents: vec![Content { parts }],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_modalities: Some(vec!["IMAGE".to_string(), "TEXT".to_string()]),
            ..GenerationConfig::default()
        }),
        tools: None,
    };

    match genai_client::generate_content(
        &state.genai_api_base,
        &state.genai_api_key,
        genai_client::IMAGE_MODEL,
        &request,
    )
    .await
    {
        Ok(resp) => HttpResponse::Ok().json(json!({
            "image": genai_client::first_image(&resp),
            "text": genai_client::first_text(&resp),
        })),
        Err(e) => {
            log::error!("image generation error: {e}");
            HttpResponse::BadGateway().json(json!({ "error": messages(lang).ai_failed }))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProImageRequest {
    pub prompt: String,
    pub resolution: Option<String>,
    pub aspect_ratio: Option<String>,
    pub lang: Option<String>,
}

#[post("/api/ai/image/pro")]
pub async fn generate_pro_image(
    state: web::Data<AppState>,
    payload: web::Json<ProImageRequest>,
) -> impl Responder {
    let payload = payload.into_inner();
    let lang = resolve_lang(&state.pool, payload.lang.as_deref()).await;

    let request = GenerateRequest {
        contents: vec![Content::text(payload.prompt)],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_modalities: Some(vec!["IMAGE".to_string()]),
            aspect_ratio: Some(payload.aspect_ratio.unwrap_or_else(|| "1:1".to_string())),
            resolution: Some(payload.resolution.unwrap_or_else(|| "2K".to_string())),
        }),
        tools: None,
    };

    match genai_client::generate_content(
        &state.genai_api_base,
        &state.genai_api_key,
        genai_client::PRO_IMAGE_MODEL,
        &request,
    )
    .await
    {
        Ok(resp) => match genai_client::first_image(&resp) {
            Some(image) => HttpResponse::Ok().json(json!({ "image": image })),
            None => HttpResponse::BadGateway().json(json!({ "error": messages(lang).ai_failed })),
        },
        Err(e) => {
            log::error!("pro image generation error: {e}");
            HttpResponse::BadGateway().json(json!({ "error": messages(lang).ai_failed }))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    pub prompt: String,
    #[serde(default = "default_search")]
    pub use_search: bool,
    pub lang: Option<String>,
}

fn default_search() -> bool {
    true
}

#[post("/api/ai/assistant")]
pub async fn ask_assistant(
    state: web::Data<AppState>,
    payload: web::Json<AssistantRequest>,
) -> impl Responder {
    let payload = payload.into_inner();
    let lang = resolve_lang(&state.pool, payload.lang.as_deref()).await;
    let msg = messages(lang);

    let request = GenerateRequest {
        contents: vec![Content::text(payload.prompt)],
        system_instruction: Some(Content::text(msg.assistant_system)),
        generation_config: None,
        tools: payload.use_search.then(|| vec![Tool::google_search()]),
    };

    match genai_client::generate_content(
        &state.genai_api_base,
        &state.genai_api_key,
        genai_client::ASSISTANT_MODEL,
        &request,
    )
    .await
    {
        Ok(resp) => match genai_client::first_text(&resp) {
            Some(text) => HttpResponse::Ok().json(json!({
                "text": text,
                "citations": genai_client::citations(&resp),
            })),
            None => HttpResponse::BadGateway().json(json!({ "error": msg.ai_failed })),
        },
        Err(e) => {
            log::error!("assistant error: {e}");
            HttpResponse::BadGateway().json(json!({ "error": msg.ai_failed }))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VideoRequest {
    #[serde(default)]
    pub prompt: String,
    pub image: Option<MediaBody>,
    pub resolution: Option<String>,
    pub aspect_ratio: Option<String>,
    pub lang: Option<String>,
}

/// Starts a video generation and registers a job that a background task
/// drives to completion by polling the vendor operation on a fixed interval,
/// with no maximum-attempts bound. Poll errors are logged and the wait
/// continues; only a completed operation settles the job.
#[post("/api/ai/video")]
pub async fn create_video(
    state: web::Data<AppState>,
    payload: web::Json<VideoRequest>,
) -> impl Responder {
    let payload = payload.into_inner();
    let lang = resolve_lang(&state.pool, payload.lang.as_deref()).await;

    let image = payload.image.map(MediaBody::into_inline);
    if payload.prompt.trim().is_empty() && image.is_none() {
        return HttpResponse::BadRequest().json(json!({ "error": messages(lang).missing_required }));
    }

    let aspect_ratio = payload.aspect_ratio.unwrap_or_else(|| "16:9".to_string());
    let resolution = payload.resolution.unwrap_or_else(|| "720p".to_string());

    let operation = match genai_client::start_video_generation(
        &state.genai_api_base,
        &state.genai_api_key,
        &payload.prompt,
        image.as_ref(),
        &aspect_ratio,
        &resolution,
    )
    .await
    {
        Ok(name) => name,
        Err(e) => {
            log::error!("video start error: {e}");
            return HttpResponse::BadGateway().json(json!({ "error": messages(lang).video_failed }));
        }
    };

    let job = VideoJob {
        id: Uuid::new_v4().to_string(),
        status: "processing".to_string(),
        video_uri: None,
        created_at: Utc::now(),
    };
    let job_id = job.id.clone();
    state.video_jobs.lock().await.insert(job_id.clone(), job);

    let jobs = state.video_jobs.clone();
    let base = state.genai_api_base.clone();
    let api_key = state.genai_api_key.clone();
    let poll_id = job_id.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(VIDEO_POLL_INTERVAL).await;
            match genai_client::fetch_video_operation(&base, &api_key, &operation).await {
                Ok(op) if op.done => {
                    let mut map = jobs.lock().await;
                    if let Some(job) = map.get_mut(&poll_id) {
                        match op.video_uri {
                            Some(uri) if op.error.is_none() => {
                                job.status = "ready".to_string();
                                job.video_uri = Some(uri);
                            }
                            _ => job.status = "failed".to_string(),
                        }
                    }
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("video poll error: {e}");
                }
            }
        }
    });

    HttpResponse::Ok().json(json!({ "job_id": job_id, "status": "processing" }))
}

#[get("/api/ai/video/{id}")]
pub async fn video_status(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let lang = resolve_lang(&state.pool, None).await;
    match state.video_jobs.lock().await.get(path.as_str()) {
        Some(job) => HttpResponse::Ok().json(job.clone()),
        None => HttpResponse::NotFound().json(json!({ "error": messages(lang).video_failed })),
    }
}
