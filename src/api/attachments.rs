// src/api/attachments.rs
//
// Upload surface for file-form fields. The stored bytes back a transient
// local preview only; order messages carry just the filename.

use actix_multipart::Multipart;
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use futures_util::StreamExt;
use serde_json::json;

use crate::api::resolve_lang;
use crate::attachments::{guess_content_type, sanitize_filename};
use crate::i18n::messages;
use crate::AppState;

#[post("/api/attachments")]
pub async fn upload_attachment(mut payload: Multipart, state: web::Data<AppState>) -> impl Responder {
    let mut file_bytes: Vec<u8> = Vec::new();
    let mut filename = String::new();

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(f) => f,
            Err(_) => continue,
        };

        let cd = field.content_disposition();
        if let Some(name) = cd.get_filename() {
            filename = sanitize_filename(name);
        }

        while let Some(chunk) = field.next().await {
            if let Ok(data) = chunk {
                file_bytes.extend_from_slice(&data);
            }
        }
    }

    if file_bytes.is_empty() {
        let lang = resolve_lang(&state.pool, None).await;
        return HttpResponse::BadRequest()
            .json(json!({ "error": messages(lang).attachment_missing }));
    }
    if filename.is_empty() {
        filename = "attachment".to_string();
    }

    let content_type = guess_content_type(&filename).to_string();
    let id = state
        .attachments
        .insert(filename.clone(), content_type, file_bytes)
        .await;

    HttpResponse::Ok().json(json!({ "attachment_id": id, "filename": filename }))
}

#[get("/api/attachments/{id}")]
pub async fn get_attachment(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.attachments.get(&path).await {
        Some(handle) => HttpResponse::Ok()
            .content_type(handle.content_type)
            .body(handle.bytes),
        None => HttpResponse::NotFound().finish(),
    }
}

/// Releasing a preview that is already gone is a no-op.
#[delete("/api/attachments/{id}")]
pub async fn delete_attachment(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    state.attachments.release(&path).await;
    HttpResponse::NoContent().finish()
}
