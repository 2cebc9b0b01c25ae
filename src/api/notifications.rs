// src/api/notifications.rs

use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::models::ToastKind;
use crate::AppState;

#[get("/api/notifications")]
pub async fn list_notifications(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.notifier.list().await)
}

#[derive(Debug, Deserialize)]
pub struct ToastBody {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub icon: String,
}

#[post("/api/notifications")]
pub async fn push_notification(
    state: web::Data<AppState>,
    payload: web::Json<ToastBody>,
) -> impl Responder {
    let payload = payload.into_inner();
    let id = state
        .notifier
        .add(payload.kind, payload.title, payload.message, payload.icon)
        .await;
    HttpResponse::Ok().json(json!({ "id": id }))
}

/// Dismissal is idempotent: an id that already expired answers the same way.
#[delete("/api/notifications/{id}")]
pub async fn dismiss_notification(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    state.notifier.remove(&path).await;
    HttpResponse::NoContent().finish()
}
