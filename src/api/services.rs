// src/api/services.rs

use std::collections::HashMap;

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::api::resolve_lang;
use crate::catalog::{self, CategoryFilter};
use crate::i18n::messages;
use crate::order;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
    pub lang: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/services",
    tag = "catalog",
    params(
        ("q" = Option<String>, Query, description = "Substring matched against title and description"),
        ("category" = Option<String>, Query, description = "Category label or slug; the wildcard literal shows all"),
        ("lang" = Option<String>, Query, description = "Display language override (ar/en)")
    ),
    responses((status = 200, description = "Matching services in catalog order", body = [ServiceSummary]))
)]
#[get("/api/services")]
pub async fn list_services(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let lang = resolve_lang(&state.pool, query.lang.as_deref()).await;
    let filter = CategoryFilter::parse(query.category.as_deref().unwrap_or(""));
    let services: Vec<_> = catalog::filter_services(lang, filter, &query.q)
        .into_iter()
        .map(|s| s.summary(lang))
        .collect();
    HttpResponse::Ok().json(services)
}

#[get("/api/categories")]
pub async fn list_categories(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let lang = resolve_lang(&state.pool, query.lang.as_deref()).await;
    HttpResponse::Ok().json(catalog::categories(lang))
}

#[get("/api/suggestions")]
pub async fn suggest_services(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let lang = resolve_lang(&state.pool, query.lang.as_deref()).await;
    let hits: Vec<_> = catalog::suggest_services(lang, &query.q)
        .into_iter()
        .map(|s| s.summary(lang))
        .collect();
    HttpResponse::Ok().json(hits)
}

#[get("/api/services/{id}")]
pub async fn get_service(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let lang = resolve_lang(&state.pool, query.lang.as_deref()).await;
    match catalog::service_by_id(&path) {
        Some(service) => HttpResponse::Ok().json(service.view(lang)),
        None => HttpResponse::NotFound().json(json!({ "error": messages(lang).service_not_found })),
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderRequest {
    /// Keyed by field id. File fields carry the original filename only.
    #[serde(default)]
    pub answers: HashMap<String, String>,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub order_id: String,
    pub message: String,
    pub whatsapp_url: String,
}

/// Submits an order form. Required-field validation happens here, before the
/// encoder: a rejected submission never mints an order id. On success the
/// caller receives the deep link to open; delivery is fire-and-forget.
#[utoipa::path(
    post,
    path = "/api/services/{id}/order",
    tag = "orders",
    params(("id" = String, Path, description = "Service identifier")),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order encoded; open the returned link", body = OrderResponse),
        (status = 400, description = "A required field is empty"),
        (status = 404, description = "Unknown service")
    )
)]
#[post("/api/services/{id}/order")]
pub async fn submit_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<OrderRequest>,
) -> impl Responder {
    let payload = payload.into_inner();
    let lang = resolve_lang(&state.pool, payload.lang.as_deref()).await;

    let Some(service) = catalog::service_by_id(&path) else {
        return HttpResponse::NotFound().json(json!({ "error": messages(lang).service_not_found }));
    };

    let missing = order::missing_required(service, &payload.answers);
    if !missing.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": messages(lang).missing_required,
            "missing": missing.iter().map(|f| f.id).collect::<Vec<_>>(),
        }));
    }

    let order_id = order::mint_order_id();
    let message = order::encode_order(service, &payload.answers, lang, &order_id);
    let whatsapp_url = order::handoff_url(&state.whatsapp_number, &message);

    log::info!("order encoded service={} order_id={}", service.id, order_id);
    HttpResponse::Ok().json(OrderResponse {
        order_id,
        message,
        whatsapp_url,
    })
}
