// src/api/market.rs
//
// The two secondary storefronts: virtual phone numbers and the game-accounts
// market. Neither has a form schema; selection goes straight to order
// encoding and the handoff link.

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::api::resolve_lang;
use crate::catalog;
use crate::i18n::messages;
use crate::models::SellRequest;
use crate::order;
use crate::prefs;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct NumbersQuery {
    #[serde(default)]
    pub q: String,
    pub app: Option<String>,
    pub lang: Option<String>,
}

#[get("/api/numbers")]
pub async fn list_numbers(
    state: web::Data<AppState>,
    query: web::Query<NumbersQuery>,
) -> impl Responder {
    let lang = resolve_lang(&state.pool, query.lang.as_deref()).await;
    let numbers: Vec<_> = catalog::filter_numbers(lang, &query.q, query.app.as_deref().unwrap_or(""))
        .into_iter()
        .map(|n| n.view(lang))
        .collect();
    HttpResponse::Ok().json(numbers)
}

#[derive(Debug, Deserialize)]
pub struct NumberOrderRequest {
    pub app: Option<String>,
    pub lang: Option<String>,
}

#[post("/api/numbers/{id}/order")]
pub async fn order_number(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<NumberOrderRequest>,
) -> impl Responder {
    let lang = resolve_lang(&state.pool, payload.lang.as_deref()).await;
    let Some(number) = catalog::number_by_id(&path) else {
        return HttpResponse::NotFound().json(json!({ "error": messages(lang).number_not_found }));
    };

    // A wildcard or absent app selection falls back to WhatsApp, the most
    // requested activation target.
    let requested = match payload.app.as_deref() {
        Some(app) if !app.trim().is_empty() && !crate::i18n::is_wildcard(app) => app.trim(),
        _ => match lang {
            crate::i18n::Language::Ar => "واتساب",
            crate::i18n::Language::En => "WhatsApp",
        },
    };

    let message = order::encode_number_order(number, requested, lang);
    let whatsapp_url = order::handoff_url(&state.whatsapp_number, &message);
    HttpResponse::Ok().json(json!({ "message": message, "whatsapp_url": whatsapp_url }))
}

#[derive(Debug, Deserialize)]
pub struct MarketQuery {
    pub game: Option<String>,
    pub lang: Option<String>,
}

/// Listing order and image visibility follow the stored market preferences.
#[get("/api/market")]
pub async fn list_accounts(
    state: web::Data<AppState>,
    query: web::Query<MarketQuery>,
) -> impl Responder {
    let lang = resolve_lang(&state.pool, query.lang.as_deref()).await;
    let settings = prefs::load_settings(&state.pool).await;
    let accounts: Vec<_> =
        catalog::filter_accounts(query.game.as_deref().unwrap_or(""), settings.market_sorting)
            .into_iter()
            .map(|a| a.view(lang, settings.show_market_images))
            .collect();
    HttpResponse::Ok().json(accounts)
}

#[derive(Debug, Deserialize)]
pub struct LangBody {
    pub lang: Option<String>,
}

#[post("/api/market/{id}/buy")]
pub async fn buy_account(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<LangBody>,
) -> impl Responder {
    let lang = resolve_lang(&state.pool, payload.lang.as_deref()).await;
    let Some(account) = catalog::account_by_id(&path) else {
        return HttpResponse::NotFound().json(json!({ "error": messages(lang).account_not_found }));
    };

    let message = order::encode_account_purchase(account, lang);
    let whatsapp_url = order::handoff_url(&state.whatsapp_number, &message);
    HttpResponse::Ok().json(json!({ "message": message, "whatsapp_url": whatsapp_url }))
}

#[derive(Debug, Deserialize)]
pub struct SellBody {
    #[serde(flatten)]
    pub listing: SellRequest,
    pub lang: Option<String>,
}

#[post("/api/market/sell")]
pub async fn sell_account(
    state: web::Data<AppState>,
    payload: web::Json<SellBody>,
) -> impl Responder {
    let payload = payload.into_inner();
    let lang = resolve_lang(&state.pool, payload.lang.as_deref()).await;

    if payload.listing.game.trim().is_empty() || payload.listing.price == 0 {
        return HttpResponse::BadRequest()
            .json(json!({ "error": messages(lang).missing_required }));
    }

    let message = order::encode_account_listing(&payload.listing, lang);
    let whatsapp_url = order::handoff_url(&state.whatsapp_number, &message);
    HttpResponse::Ok().json(json!({ "message": message, "whatsapp_url": whatsapp_url }))
}
