// src/api/settings.rs

use actix_web::{get, patch, put, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::i18n::{messages, Language};
use crate::models::AppSettings;
use crate::prefs;
use crate::AppState;

#[get("/api/settings")]
pub async fn get_settings(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(prefs::load_settings(&state.pool).await)
}

/// Full replace; persisted before the response goes out.
#[put("/api/settings")]
pub async fn put_settings(
    state: web::Data<AppState>,
    payload: web::Json<AppSettings>,
) -> impl Responder {
    let settings = payload.into_inner();
    match prefs::store_settings(&state.pool, &settings).await {
        Ok(()) => HttpResponse::Ok().json(settings),
        Err(e) => {
            log::error!("settings write error: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SettingsPatch {
    pub key: String,
    pub value: serde_json::Value,
}

/// Narrow single-key update, the only mutation path besides full replace.
#[patch("/api/settings")]
pub async fn patch_settings(
    state: web::Data<AppState>,
    payload: web::Json<SettingsPatch>,
) -> impl Responder {
    let patch = payload.into_inner();
    let lang = prefs::load_language(&state.pool).await;
    match prefs::update_settings_key(&state.pool, &patch.key, patch.value).await {
        Ok(Some(settings)) => HttpResponse::Ok().json(settings),
        Ok(None) => {
            HttpResponse::BadRequest().json(json!({ "error": messages(lang).invalid_settings }))
        }
        Err(e) => {
            log::error!("settings patch error: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/api/language")]
pub async fn get_language(state: web::Data<AppState>) -> impl Responder {
    let lang = prefs::load_language(&state.pool).await;
    HttpResponse::Ok().json(json!({ "lang": lang.code() }))
}

#[derive(Debug, Deserialize)]
pub struct LanguageBody {
    pub lang: String,
}

#[put("/api/language")]
pub async fn put_language(
    state: web::Data<AppState>,
    payload: web::Json<LanguageBody>,
) -> impl Responder {
    let Some(lang) = Language::from_code(&payload.lang) else {
        let current = prefs::load_language(&state.pool).await;
        return HttpResponse::BadRequest()
            .json(json!({ "error": messages(current).invalid_language }));
    };
    match prefs::store_language(&state.pool, lang).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "lang": lang.code() })),
        Err(e) => {
            log::error!("language write error: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
