// src/api/tools.rs
//
// Generic tool dispatch: one route driven by the tool identifier, mirroring
// the storefront's /tools/:tool surface. password-gen is purely local;
// url-scanner delegates risk classification to the Content Generation
// Service; network-info queries the public IP lookup endpoint.

use actix_web::{post, web, HttpResponse, Responder};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::api::genai_client::{self, Content, GenerateRequest};
use crate::api::resolve_lang;
use crate::i18n::{messages, Language};
use crate::AppState;

const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";
const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

#[derive(Debug, Deserialize, ToSchema)]
pub struct ToolRequest {
    // password-gen
    pub length: Option<usize>,
    pub numbers: Option<bool>,
    pub symbols: Option<bool>,
    // url-scanner
    pub url: Option<String>,
    pub lang: Option<String>,
}

pub fn generate_password(length: usize, numbers: bool, symbols: bool) -> String {
    let mut charset: Vec<char> = LETTERS.chars().collect();
    if numbers {
        charset.extend(DIGITS.chars());
    }
    if symbols {
        charset.extend(SYMBOLS.chars());
    }
    let mut rng = rand::rng();
    (0..length)
        .map(|_| charset[rng.random_range(0..charset.len())])
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlVerdict {
    Safe,
    Warning,
    Danger,
}

/// Verdict derived from a keyword scan of the analysis text, in either
/// display language.
pub fn classify_analysis(text: &str) -> UrlVerdict {
    let lowered = text.to_lowercase();
    if text.contains("خطر") || lowered.contains("danger") {
        UrlVerdict::Danger
    } else if text.contains("مشبوه") || lowered.contains("suspicious") {
        UrlVerdict::Warning
    } else {
        UrlVerdict::Safe
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NetworkInfo {
    pub ip: Option<String>,
    pub city: Option<String>,
    pub country_name: Option<String>,
    pub org: Option<String>,
    pub asn: Option<String>,
    pub timezone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[utoipa::path(
    post,
    path = "/api/tools/{tool}",
    tag = "tools",
    params(("tool" = String, Path, description = "Tool identifier: password-gen, url-scanner or network-info")),
    request_body = ToolRequest,
    responses(
        (status = 200, description = "Tool output"),
        (status = 400, description = "Missing tool input"),
        (status = 404, description = "Unknown tool"),
        (status = 502, description = "Upstream failure")
    )
)]
#[post("/api/tools/{tool}")]
pub async fn run_tool(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<ToolRequest>,
) -> impl Responder {
    let payload = payload.into_inner();
    let lang = resolve_lang(&state.pool, payload.lang.as_deref()).await;

    match path.as_str() {
        "password-gen" => {
            let length = payload.length.unwrap_or(16).clamp(8, 32);
            let password = generate_password(
                length,
                payload.numbers.unwrap_or(true),
                payload.symbols.unwrap_or(true),
            );
            HttpResponse::Ok().json(json!({ "password": password, "length": length }))
        }
        "url-scanner" => scan_url(&state, lang, payload.url.as_deref()).await,
        "network-info" => network_info(&state, lang).await,
        _ => HttpResponse::NotFound().json(json!({ "error": messages(lang).unknown_tool })),
    }
}

async fn scan_url(state: &AppState, lang: Language, url: Option<&str>) -> HttpResponse {
    let msg = messages(lang);
    let Some(url) = url.filter(|u| !u.trim().is_empty()) else {
        return HttpResponse::BadRequest().json(json!({ "error": msg.missing_required }));
    };

    let request = GenerateRequest {
        contents: vec![Content::text(format!("{} {}", msg.url_scan_prompt, url))],
        system_instruction: Some(Content::text(msg.url_scan_system)),
        generation_config: None,
        tools: None,
    };

    match genai_client::generate_content(
        &state.genai_api_base,
        &state.genai_api_key,
        genai_client::ASSISTANT_MODEL,
        &request,
    )
    .await
    {
        Ok(resp) => {
            let Some(analysis) = genai_client::first_text(&resp) else {
                return HttpResponse::BadGateway().json(json!({ "error": msg.url_scan_failed }));
            };
            HttpResponse::Ok().json(json!({
                "verdict": classify_analysis(&analysis),
                "analysis": analysis,
            }))
        }
        Err(e) => {
            log::error!("url scan error: {e}");
            HttpResponse::BadGateway().json(json!({ "error": msg.url_scan_failed }))
        }
    }
}

async fn network_info(state: &AppState, lang: Language) -> HttpResponse {
    let client = reqwest::Client::new();
    let result = client
        .get(format!("{}/json/", state.ip_api_base))
        .send()
        .await;

    let resp = match result {
        Ok(r) if r.status().is_success() => r,
        Ok(r) => {
            log::error!("ip lookup failed status={}", r.status());
            return HttpResponse::BadGateway()
                .json(json!({ "error": messages(lang).network_failed }));
        }
        Err(e) => {
            log::error!("ip lookup request error: {e}");
            return HttpResponse::BadGateway()
                .json(json!({ "error": messages(lang).network_failed }));
        }
    };

    match resp.json::<NetworkInfo>().await {
        Ok(info) => HttpResponse::Ok().json(info),
        Err(e) => {
            log::error!("ip lookup parse error: {e}");
            HttpResponse::BadGateway().json(json!({ "error": messages(lang).network_failed }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_respects_length_and_charset_toggles() {
        let plain = generate_password(16, false, false);
        assert_eq!(plain.chars().count(), 16);
        assert!(plain.chars().all(|c| c.is_ascii_alphabetic()));

        let with_digits = generate_password(32, true, false);
        assert_eq!(with_digits.chars().count(), 32);
        assert!(with_digits.chars().all(|c| c.is_ascii_alphanumeric()));

        let full = generate_password(24, true, true);
        assert!(full
            .chars()
            .all(|c| LETTERS.contains(c) || DIGITS.contains(c) || SYMBOLS.contains(c)));
    }

    #[test]
    fn analysis_keywords_map_to_verdicts() {
        assert_eq!(classify_analysis("هذا الرابط خطر جداً"), UrlVerdict::Danger);
        assert_eq!(classify_analysis("يبدو الرابط مشبوه"), UrlVerdict::Warning);
        assert_eq!(classify_analysis("الرابط آمن"), UrlVerdict::Safe);
        assert_eq!(classify_analysis("This looks like DANGER"), UrlVerdict::Danger);
        assert_eq!(classify_analysis("Slightly suspicious domain"), UrlVerdict::Warning);
        assert_eq!(classify_analysis("Looks safe to me"), UrlVerdict::Safe);
    }
}
