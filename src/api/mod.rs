// src/api/mod.rs

pub mod ai;
pub mod attachments;
pub mod genai_client;
pub mod market;
pub mod notifications;
pub mod services;
pub mod settings;
pub mod tools;

use sqlx::SqlitePool;

use crate::i18n::Language;
use crate::prefs;

/// Explicit `lang` query/body value wins; otherwise the language stored in
/// the preference store is the active display language.
pub async fn resolve_lang(pool: &SqlitePool, requested: Option<&str>) -> Language {
    match requested.and_then(Language::from_code) {
        Some(lang) => lang,
        None => prefs::load_language(pool).await,
    }
}
