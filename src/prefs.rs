// src/prefs.rs
//
// Preference store: the only state that survives a restart. Exactly two
// string keys are ever written, mirroring the two client-storage entries of
// the storefront: the display language and the JSON-serialized settings
// record. Reads fall back to hard-coded defaults on anything missing or
// unparseable; writes happen (awaited) on every change, no batching.

use sqlx::{Row, SqlitePool};

use crate::i18n::Language;
use crate::models::AppSettings;

const LANG_KEY: &str = "majal_lang";
const SETTINGS_KEY: &str = "majal_settings";

async fn read(pool: &SqlitePool, key: &str) -> Result<Option<String>, sqlx::Error> {
    let row = sqlx::query("SELECT value FROM preferences WHERE key = ?1")
        .bind(key)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| r.get("value")))
}

async fn write(pool: &SqlitePool, key: &str, value: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO preferences (key, value, updated_at)
           VALUES (?1, ?2, datetime('now'))
           ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"#,
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn load_language(pool: &SqlitePool) -> Language {
    match read(pool, LANG_KEY).await {
        Ok(Some(code)) => Language::from_code(&code).unwrap_or_default(),
        Ok(None) => Language::default(),
        Err(e) => {
            log::warn!("language read error, using default: {e}");
            Language::default()
        }
    }
}

pub async fn store_language(pool: &SqlitePool, lang: Language) -> Result<(), sqlx::Error> {
    write(pool, LANG_KEY, lang.code()).await
}

/// A stored record that fails to parse is replaced by defaults with no
/// user-visible error; a partially-shaped record merges via the per-field
/// serde defaults on `AppSettings`.
pub async fn load_settings(pool: &SqlitePool) -> AppSettings {
    match read(pool, SETTINGS_KEY).await {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
        Ok(None) => AppSettings::default(),
        Err(e) => {
            log::warn!("settings read error, using defaults: {e}");
            AppSettings::default()
        }
    }
}

pub async fn store_settings(pool: &SqlitePool, settings: &AppSettings) -> Result<(), sqlx::Error> {
    let raw = serde_json::to_string(settings).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
    write(pool, SETTINGS_KEY, &raw).await
}

/// Narrow single-key update: load, patch one key, persist. Returns the stored
/// record, or `None` when the key is unknown or the value does not fit it.
pub async fn update_settings_key(
    pool: &SqlitePool,
    key: &str,
    value: serde_json::Value,
) -> Result<Option<AppSettings>, sqlx::Error> {
    let current = load_settings(pool).await;
    let mut tree = match serde_json::to_value(&current) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => return Ok(None),
    };
    if !tree.contains_key(key) {
        return Ok(None);
    }
    tree.insert(key.to_string(), value);
    let updated: AppSettings = match serde_json::from_value(serde_json::Value::Object(tree)) {
        Ok(s) => s,
        Err(_) => return Ok(None),
    };
    store_settings(pool, &updated).await?;
    Ok(Some(updated))
}
