use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use majal_storefront::attachments::AttachmentStore;
use majal_storefront::notify::Notifier;
use majal_storefront::AppState;

/// In-memory preference store. A single connection keeps every query on the
/// same memory database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory store");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");
    pool
}

pub async fn build_state(genai_base: &str, ip_base: &str) -> AppState {
    AppState {
        pool: test_pool().await,
        whatsapp_number: "966500000000".to_string(),
        genai_api_key: "test-genai".to_string(),
        genai_api_base: genai_base.to_string(),
        genai_live_url: "wss://localhost/live".to_string(),
        ip_api_base: ip_base.to_string(),
        notifier: Notifier::new(),
        attachments: AttachmentStore::new(),
        video_jobs: Default::default(),
    }
}
