pub mod api;
pub mod attachments;
pub mod catalog;
pub mod docs;
pub mod i18n;
pub mod live;
pub mod models;
pub mod notify;
pub mod order;
pub mod prefs;

use sqlx::SqlitePool;

use crate::api::ai::VideoJobs;
use crate::attachments::AttachmentStore;
use crate::notify::Notifier;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub whatsapp_number: String,
    pub genai_api_key: String,
    pub genai_api_base: String,
    pub genai_live_url: String,
    pub ip_api_base: String,
    pub notifier: Notifier,
    pub attachments: AttachmentStore,
    pub video_jobs: VideoJobs,
}
