// src/main.rs
use std::env;
use std::time::Duration;

use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use dotenvy::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use majal_storefront::attachments::AttachmentStore;
use majal_storefront::models::ToastKind;
use majal_storefront::notify::Notifier;
use majal_storefront::{api, docs, i18n, live, prefs, AppState};

async fn index() -> impl Responder {
    HttpResponse::Ok().body("Storefront ready!")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let db_path = env::var("MAJAL_DB").unwrap_or_else(|_| "majal.db".to_string());
    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .expect("Failed to open preference store");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let whatsapp_number = env::var("WHATSAPP_NUMBER").expect("WHATSAPP_NUMBER required");
    let genai_api_key = env::var("GENAI_API_KEY").expect("GENAI_API_KEY required");
    let genai_api_base = env::var("GENAI_API_BASE")
        .unwrap_or_else(|_| api::genai_client::GENAI_API_BASE.to_string());
    let genai_live_url =
        env::var("GENAI_LIVE_URL").unwrap_or_else(|_| live::default_live_url(&genai_api_key));
    let ip_api_base = env::var("IP_API_BASE").unwrap_or_else(|_| "https://ipapi.co".to_string());

    let notifier = Notifier::new();

    // One-shot security alert 3 seconds after startup, honoring the language
    // and notification preference stored by the previous session.
    let startup_lang = prefs::load_language(&pool).await;
    let startup_settings = prefs::load_settings(&pool).await;
    if startup_settings.notifications_enabled {
        let alerts = notifier.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(3)).await;
            let msg = i18n::messages(startup_lang);
            alerts
                .add(
                    ToastKind::Security,
                    msg.security_alert_title.to_string(),
                    msg.security_alert_body.to_string(),
                    "🛡️".to_string(),
                )
                .await;
        });
    }

    let state = web::Data::new(AppState {
        pool,
        whatsapp_number,
        genai_api_key,
        genai_api_base,
        genai_live_url,
        ip_api_base,
        notifier,
        attachments: AttachmentStore::new(),
        video_jobs: Default::default(),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(index))
            .service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
            )
            // Catalog and orders
            .service(api::services::list_services)
            .service(api::services::list_categories)
            .service(api::services::suggest_services)
            .service(api::services::get_service)
            .service(api::services::submit_order)
            // Secondary storefronts
            .service(api::market::list_numbers)
            .service(api::market::order_number)
            .service(api::market::list_accounts)
            .service(api::market::buy_account)
            .service(api::market::sell_account)
            // Preferences
            .service(api::settings::get_settings)
            .service(api::settings::put_settings)
            .service(api::settings::patch_settings)
            .service(api::settings::get_language)
            .service(api::settings::put_language)
            // Notifications
            .service(api::notifications::list_notifications)
            .service(api::notifications::push_notification)
            .service(api::notifications::dismiss_notification)
            // Attachments
            .service(api::attachments::upload_attachment)
            .service(api::attachments::get_attachment)
            .service(api::attachments::delete_attachment)
            // AI features
            .service(api::ai::generate_image)
            .service(api::ai::generate_pro_image)
            .service(api::ai::ask_assistant)
            .service(api::ai::create_video)
            .service(api::ai::video_status)
            .service(api::tools::run_tool)
            // Live voice session
            .route("/ws/live", web::get().to(live::live_ws))
    })
    .bind(("0.0.0.0", 8065))?
    .run()
    .await
}
