use majal_storefront::i18n::Language;
use majal_storefront::models::{AppSettings, DisplayMode, MarketSorting, SizeChoice, ThemeColor};
use majal_storefront::prefs;

mod support;

#[tokio::test]
async fn settings_round_trip_is_deep_equal() {
    let pool = support::test_pool().await;

    let stored = AppSettings {
        theme_color: ThemeColor::DarkBlue,
        display_mode: DisplayMode::Light,
        card_size: SizeChoice::Large,
        text_size: SizeChoice::Small,
        market_sorting: MarketSorting::Level,
        data_saving: true,
        show_market_images: false,
        notifications_enabled: false,
        ..AppSettings::default()
    };
    prefs::store_settings(&pool, &stored).await.expect("store settings");

    let loaded = prefs::load_settings(&pool).await;
    assert_eq!(loaded, stored);
}

#[tokio::test]
async fn missing_and_malformed_records_fall_back_to_defaults_silently() {
    let pool = support::test_pool().await;

    // Nothing stored yet.
    assert_eq!(prefs::load_settings(&pool).await, AppSettings::default());
    assert_eq!(prefs::load_language(&pool).await, Language::Ar);

    // A corrupt settings blob is replaced by defaults, not an error.
    sqlx::query("INSERT INTO preferences (key, value) VALUES ('majal_settings', 'not json')")
        .execute(&pool)
        .await
        .expect("seed corrupt value");
    assert_eq!(prefs::load_settings(&pool).await, AppSettings::default());

    // An unknown language code falls back the same way.
    sqlx::query("INSERT INTO preferences (key, value) VALUES ('majal_lang', 'xx')")
        .execute(&pool)
        .await
        .expect("seed corrupt language");
    assert_eq!(prefs::load_language(&pool).await, Language::Ar);
}

#[tokio::test]
async fn partially_shaped_record_merges_missing_keys_with_defaults() {
    let pool = support::test_pool().await;

    // A blob written by an older release that knew fewer keys.
    sqlx::query(
        "INSERT INTO preferences (key, value) VALUES ('majal_settings', '{\"display_mode\":\"light\",\"market_sorting\":\"status\"}')",
    )
    .execute(&pool)
    .await
    .expect("seed old record");

    let loaded = prefs::load_settings(&pool).await;
    assert_eq!(loaded.display_mode, DisplayMode::Light);
    assert_eq!(loaded.market_sorting, MarketSorting::Status);
    assert_eq!(loaded.theme_color, ThemeColor::Professional);
    assert!(loaded.notifications_enabled);
}

#[tokio::test]
async fn language_choice_survives_a_restart() {
    let pool = support::test_pool().await;

    prefs::store_language(&pool, Language::En).await.expect("store language");
    // Same pool stands in for the next session's startup read.
    assert_eq!(prefs::load_language(&pool).await, Language::En);

    prefs::store_language(&pool, Language::Ar).await.expect("store language");
    assert_eq!(prefs::load_language(&pool).await, Language::Ar);
}

#[tokio::test]
async fn single_key_update_touches_only_that_key() {
    let pool = support::test_pool().await;

    let updated = prefs::update_settings_key(&pool, "display_mode", serde_json::json!("light"))
        .await
        .expect("update")
        .expect("known key");
    assert_eq!(updated.display_mode, DisplayMode::Light);
    assert_eq!(updated.theme_color, ThemeColor::Professional);

    // Persisted, not just returned.
    assert_eq!(prefs::load_settings(&pool).await.display_mode, DisplayMode::Light);

    // Unknown keys and ill-typed values are rejected without a write.
    assert!(prefs::update_settings_key(&pool, "no_such_key", serde_json::json!(true))
        .await
        .expect("update")
        .is_none());
    assert!(prefs::update_settings_key(&pool, "display_mode", serde_json::json!(42))
        .await
        .expect("update")
        .is_none());
    assert_eq!(prefs::load_settings(&pool).await.display_mode, DisplayMode::Light);
}
