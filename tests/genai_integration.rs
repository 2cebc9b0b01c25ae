use actix_web::test::TestRequest;
use actix_web::{test, web, App};
use httpmock::Method::{GET, POST};
use httpmock::MockServer;
use serde_json::{json, Value};

use majal_storefront::api::ai::ask_assistant;
use majal_storefront::api::genai_client;
use majal_storefront::api::tools::run_tool;

mod support;

#[actix_web::test]
async fn assistant_relays_text_and_citations() {
    let server = MockServer::start_async().await;

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-3-flash-preview:generateContent")
            .query_param("key", "test-genai");
        then.status(200).json_body(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "توثيق الحساب يبدأ من الإعدادات." }] },
                "groundingMetadata": {
                    "groundingChunks": [
                        { "web": { "uri": "https://help.example.com/verify", "title": "Verification guide" } }
                    ]
                }
            }]
        }));
    });

    let state = web::Data::new(support::build_state(&server.url(""), &server.url("")).await);
    let app = test::init_service(App::new().app_data(state.clone()).service(ask_assistant)).await;

    let req = TestRequest::post()
        .uri("/api/ai/assistant")
        .set_json(json!({ "prompt": "كيف أوثق حسابي؟" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = serde_json::from_slice(&test::read_body(resp).await).expect("json body");
    assert_eq!(body["text"], "توثيق الحساب يبدأ من الإعدادات.");
    assert_eq!(body["citations"][0]["uri"], "https://help.example.com/verify");
    mock.assert();
}

#[actix_web::test]
async fn vendor_failure_surfaces_a_localized_error_without_retry() {
    let server = MockServer::start_async().await;

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-3-flash-preview:generateContent");
        then.status(500).body("upstream exploded");
    });

    let state = web::Data::new(support::build_state(&server.url(""), &server.url("")).await);
    let app = test::init_service(App::new().app_data(state.clone()).service(ask_assistant)).await;

    let req = TestRequest::post()
        .uri("/api/ai/assistant")
        .set_json(json!({ "prompt": "سؤال" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);

    let body: Value = serde_json::from_slice(&test::read_body(resp).await).expect("json body");
    // Stored language defaults to Arabic.
    assert_eq!(body["error"], "حدث خطأ أثناء معالجة الطلب الذكي.");
    // Exactly one upstream call: no automatic retry.
    mock.assert();
}

#[actix_web::test]
async fn url_scanner_classifies_the_vendor_analysis() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-3-flash-preview:generateContent");
        then.status(200).json_body(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "خطر: الرابط يقلد موقعاً مصرفياً." }] }
            }]
        }));
    });

    let state = web::Data::new(support::build_state(&server.url(""), &server.url("")).await);
    let app = test::init_service(App::new().app_data(state.clone()).service(run_tool)).await;

    let req = TestRequest::post()
        .uri("/api/tools/url-scanner")
        .set_json(json!({ "url": "http://bank-login.example" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = serde_json::from_slice(&test::read_body(resp).await).expect("json body");
    assert_eq!(body["verdict"], "danger");
    assert!(body["analysis"].as_str().expect("analysis").contains("خطر"));
}

#[actix_web::test]
async fn unknown_tool_is_a_localized_404() {
    let state = web::Data::new(support::build_state("http://localhost", "http://localhost").await);
    let app = test::init_service(App::new().app_data(state.clone()).service(run_tool)).await;

    let req = TestRequest::post()
        .uri("/api/tools/battery-health")
        .set_json(json!({ "lang": "en" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).expect("json body");
    assert_eq!(body["error"], "Tool not available");
}

#[actix_web::test]
async fn network_info_relays_the_lookup_fields() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(GET).path("/json/");
        then.status(200).json_body(json!({
            "ip": "203.0.113.7",
            "city": "Riyadh",
            "country_name": "Saudi Arabia",
            "org": "Example Telecom",
            "asn": "AS64500",
            "timezone": "Asia/Riyadh",
            "latitude": 24.7,
            "longitude": 46.7,
            "unrelated_extra": "ignored"
        }));
    });

    let state = web::Data::new(support::build_state(&server.url(""), &server.url("")).await);
    let app = test::init_service(App::new().app_data(state.clone()).service(run_tool)).await;

    let req = TestRequest::post()
        .uri("/api/tools/network-info")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = serde_json::from_slice(&test::read_body(resp).await).expect("json body");
    assert_eq!(body["ip"], "203.0.113.7");
    assert_eq!(body["country_name"], "Saudi Arabia");
    assert_eq!(body["timezone"], "Asia/Riyadh");
}

#[actix_web::test]
async fn network_failure_is_a_localized_panel_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/json/");
        then.status(503).body("maintenance");
    });

    let state = web::Data::new(support::build_state(&server.url(""), &server.url("")).await);
    let app = test::init_service(App::new().app_data(state.clone()).service(run_tool)).await;

    let req = TestRequest::post()
        .uri("/api/tools/network-info")
        .set_json(json!({ "lang": "en" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).expect("json body");
    assert_eq!(body["error"], "Failed to fetch data. Check your connection.");
}

#[tokio::test]
async fn video_operation_lifecycle_parses_start_and_completion() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/veo-3.1-fast-generate-preview:predictLongRunning");
        then.status(200)
            .json_body(json!({ "name": "operations/video-op-1" }));
    });

    let mut pending = server.mock(|when, then| {
        when.method(GET).path("/v1beta/operations/video-op-1");
        then.status(200).json_body(json!({ "done": false }));
    });

    let operation = genai_client::start_video_generation(
        &server.url(""),
        "test-genai",
        "قطة تقفز فوق سور",
        None,
        "16:9",
        "720p",
    )
    .await
    .expect("operation name");
    assert_eq!(operation, "operations/video-op-1");

    let status = genai_client::fetch_video_operation(&server.url(""), "test-genai", &operation)
        .await
        .expect("pending poll");
    assert!(!status.done);
    assert!(status.video_uri.is_none());
    pending.delete();

    server.mock(|when, then| {
        when.method(GET).path("/v1beta/operations/video-op-1");
        then.status(200).json_body(json!({
            "done": true,
            "response": {
                "generateVideoResponse": {
                    "generatedSamples": [
                        { "video": { "uri": "https://cdn.example.com/clip.mp4" } }
                    ]
                }
            }
        }));
    });

    let done = genai_client::fetch_video_operation(&server.url(""), "test-genai", &operation)
        .await
        .expect("done poll");
    assert!(done.done);
    assert_eq!(done.video_uri.as_deref(), Some("https://cdn.example.com/clip.mp4"));
    assert!(done.error.is_none());
}

#[tokio::test]
async fn image_payloads_round_through_the_client_structs() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-2.5-flash-image:generateContent");
        then.status(200).json_body(json!({
            "candidates": [{
                "content": { "parts": [
                    { "inlineData": { "mimeType": "image/png", "data": "aGVsbG8=" } },
                    { "text": "تم التوليد" }
                ]}
            }]
        }));
    });

    let request = genai_client::GenerateRequest {
        contents: vec![genai_client::Content::text("منظر جبلي")],
        system_instruction: None,
        generation_config: None,
        tools: None,
    };
    let resp = genai_client::generate_content(
        &server.url(""),
        "test-genai",
        genai_client::IMAGE_MODEL,
        &request,
    )
    .await
    .expect("image response");

    let image = genai_client::first_image(&resp).expect("inline image");
    assert_eq!(image.mime_type, "image/png");
    assert_eq!(image.data, "aGVsbG8=");
    assert_eq!(genai_client::first_text(&resp).as_deref(), Some("تم التوليد"));
}
