//! Integration tests for the FAQ loader feeding the view.
//!
//! A wiremock server stands in for the FAQ endpoint; each test gets its own.

use faqview::app::{App, DataSource, LoadState};
use faqview::config::Config;
use faqview::faq::{fetch_faqs, load_file, LoadError};
use faqview::projection::{project, ListHead};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BODY: &str = r#"[
    {"faqNo": 1, "faqCate": "Buying", "faqTitle": "How do I pay?", "faqContent": "<p>Card or bank transfer</p>"},
    {"faqNo": 2, "faqCate": "Selling", "faqTitle": "When am I paid?", "faqContent": "Every Monday"},
    {"faqNo": 3, "faqCate": "Policy", "faqTitle": "Privacy", "faqContent": "We keep <b>nothing</b>"}
]"#;

async fn faq_server(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/faq/all"))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn app_for(url: String) -> App {
    let config = Config {
        source_url: url.clone(),
        ..Config::default()
    };
    App::new(
        &config,
        DataSource::Remote {
            url,
            timeout: Duration::from_secs(5),
        },
    )
    .unwrap()
}

#[tokio::test]
async fn test_fetch_seeds_idle_view() {
    let server = faq_server(
        ResponseTemplate::new(200).set_body_raw(BODY.as_bytes().to_vec(), "application/json"),
    )
    .await;
    let url = format!("{}/api/faq/all", server.uri());
    let mut app = app_for(url.clone());

    let result = fetch_faqs(&app.http_client, &url, Duration::from_secs(5)).await;
    app.apply_load_result(result);

    assert_eq!(app.load_state, LoadState::Loaded);
    assert!(app.view.is_idle());
    assert_eq!(app.view.visible_len(), 3);
    assert!(matches!(
        project(&app.view).head,
        ListHead::Categories { active: 0, .. }
    ));

    assert!(app.view.select_category("Selling"));
    assert_eq!(app.view.page_items()[0].title, "When am I paid?");
}

#[tokio::test]
async fn test_server_error_degrades_to_empty_list() {
    let server = faq_server(ResponseTemplate::new(500)).await;
    let url = format!("{}/api/faq/all", server.uri());
    let mut app = app_for(url.clone());

    let result = fetch_faqs(&app.http_client, &url, Duration::from_secs(5)).await;
    assert!(matches!(result, Err(LoadError::HttpStatus(500))));
    app.apply_load_result(result);

    assert!(matches!(app.load_state, LoadState::Failed(_)));
    assert_eq!(app.view.visible_len(), 0);
    assert_eq!(app.view.page_count(), 1);
    assert_eq!(project(&app.view).head, ListHead::NoResults);
}

#[tokio::test]
async fn test_non_array_body_is_decode_error() {
    let server = faq_server(
        ResponseTemplate::new(200)
            .set_body_raw(br#"{"faqs": []}"#.to_vec(), "application/json"),
    )
    .await;
    let url = format!("{}/api/faq/all", server.uri());

    let result = fetch_faqs(&reqwest::Client::new(), &url, Duration::from_secs(5)).await;
    assert!(matches!(result, Err(LoadError::Decode(_))));
}

#[tokio::test]
async fn test_file_source_matches_remote_format() {
    let dir = std::env::temp_dir().join("faqview_loader_it");
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("faqs.json");
    std::fs::write(&file, BODY).unwrap();

    let records = load_file(&file).await.unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].category, "Policy");

    std::fs::remove_file(&file).ok();
}
