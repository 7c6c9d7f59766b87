//! tests/tilde_redirect.rs
//! The '<value>~<url>' form-field convention: the kept value lands in the
//! session data and the response is a 302 to the embedded target.

// Include the helper module defined in tests/mod.rs.
#[path = "mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;
use sketchkit::pipeline::tilde_redirect::split_marker;

#[test]
fn splits_at_the_first_marker() {
    assert_eq!(split_marker("yes~/next-page"), Some(("yes", "/next-page")));
}

#[test]
fn values_without_a_marker_are_left_alone() {
    assert_eq!(split_marker("plain value"), None);
}

#[test]
fn trailing_parts_after_a_second_marker_are_discarded() {
    assert_eq!(split_marker("a~/first~/ignored~junk"), Some(("a", "/first")));
}

#[test]
fn a_marker_with_nothing_after_it_yields_an_empty_target() {
    assert_eq!(split_marker("maybe~"), Some(("maybe", "")));
}

#[tokio::test]
async fn redirects_and_stores_the_kept_value() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = common::client();

    let resp: reqwest::Response = client
        .post(format!("{}/question-page", base_url))
        .form(&[("answer", "yes~/next-page")])
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/next-page")
    );

    // The redirect short-circuits rendering: no page body is produced.
    assert_eq!(resp.text().await.unwrap(), "");

    // The kept value is visible to pages rendered later in the session.
    let json: Value = client
        .get(format!("{}/next-page", base_url))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();

    assert_eq!(json["data"]["answer"], "yes");
}

#[tokio::test]
async fn posts_without_a_marker_reach_the_page_untouched() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = common::client();

    let resp: reqwest::Response = client
        .post(format!("{}/question-page", base_url))
        .form(&[("answer", "no"), ("detail", "free text")])
        .send()
        .await
        .expect("Failed to execute request.");

    // The request continued into normal route handling.
    assert_eq!(resp.status(), StatusCode::OK);

    // Nothing was written into the session data by the interceptor.
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["data"], serde_json::json!({}));
}

#[tokio::test]
async fn falls_back_to_query_fields_when_the_body_is_empty() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = common::client();

    let resp: reqwest::Response = client
        .post(format!("{}/branch?pick=go~/query-target", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/query-target")
    );

    let json: Value = client
        .get(format!("{}/query-target", base_url))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();

    assert_eq!(json["data"]["pick"], "go");
}

#[tokio::test]
async fn body_fields_win_over_query_fields() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = common::client();

    let resp: reqwest::Response = client
        .post(format!("{}/branch?other=x~/query-target", base_url))
        .form(&[("choice", "keep~/body-target")])
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/body-target")
    );
}

#[tokio::test]
async fn repeating_the_same_submission_is_deterministic() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = common::client();

    for _ in 0..2 {
        let resp: reqwest::Response = client
            .post(format!("{}/question-page", base_url))
            .form(&[("answer", "yes~/next-page")])
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get("location").and_then(|v| v.to_str().ok()),
            Some("/next-page")
        );
    }

    let json: Value = client
        .get(format!("{}/next-page", base_url))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();

    assert_eq!(json["data"]["answer"], "yes");
}
