use std::time::Duration;

use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::spawn_app;

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "from": "Jane Doe",
        "email": "jane@example.com",
        "subject": "Hello"
    })
}

#[tokio::test]
async fn contact_returns_a_200_for_valid_form_data() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .and(header("Authorization", "Bearer my-secret-token"))
        .and(body_json(serde_json::json!({
            "from": "Katha <no-reply@katha.io>",
            "to": "hello@katha.io",
            "subject": "Contact Form: Jane Doe",
            "text": "New contact submission\n\nFrom: Jane Doe\nEmail: jane@example.com\n\nSubject / Message:\nHello"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "4ef9a417" })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let resp = app.post_contact(&valid_body()).await;

    assert_eq!(200, resp.status().as_u16());
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "ok": true }));
}

#[tokio::test]
async fn contact_returns_a_400_when_fields_are_present_but_invalid() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (serde_json::json!({"from": "", "email": "jane@example.com", "subject": "Hello"}), "empty name"),
        (serde_json::json!({"from": "Jane", "email": "  ", "subject": "Hello"}), "blank email"),
        (serde_json::json!({"from": "Jane", "email": "foo", "subject": "Hello"}), "email without at"),
        (serde_json::json!({"from": "Jane", "email": "foo@bar", "subject": "Hello"}), "email without tld"),
        (serde_json::json!({"from": "Jane", "email": "@bar.com", "subject": "Hello"}), "email without local part"),
        (serde_json::json!({"from": "Jane", "email": "jane@example.com", "subject": " \t "}), "blank message"),
    ];

    for (body, desc) in test_cases {
        let resp = app.post_contact(&body).await;

        assert_eq!(
            400,
            resp.status().as_u16(),
            "api did not return a 400 for payload {}",
            desc
        );
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "ok": false, "error": "Invalid form data" })
        );
    }
}

#[tokio::test]
async fn contact_returns_a_400_when_data_is_missing() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (serde_json::json!({"email": "jane@example.com", "subject": "Hello"}), "missing the name"),
        (serde_json::json!({"from": "Jane", "subject": "Hello"}), "missing the email"),
        (serde_json::json!({"from": "Jane", "email": "jane@example.com"}), "missing the message"),
        (serde_json::json!({"from": ["Jane"], "email": "jane@example.com", "subject": "Hello"}), "name is not a string"),
        (serde_json::json!({}), "missing everything"),
    ];

    for (body, desc) in test_cases {
        let resp = app.post_contact(&body).await;

        assert_eq!(
            400,
            resp.status().as_u16(),
            "The API did not fail with 400 Bad request when for a payload of {}",
            desc
        );
    }
}

#[tokio::test]
async fn contact_returns_a_500_with_the_provider_message_when_sending_fails() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "statusCode": 429,
            "name": "daily_quota_exceeded",
            "message": "quota exceeded"
        })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let resp = app.post_contact(&valid_body()).await;

    assert_eq!(500, resp.status().as_u16());
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "ok": false, "error": "quota exceeded" })
    );
}

#[tokio::test]
async fn contact_returns_a_generic_500_when_the_provider_gives_no_reason() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let resp = app.post_contact(&valid_body()).await;

    assert_eq!(500, resp.status().as_u16());
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "ok": false, "error": "Email send failed" })
    );
}

#[tokio::test]
async fn contact_returns_a_500_when_the_provider_cannot_be_reached_in_time() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let resp = app.post_contact(&valid_body()).await;

    assert_eq!(500, resp.status().as_u16());
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn contact_returns_a_500_for_a_malformed_body() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for raw in ["{\"from\": ", "not json at all", "", "null"] {
        let resp = app.post_contact_raw(raw).await;

        assert_eq!(500, resp.status().as_u16(), "unexpected status for {:?}", raw);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["ok"], false);
        assert!(
            !body["error"].as_str().unwrap().is_empty(),
            "missing error text for {:?}",
            raw
        );
    }

    // the server is still up and serving requests
    assert!(app.health().await.status().is_success());
}

#[tokio::test]
async fn contact_returns_a_400_for_json_that_is_not_an_object() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for raw in ["[1, 2, 3]", "\"x\"", "5", "true"] {
        let resp = app.post_contact_raw(raw).await;

        assert_eq!(400, resp.status().as_u16(), "unexpected status for {:?}", raw);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "ok": false, "error": "Invalid form data" })
        );
    }
}

#[tokio::test]
async fn contact_accepts_a_long_message() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let body = serde_json::json!({
        "from": "Jane",
        "email": "jane@example.com",
        "subject": "a".repeat(300_000)
    });

    let resp = app.post_contact(&body).await;

    assert_eq!(200, resp.status().as_u16());
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "ok": true }));
}

#[tokio::test]
async fn identical_submissions_are_sent_twice() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let first = app.post_contact(&valid_body()).await;
    let second = app.post_contact(&valid_body()).await;

    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());
}
