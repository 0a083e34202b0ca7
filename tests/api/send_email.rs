use wiremock::{
    Mock, ResponseTemplate,
    matchers::{any, method, path},
};

use contact_mailer::routes::MAX_BODY_SIZE;

use crate::helpers::{RECIPIENT, spawn_app, valid_submission};

fn assert_cors_headers(response: &reqwest::Response) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "POST");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}

#[tokio::test]
async fn send_email_returns_200_with_the_provider_id_for_valid_data() {
    let app = spawn_app().await;
    app.provider_accepts("123").await;

    let response = app.post_send_email(&valid_submission()).await;

    assert_eq!(200, response.status().as_u16());
    assert_cors_headers(&response);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "success": true,
            "messageId": "123",
            "message": "Email sent successfully! You should receive a confirmation soon."
        })
    );
}

#[tokio::test]
async fn send_email_dispatches_to_the_owner_with_reply_to_the_submitter() {
    let app = spawn_app().await;
    app.provider_accepts("1").await;

    app.post_send_email(&valid_submission()).await;

    let email = app.dispatched_email().await;
    assert_eq!(email["to"], serde_json::json!([RECIPIENT]));
    assert_eq!(email["reply_to"], "ursula@example.com");
    assert_eq!(email["subject"], "Project inquiry");
    let html = email["html"].as_str().unwrap();
    assert!(html.contains("I have a project in mind."));
    assert!(html.contains("Ursula"));
}

#[tokio::test]
async fn send_email_defaults_the_subject_to_the_sender_name() {
    let app = spawn_app().await;
    app.provider_accepts("1").await;

    let body = serde_json::json!({
        "name": "Le Guin",
        "email": "ursula@example.com",
        "message": "I have a project in mind."
    });
    let response = app.post_send_email(&body).await;

    assert_eq!(200, response.status().as_u16());
    let email = app.dispatched_email().await;
    assert_eq!(email["subject"], "New message from Le Guin");
}

#[tokio::test]
async fn send_email_escapes_user_content_in_the_html_body() {
    let app = spawn_app().await;
    app.provider_accepts("1").await;

    let body = serde_json::json!({
        "name": "<script>alert(1)</script>",
        "email": "ursula@example.com",
        "subject": "<b>bold</b>",
        "message": "<img src=x onerror=alert(1)> and more"
    });
    app.post_send_email(&body).await;

    let email = app.dispatched_email().await;
    let html = email["html"].as_str().unwrap();
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<img"));
    assert!(!html.contains("<b>bold"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn send_email_returns_400_when_data_is_missing() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (
            serde_json::json!({"email": "u@example.com", "message": "long enough message"}),
            "missing the name",
        ),
        (
            serde_json::json!({"name": "Ursula", "message": "long enough message"}),
            "missing the email",
        ),
        (
            serde_json::json!({"name": "Ursula", "email": "u@example.com"}),
            "missing the message",
        ),
        (
            serde_json::json!({"name": "", "email": "u@example.com", "message": "long enough"}),
            "an empty name",
        ),
        (
            serde_json::json!({"name": "Ursula", "email": null, "message": "long enough"}),
            "a null email",
        ),
        (serde_json::json!({}), "missing every field"),
    ];

    for (body, description) in test_cases {
        let response = app.post_send_email(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
        assert_cors_headers(&response);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({"error": "Missing required fields"}));
    }
}

#[tokio::test]
async fn send_email_returns_400_for_a_malformed_email() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for email in ["foo", "foo@", "foo@bar", "foo bar@baz.com"] {
        let body = serde_json::json!({
            "name": "Ursula",
            "email": email,
            "message": "long enough message"
        });
        let response = app.post_send_email(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not reject {email:?}."
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({"error": "Invalid email format"}));
    }
}

#[tokio::test]
async fn send_email_returns_500_with_details_when_the_provider_fails() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "statusCode": 429,
            "name": "daily_quota_exceeded",
            "message": "quota exceeded"
        })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_send_email(&valid_submission()).await;

    assert_eq!(500, response.status().as_u16());
    assert_cors_headers(&response);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({"error": "Failed to send email", "details": "quota exceeded"})
    );
}

#[tokio::test]
async fn send_email_reports_unknown_error_when_the_provider_gives_no_message() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_send_email(&valid_submission()).await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to send email");
    assert_eq!(body["details"], "Unknown error");
}

#[tokio::test]
async fn send_email_does_not_retry_a_failed_dispatch() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&app.email_server)
        .await;

    app.post_send_email(&valid_submission()).await;
}

#[tokio::test]
async fn send_email_returns_500_when_the_provider_times_out() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "late"}))
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&app.email_server)
        .await;

    let response = app.post_send_email(&valid_submission()).await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to send email");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn send_email_returns_500_for_a_malformed_json_body() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for body in ["{not json", "", "[1, 2, 3]", r#"{"name": 42}"#] {
        let response = app.post_raw_send_email(body).await;

        assert_eq!(
            500,
            response.status().as_u16(),
            "The API did not fail with 500 for body {body:?}."
        );
        assert_cors_headers(&response);
        let response_body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(response_body["error"], "Internal server error");
        assert!(
            response_body["details"]
                .as_str()
                .is_some_and(|details| !details.is_empty())
        );
    }
}

#[tokio::test]
async fn send_email_returns_500_json_for_an_oversized_body() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let body = serde_json::json!({
        "name": "Ursula",
        "email": "ursula@example.com",
        "message": "x".repeat(MAX_BODY_SIZE + 1)
    });
    let response = app.post_send_email(&body).await;

    assert_eq!(500, response.status().as_u16());
    assert_cors_headers(&response);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Internal server error");
    assert!(
        body["details"]
            .as_str()
            .is_some_and(|details| details.contains("exceeds"))
    );
}

#[tokio::test]
async fn send_email_accepts_a_long_message_within_the_body_limit() {
    let app = spawn_app().await;
    app.provider_accepts("1").await;

    let body = serde_json::json!({
        "name": "Ursula",
        "email": "ursula@example.com",
        "message": "x".repeat(MAX_BODY_SIZE / 2)
    });
    let response = app.post_send_email(&body).await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn send_email_rejects_other_methods_with_405_and_cors_headers() {
    let app = spawn_app().await;

    for method in [
        reqwest::Method::GET,
        reqwest::Method::PUT,
        reqwest::Method::DELETE,
        reqwest::Method::OPTIONS,
    ] {
        let response = app
            .api_client
            .request(method.clone(), app.send_email_url())
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(
            405,
            response.status().as_u16(),
            "{method} was not rejected."
        );
        assert_cors_headers(&response);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({"error": "Method not allowed"}));
    }
}

#[tokio::test]
async fn independent_submissions_are_all_dispatched() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "1"})))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let submission = valid_submission();
    let (first, second) = tokio::join!(
        app.post_send_email(&submission),
        app.post_send_email(&submission)
    );

    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());
}
