use serde_json::json;

use crate::helper::{ann, assert_is_redirect_to, spawn_app, spawn_app_with_relay};

#[tokio::test]
async fn contact_page_renders_empty_form() {
    let app = spawn_app().await;

    let html = app.get_contact_html().await;
    assert!(html.contains(r#"<form id="contactForm" action="/contact" method="post""#));
    assert!(html.contains(r#"data-theme="dark""#));
    assert!(!html.contains("error-message show"));
}

#[tokio::test]
async fn success_clears_form_and_shows_notice_once() {
    let app = spawn_app().await;
    app.mock_relay_success().await;

    let res = app.post_contact(&ann()).await;
    assert_is_redirect_to(&res, "/contact");

    // 跟随重定向，页面显示成功提示且表单为空
    let html = app.get_contact_html().await;
    assert!(html.contains("Thank you! Your message has been sent successfully."));
    assert!(html.contains("notification-success"));
    assert!(html.contains(r#"data-dismiss-after-ms="5000""#));
    assert!(html.contains(r#"id="name" name="name" value="""#));
    assert!(!html.contains("ann@example.com"));

    // 再次加载页面，提示不会再次显示
    let html = app.get_contact_html().await;
    assert!(!html.contains("Thank you! Your message has been sent successfully."));
}

#[tokio::test]
async fn relay_receives_trimmed_values_and_subject() {
    let app = spawn_app().await;
    app.mock_relay_success().await;

    let body = json!({
        "name": "  Ann ",
        "email": " ann@example.com ",
        "message": "\nHi\n",
    });
    let res = app.post_contact(&body).await;
    assert_is_redirect_to(&res, "/contact");

    let relay_request = &app.relay_server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&relay_request.body).unwrap();
    assert_eq!("Ann", body["name"]);
    assert_eq!("ann@example.com", body["email"]);
    assert_eq!("Hi", body["message"]);
    assert_eq!("Portfolio Contact: Ann", body["subject"]);
    assert!(body["access_key"].is_string());
}

#[tokio::test]
async fn relay_failure_shows_reason_and_keeps_values() {
    let app = spawn_app().await;
    app.mock_relay(json!({ "success": false, "message": "Quota exceeded" }), 1)
        .await;

    let res = app.post_contact(&ann()).await;
    assert_eq!(502, res.status().as_u16());

    let html = res.text().await.unwrap();
    assert!(html.contains("notification-error"));
    assert!(html.contains("Quota exceeded"));
    assert!(html.contains(r#"value="Ann""#));
    assert!(html.contains(r#"value="ann@example.com""#));
    assert!(html.contains(">Hi</textarea>"));
}

#[tokio::test]
async fn invalid_form_is_rejected_without_calling_relay() {
    let app = spawn_app().await;
    app.mock_relay(json!({ "success": true }), 0).await;

    let cases = [
        (
            json!({ "name": "", "email": "ann@example.com", "message": "Hi" }),
            vec!["Name is required"],
            "name is empty.",
        ),
        (
            json!({ "name": "Ann", "email": " ", "message": "Hi" }),
            vec!["Email is required"],
            "email is empty.",
        ),
        (
            json!({ "name": "Ann", "email": "ann@example", "message": "Hi" }),
            vec!["Please enter a valid email address"],
            "email has no tld.",
        ),
        (
            json!({ "name": " ", "email": "", "message": "  " }),
            vec!["Name is required", "Email is required", "Message is required"],
            "every field is empty.",
        ),
    ];
    for (body, messages, payload) in cases {
        let res = app.post_contact(&body).await;
        assert_eq!(400, res.status().as_u16(), "{payload}");

        let html = res.text().await.unwrap();
        for message in messages {
            assert!(html.contains(message), "{payload}");
        }
    }
}

#[tokio::test]
async fn undecodable_relay_response_shows_generic_error() {
    let app = spawn_app().await;
    // 中转服务返回非JSON内容
    wiremock::Mock::given(wiremock::matchers::any())
        .respond_with(wiremock::ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&app.relay_server)
        .await;

    let res = app.post_contact(&ann()).await;
    assert_eq!(502, res.status().as_u16());

    let html = res.text().await.unwrap();
    assert!(html.contains("Failed to send message. Please try again or contact me directly."));
}

#[tokio::test]
async fn unreachable_relay_shows_generic_error() {
    // 1号端口上没有服务
    let app = spawn_app_with_relay(Some("http://127.0.0.1:1/submit")).await;

    let res = app.post_contact(&ann()).await;
    assert_eq!(502, res.status().as_u16());

    let html = res.text().await.unwrap();
    assert!(html.contains("Failed to send message. Please try again or contact me directly."));
    assert!(html.contains(r#"value="Ann""#));
}
