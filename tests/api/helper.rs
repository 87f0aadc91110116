use std::{net::TcpListener, time::Duration};

use actix_web::web;
use once_cell::sync::Lazy;
use portfolio_contact::{
    domain::ThemeSetting, relay_client::RelayClient, submission::ContactHandler, telemetry,
};
use reqwest::Response;
use serde_json::json;
use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

static TRACING: Lazy<()> = Lazy::new(|| telemetry::init_subscriber("test"));

pub struct TestApp {
    pub address: String,
    pub relay_server: MockServer,
    pub api_client: reqwest::Client,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_relay(None).await
}

/// `relay_endpoint`为空时使用模拟中转服务
pub async fn spawn_app_with_relay(relay_endpoint: Option<&str>) -> TestApp {
    Lazy::force(&TRACING);

    let mut config = portfolio_contact::config::config().expect("failed to read configuration.");
    let address = format!("{}:{}", &config.web.host, 0);
    let listener = TcpListener::bind(&address).expect("failed to bind web port.");

    // 模拟邮件中转服务
    let relay_server = MockServer::start().await;
    config.relay.endpoint = match relay_endpoint {
        Some(endpoint) => endpoint.to_string(),
        None => format!("{}/submit", relay_server.uri()),
    };
    let relay_client = RelayClient::from_config(&config).expect("failed to build relay client.");
    let handler = web::Data::new(ContactHandler::new(
        relay_client,
        config.ui.notice_dismiss_milliseconds,
    ));
    let theme = web::Data::new(ThemeSetting::new(config.ui.default_theme));

    // 获取绑定的随机端口
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://{}:{}", &config.web.host, &port);

    let server = portfolio_contact::run(listener, handler, theme, config.web.hmac_secret.clone())
        .expect("failed to start server.");
    tokio::spawn(server);

    let api_client = build_client();

    TestApp {
        address,
        relay_server,
        api_client,
    }
}

/// 每个客户端拥有独立的cookie，相当于一个访客
pub fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap()
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> Response {
        self.api_client
            .post(format!("{}/contact", &self.address))
            .form(body)
            .send()
            .await
            .expect("failed to execute request.")
    }

    pub async fn get_contact_html(&self) -> String {
        self.get_contact_html_as(&self.api_client).await
    }

    pub async fn get_contact_html_as(&self, client: &reqwest::Client) -> String {
        client
            .get(format!("{}/contact", &self.address))
            .send()
            .await
            .expect("failed to execute request.")
            .text()
            .await
            .unwrap()
    }

    pub async fn post_api_contact(&self, body: &serde_json::Value) -> Response {
        self.post_api_contact_as(&self.api_client, body).await
    }

    pub async fn post_api_contact_as(
        &self,
        client: &reqwest::Client,
        body: &serde_json::Value,
    ) -> Response {
        client
            .post(format!("{}/api/contact", &self.address))
            .json(body)
            .send()
            .await
            .expect("failed to execute request.")
    }

    pub async fn post_api_validate(&self, body: &serde_json::Value) -> Response {
        self.api_client
            .post(format!("{}/api/contact/validate", &self.address))
            .json(body)
            .send()
            .await
            .expect("failed to execute request.")
    }

    pub async fn post_theme_toggle(&self) -> Response {
        self.api_client
            .post(format!("{}/theme/toggle", &self.address))
            .send()
            .await
            .expect("failed to execute request.")
    }

    /// 中转服务返回指定结果
    pub async fn mock_relay(&self, body: serde_json::Value, expected_calls: u64) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(expected_calls)
            .mount(&self.relay_server)
            .await;
    }

    pub async fn mock_delayed_relay_success(&self, delay: Duration, expected_calls: u64) {
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "success": true }))
                    .set_delay(delay),
            )
            .expect(expected_calls)
            .mount(&self.relay_server)
            .await;
    }

    pub async fn mock_relay_success(&self) {
        self.mock_relay(json!({ "success": true }), 1).await;
    }
}

pub fn ann() -> serde_json::Value {
    json!({
        "name": "Ann",
        "email": "ann@example.com",
        "message": "Hi",
    })
}

pub fn assert_is_redirect_to(res: &Response, location: &str) {
    assert_eq!(303, res.status().as_u16());
    assert_eq!(res.headers().get("Location").unwrap(), location);
}
