use std::net::TcpListener;

use actix_web::web;
use anyhow::Context;
use portfolio_contact::{
    domain::ThemeSetting, relay_client::RelayClient, submission::ContactHandler, telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 遥测初始化
    telemetry::init_subscriber("portfolio_contact");

    let config = portfolio_contact::config::config()?;
    let listener = TcpListener::bind(config.web.server_address())
        .with_context(|| format!("failed to bind {}.", config.web.server_address()))?;

    // 构造web Arc
    let relay_client = RelayClient::from_config(&config)?;
    let handler = web::Data::new(ContactHandler::new(
        relay_client,
        config.ui.notice_dismiss_milliseconds,
    ));
    let theme = web::Data::new(ThemeSetting::new(config.ui.default_theme));

    tracing::info!(address = %config.web.server_address(), "contact service started.");
    portfolio_contact::run(listener, handler, theme, config.web.hmac_secret.clone())?.await?;

    Ok(())
}
