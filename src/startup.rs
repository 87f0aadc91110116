use std::net::TcpListener;

use actix_web::{cookie::Key, dev::Server, web, App, HttpServer};
use anyhow::Context;
use actix_web_flash_messages::{storage::CookieMessageStore, FlashMessagesFramework};
use secrecy::{ExposeSecret, SecretString};
use tracing_actix_web::TracingLogger;

use crate::{domain::ThemeSetting, routes, submission::ContactHandler};

pub fn run(
    listener: TcpListener,
    handler: web::Data<ContactHandler>,
    theme: web::Data<ThemeSetting>,
    hmac_secret: SecretString,
) -> anyhow::Result<Server> {
    // 提交结果通过flash message在重定向后显示
    let secret_key = Key::try_from(hmac_secret.expose_secret().as_bytes())
        .context("hmac secret must be at least 64 bytes.")?;
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(TracingLogger::default())
            .app_data(handler.clone())
            .app_data(theme.clone())
            .route("/", web::get().to(routes::home))
            .route("/health_check", web::get().to(routes::health_check))
            .route("/contact", web::get().to(routes::contact_form))
            .route("/contact", web::post().to(routes::submit_contact))
            .route("/theme", web::get().to(routes::current_theme))
            .route("/theme", web::post().to(routes::set_theme))
            .route("/theme/toggle", web::post().to(routes::toggle_theme))
            .service(
                web::scope("/api/contact")
                    .route("", web::post().to(routes::submit_contact_json))
                    .route("/validate", web::post().to(routes::validate_contact)),
            )
    })
    .listen(listener)
    .context("failed to listen on the web port.")?
    .run();

    Ok(server)
}
