use actix_web::{http::header::ContentType, web, HttpResponse};
use actix_web_flash_messages::{IncomingFlashMessages, Level};

use crate::{
    domain::ThemeSetting,
    submission::{ContactHandler, Notice},
    visitor::Visitor,
};

use super::ContactPage;

pub async fn contact_form(
    flash_messages: IncomingFlashMessages,
    theme: web::Data<ThemeSetting>,
    handler: web::Data<ContactHandler>,
    visitor: Visitor,
) -> HttpResponse {
    let dismiss_after_ms = handler.notice_dismiss_ms();
    let notices = flash_messages
        .iter()
        .map(|m| match m.level() {
            Level::Error | Level::Warning => Notice::error(m.content(), dismiss_after_ms),
            _ => Notice::success(m.content(), dismiss_after_ms),
        })
        .collect();

    let page = ContactPage {
        theme: theme.get(),
        input: None,
        errors: None,
        notices,
    };

    visitor.remember(
        HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(page.render()),
    )
}
