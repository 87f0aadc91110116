use actix_web::{http::header::ContentType, web, HttpResponse, HttpResponseBuilder};
use actix_web_flash_messages::FlashMessage;

use crate::{
    domain::{FormInput, ThemeSetting},
    submission::{ContactHandler, HandleOutcome},
    util::see_other,
    visitor::Visitor,
};

use super::ContactPage;

#[tracing::instrument(
    name = "提交联系表单",
    skip_all,
    fields(contact_email = %form.email)
)]
pub async fn submit_contact(
    form: web::Form<FormInput>,
    handler: web::Data<ContactHandler>,
    theme: web::Data<ThemeSetting>,
    visitor: Visitor,
) -> HttpResponse {
    let input = form.into_inner();
    let page = |notices| ContactPage {
        theme: theme.get(),
        input: Some(&input),
        errors: None,
        notices,
    };

    let outcome = handler.handle(visitor.id, &input).await;
    let clear_form = outcome.should_clear_form();
    let res = match outcome {
        HandleOutcome::Invalid(errors) => {
            let page = ContactPage {
                errors: Some(&errors),
                ..page(vec![])
            };
            html(HttpResponse::BadRequest(), &page)
        }
        HandleOutcome::Busy(notice) => html(HttpResponse::Conflict(), &page(vec![notice])),
        // 成功后重定向，页面显示空表单
        HandleOutcome::Completed { notice, .. } if clear_form => {
            FlashMessage::success(notice.text).send();
            see_other("/contact")
        }
        // 发送失败时保留用户输入
        HandleOutcome::Completed { notice, .. } => {
            html(HttpResponse::BadGateway(), &page(vec![notice]))
        }
    };

    visitor.remember(res)
}

fn html(mut builder: HttpResponseBuilder, page: &ContactPage<'_>) -> HttpResponse {
    builder
        .content_type(ContentType::html())
        .body(page.render())
}
