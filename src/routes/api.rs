use std::collections::BTreeMap;

use actix_web::{web, HttpResponse, HttpResponseBuilder};

use crate::{
    domain::{validate, FormInput, ValidationResult},
    submission::{ContactHandler, HandleOutcome, Notice},
    visitor::Visitor,
};

#[derive(serde::Serialize)]
struct ValidationBody {
    valid: bool,
    field_errors: BTreeMap<&'static str, &'static str>,
}

impl From<&ValidationResult> for ValidationBody {
    fn from(result: &ValidationResult) -> Self {
        Self {
            valid: result.is_valid(),
            field_errors: result
                .field_errors()
                .map(|(field, e)| (field.as_str(), e.message(field)))
                .collect(),
        }
    }
}

#[derive(serde::Serialize)]
struct SubmissionBody<'a> {
    success: bool,
    message: &'a str,
    dismiss_after_ms: u64,
}

impl<'a> SubmissionBody<'a> {
    fn new(success: bool, notice: &'a Notice) -> Self {
        Self {
            success,
            message: &notice.text,
            dismiss_after_ms: notice.dismiss_after_ms,
        }
    }
}

/// 字段失去焦点时的实时校验，不会发送邮件
pub async fn validate_contact(input: web::Json<FormInput>) -> HttpResponse {
    let result = validate(&input);
    HttpResponse::Ok().json(ValidationBody::from(&result))
}

#[tracing::instrument(
    name = "submitting contact form via api",
    skip_all,
    fields(contact_email = %input.email)
)]
pub async fn submit_contact_json(
    input: web::Json<FormInput>,
    handler: web::Data<ContactHandler>,
    visitor: Visitor,
) -> HttpResponse {
    let outcome = handler.handle(visitor.id, &input).await;
    let success = outcome.should_clear_form();
    let res = match outcome {
        HandleOutcome::Invalid(result) => {
            HttpResponse::UnprocessableEntity().json(ValidationBody::from(&result))
        }
        HandleOutcome::Busy(notice) => json(HttpResponse::Conflict(), false, &notice),
        HandleOutcome::Completed { notice, .. } if success => {
            json(HttpResponse::Ok(), true, &notice)
        }
        HandleOutcome::Completed { notice, .. } => {
            json(HttpResponse::BadGateway(), false, &notice)
        }
    };

    visitor.remember(res)
}

fn json(mut builder: HttpResponseBuilder, success: bool, notice: &Notice) -> HttpResponse {
    builder.json(SubmissionBody::new(success, notice))
}
