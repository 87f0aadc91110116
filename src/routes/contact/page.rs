use crate::{
    domain::{Field, FormInput, Theme, ValidationResult},
    submission::Notice,
    util::html_escape,
};

/// 联系页面，校验失败或发送失败时回填用户输入
pub struct ContactPage<'a> {
    pub theme: Theme,
    pub input: Option<&'a FormInput>,
    pub errors: Option<&'a ValidationResult>,
    pub notices: Vec<Notice>,
}

impl ContactPage<'_> {
    pub fn render(&self) -> String {
        let value = |field: Field| {
            self.input
                .map(|input| html_escape(input.value(field)))
                .unwrap_or_default()
        };
        let error = |field: Field| self.errors.and_then(|errors| errors.error(field));
        let class = |field: Field| match error(field) {
            Some(_) => "form-control error",
            None => "form-control",
        };
        let error_html = |field: Field| match error(field) {
            Some(e) => format!(
                r#"<div class="error-message show">{}</div>"#,
                e.message(field)
            ),
            None => String::new(),
        };
        let toggle_label = match self.theme {
            Theme::Dark => "Switch to light theme",
            Theme::Light => "Switch to dark theme",
        };

        format!(
            include_str!("contact.html"),
            theme = self.theme.as_str(),
            toggle_label = toggle_label,
            notice = self.notices.iter().map(render_notice).collect::<String>(),
            name_class = class(Field::Name),
            name = value(Field::Name),
            name_error = error_html(Field::Name),
            email_class = class(Field::Email),
            email = value(Field::Email),
            email_error = error_html(Field::Email),
            message_class = class(Field::Message),
            message = value(Field::Message),
            message_error = error_html(Field::Message),
        )
    }
}

fn render_notice(notice: &Notice) -> String {
    format!(
        r#"<div class="notification notification-{}" data-dismiss-after-ms="{}">{}</div>"#,
        notice.kind.as_str(),
        notice.dismiss_after_ms,
        html_escape(&notice.text)
    )
}
