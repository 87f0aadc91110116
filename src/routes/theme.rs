use actix_web::{web, HttpResponse, Responder};

use crate::{
    domain::{Theme, ThemeSetting},
    util::see_other,
};

#[derive(serde::Serialize)]
struct ThemeBody {
    theme: Theme,
}

#[derive(serde::Deserialize)]
pub struct ThemeForm {
    theme: String,
}

pub async fn current_theme(theme: web::Data<ThemeSetting>) -> impl Responder {
    HttpResponse::Ok().json(ThemeBody { theme: theme.get() })
}

pub async fn set_theme(
    form: web::Json<ThemeForm>,
    theme: web::Data<ThemeSetting>,
) -> HttpResponse {
    match Theme::try_from(form.theme.as_str()) {
        Ok(new_theme) => {
            theme.set(new_theme);
            tracing::info!(theme = new_theme.as_str(), "theme set.");
            HttpResponse::Ok().json(ThemeBody { theme: new_theme })
        }
        Err(e) => HttpResponse::BadRequest().body(e),
    }
}

pub async fn toggle_theme(theme: web::Data<ThemeSetting>) -> impl Responder {
    let theme = theme.toggle();
    tracing::info!(theme = theme.as_str(), "theme toggled.");
    see_other("/contact")
}
