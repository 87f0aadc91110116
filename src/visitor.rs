use std::future::{ready, Ready};

use actix_web::{
    cookie::{Cookie, SameSite},
    dev::Payload,
    FromRequest, HttpRequest, HttpResponse,
};
use uuid::Uuid;

pub const VISITOR_COOKIE: &str = "visitor_id";

/// 访客标识，保存在cookie中
///
/// 提交锁按访客区分，一个访客的请求不会阻塞其他访客
#[derive(Debug, Clone, Copy)]
pub struct Visitor {
    pub id: Uuid,
    is_new: bool,
}

impl Visitor {
    /// 新访客在响应中写入cookie
    pub fn remember(&self, mut res: HttpResponse) -> HttpResponse {
        if self.is_new {
            let cookie = Cookie::build(VISITOR_COOKIE, self.id.to_string())
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .finish();
            if let Err(e) = res.add_cookie(&cookie) {
                tracing::warn!(error.message = %e, "failed to set visitor cookie.");
            }
        }
        res
    }
}

impl FromRequest for Visitor {
    type Error = actix_web::Error;
    type Future = Ready<Result<Visitor, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let known = req
            .cookie(VISITOR_COOKIE)
            .and_then(|c| Uuid::parse_str(c.value()).ok());
        let visitor = match known {
            Some(id) => Visitor { id, is_new: false },
            None => Visitor {
                id: Uuid::new_v4(),
                is_new: true,
            },
        };
        ready(Ok(visitor))
    }
}
