pub mod get_session;
pub mod login_admin;
pub mod logout_admin;

pub use get_session::get_session_handler;
pub use login_admin::login_admin_handler;
pub use logout_admin::logout_admin_handler;

use actix_web::{cookie::Cookie, HttpRequest};

use crate::auth::adapter::incoming::web::extractors::SESSION_COOKIE;

/// Session cookie carrying `token`; `secure` follows the request scheme.
pub(crate) fn session_cookie(req: &HttpRequest, token: String, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .http_only(true)
        .same_site(actix_web::cookie::SameSite::Lax)
        .path("/")
        .secure(req.connection_info().scheme() == "https")
        .max_age(actix_web::cookie::time::Duration::seconds(max_age_secs.max(0)))
        .finish()
}

pub(crate) fn cleared_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}
