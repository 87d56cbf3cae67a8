//! Session cookie handling and identity extractors.

use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use std::future::{Ready, ready};

use quill_core::domain::SessionUser;
use quill_core::ports::{AuthError, TokenService};

use crate::middleware::error::AppError;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "quill_session";
pub const OAUTH_STATE_COOKIE: &str = "quill_oauth_state";

/// Resolve the request's session cookie to a user.
///
/// A missing, malformed or expired token is an absent session, not an error.
pub fn resolve_session(req: &HttpRequest, tokens: &dyn TokenService) -> Option<SessionUser> {
    let cookie = req.cookie(SESSION_COOKIE)?;

    match tokens.validate_token(cookie.value()) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring unusable session cookie");
            None
        }
    }
}

fn base_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .finish()
}

pub fn session_cookie(token: String, max_age_seconds: i64, secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(SESSION_COOKIE, token, secure);
    cookie.set_max_age(Duration::seconds(max_age_seconds));
    cookie
}

pub fn oauth_state_cookie(state: String, secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(OAUTH_STATE_COOKIE, state, secure);
    cookie.set_max_age(Duration::minutes(10));
    cookie
}

/// A cookie that tells the browser to drop `name`.
pub fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(name, String::new(), secure);
    cookie.make_removal();
    cookie
}

fn app_state(req: &HttpRequest) -> Option<&web::Data<AppState>> {
    let state = req.app_data::<web::Data<AppState>>();
    if state.is_none() {
        tracing::error!("AppState not found in app data");
    }
    state
}

/// The signed-in user, if any. Never rejects.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<SessionUser>);

impl FromRequest for MaybeUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = app_state(req).and_then(|state| resolve_session(req, state.tokens.as_ref()));
        ready(Ok(MaybeUser(user)))
    }
}

/// The signed-in user; rejects with 401 JSON when absent.
#[derive(Debug, Clone)]
pub struct Identity(pub SessionUser);

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = app_state(req) else {
            return ready(Err(AppError::Internal(
                "Server configuration error".to_string(),
            )));
        };

        match resolve_session(req, state.tokens.as_ref()) {
            Some(user) => ready(Ok(Identity(user))),
            None => ready(Err(AuthError::MissingAuth.into())),
        }
    }
}
