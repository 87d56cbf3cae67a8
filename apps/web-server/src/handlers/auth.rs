//! Handoffs to the hosted identity provider and the OAuth callback.

use actix_web::{HttpRequest, HttpResponse, http::header, web};
use serde::Deserialize;
use uuid::Uuid;

use quill_core::ports::{AuthError, AuthFlow};
use quill_shared::dto::SessionUserResponse;

use crate::middleware::error::PageResult;
use crate::middleware::session::{
    Identity, OAUTH_STATE_COOKIE, SESSION_COOKIE, expired_cookie, oauth_state_cookie,
    session_cookie,
};
use crate::state::AppState;

fn handoff(state: &AppState, flow: AuthFlow) -> HttpResponse {
    let oauth_state = Uuid::new_v4().simple().to_string();
    let location = state.identity.authorize_url(flow, &oauth_state);

    HttpResponse::Found()
        .cookie(oauth_state_cookie(oauth_state, state.cookie_secure))
        .insert_header((header::LOCATION, location))
        .finish()
}

/// GET /api/auth/login
pub async fn login(state: web::Data<AppState>) -> HttpResponse {
    handoff(&state, AuthFlow::Login)
}

/// GET /api/auth/register
pub async fn register(state: web::Data<AppState>) -> HttpResponse {
    handoff(&state, AuthFlow::Register)
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
}

/// GET /api/auth/callback - exchange the code, set the session cookie, go home.
pub async fn callback(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<CallbackQuery>,
) -> PageResult<HttpResponse> {
    let query = query.into_inner();

    // The user backed out on the provider's page.
    if let Some(error) = query.error {
        tracing::info!(error = %error, "Provider returned an authorization error");
        return Ok(HttpResponse::Found()
            .cookie(expired_cookie(OAUTH_STATE_COOKIE, state.cookie_secure))
            .insert_header((header::LOCATION, "/"))
            .finish());
    }

    let expected = req.cookie(OAUTH_STATE_COOKIE);
    let state_matches = matches!(
        (expected.as_ref().map(|c| c.value()), query.state.as_deref()),
        (Some(expected), Some(received)) if !expected.is_empty() && expected == received
    );
    if !state_matches {
        return Err(AuthError::InvalidState.into());
    }

    let code = query.code.ok_or(AuthError::MissingAuth)?;
    let user = state.identity.exchange_code(&code).await?;
    let token = state.tokens.generate_token(&user)?;

    tracing::info!(user_id = %user.id, "User signed in");

    Ok(HttpResponse::Found()
        .cookie(session_cookie(
            token,
            state.tokens.expiration_seconds(),
            state.cookie_secure,
        ))
        .cookie(expired_cookie(OAUTH_STATE_COOKIE, state.cookie_secure))
        .insert_header((header::LOCATION, "/"))
        .finish())
}

/// GET /api/auth/logout - drop our session, then end the provider's.
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Found()
        .cookie(expired_cookie(SESSION_COOKIE, state.cookie_secure))
        .insert_header((header::LOCATION, state.identity.logout_url()))
        .finish()
}

/// GET /api/auth/me
pub async fn me(identity: Identity) -> web::Json<SessionUserResponse> {
    web::Json(identity.0.into())
}

#[cfg(test)]
mod tests {
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    use crate::handlers::configure_routes;
    use crate::state::test_support::{ayoub, state_with_posts};

    use super::*;

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn location(res: &actix_web::dev::ServiceResponse) -> String {
        res.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    fn response_cookie(res: &actix_web::dev::ServiceResponse, name: &str) -> Option<Cookie<'static>> {
        res.response()
            .cookies()
            .find(|c| c.name() == name)
            .map(|c| c.into_owned())
    }

    #[actix_web::test]
    async fn test_login_hands_off_with_state_cookie() {
        let app = app!(state_with_posts(vec![]));

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/auth/login").to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::FOUND);
        let state_cookie = response_cookie(&res, OAUTH_STATE_COOKIE).unwrap();
        assert_eq!(
            location(&res),
            format!("https://id.example.com/login?state={}", state_cookie.value())
        );
        assert_eq!(state_cookie.http_only(), Some(true));
    }

    #[actix_web::test]
    async fn test_register_hands_off_to_registration() {
        let app = app!(state_with_posts(vec![]));

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/auth/register").to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert!(location(&res).starts_with("https://id.example.com/register?state="));
    }

    #[actix_web::test]
    async fn test_callback_sets_session_cookie() {
        let state = state_with_posts(vec![]);
        let app = app!(state.clone());

        let req = test::TestRequest::get()
            .uri("/api/auth/callback?code=good-code&state=abc")
            .cookie(Cookie::new(OAUTH_STATE_COOKIE, "abc"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/");
        let session = response_cookie(&res, SESSION_COOKIE).unwrap();
        assert_eq!(state.tokens.validate_token(session.value()).unwrap(), ayoub());
    }

    #[actix_web::test]
    async fn test_callback_rejects_state_mismatch() {
        let app = app!(state_with_posts(vec![]));

        let req = test::TestRequest::get()
            .uri("/api/auth/callback?code=good-code&state=abc")
            .cookie(Cookie::new(OAUTH_STATE_COOKIE, "xyz"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(response_cookie(&res, SESSION_COOKIE).is_none());
    }

    #[actix_web::test]
    async fn test_callback_without_state_cookie_rejected() {
        let app = app!(state_with_posts(vec![]));

        let req = test::TestRequest::get()
            .uri("/api/auth/callback?code=good-code&state=abc")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_callback_provider_unreachable_is_bad_gateway() {
        let app = app!(state_with_posts(vec![]));

        let req = test::TestRequest::get()
            .uri("/api/auth/callback?code=bad-code&state=abc")
            .cookie(Cookie::new(OAUTH_STATE_COOKIE, "abc"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
        assert!(response_cookie(&res, SESSION_COOKIE).is_none());
    }

    #[actix_web::test]
    async fn test_callback_with_provider_error_goes_home() {
        let app = app!(state_with_posts(vec![]));

        let req = test::TestRequest::get()
            .uri("/api/auth/callback?error=access_denied&state=abc")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/");
    }

    #[actix_web::test]
    async fn test_logout_clears_session() {
        let app = app!(state_with_posts(vec![]));

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/auth/logout").to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "https://id.example.com/logout");
        let cleared = response_cookie(&res, SESSION_COOKIE).unwrap();
        assert_eq!(cleared.value(), "");
    }

    #[actix_web::test]
    async fn test_me_requires_session() {
        let app = app!(state_with_posts(vec![]));

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/auth/me").to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_me_returns_session_user() {
        let state = state_with_posts(vec![]);
        let token = state.tokens.generate_token(&ayoub()).unwrap();
        let app = app!(state);

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .cookie(Cookie::new(SESSION_COOKIE, token))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["given_name"], "Ayoub");
        assert_eq!(body["email"], "ayoub@example.com");
    }
}
