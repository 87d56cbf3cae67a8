//! Authentication ports: session tokens and the hosted identity provider.

use async_trait::async_trait;

use crate::domain::SessionUser;

/// Which provider entry point a handoff targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFlow {
    Login,
    Register,
}

/// Signs and verifies the session token carried in the session cookie.
pub trait TokenService: Send + Sync {
    /// Issue a token for the given user.
    fn generate_token(&self, user: &SessionUser) -> Result<String, AuthError>;

    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<SessionUser, AuthError>;

    /// Lifetime of an issued token.
    fn expiration_seconds(&self) -> i64;
}

/// The hosted authentication provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Provider URL that starts a login or registration.
    fn authorize_url(&self, flow: AuthFlow, state: &str) -> String;

    /// Provider URL that ends the provider-side session.
    fn logout_url(&self) -> String;

    /// Trade an authorization code for the user it was issued to.
    async fn exchange_code(&self, code: &str) -> Result<SessionUser, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing session")]
    MissingAuth,

    #[error("OAuth state mismatch")]
    InvalidState,

    #[error("Identity provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Identity provider rejected the request: {0}")]
    ProviderRejected(String),

    #[error("Invalid auth configuration: {0}")]
    Configuration(String),
}
