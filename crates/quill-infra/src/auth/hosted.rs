//! Client for the hosted identity provider (OAuth2 authorization code flow).

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use quill_core::domain::SessionUser;
use quill_core::ports::{AuthError, AuthFlow, IdentityProvider};

/// Hosted provider configuration.
#[derive(Debug, Clone)]
pub struct HostedAuthConfig {
    /// Provider base URL, e.g. `https://myblog.kinde.com`.
    pub issuer_url: String,
    pub client_id: String,
    pub client_secret: String,
    /// Our callback route, registered with the provider.
    pub redirect_uri: String,
    /// Where the provider sends the browser after logout.
    pub logout_redirect_uri: String,
    pub scope: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    given_name: Option<String>,
    #[serde(default)]
    family_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

impl ProfileResponse {
    fn into_session_user(self) -> Result<SessionUser, AuthError> {
        let id = self
            .id
            .or(self.sub)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AuthError::ProviderRejected("profile has no user id".to_string()))?;
        let email = self.email.unwrap_or_default();
        let given_name = self
            .given_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());

        Ok(SessionUser {
            id,
            given_name,
            family_name: self.family_name,
            email,
            picture: self.picture,
        })
    }
}

/// Mask an email address for logs.
fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = match local.chars().next() {
                Some(first) if local.chars().count() > 1 => format!("{first}***"),
                _ => "***".to_string(),
            };
            format!("{masked_local}{domain}")
        }
        None => "***".to_string(),
    }
}

/// Identity provider backed by a hosted OAuth2/OIDC service.
pub struct HostedIdentityProvider {
    config: HostedAuthConfig,
    authorize_endpoint: Url,
    token_endpoint: Url,
    profile_endpoint: Url,
    logout_endpoint: Url,
    client: reqwest::Client,
}

impl HostedIdentityProvider {
    pub fn new(config: HostedAuthConfig) -> Result<Self, AuthError> {
        let base = config.issuer_url.trim_end_matches('/');
        let endpoint = |path: &str| {
            Url::parse(&format!("{base}{path}"))
                .map_err(|e| AuthError::Configuration(format!("issuer url {base:?}: {e}")))
        };

        let authorize_endpoint = endpoint("/oauth2/auth")?;
        let token_endpoint = endpoint("/oauth2/token")?;
        let profile_endpoint = endpoint("/oauth2/v2/user_profile")?;
        let logout_endpoint = endpoint("/logout")?;

        Ok(Self {
            config,
            authorize_endpoint,
            token_endpoint,
            profile_endpoint,
            logout_endpoint,
            client: reqwest::Client::new(),
        })
    }

    async fn fetch_access_token(&self, code: &str) -> Result<String, AuthError> {
        let response = self
            .client
            .post(self.token_endpoint.clone())
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AuthError::ProviderUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::ProviderRejected(format!("{status}: {body}")));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::ProviderRejected(e.to_string()))?;
        Ok(token.access_token)
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<ProfileResponse, AuthError> {
        let response = self
            .client
            .get(self.profile_endpoint.clone())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::ProviderUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::ProviderRejected(format!("{status}: {body}")));
        }

        response
            .json()
            .await
            .map_err(|e| AuthError::ProviderRejected(e.to_string()))
    }
}

#[async_trait]
impl IdentityProvider for HostedIdentityProvider {
    fn authorize_url(&self, flow: AuthFlow, state: &str) -> String {
        let mut url = self.authorize_endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("response_type", "code")
                .append_pair("client_id", &self.config.client_id)
                .append_pair("redirect_uri", &self.config.redirect_uri)
                .append_pair("scope", &self.config.scope)
                .append_pair("state", state);
            if flow == AuthFlow::Register {
                query.append_pair("prompt", "create");
            }
        }
        url.to_string()
    }

    fn logout_url(&self) -> String {
        let mut url = self.logout_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("redirect", &self.config.logout_redirect_uri);
        url.to_string()
    }

    async fn exchange_code(&self, code: &str) -> Result<SessionUser, AuthError> {
        let access_token = self.fetch_access_token(code).await?;
        let user = self.fetch_profile(&access_token).await?.into_session_user()?;

        tracing::debug!(user_email = %mask_email(&user.email), "Fetched provider profile");
        Ok(user)
    }
}
