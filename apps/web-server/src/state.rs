//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;

use quill_core::domain::AuthLinks;
use quill_core::ports::{IdentityProvider, PostRepository, TokenService};
use quill_infra::database::connect;
use quill_infra::{HostedIdentityProvider, JwtTokenService, PostgresPostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub identity: Arc<dyn IdentityProvider>,
    pub links: AuthLinks,
    pub cookie_secure: bool,
}

impl AppState {
    /// Connect to the store and build the auth services.
    ///
    /// There is no fallback store: a failed connection aborts startup.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let db = connect(&config.database)
            .await
            .context("failed to connect to the database")?;

        let identity = HostedIdentityProvider::new(config.auth.clone())
            .context("invalid identity provider configuration")?;

        tracing::info!("Application state initialized");

        Ok(Self {
            posts: Arc::new(PostgresPostRepository::new(db)),
            tokens: Arc::new(JwtTokenService::new(config.session.clone())),
            identity: Arc::new(identity),
            links: AuthLinks::default(),
            cookie_secure: config.cookie_secure,
        })
    }
}
