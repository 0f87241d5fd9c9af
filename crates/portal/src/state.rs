//! Shared application state.

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::TokenSigner;
use crate::config::PortalConfig;

/// Application state shared across all request handlers.
///
/// Cheap to clone; the inner state sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: PortalConfig,
    pool: PgPool,
    tokens: TokenSigner,
}

impl AppState {
    /// Build the state from loaded configuration and a connected pool.
    #[must_use]
    pub fn new(config: PortalConfig, pool: PgPool) -> Self {
        let tokens = TokenSigner::new(&config.token_secret, config.token_ttl_hours);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                tokens,
            }),
        }
    }

    /// Application configuration.
    #[must_use]
    pub fn config(&self) -> &PortalConfig {
        &self.inner.config
    }

    /// Database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Bearer token signer.
    #[must_use]
    pub fn tokens(&self) -> &TokenSigner {
        &self.inner.tokens
    }
}
