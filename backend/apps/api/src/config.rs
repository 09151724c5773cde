//! Process Configuration
//!
//! Everything the server reads from the environment, resolved once at
//! startup. Lookups go through a closure so the rules can be tested
//! without touching the real environment.

use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use axum::http::HeaderValue;
use platform::crypto::secret_from_base64;
use review::ReviewConfig;

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Default CORS allow-list (local frontend dev servers)
pub const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL URL; `None` runs on in-memory stores (debug builds only)
    pub database_url: Option<String>,
    pub port: u16,
    pub frontend_origins: Vec<HeaderValue>,
    pub auth: AuthConfig,
    pub review: ReviewConfig,
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// Load using `lookup` for variables
    ///
    /// `development` relaxes the rules: a missing database URL selects the
    /// in-memory stores and a missing token secret is generated.
    pub fn from_lookup<F>(lookup: F, development: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if database_url.is_none() && !development {
            bail!("DATABASE_URL must be set in production");
        }

        let mut auth = match lookup("AUTH_TOKEN_SECRET") {
            Some(encoded) => {
                let secret = secret_from_base64(encoded.trim())
                    .context("AUTH_TOKEN_SECRET must be base64 of 32 bytes")?;
                AuthConfig::from_secret(secret)
            }
            None if development => {
                tracing::warn!("AUTH_TOKEN_SECRET not set, using a random secret");
                AuthConfig::with_random_secret()
            }
            None => bail!("AUTH_TOKEN_SECRET must be set in production"),
        };

        if let Some(ttl) = lookup("AUTH_TOKEN_TTL_SECS") {
            let secs: u64 = ttl
                .trim()
                .parse()
                .context("AUTH_TOKEN_TTL_SECS must be a whole number of seconds")?;
            let ttl = Duration::from_secs(secs);
            if ttl > AuthConfig::MAX_TOKEN_TTL {
                bail!(
                    "AUTH_TOKEN_TTL_SECS must not exceed {} seconds",
                    AuthConfig::MAX_TOKEN_TTL.as_secs()
                );
            }
            auth = auth.with_token_ttl(ttl);
        }

        let port = match lookup("PORT") {
            Some(port) => port.trim().parse().context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();

        Ok(Self {
            database_url,
            port,
            frontend_origins,
            auth,
            review: ReviewConfig::default(),
        })
    }
}
