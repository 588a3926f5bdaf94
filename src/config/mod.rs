//! Configuration module for handling environment variables and .env files

use crate::client::{
    Credentials, Endpoints, RedditError, Session, DEFAULT_API_URL, DEFAULT_AUTH_URL,
};
use dotenv::dotenv;
use log::{debug, info};
use std::env;
use thiserror::Error;

pub const DEFAULT_USER_AGENT: &str = concat!("redkit/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),

    #[error(transparent)]
    Session(#[from] RedditError),
}

/// Application configuration derived from environment variables and .env file
#[derive(Clone)]
pub struct AppConfig {
    // Reddit API credentials
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,

    // Reddit API settings
    pub user_agent: String,
    pub auth_url: String,
    pub api_url: String,

    // Token obtained elsewhere; skips the login when set
    pub access_token: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .field("user_agent", &self.user_agent)
            .field("auth_url", &self.auth_url)
            .field("api_url", &self.api_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "<set>"))
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            username: None,
            password: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            access_token: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn load() -> Self {
        // Try to load .env file, but continue even if it doesn't exist
        match dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(_) => debug!("No .env file found, using system environment variables only"),
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let defaults = Self::default();

        Self {
            client_id: get("REDDIT_CLIENT_ID"),
            client_secret: get("REDDIT_CLIENT_SECRET"),
            username: get("REDDIT_USERNAME"),
            password: get("REDDIT_PASSWORD"),
            user_agent: get("REDDIT_USER_AGENT").unwrap_or(defaults.user_agent),
            auth_url: get("REDDIT_AUTH_URL").unwrap_or(defaults.auth_url),
            api_url: get("REDDIT_API_URL").unwrap_or(defaults.api_url),
            access_token: get("REDDIT_ACCESS_TOKEN"),
        }
    }

    pub fn require_client_id(&self) -> Result<String, ConfigError> {
        require(&self.client_id, "REDDIT_CLIENT_ID")
    }

    pub fn require_client_secret(&self) -> Result<String, ConfigError> {
        require(&self.client_secret, "REDDIT_CLIENT_SECRET")
    }

    pub fn require_username(&self) -> Result<String, ConfigError> {
        require(&self.username, "REDDIT_USERNAME")
    }

    pub fn require_password(&self) -> Result<String, ConfigError> {
        require(&self.password, "REDDIT_PASSWORD")
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            auth_url: self.auth_url.clone(),
            api_url: self.api_url.clone(),
        }
    }

    /// Create a Session from this configuration.
    ///
    /// With `REDDIT_ACCESS_TOKEN` set the token is used as-is and only the
    /// username is required; otherwise all four credentials are needed and
    /// the session logs in.
    pub async fn create_session(&self) -> Result<Session, ConfigError> {
        if let Some(token) = &self.access_token {
            debug!("Using access token from configuration");
            let credentials = Credentials {
                username: self.require_username()?,
                password: self.password.clone().unwrap_or_default(),
                app_id: self.client_id.clone().unwrap_or_default(),
                app_secret: self.client_secret.clone().unwrap_or_default(),
            };
            let mut session =
                Session::unauthenticated(credentials, &self.user_agent, self.endpoints())?;
            session.set_access_token(token);
            return Ok(session);
        }

        let credentials = Credentials {
            username: self.require_username()?,
            password: self.require_password()?,
            app_id: self.require_client_id()?,
            app_secret: self.require_client_secret()?,
        };

        Ok(Session::connect(credentials, &self.user_agent, self.endpoints()).await?)
    }
}

fn require(value: &Option<String>, name: &'static str) -> Result<String, ConfigError> {
    value.clone().ok_or(ConfigError::Missing(name))
}
