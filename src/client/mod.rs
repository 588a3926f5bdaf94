pub mod error;
pub mod response;

pub use error::{RedditError, Result};

use log::{debug, info};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Request};
use serde_json::Value;
use url::Url;

pub const DEFAULT_AUTH_URL: &str = "https://www.reddit.com";
pub const DEFAULT_API_URL: &str = "https://oauth.reddit.com";

const TOKEN_PATH: &str = "/api/v1/access_token";

/// Credentials for a Reddit "script" app and the account it acts for.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub app_id: String,
    pub app_secret: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str, app_id: &str, app_secret: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            app_id: app_id.to_string(),
            app_secret: app_secret.to_string(),
        }
    }
}

/// Base URLs for the token endpoint and the authenticated API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub auth_url: String,
    pub api_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// An authenticated connection to Reddit.
///
/// Holds the credentials, the bearer token and the HTTP client every
/// operation goes through. Only [`Session::login`] and
/// [`Session::set_access_token`] change the token, and both need `&mut self`.
#[derive(Clone)]
pub struct Session {
    client: Client,
    credentials: Credentials,
    user_agent: String,
    endpoints: Endpoints,
    access_token: Option<String>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.credentials.username)
            .field("user_agent", &self.user_agent)
            .field("endpoints", &self.endpoints)
            .field("authenticated", &self.access_token.is_some())
            .finish()
    }
}

impl Session {
    /// Create a session against reddit.com and log in immediately.
    pub async fn new(
        username: &str,
        password: &str,
        app_id: &str,
        app_secret: &str,
        user_agent: &str,
    ) -> Result<Self> {
        Self::connect(
            Credentials::new(username, password, app_id, app_secret),
            user_agent,
            Endpoints::default(),
        )
        .await
    }

    /// Create a session against the given endpoints and log in immediately.
    pub async fn connect(
        credentials: Credentials,
        user_agent: &str,
        endpoints: Endpoints,
    ) -> Result<Self> {
        let mut session = Self::unauthenticated(credentials, user_agent, endpoints)?;
        session.login().await?;
        Ok(session)
    }

    /// Create a session without contacting Reddit. Call [`Session::login`] or
    /// [`Session::set_access_token`] before using it.
    pub fn unauthenticated(
        credentials: Credentials,
        user_agent: &str,
        endpoints: Endpoints,
    ) -> Result<Self> {
        debug!("Creating Session with user_agent: {}", user_agent);
        Ok(Self {
            client: Self::get_client(user_agent)?,
            credentials,
            user_agent: user_agent.to_string(),
            endpoints,
            access_token: None,
        })
    }

    fn get_client(user_agent: &str) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| RedditError::Construction(format!("Failed to build HTTP client: {}", e)))
    }

    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Use a token obtained elsewhere instead of logging in.
    pub fn set_access_token(&mut self, token: &str) {
        self.access_token = Some(token.to_string());
    }

    /// Obtain a bearer token with the OAuth password grant.
    ///
    /// The token is not refreshed automatically; call this again once it
    /// expires. On failure the previously stored token, if any, is kept.
    pub async fn login(&mut self) -> Result<()> {
        info!("Logging in to Reddit as {}", self.credentials.username);

        let params = [
            ("grant_type", "password"),
            ("username", self.credentials.username.as_str()),
            ("password", self.credentials.password.as_str()),
        ];

        let url = endpoint_url(&self.endpoints.auth_url, TOKEN_PATH)?;
        let auth = base64::encode(format!(
            "{}:{}",
            self.credentials.app_id, self.credentials.app_secret
        ));

        let request = self
            .client
            .post(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .header(AUTHORIZATION, format!("Basic {}", auth))
            .form(&params)
            .build()
            .map_err(|e| RedditError::Construction(e.to_string()))?;

        // Anything the token endpoint says other than a token is a failed login
        let json = self.execute(request).await.map_err(|err| match err {
            RedditError::Network(_) | RedditError::Io(_) | RedditError::Construction(_) => err,
            RedditError::ApiHttp { code, message } => RedditError::Authentication(match message {
                Some(message) => format!("token endpoint returned {}: {}", code, message),
                None => format!("token endpoint returned {}", code),
            }),
            RedditError::ApiValidation { code, description } => RedditError::Authentication(
                format!("token endpoint rejected the request: [{}] {}", code, description),
            ),
            RedditError::Decode(reason) => RedditError::Authentication(format!(
                "unreadable token endpoint response: {}",
                reason
            )),
            RedditError::Authentication(_) => err,
        })?;

        let token = json["access_token"]
            .as_str()
            .ok_or_else(|| {
                RedditError::Authentication(
                    "Failed to extract access token from response".to_string(),
                )
            })?
            .to_string();

        self.access_token = Some(token);
        debug!(
            "Password grant successful, token obtained with scopes: {:?}",
            json["scope"].as_str()
        );

        Ok(())
    }

    /// Build a request to the authenticated API.
    ///
    /// For `GET` the form goes into the query string, for every other verb it
    /// becomes a form-encoded body. Nothing is sent.
    pub fn request<K, V>(&self, method: Method, path: &str, form: &[(K, V)]) -> Result<Request>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut url = endpoint_url(&self.endpoints.api_url, path)?;
        let token = self.access_token.as_deref().unwrap_or_default();

        let mut builder = if method == Method::GET {
            if !form.is_empty() {
                let mut query = url.query_pairs_mut();
                for (key, value) in form {
                    query.append_pair(key.as_ref(), value.as_ref());
                }
            }
            self.client.request(method, url)
        } else {
            let body = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(form.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
                .finish();
            self.client
                .request(method, url)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body)
        };

        builder = builder
            .header(USER_AGENT, self.user_agent.as_str())
            .header(AUTHORIZATION, format!("bearer {}", token));

        builder
            .build()
            .map_err(|e| RedditError::Construction(e.to_string()))
    }

    /// Send a request and run the reply through [`response::interpret`].
    pub async fn execute(&self, request: Request) -> Result<Value> {
        debug!("{} {}", request.method(), request.url());

        let response = self
            .client
            .execute(request)
            .await
            .map_err(RedditError::Network)?;
        debug!("Response status: {}", response.status());

        let body = response.bytes().await.map_err(RedditError::Io)?;
        debug!("Response body length: {} bytes", body.len());

        response::interpret(&body)
    }

    /// Build, send and interpret in one go.
    pub(crate) async fn call<K, V>(&self, method: Method, path: &str, form: &[(K, V)]) -> Result<Value>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let request = self.request(method, path, form)?;
        self.execute(request).await
    }
}

/// `base` + `path`, tolerating a trailing slash on the configured base.
fn endpoint_url(base: &str, path: &str) -> Result<Url> {
    Ok(Url::parse(&format!("{}{}", base.trim_end_matches('/'), path))?)
}
