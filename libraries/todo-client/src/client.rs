//! Main Todo List API client.

use crate::auth::AuthClient;
use crate::error::{ApiError, ClientError, Result};
use crate::tasks::TaskClient;
use crate::types::ClientConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// Client for the Todo List backend.
///
/// Session cookies set by the backend are kept in an in-memory cookie store
/// and sent back on every later request. One network attempt per call: no
/// retries and no timeouts.
///
/// # Example
///
/// ```ignore
/// use todo_client::{ClientConfig, LoginRequest, TodoClient};
///
/// let client = TodoClient::new(ClientConfig::new("http://localhost:4000/api"))?;
///
/// let login = client.auth().login(&LoginRequest::new("a@b.com", "secret123")).await?;
/// println!("Logged in as {}", login.user.email);
///
/// let tasks = client.tasks().list(&Default::default()).await?;
/// println!("Found {} tasks", tasks.len());
/// ```
#[derive(Debug, Clone)]
pub struct TodoClient {
    http: Client,
    base_url: String,
}

impl TodoClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .user_agent(format!("TodoList/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!(base_url = %base_url, "Created API client");

        Ok(Self { http, base_url })
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Authentication endpoints (`/auth/*`).
    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(&self.http, &self.base_url)
    }

    /// Task endpoints (`/tasks`).
    pub fn tasks(&self) -> TaskClient<'_> {
        TaskClient::new(&self.http, &self.base_url)
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
    }

    let url = url.trim_end_matches('/').to_string();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ClientError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    Url::parse(&url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", url, e)))?;

    Ok(url)
}

/// Decode a success body as `T`, or turn a non-2xx response into
/// [`ClientError::Api`].
pub(crate) async fn parse_response<T: DeserializeOwned>(
    response: Response,
    what: &str,
) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response.json::<T>().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse {} response: {}", what, e))
        })
    } else {
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_body(status.as_u16(), &body);

        warn!(
            status = %status,
            message = %error.message,
            field_errors = error.errors.as_ref().map_or(0, |e| e.len()),
            "{} request failed",
            what
        );

        Err(ClientError::Api(error))
    }
}
