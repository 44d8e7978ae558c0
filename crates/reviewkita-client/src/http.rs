//! Generic request helper for the ReviewKita backend.
//!
//! One cross-cutting policy lives here: an HTTP 401 response means the
//! session is invalid, so the stored credential is cleared, observers are
//! notified with the login redirect target, and the call returns
//! [`Error::SessionExpired`]. Everything else is a thin pass-through of
//! method, path, JSON body, and bearer auth header.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::{header, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use reviewkita_core::{defaults, Error, EventBus, Result, SearchEvent};

use crate::config::ApiConfig;

/// HTTP client for the ReviewKita backend API.
pub struct ApiClient {
    http: Client,
    base_url: String,
    credentials: Arc<RwLock<Option<String>>>,
    bus: Option<EventBus>,
}

impl ApiClient {
    /// Create a new client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;

        info!(
            base_url = %config.base_url,
            has_token = config.token.is_some(),
            "Initializing ReviewKita API client"
        );

        Ok(Self {
            http,
            base_url: config.base_url,
            credentials: Arc::new(RwLock::new(config.token)),
            bus: None,
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env())
    }

    /// Attach an event bus so session-expiry is broadcast to observers.
    pub fn with_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Store a bearer token for subsequent requests.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.credentials.write().unwrap() = Some(token.into());
    }

    /// Drop the stored credential.
    pub fn clear_token(&self) {
        *self.credentials.write().unwrap() = None;
    }

    /// Whether a credential is currently stored.
    pub fn has_token(&self) -> bool {
        self.credentials.read().unwrap().is_some()
    }

    fn token(&self) -> Option<String> {
        self.credentials.read().unwrap().clone()
    }

    /// Send a request and decode the JSON response.
    ///
    /// `path` is joined onto the configured base URL. The bearer header is
    /// attached when a credential is stored; `body` is sent as JSON when
    /// given.
    pub async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        let mut request = self.http.request(method.clone(), &url);
        if let Some(token) = self.token() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(method = %method, path, "api request");
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!(path, "session invalid: clearing credentials");
            self.clear_token();
            if let Some(bus) = &self.bus {
                bus.emit(SearchEvent::SessionExpired {
                    redirect_to: defaults::LOGIN_ROUTE.to_string(),
                });
            }
            return Err(Error::SessionExpired);
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .and_then(|body| extract_error_message(&body))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            warn!(path, status = status.as_u16(), error = %message, "api error response");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    /// GET `path` and decode the response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<(), T>(Method::GET, path, None).await
    }

    /// POST `body` to `path` and decode the response.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// DELETE `path` and decode the response.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<(), T>(Method::DELETE, path, None).await
    }
}

/// Pull a human-readable message out of an error body.
///
/// The backend answers with `{"message": ...}` on validation failures and
/// `{"error": ...}` from its older handlers.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(|m| m.as_str())
        .map(String::from)
}
