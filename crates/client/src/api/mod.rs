//! Shared HTTP client for the commerce backend.
//!
//! A single [`ApiClient`] is cloned everywhere (cheap, `Arc` inside). It
//! owns the reqwest client - built with a cookie store since the backend
//! is credentialed - and an in-memory bearer token cache. Every request
//! attaches the token when one is present; a 401 response is observed and
//! logged here but deliberately does not clear any state or redirect.
//! Resource endpoints live in the sibling modules, one per backend
//! resource.

mod audit;
mod auth;
mod invoices;
mod orders;
mod products;
mod users;

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Typed client for the commerce backend.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
    /// Bearer token installed by a successful login (or loaded from the
    /// session cache by the caller).
    token: RwLock<Option<SecretString>>,
}

impl ApiClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the underlying TLS/connection setup
    /// fails.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.base_url.clone(),
                token: RwLock::new(None),
            }),
        })
    }

    /// Install a bearer token for subsequent requests.
    pub async fn set_token(&self, token: SecretString) {
        *self.inner.token.write().await = Some(token);
    }

    /// Drop the cached bearer token.
    pub async fn clear_token(&self) {
        *self.inner.token.write().await = None;
    }

    /// Whether a bearer token is currently installed.
    pub async fn has_token(&self) -> bool {
        self.inner.token.read().await.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    pub(crate) async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized + Sync,
    {
        let mut builder = self.inner.client.get(self.url(path));
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.execute(&Method::GET, path, builder).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let builder = self.inner.client.post(self.url(path)).json(body);
        self.execute(&Method::POST, path, builder).await
    }

    pub(crate) async fn patch<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let mut builder = self.inner.client.patch(self.url(path));
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.execute(&Method::PATCH, path, builder).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.inner.client.delete(self.url(path));
        self.send(&Method::DELETE, path, builder).await?;
        Ok(())
    }

    /// Attach the bearer token, send, and map the status code.
    async fn send(
        &self,
        method: &Method,
        path: &str,
        mut builder: RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        if let Some(token) = self.inner.token.read().await.as_ref() {
            builder = builder.bearer_auth(token.expose_secret());
        }

        tracing::debug!(%method, path, "backend request");
        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Observe only: session cleanup and redirects are the
            // caller's responsibility.
            tracing::warn!(path, "backend returned 401; credential expired or invalid");
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Unauthorized(body));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        Ok(response)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: &Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(method, path, builder).await?;
        Ok(response.json().await?)
    }
}
