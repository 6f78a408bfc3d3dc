//! Tienda client - typed REST client for the commerce backend.
//!
//! One shared [`ApiClient`] talks to the remote API: it keeps the base URL,
//! a cookie store (the backend is credentialed), and an in-memory bearer
//! token that is attached to every request once a login has succeeded.
//! Resource methods are grouped by backend resource under [`api`]; each is
//! a thin typed wrapper over one endpoint - no retries, no caching, no
//! pagination iteration.
//!
//! # Example
//!
//! ```rust,ignore
//! use tienda_client::{ApiClient, ApiConfig};
//! use tienda_client::models::{Credentials, ProductFilter};
//!
//! let config = ApiConfig::from_env()?;
//! let client = ApiClient::new(&config)?;
//!
//! let session = client.login(&Credentials {
//!     email: "ana@example.com".into(),
//!     password: "hunter2".into(),
//! }).await?;
//!
//! let page = client.list_products(&ProductFilter::default()).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod models;

pub use api::ApiClient;
pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
