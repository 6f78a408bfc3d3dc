//! Tienda Core - Shared types library.
//!
//! This crate provides common types used across all tienda components:
//! - `client` - Typed REST client for the commerce backend
//! - `storefront` - Client-side application state (cart, session, guard)
//! - `cli` - Command-line storefront client
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, the role type, and wire status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
