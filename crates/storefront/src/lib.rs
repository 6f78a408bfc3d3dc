//! Tienda storefront state.
//!
//! Everything the views need that is not a backend call lives here:
//!
//! - [`cart`] - the shopping cart store (lines, quantities, derived
//!   totals, panel flag). It is an owned value injected into consumers,
//!   not ambient global state.
//! - [`session`] - a file-backed session cache standing in for the
//!   browser's localStorage: the `user` object and raw `token` under
//!   fixed keys, written at login, read on every navigation, cleared at
//!   logout.
//! - [`routes`] / [`guard`] - the URL space and the pre-navigation
//!   authorization check over the cached session.
//! - [`state`] - `AppState` tying the API client, session cache, and
//!   cart together.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod guard;
pub mod routes;
pub mod session;
pub mod state;

pub use cart::{CartLine, CartStore};
pub use guard::NavDecision;
pub use routes::{Route, RouteAccess};
pub use session::{CachedSession, SessionCache, SessionError};
pub use state::AppState;
