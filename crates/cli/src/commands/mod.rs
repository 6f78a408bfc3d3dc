//! Command implementations.
//!
//! Every protected command walks the same path a frontend navigation
//! would: restore the cached session, run the route guard for the screen
//! the command corresponds to, and only then talk to the backend.

pub mod audit;
pub mod auth;
pub mod invoices;
pub mod orders;
pub mod products;
pub mod users;

use serde::Serialize;
use thiserror::Error;

use tienda_client::{ApiConfig, ApiError, ConfigError};
use tienda_core::Role;
use tienda_storefront::{AppState, CachedSession, NavDecision, Route, SessionError, guard};

/// Errors surfaced by any command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("could not render response: {0}")]
    Render(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArg(String),

    #[error("{0}")]
    Denied(String),
}

/// Build the application state from the environment.
pub(crate) fn state() -> Result<AppState, CliError> {
    let config = ApiConfig::from_env()?;
    Ok(AppState::new(&config)?)
}

/// Restore the session and run the navigation guard for `route`.
///
/// Protected routes only ever proceed with a session in hand, so a
/// successful check hands the session back to the command.
pub(crate) async fn authorize(state: &AppState, route: Route) -> Result<CachedSession, CliError> {
    let session = state.restore_session().await;
    match guard::check(route, session.as_ref()) {
        NavDecision::Proceed => session.ok_or_else(|| {
            CliError::Denied(format!("{} requires a signed-in session", route.path()))
        }),
        NavDecision::Redirect(Route::Login) => Err(CliError::Denied(
            "not signed in; run `tienda auth login` first".to_owned(),
        )),
        NavDecision::Redirect(target) => Err(CliError::Denied(format!(
            "your roles do not allow this; you would be sent back to {}",
            target.path()
        ))),
    }
}

/// Require one of `allowed` on top of an already-authorized session.
/// Used by the back-office commands that have no storefront screen.
pub(crate) fn require_roles(session: &CachedSession, allowed: &[&str]) -> Result<(), CliError> {
    if Role::any_match(&session.user.roles, allowed) {
        Ok(())
    } else {
        Err(CliError::Denied(format!(
            "this command requires one of the roles: {}",
            allowed.join(", ")
        )))
    }
}

/// Pretty-print a response payload.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
