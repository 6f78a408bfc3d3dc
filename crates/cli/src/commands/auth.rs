//! Sign-in, registration and password commands.

use tienda_client::models::{
    ChangePasswordRequest, Credentials, RecoveryRequest, RegisterRequest, ResetPasswordRequest,
};
use tienda_storefront::Route;

use super::{CliError, authorize, print_json, state};

/// Sign in and cache the session for subsequent commands.
pub async fn login(email: &str, password: &str) -> Result<(), CliError> {
    let state = state()?;
    let credentials = Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    };

    let response = state.client().login(&credentials).await?;
    // Cookie-mode backends may omit the token; the user is still cached so
    // the guard sees the session, and an empty token entry is never armed
    // as a bearer credential on restore.
    let token = response.token.as_deref().unwrap_or("");
    state.sessions().store(&response.user, token)?;

    let roles: Vec<String> = response
        .user
        .roles
        .iter()
        .map(ToString::to_string)
        .collect();
    println!(
        "Signed in as {} ({}) with roles [{}]",
        response.user.name,
        response.user.email,
        roles.join(", ")
    );
    Ok(())
}

/// Drop the cached session and forget the bearer token.
pub async fn logout() -> Result<(), CliError> {
    let state = state()?;
    state.sessions().clear()?;
    state.client().clear_token().await;
    println!("Signed out");
    Ok(())
}

/// Create a new account. The fresh session is cached like a login.
pub async fn register(
    name: &str,
    national_id: &str,
    email: &str,
    password: &str,
) -> Result<(), CliError> {
    let state = state()?;
    let request = RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        national_id: national_id.to_owned(),
    };

    let response = state.client().register(&request).await?;
    if let Some(token) = &response.token {
        state.sessions().store(&response.user, token)?;
    }
    print_json(&response.user)
}

/// Change the signed-in account's password.
pub async fn change_password(current: &str, new: &str) -> Result<(), CliError> {
    let state = state()?;
    authorize(&state, Route::Profile).await?;

    let request = ChangePasswordRequest {
        current_password: current.to_owned(),
        new_password: new.to_owned(),
    };
    let response = state.client().change_password(&request).await?;
    println!("{}", response.message);
    Ok(())
}

/// Ask the backend to email a recovery code.
pub async fn recover(email: &str) -> Result<(), CliError> {
    let state = state()?;
    let request = RecoveryRequest {
        email: email.to_owned(),
    };
    let response = state.client().request_password_recovery(&request).await?;
    println!("{}", response.message);
    Ok(())
}

/// Redeem a recovery code for a new password.
pub async fn reset(email: &str, code: &str, password: &str) -> Result<(), CliError> {
    let state = state()?;
    let request = ResetPasswordRequest {
        email: email.to_owned(),
        code: code.to_owned(),
        new_password: password.to_owned(),
    };
    let response = state.client().reset_password(&request).await?;
    println!("{}", response.message);
    Ok(())
}
