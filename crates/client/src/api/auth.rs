//! Authentication endpoints (`/auth`).

use secrecy::SecretString;

use crate::error::ApiError;
use crate::models::{
    ChangePasswordRequest, Credentials, LoginResponse, MessageResponse, RecoveryRequest,
    RegisterRequest, RegisterResponse, ResetPasswordRequest,
};

use super::ApiClient;

const AUTH: &str = "/auth";

impl ApiClient {
    /// Log in. On success the returned bearer token (when the backend
    /// issues one) is installed on this client for subsequent requests.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` on bad credentials.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.post(&format!("{AUTH}/login"), credentials).await?;

        if let Some(token) = &response.token {
            self.set_token(SecretString::from(token.clone())).await;
        }

        Ok(response)
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.post(&format!("{AUTH}/register"), request).await
    }

    /// Change the authenticated user's password.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the current password is
    /// wrong.
    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post(&format!("{AUTH}/change-password"), request).await
    }

    /// Start a password recovery (the backend e-mails a code).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn request_password_recovery(
        &self,
        request: &RecoveryRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post(&format!("{AUTH}/password-recovery/request"), request)
            .await
    }

    /// Complete a password recovery with the e-mailed code.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the code is invalid.
    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post(&format!("{AUTH}/password-recovery/reset"), request)
            .await
    }
}
