//! User administration endpoint (`/usuarios`).

use crate::error::ApiError;
use crate::models::UserPage;

use super::ApiClient;

impl ApiClient {
    /// List user accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn list_users(&self) -> Result<UserPage, ApiError> {
        self.get("/usuarios", None::<&()>).await
    }
}
