//! Shared application state.

use secrecy::SecretString;

use tienda_client::{ApiClient, ApiConfig, ApiError};

use crate::cart::CartStore;
use crate::session::{CachedSession, SessionCache};

/// Everything a running frontend needs: the API client, the session
/// cache, and the cart. The cart is a plain owned value; callers thread
/// `&mut` access through rather than sharing a global.
#[derive(Clone)]
pub struct AppState {
    client: ApiClient,
    sessions: SessionCache,
    cart: CartStore,
}

impl AppState {
    /// Build the state from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: ApiClient::new(config)?,
            sessions: SessionCache::new(&config.session_dir),
            cart: CartStore::new(),
        })
    }

    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    #[must_use]
    pub const fn sessions(&self) -> &SessionCache {
        &self.sessions
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Load the cached session, if any, and arm the client with its token.
    ///
    /// A cookie-mode login caches the user with an empty token entry; the
    /// session still restores, but no bearer header is installed for it.
    pub async fn restore_session(&self) -> Option<CachedSession> {
        let session = self.sessions.load()?;
        if !session.token.is_empty() {
            self.client
                .set_token(SecretString::from(session.token.clone()))
                .await;
        }
        Some(session)
    }
}

#[cfg(test)]
mod tests {
    use tienda_client::models::AuthUser;
    use tienda_core::{Role, UserId};

    use super::*;

    fn state_in(dir: &std::path::Path) -> AppState {
        let config = ApiConfig::new("https://api.example.com/v1", dir.to_path_buf()).unwrap();
        AppState::new(&config).unwrap()
    }

    #[tokio::test]
    async fn restore_arms_the_client_with_the_cached_token() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path());
        assert!(state.restore_session().await.is_none());
        assert!(!state.client().has_token().await);

        let user = AuthUser {
            id: UserId::new(1),
            name: "Ana".to_owned(),
            national_id: None,
            email: "ana@example.com".to_owned(),
            status: "ACTIVO".to_owned(),
            roles: vec![Role::from("CLIENTE")],
        };
        state.sessions().store(&user, "jwt-abc").unwrap();

        let session = state.restore_session().await.unwrap();
        assert_eq!(session.token, "jwt-abc");
        assert!(state.client().has_token().await);
    }

    #[tokio::test]
    async fn cookie_mode_session_restores_without_a_bearer_token() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path());

        let user = AuthUser {
            id: UserId::new(2),
            name: "Luis".to_owned(),
            national_id: None,
            email: "luis@example.com".to_owned(),
            status: "ACTIVO".to_owned(),
            roles: vec![Role::from("CLIENTE")],
        };
        state.sessions().store(&user, "").unwrap();

        let session = state.restore_session().await.unwrap();
        assert_eq!(session.user.email, "luis@example.com");
        assert!(!state.client().has_token().await);
    }
}
