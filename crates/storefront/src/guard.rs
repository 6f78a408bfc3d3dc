//! Navigation guard.
//!
//! One pure decision function: given a target route and the current
//! session, either let navigation proceed or name the route to go to
//! instead. Unauthenticated users land on login; authenticated users
//! lacking a required role are sent to the product catalog.

use tienda_core::Role;

use crate::routes::{Route, RouteAccess};
use crate::session::CachedSession;

/// What the guard decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDecision {
    Proceed,
    Redirect(Route),
}

/// Evaluate a navigation attempt.
#[must_use]
pub fn check(route: Route, session: Option<&CachedSession>) -> NavDecision {
    // The root path is never rendered; it always forwards to login.
    if route == Route::Home {
        return NavDecision::Redirect(Route::Login);
    }

    match route.access() {
        RouteAccess::Public => NavDecision::Proceed,
        RouteAccess::Authenticated => match session {
            Some(_) => NavDecision::Proceed,
            None => NavDecision::Redirect(Route::Login),
        },
        RouteAccess::Roles(allowed) => {
            let Some(session) = session else {
                return NavDecision::Redirect(Route::Login);
            };
            if Role::any_match(&session.user.roles, allowed) {
                NavDecision::Proceed
            } else {
                tracing::debug!(path = route.path(), "navigation denied by role check");
                NavDecision::Redirect(Route::Products)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tienda_client::models::AuthUser;
    use tienda_core::{Role, UserId};

    use super::*;

    fn session_with_roles(roles: &[&str]) -> CachedSession {
        CachedSession {
            user: AuthUser {
                id: UserId::new(1),
                name: "Ana".to_owned(),
                national_id: None,
                email: "ana@example.com".to_owned(),
                status: "ACTIVO".to_owned(),
                roles: roles.iter().copied().map(Role::from).collect(),
            },
            token: "jwt".to_owned(),
        }
    }

    #[test]
    fn anonymous_users_are_sent_to_login() {
        assert_eq!(
            check(Route::Products, None),
            NavDecision::Redirect(Route::Login)
        );
        assert_eq!(
            check(Route::Orders, None),
            NavDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn public_routes_always_proceed() {
        assert_eq!(check(Route::Login, None), NavDecision::Proceed);
        assert_eq!(check(Route::Register, None), NavDecision::Proceed);
        assert_eq!(check(Route::RecoveryPassword, None), NavDecision::Proceed);
    }

    #[test]
    fn home_always_forwards_to_login() {
        let session = session_with_roles(&["ADMIN"]);
        assert_eq!(
            check(Route::Home, Some(&session)),
            NavDecision::Redirect(Route::Login)
        );
        assert_eq!(check(Route::Home, None), NavDecision::Redirect(Route::Login));
    }

    #[test]
    fn matching_role_proceeds() {
        let session = session_with_roles(&["CLIENTE"]);
        assert_eq!(check(Route::Orders, Some(&session)), NavDecision::Proceed);
        assert_eq!(
            check(Route::CreateOrder, Some(&session)),
            NavDecision::Proceed
        );
    }

    #[test]
    fn role_comparison_ignores_case() {
        let session = session_with_roles(&["cliente"]);
        assert_eq!(check(Route::Orders, Some(&session)), NavDecision::Proceed);
    }

    #[test]
    fn missing_role_redirects_to_products() {
        let session = session_with_roles(&["CLIENTE"]);
        assert_eq!(
            check(Route::Invoices, Some(&session)),
            NavDecision::Redirect(Route::Products)
        );
        assert_eq!(
            check(Route::DirectInvoice, Some(&session)),
            NavDecision::Redirect(Route::Products)
        );
    }

    #[test]
    fn signed_in_users_may_browse_products() {
        let session = session_with_roles(&["SUPERVISOR"]);
        assert_eq!(check(Route::Products, Some(&session)), NavDecision::Proceed);
        assert_eq!(check(Route::Profile, Some(&session)), NavDecision::Proceed);
    }
}
