//! Authentication wire types.

use serde::{Deserialize, Serialize};

use tienda_core::{Role, UserId};

/// Login credentials.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The user identity returned by login and register.
///
/// Roles arrive as plain strings here, unlike the full role records on
/// `/usuarios`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(rename = "idUsuario")]
    pub id: UserId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cedula", default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    pub email: String,
    #[serde(rename = "estado")]
    pub status: String,
    pub roles: Vec<Role>,
}

/// Response from `/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: AuthUser,
    #[serde(default)]
    pub token: Option<String>,
}

/// Payload for `/auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "cedula")]
    pub national_id: String,
}

/// Response from `/auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub user: AuthUser,
    #[serde(default)]
    pub token: Option<String>,
}

/// Payload for `/auth/change-password`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Payload for `/auth/password-recovery/request`.
#[derive(Debug, Clone, Serialize)]
pub struct RecoveryRequest {
    pub email: String,
}

/// Payload for `/auth/password-recovery/reset`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

/// Generic `{message}` acknowledgement used by the password flows.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_deserializes_with_role_strings() {
        let json = r#"{
            "user": {
                "idUsuario": 7,
                "nombre": "Ana",
                "email": "ana@example.com",
                "estado": "activo",
                "roles": ["cliente"]
            },
            "token": "jwt-token"
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.user.id, UserId::new(7));
        assert!(response.user.roles[0].matches("CLIENTE"));
        assert_eq!(response.token.as_deref(), Some("jwt-token"));
    }

    #[test]
    fn token_is_optional() {
        let json = r#"{
            "user": {
                "idUsuario": 7,
                "nombre": "Ana",
                "email": "ana@example.com",
                "estado": "activo",
                "roles": []
            }
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(response.token.is_none());
    }

    #[test]
    fn reset_request_uses_camel_case() {
        let request = ResetPasswordRequest {
            email: "ana@example.com".to_string(),
            code: "123456".to_string(),
            new_password: "s3guro!".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "email": "ana@example.com",
                "code": "123456",
                "newPassword": "s3guro!"
            })
        );
    }
}
