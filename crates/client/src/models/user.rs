//! User (usuario) wire types.
//!
//! The users listing uses its own pagination envelope (`data` + `meta`)
//! instead of the flat [`Page`](super::page::Page) shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tienda_core::{RoleId, UserId};

/// A role assignment as returned inside a user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleInfo {
    #[serde(rename = "idRol")]
    pub id: RoleId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

/// A user account as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "idUsuario")]
    pub id: UserId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cedula")]
    pub national_id: String,
    pub email: String,
    #[serde(rename = "estado")]
    pub status: String,
    pub roles: Vec<RoleInfo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Pagination metadata for the users listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// Paginated users response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPage {
    pub data: Vec<User>,
    pub meta: UserPageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_page_deserializes() {
        let json = r#"{
            "data": [{
                "idUsuario": 1,
                "nombre": "Ana",
                "cedula": "1712345678",
                "email": "ana@example.com",
                "estado": "activo",
                "roles": [{"idRol": 2, "nombre": "CLIENTE", "descripcion": "Cliente"}],
                "createdAt": "2026-01-01T00:00:00.000Z",
                "updatedAt": "2026-01-01T00:00:00.000Z"
            }],
            "meta": {
                "page": 1, "limit": 10, "total": 1, "totalPages": 1,
                "hasNextPage": false, "hasPreviousPage": false
            }
        }"#;
        let page: UserPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].roles[0].name, "CLIENTE");
        assert!(!page.meta.has_next_page);
    }
}
