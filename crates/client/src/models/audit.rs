//! Audit log (auditoria) wire types.
//!
//! `datos_anteriores`/`datos_nuevos` are backend-defined snapshots with no
//! fixed schema; they are carried as raw JSON values.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use tienda_core::{AuditAction, AuditId, UserId};

/// One audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    #[serde(rename = "idAuditoria")]
    pub id: AuditId,
    #[serde(rename = "entidad")]
    pub entity: String,
    #[serde(rename = "idEntidad")]
    pub entity_id: String,
    #[serde(rename = "accion")]
    pub action: AuditAction,
    #[serde(rename = "usuarioId")]
    pub user_id: UserId,
    #[serde(rename = "usuarioEmail")]
    pub user_email: String,
    /// Entity snapshot before the change, if the backend recorded one.
    #[serde(rename = "datosAnteriores", default)]
    pub previous_data: Option<serde_json::Value>,
    /// Entity snapshot after the change, if the backend recorded one.
    #[serde(rename = "datosNuevos", default)]
    pub new_data: Option<serde_json::Value>,
    pub ip: String,
    #[serde(rename = "userAgent", default)]
    pub user_agent: Option<String>,
    #[serde(rename = "fecha")]
    pub date: DateTime<Utc>,
    #[serde(rename = "detalles", default)]
    pub details: Option<String>,
}

/// Listing filter for the audit log.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditFilter {
    #[serde(rename = "entidad", skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(rename = "idEntidad", skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(rename = "accion", skip_serializing_if = "Option::is_none")]
    pub action: Option<AuditAction>,
    #[serde(rename = "usuarioId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(rename = "fechaDesde", skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(rename = "fechaHasta", skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Count of audit entries per action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionCount {
    #[serde(rename = "accion")]
    pub action: String,
    pub total: u64,
}

/// Count of audit entries per entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityCount {
    #[serde(rename = "entidad")]
    pub entity: String,
    pub total: u64,
}

/// Aggregate audit statistics from `/auditoria/estadisticas`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditStats {
    pub total: u64,
    #[serde(rename = "porAccion")]
    pub by_action: Vec<ActionCount>,
    #[serde(rename = "porEntidad")]
    pub by_entity: Vec<EntityCount>,
    #[serde(rename = "usuariosActivos")]
    pub active_users: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tolerates_null_payloads_and_unknown_action() {
        let json = r#"{
            "idAuditoria": "a-1",
            "entidad": "producto",
            "idEntidad": "3",
            "accion": "bulk_import",
            "usuarioId": 1,
            "usuarioEmail": "ana@example.com",
            "datosAnteriores": null,
            "datosNuevos": {"nombre": "Cafe"},
            "ip": "10.0.0.1",
            "userAgent": null,
            "fecha": "2026-04-01T08:00:00.000Z",
            "detalles": null
        }"#;
        let record: AuditRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.action, AuditAction::Other("bulk_import".to_string()));
        assert!(record.previous_data.is_none());
        assert_eq!(
            record.new_data.unwrap(),
            serde_json::json!({"nombre": "Cafe"})
        );
        assert!(record.user_agent.is_none());
    }

    #[test]
    fn filter_serializes_action_as_wire_string() {
        let filter = AuditFilter {
            action: Some(AuditAction::ChangeStatus),
            entity: Some("pedido".to_string()),
            ..AuditFilter::default()
        };
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"accion": "change_status", "entidad": "pedido"})
        );
    }
}
