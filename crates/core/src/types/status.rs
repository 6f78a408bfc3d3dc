//! Status enums for orders, invoices, and audit actions.
//!
//! Variant names are English; the serde renames pin each variant to the
//! exact wire value the backend uses.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "confirmado")]
    Confirmed,
    #[serde(rename = "en_proceso")]
    Processing,
    #[serde(rename = "enviado")]
    Shipped,
    #[serde(rename = "entregado")]
    Delivered,
    #[serde(rename = "cancelado")]
    Cancelled,
}

impl OrderStatus {
    /// The wire value for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pendiente",
            Self::Confirmed => "confirmado",
            Self::Processing => "en_proceso",
            Self::Shipped => "enviado",
            Self::Delivered => "entregado",
            Self::Cancelled => "cancelado",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pendiente" => Ok(Self::Pending),
            "confirmado" => Ok(Self::Confirmed),
            "en_proceso" => Ok(Self::Processing),
            "enviado" => Ok(Self::Shipped),
            "entregado" => Ok(Self::Delivered),
            "cancelado" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InvoiceStatus {
    #[default]
    #[serde(rename = "EMITIDA")]
    Issued,
    #[serde(rename = "PAGADA")]
    Paid,
    #[serde(rename = "ANULADA")]
    Voided,
}

impl InvoiceStatus {
    /// The wire value for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Issued => "EMITIDA",
            Self::Paid => "PAGADA",
            Self::Voided => "ANULADA",
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMITIDA" => Ok(Self::Issued),
            "PAGADA" => Ok(Self::Paid),
            "ANULADA" => Ok(Self::Voided),
            _ => Err(format!("invalid invoice status: {s}")),
        }
    }
}

/// Action recorded in an audit log entry.
///
/// The backend is free to emit actions this client has never heard of;
/// those land in `Other` instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuditAction {
    Login,
    Logout,
    Create,
    Update,
    Delete,
    Approve,
    Cancel,
    ChangeStatus,
    Other(String),
}

impl AuditAction {
    /// The wire value for this action.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Login => "login",
            Self::Logout => "logout",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Approve => "approve",
            Self::Cancel => "cancel",
            Self::ChangeStatus => "change_status",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for AuditAction {
    fn from(s: String) -> Self {
        match s.as_str() {
            "login" => Self::Login,
            "logout" => Self::Logout,
            "create" => Self::Create,
            "update" => Self::Update,
            "delete" => Self::Delete,
            "approve" => Self::Approve,
            "cancel" => Self::Cancel,
            "change_status" => Self::ChangeStatus,
            _ => Self::Other(s),
        }
    }
}

impl From<AuditAction> for String {
    fn from(action: AuditAction) -> Self {
        action.as_str().to_string()
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_uses_wire_values() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Processing).unwrap(),
            "\"en_proceso\""
        );
        let status: OrderStatus = serde_json::from_str("\"entregado\"").unwrap();
        assert_eq!(status, OrderStatus::Delivered);
    }

    #[test]
    fn invoice_status_round_trips() {
        for status in [
            InvoiceStatus::Issued,
            InvoiceStatus::Paid,
            InvoiceStatus::Voided,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let back: InvoiceStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn unknown_audit_action_is_preserved() {
        let action: AuditAction = serde_json::from_str("\"bulk_import\"").unwrap();
        assert_eq!(action, AuditAction::Other("bulk_import".to_string()));
        assert_eq!(serde_json::to_string(&action).unwrap(), "\"bulk_import\"");
    }

    #[test]
    fn known_audit_actions_parse() {
        let action: AuditAction = serde_json::from_str("\"change_status\"").unwrap();
        assert_eq!(action, AuditAction::ChangeStatus);
    }
}
