//! Audit log endpoints (`/auditoria`).

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{AuditFilter, AuditRecord, AuditStats, Page};

use super::ApiClient;

const AUDIT: &str = "/auditoria";

#[derive(Serialize)]
struct StatsQuery {
    #[serde(rename = "fechaDesde", skip_serializing_if = "Option::is_none")]
    date_from: Option<NaiveDate>,
    #[serde(rename = "fechaHasta", skip_serializing_if = "Option::is_none")]
    date_to: Option<NaiveDate>,
}

impl ApiClient {
    /// List audit entries matching `filter`, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn list_audit(&self, filter: &AuditFilter) -> Result<Page<AuditRecord>, ApiError> {
        self.get(AUDIT, Some(filter)).await
    }

    /// Full change history for one entity. Unpaginated.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn audit_history(
        &self,
        entity: &str,
        entity_id: &str,
    ) -> Result<Vec<AuditRecord>, ApiError> {
        self.get(&format!("{AUDIT}/historial/{entity}/{entity_id}"), None::<&()>)
            .await
    }

    /// Aggregate audit statistics, optionally restricted to a date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn audit_stats(
        &self,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<AuditStats, ApiError> {
        let query = StatsQuery { date_from, date_to };
        self.get(&format!("{AUDIT}/estadisticas"), Some(&query)).await
    }
}
