//! Audit log commands. Admin only.

use chrono::NaiveDate;

use tienda_client::models::AuditFilter;
use tienda_core::{AuditAction, UserId};
use tienda_storefront::Route;

use super::{CliError, authorize, print_json, require_roles, state};

#[allow(clippy::too_many_arguments)]
pub async fn list(
    entity: Option<String>,
    entity_id: Option<String>,
    action: Option<String>,
    user_id: Option<UserId>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<(), CliError> {
    let state = state()?;
    let session = authorize(&state, Route::Products).await?;
    require_roles(&session, &["ADMIN"])?;

    let filter = AuditFilter {
        entity,
        entity_id,
        action: action.map(AuditAction::from),
        user_id,
        date_from,
        date_to,
        page,
        limit,
    };
    let page = state.client().list_audit(&filter).await?;
    print_json(&page)
}

pub async fn history(entity: &str, entity_id: &str) -> Result<(), CliError> {
    let state = state()?;
    let session = authorize(&state, Route::Products).await?;
    require_roles(&session, &["ADMIN"])?;

    let records = state.client().audit_history(entity, entity_id).await?;
    print_json(&records)
}

pub async fn stats(date_from: Option<NaiveDate>, date_to: Option<NaiveDate>) -> Result<(), CliError> {
    let state = state()?;
    let session = authorize(&state, Route::Products).await?;
    require_roles(&session, &["ADMIN"])?;

    let stats = state.client().audit_stats(date_from, date_to).await?;
    print_json(&stats)
}
