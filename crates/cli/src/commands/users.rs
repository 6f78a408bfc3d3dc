//! User administration commands.

use tienda_storefront::Route;

use super::{CliError, authorize, print_json, require_roles, state};

pub async fn list() -> Result<(), CliError> {
    let state = state()?;
    let session = authorize(&state, Route::Products).await?;
    require_roles(&session, &["ADMIN"])?;

    let page = state.client().list_users().await?;
    print_json(&page)
}
