pub mod camp;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Version segment carried by every API path.
pub const API_VERSION: &str = "2.0";

/// Prefix the versioned route tree is nested under.
pub const API_PREFIX: &str = "/api/v2.0";

/// Full path of the camp collection, used to build `Location` headers.
pub const CAMPS_PATH: &str = "/api/v2.0/camps";

/// Build the versioned route tree.
///
/// Route hierarchy:
///
/// ```text
/// /camps                                           list, create
/// /camps/search                                    search by event date
/// /camps/{moniker}                                 get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/camps", camp::router())
}
