//! Route definitions for the `/camps` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::camp;
use crate::state::AppState;

/// Routes mounted at `/camps`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /search          -> search_by_date
/// GET    /{moniker}       -> get_by_moniker
/// PUT    /{moniker}       -> update
/// DELETE /{moniker}       -> delete
/// ```
///
/// `/search` is a static segment and takes priority over `/{moniker}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(camp::list).post(camp::create))
        .route("/search", get(camp::search_by_date))
        .route(
            "/{moniker}",
            get(camp::get_by_moniker)
                .put(camp::update)
                .delete(camp::delete),
        )
}
