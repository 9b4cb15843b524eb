//! Response envelope types for API handlers.

use codecamp_db::models::camp::CampModel;
use serde::Serialize;

/// `{ "count": n, "results": [...] }` envelope returned by the camp listing.
#[derive(Debug, Serialize)]
pub struct CampListResponse {
    pub count: usize,
    pub results: Vec<CampModel>,
}

impl From<Vec<CampModel>> for CampListResponse {
    fn from(results: Vec<CampModel>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}
