use std::sync::Arc;

use codecamp_db::repositories::CampRepository;

use crate::links::{LinkGenerator, RouteLinkGenerator};
use crate::mapping::{CampMapper, FieldMapper};
use crate::routes::CAMPS_PATH;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The collaborators are trait objects so tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    /// Camp persistence.
    pub camps: Arc<dyn CampRepository>,
    /// Entity <-> DTO mapping.
    pub mapper: Arc<dyn CampMapper>,
    /// Canonical resource paths for `Location` headers.
    pub links: Arc<dyn LinkGenerator>,
}

impl AppState {
    /// State wired with the stock mapper and link generator.
    pub fn new(camps: Arc<dyn CampRepository>) -> Self {
        Self {
            camps,
            mapper: Arc::new(FieldMapper),
            links: Arc::new(RouteLinkGenerator::new(CAMPS_PATH)),
        }
    }
}
