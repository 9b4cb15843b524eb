#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Could not find {entity} with {field} of {value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    /// Shorthand for a camp lookup by moniker that found nothing.
    pub fn camp_not_found(moniker: &str) -> Self {
        CoreError::NotFound {
            entity: "camp",
            field: "moniker",
            value: moniker.to_string(),
        }
    }
}
