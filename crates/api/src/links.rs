//! Canonical resource paths used for `Location` headers.

/// Resolves the path of a camp resource.
pub trait LinkGenerator: Send + Sync {
    /// Path of the camp with `moniker`, or `None` if no route can address it.
    fn camp_path(&self, moniker: &str) -> Option<String>;
}

/// Builds paths under a fixed collection prefix, e.g. `/api/v2.0/camps`.
///
/// Only monikers made of RFC 3986 unreserved characters produce a path;
/// anything else could not round-trip through the `/{moniker}` route.
#[derive(Debug, Clone)]
pub struct RouteLinkGenerator {
    collection: String,
}

impl RouteLinkGenerator {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into().trim_end_matches('/').to_string(),
        }
    }
}

fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

impl LinkGenerator for RouteLinkGenerator {
    fn camp_path(&self, moniker: &str) -> Option<String> {
        if moniker.is_empty() || !moniker.chars().all(is_unreserved) {
            return None;
        }
        Some(format!("{}/{moniker}", self.collection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_path_under_collection() {
        let links = RouteLinkGenerator::new("/api/v2.0/camps/");
        assert_eq!(
            links.camp_path("ATL2024").as_deref(),
            Some("/api/v2.0/camps/ATL2024")
        );
    }

    #[test]
    fn rejects_monikers_that_cannot_be_routed() {
        let links = RouteLinkGenerator::new("/api/v2.0/camps");
        assert_eq!(links.camp_path(""), None);
        assert_eq!(links.camp_path("ATL 2024"), None);
        assert_eq!(links.camp_path("ATL/2024"), None);
    }
}
