//! Query parameter types for the camp endpoints.
//!
//! Parameter names follow the public API's camelCase convention.

use serde::{de, Deserialize, Deserializer};

/// `?includeTalks=` flag, defaulting to `false`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeTalksParams {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub include_talks: bool,
}

/// `?theDate=&includeTalks=` for the search endpoint.
///
/// `the_date` is parsed by the handler so timestamps can be accepted too. A
/// missing date matches no camp.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub the_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub include_talks: bool,
}

/// Accept `true`/`false` in any letter case (`True`, `FALSE`, ...).
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(de::Error::invalid_value(
            de::Unexpected::Str(&raw),
            &"true or false",
        ))
    }
}
