//! Entity structs and wire DTOs.
//!
//! Entities mirror database rows and never leave the server; the `*Model`
//! DTOs are what the API serializes (camelCase JSON).

pub mod camp;
pub mod talk;
