//! Domain types and pure logic for the Code Camp API.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on top of it.

pub mod camp;
pub mod error;
pub mod types;
