//! HTTP handlers for blog CRUD.

pub mod blog;
pub use blog::*;
