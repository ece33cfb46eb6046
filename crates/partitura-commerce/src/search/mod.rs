//! Catalog query module.
//!
//! Pure filtering, sorting, and pagination over an immutable snapshot of
//! score records. Callers fetch the snapshot from the catalog API; nothing
//! here caches or mutates it.

mod query;
mod results;

pub use query::{query, query_page, FilterSpec, SortKey};
pub use results::{Pagination, ScorePage};
