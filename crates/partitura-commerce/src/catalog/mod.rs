//! Score catalog module.
//!
//! Read-only records as delivered by the catalog API: scores, the composers
//! who wrote them, and the categories they are filed under.

mod category;
mod composer;
mod score;

pub use category::Category;
pub use composer::Composer;
pub use score::{ChoirType, Difficulty, Score, Tag};
