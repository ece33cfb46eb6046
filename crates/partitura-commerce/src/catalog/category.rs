//! Category types.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A catalog category (e.g., "Sacred", "Folk", "Christmas").
///
/// Categories are a flat list ordered by `display_order`; the catalog has no
/// nesting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Icon name for the UI.
    #[serde(default)]
    pub icon: Option<String>,
    /// Position in category listings.
    #[serde(default)]
    pub display_order: i32,
}

impl Category {
    /// Create a category with just the required fields.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            icon: None,
            display_order: 0,
        }
    }

    /// Sort a category list in display order, name as tie-break.
    pub fn sort_for_display(categories: &mut [Category]) {
        categories.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.name.cmp(&b.name))
        });
    }
}
