//! Composer types.

use crate::ids::ComposerId;
use serde::{Deserialize, Serialize};

/// A composer whose scores are sold in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Composer {
    /// Unique composer identifier.
    pub id: ComposerId,
    /// Full name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Biography text.
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
    #[serde(default)]
    pub birthplace: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    /// Whether the composer is featured on the home page.
    pub is_featured: bool,
    /// Number of scores by this composer, when the listing includes the count.
    #[serde(default)]
    pub scores_count: Option<i64>,
}

impl Composer {
    /// Create a composer with just the required fields.
    pub fn new(id: impl Into<ComposerId>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            biography: None,
            birth_year: None,
            death_year: None,
            birthplace: None,
            photo_url: None,
            website_url: None,
            is_featured: false,
            scores_count: None,
        }
    }

    /// Life span for display, e.g. "1863-1910" or "1956-".
    pub fn life_span(&self) -> Option<String> {
        let birth = self.birth_year?;
        Some(match self.death_year {
            Some(death) => format!("{}-{}", birth, death),
            None => format!("{}-", birth),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_span() {
        let mut composer = Composer::new("comp-1", "Jesús Guridi", "jesus-guridi");
        assert_eq!(composer.life_span(), None);

        composer.birth_year = Some(1886);
        assert_eq!(composer.life_span().as_deref(), Some("1886-"));

        composer.death_year = Some(1961);
        assert_eq!(composer.life_span().as_deref(), Some("1886-1961"));
    }
}
