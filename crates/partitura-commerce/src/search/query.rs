//! Catalog filter and sort specification.

use crate::catalog::{ChoirType, Difficulty, Score};
use crate::ids::{CategoryId, ComposerId};
use crate::search::{Pagination, ScorePage};
use serde::{Deserialize, Serialize};

/// Sort order for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Newest first (default).
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Most downloaded first.
    Popular,
    /// Title A-Z.
    Name,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::Popular => "popular",
            SortKey::Name => "name",
        }
    }

    /// Parse a sort key. Unknown values fall back to [`SortKey::Newest`].
    pub fn from_str(s: &str) -> Self {
        match s {
            "oldest" => SortKey::Oldest,
            "price_asc" => SortKey::PriceAsc,
            "price_desc" => SortKey::PriceDesc,
            "popular" => SortKey::Popular,
            "name" => SortKey::Name,
            _ => SortKey::Newest,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest",
            SortKey::Oldest => "Oldest",
            SortKey::PriceAsc => "Price: low to high",
            SortKey::PriceDesc => "Price: high to low",
            SortKey::Popular => "Most popular",
            SortKey::Name => "Name A-Z",
        }
    }
}

/// The set of active filter and sort parameters for a catalog query.
///
/// Every filter field is optional; an unset field constrains nothing. An
/// empty or whitespace-only search string also constrains nothing, so a
/// default `FilterSpec` matches every visible score.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FilterSpec {
    /// Case-insensitive substring match against title, composer name, and
    /// description.
    pub search: Option<String>,
    /// Exact composer match.
    pub composer_id: Option<ComposerId>,
    /// Exact category match.
    pub category_id: Option<CategoryId>,
    /// Exact voicing match.
    pub choir_type: Option<ChoirType>,
    /// Exact difficulty match.
    pub difficulty: Option<Difficulty>,
    /// Only free (true) or only paid (false) scores.
    pub is_free: Option<bool>,
    /// Only featured scores.
    pub is_featured: Option<bool>,
    /// Minimum effective price, in currency units.
    pub min_price: Option<f64>,
    /// Maximum effective price, in currency units.
    pub max_price: Option<f64>,
    /// Sort order.
    pub sort: SortKey,
}

impl FilterSpec {
    /// Create an empty spec (matches everything, newest first).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search string.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Filter by composer.
    pub fn with_composer(mut self, id: impl Into<ComposerId>) -> Self {
        self.composer_id = Some(id.into());
        self
    }

    /// Filter by category.
    pub fn with_category(mut self, id: impl Into<CategoryId>) -> Self {
        self.category_id = Some(id.into());
        self
    }

    /// Filter by voicing.
    pub fn with_choir_type(mut self, choir_type: ChoirType) -> Self {
        self.choir_type = Some(choir_type);
        self
    }

    /// Filter by difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Keep only free scores (or only paid ones).
    pub fn with_free(mut self, is_free: bool) -> Self {
        self.is_free = Some(is_free);
        self
    }

    /// Keep only featured scores.
    pub fn with_featured(mut self, is_featured: bool) -> Self {
        self.is_featured = Some(is_featured);
        self
    }

    /// Filter by effective price range.
    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// The trimmed, lower-cased search needle, if one is set.
    fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Check whether a score satisfies every active predicate (AND semantics).
    ///
    /// For the search predicate, a score matches when the needle occurs in
    /// its title, its composer's name, or its description; a missing composer
    /// or description only rules out that one field.
    pub fn matches(&self, score: &Score) -> bool {
        if let Some(needle) = self.search_needle() {
            let in_title = score.title.to_lowercase().contains(&needle);
            let in_composer = score
                .composer_name()
                .map(|name| name.to_lowercase().contains(&needle))
                .unwrap_or(false);
            let in_description = score
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&needle))
                .unwrap_or(false);
            if !(in_title || in_composer || in_description) {
                return false;
            }
        }

        if let Some(composer_id) = &self.composer_id {
            if &score.composer_id != composer_id {
                return false;
            }
        }

        if let Some(category_id) = &self.category_id {
            if score.category_id.as_ref() != Some(category_id) {
                return false;
            }
        }

        if let Some(choir_type) = self.choir_type {
            if score.choir_type != choir_type {
                return false;
            }
        }

        if let Some(difficulty) = self.difficulty {
            if score.difficulty != difficulty {
                return false;
            }
        }

        if let Some(is_free) = self.is_free {
            if score.is_free != is_free {
                return false;
            }
        }

        if let Some(is_featured) = self.is_featured {
            if score.is_featured != is_featured {
                return false;
            }
        }

        let cents = score.effective_price().amount_cents;
        if let Some(min) = self.min_price {
            if cents < (min * 100.0).round() as i64 {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if cents > (max * 100.0).round() as i64 {
                return false;
            }
        }

        true
    }

    /// Sort a result set in place. The sort is stable, so ties keep the
    /// relative order they had in the input.
    fn sort(&self, scores: &mut [Score]) {
        match self.sort {
            SortKey::Newest => scores.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortKey::Oldest => scores.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortKey::PriceAsc => scores.sort_by(|a, b| {
                a.effective_price()
                    .amount_cents
                    .cmp(&b.effective_price().amount_cents)
            }),
            SortKey::PriceDesc => scores.sort_by(|a, b| {
                b.effective_price()
                    .amount_cents
                    .cmp(&a.effective_price().amount_cents)
            }),
            SortKey::Popular => scores.sort_by(|a, b| b.download_count.cmp(&a.download_count)),
            SortKey::Name => {
                scores.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
            }
        }
    }
}

/// Run a catalog query: filter, then sort.
///
/// Pure with respect to the input slice; returns a fresh, ordered `Vec`.
/// Deterministic for a given input and spec.
pub fn query(scores: &[Score], spec: &FilterSpec) -> Vec<Score> {
    let mut result: Vec<Score> = scores
        .iter()
        .filter(|s| spec.matches(s))
        .cloned()
        .collect();
    spec.sort(&mut result);
    result
}

/// Run a catalog query and slice out one page of results.
///
/// `page` is 1-indexed and clamped to at least 1; `per_page` is clamped to
/// 1..=100 the way the catalog API clamps its `limit` parameter.
pub fn query_page(scores: &[Score], spec: &FilterSpec, page: i64, per_page: i64) -> ScorePage {
    let page = page.max(1);
    let per_page = per_page.clamp(1, 100);

    let all = query(scores, spec);
    let pagination = Pagination::new(page, per_page, all.len() as i64);

    let scores = all
        .into_iter()
        .skip(pagination.offset() as usize)
        .take(per_page as usize)
        .collect();

    ScorePage { scores, pagination }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Composer;
    use crate::testutil::sample_score;
    use chrono::Duration;

    fn basque_catalog() -> Vec<Score> {
        let mut agur = sample_score("s1", "Agur Jaunak", 10.0, false);
        agur.composer = Some(Composer::new("comp-1", "Jesús Guridi", "jesus-guridi"));
        agur.download_count = 10;

        let mut aurresku = sample_score("s2", "Aurresku", 0.0, true);
        aurresku.composer_id = ComposerId::new("comp-2");
        aurresku.choir_type = ChoirType::TTBB;
        aurresku.download_count = 567;
        aurresku.created_at = agur.created_at + Duration::days(3);

        let mut gabon = sample_score("s3", "Gabon Kanta", 6.5, false);
        gabon.category_id = Some(CategoryId::new("cat-christmas"));
        gabon.difficulty = Difficulty::Easy;
        gabon.description = Some("A gentle carol for mixed voices".to_string());
        gabon.created_at = agur.created_at + Duration::days(1);

        vec![agur, aurresku, gabon]
    }

    #[test]
    fn test_empty_spec_matches_everything() {
        let catalog = basque_catalog();
        let result = query(&catalog, &FilterSpec::new());
        assert_eq!(result.len(), catalog.len());
    }

    #[test]
    fn test_search_matches_title_only_first_score() {
        let catalog = basque_catalog();
        let spec = FilterSpec::new().with_search("agur");
        let result = query(&catalog, &spec);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Agur Jaunak");
    }

    #[test]
    fn test_search_matches_composer_and_description() {
        let catalog = basque_catalog();

        let by_composer = query(&catalog, &FilterSpec::new().with_search("guridi"));
        assert_eq!(by_composer.len(), 1);
        assert_eq!(by_composer[0].id.as_str(), "s1");

        let by_description = query(&catalog, &FilterSpec::new().with_search("carol"));
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id.as_str(), "s3");
    }

    #[test]
    fn test_blank_search_is_no_constraint() {
        let catalog = basque_catalog();
        let spec = FilterSpec::new().with_search("   ");
        assert_eq!(query(&catalog, &spec).len(), catalog.len());
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let catalog = basque_catalog();
        let spec = FilterSpec::new()
            .with_choir_type(ChoirType::SATB)
            .with_difficulty(Difficulty::Easy);
        let result = query(&catalog, &spec);
        // Only Gabon Kanta is SATB *and* easy.
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "s3");

        for score in &result {
            assert!(spec.matches(score));
        }
    }

    #[test]
    fn test_composer_category_and_free_filters() {
        let catalog = basque_catalog();

        let spec = FilterSpec::new().with_composer("comp-2");
        assert_eq!(query(&catalog, &spec)[0].id.as_str(), "s2");

        let spec = FilterSpec::new().with_category("cat-christmas");
        assert_eq!(query(&catalog, &spec)[0].id.as_str(), "s3");

        let spec = FilterSpec::new().with_free(true);
        assert_eq!(query(&catalog, &spec)[0].id.as_str(), "s2");
    }

    #[test]
    fn test_price_range_uses_effective_price() {
        let catalog = basque_catalog();
        // The free score has a stored price of 0 and prices at 0 either way;
        // a minimum of 1 euro must exclude it.
        let spec = FilterSpec::new().with_price_range(Some(1.0), Some(8.0));
        let result = query(&catalog, &spec);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "s3");
    }

    #[test]
    fn test_sort_newest_is_default() {
        let catalog = basque_catalog();
        let result = query(&catalog, &FilterSpec::new());
        let ids: Vec<&str> = result.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s2", "s3", "s1"]);
    }

    #[test]
    fn test_sort_price_monotone() {
        let catalog = basque_catalog();

        let asc = query(&catalog, &FilterSpec::new().with_sort(SortKey::PriceAsc));
        let prices: Vec<i64> = asc
            .iter()
            .map(|s| s.effective_price().amount_cents)
            .collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));

        let desc = query(&catalog, &FilterSpec::new().with_sort(SortKey::PriceDesc));
        let prices: Vec<i64> = desc
            .iter()
            .map(|s| s.effective_price().amount_cents)
            .collect();
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_sort_popular_puts_most_downloaded_first() {
        let catalog = basque_catalog();
        let result = query(&catalog, &FilterSpec::new().with_sort(SortKey::Popular));
        assert_eq!(result[0].download_count, 567);
    }

    #[test]
    fn test_sort_name_case_insensitive() {
        let mut catalog = basque_catalog();
        catalog.push(sample_score("s4", "aNtzinako", 3.0, false));
        let result = query(&catalog, &FilterSpec::new().with_sort(SortKey::Name));
        let titles: Vec<String> = result.iter().map(|s| s.title.to_lowercase()).collect();
        let mut sorted = titles.clone();
        sorted.sort();
        assert_eq!(titles, sorted);
    }

    #[test]
    fn test_sort_ties_preserve_input_order() {
        let mut catalog = vec![
            sample_score("s1", "Agur Jaunak", 5.0, false),
            sample_score("s2", "Aurresku", 5.0, false),
            sample_score("s3", "Gabon Kanta", 5.0, false),
        ];
        for score in &mut catalog {
            score.download_count = 42;
        }

        // Equal prices: input order survives.
        let by_price = query(&catalog, &FilterSpec::new().with_sort(SortKey::PriceAsc));
        let ids: Vec<&str> = by_price.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2", "s3"]);

        // Equal download counts: input order survives.
        let by_popularity = query(&catalog, &FilterSpec::new().with_sort(SortKey::Popular));
        let ids: Vec<&str> = by_popularity.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn test_query_is_idempotent() {
        let catalog = basque_catalog();
        let spec = FilterSpec::new()
            .with_search("a")
            .with_sort(SortKey::PriceAsc);
        let once = query(&catalog, &spec);
        let twice = query(&once, &spec);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_query_does_not_mutate_input() {
        let catalog = basque_catalog();
        let before = catalog.clone();
        let _ = query(&catalog, &FilterSpec::new().with_sort(SortKey::Name));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_sort_key_parse_falls_back_to_newest() {
        assert_eq!(SortKey::from_str("price_asc"), SortKey::PriceAsc);
        assert_eq!(SortKey::from_str("bogus"), SortKey::Newest);
        assert_eq!(SortKey::from_str(""), SortKey::Newest);
    }

    #[test]
    fn test_query_page_slices_and_clamps() {
        let catalog = basque_catalog();
        let spec = FilterSpec::new().with_sort(SortKey::Name);

        let page = query_page(&catalog, &spec, 1, 2);
        assert_eq!(page.scores.len(), 2);
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.total_pages, 2);
        assert!(page.pagination.has_next);

        let last = query_page(&catalog, &spec, 2, 2);
        assert_eq!(last.scores.len(), 1);
        assert!(!last.pagination.has_next);

        // Page/per_page out of range get clamped rather than erroring.
        let clamped = query_page(&catalog, &spec, 0, 0);
        assert_eq!(clamped.pagination.page, 1);
        assert_eq!(clamped.pagination.per_page, 1);
    }
}
