//! Catalog listing request parameters.

use partitura_commerce::search::{FilterSpec, SortKey};
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /api/scores`.
///
/// Field names follow the domain; [`ScoresRequest::to_query_string`] maps
/// them to the backend's camelCase parameter names.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScoresRequest {
    pub search: Option<String>,
    pub composer: Option<String>,
    pub category: Option<String>,
    pub choir_type: Option<String>,
    pub difficulty: Option<u8>,
    pub is_free: Option<bool>,
    pub is_featured: Option<bool>,
    pub sort_by: SortKey,
    /// 1-indexed page.
    pub page: i64,
    /// Records per page; the backend clamps this to at most 100.
    pub limit: i64,
}

impl ScoresRequest {
    /// Create a request for the first page with the backend's default size.
    pub fn new() -> Self {
        Self {
            page: 1,
            limit: 20,
            ..Self::default()
        }
    }

    /// Build a request from a domain filter spec.
    pub fn from_filter_spec(spec: &FilterSpec, page: i64, limit: i64) -> Self {
        Self {
            search: spec.search.clone(),
            composer: spec.composer_id.as_ref().map(|id| id.to_string()),
            category: spec.category_id.as_ref().map(|id| id.to_string()),
            choir_type: spec.choir_type.map(|ct| ct.as_str().to_string()),
            difficulty: spec.difficulty.map(|d| d.level()),
            is_free: spec.is_free,
            is_featured: spec.is_featured,
            sort_by: spec.sort,
            page: page.max(1),
            limit: limit.clamp(1, 100),
        }
    }

    /// Encode as a URL query string, omitting unset parameters.
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();

        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            params.push(("search", search.to_string()));
        }
        if let Some(composer) = &self.composer {
            params.push(("composer", composer.clone()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(choir_type) = &self.choir_type {
            params.push(("choirType", choir_type.clone()));
        }
        if let Some(difficulty) = self.difficulty {
            params.push(("difficulty", difficulty.to_string()));
        }
        if let Some(is_free) = self.is_free {
            params.push(("isFree", is_free.to_string()));
        }
        if let Some(is_featured) = self.is_featured {
            params.push(("isFeatured", is_featured.to_string()));
        }
        params.push(("sortBy", self.sort_by.as_str().to_string()));
        params.push(("page", self.page.to_string()));
        params.push(("limit", self.limit.to_string()));

        params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Parse a query string back into a request. Unknown keys are ignored
    /// and malformed values fall back to defaults.
    pub fn from_query_string(qs: &str) -> Self {
        let mut request = Self::new();

        for pair in qs.trim_start_matches('?').split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = urldecode(parts.next().unwrap_or(""));
            if value.is_empty() {
                continue;
            }

            match key {
                "search" => request.search = Some(value),
                "composer" => request.composer = Some(value),
                "category" => request.category = Some(value),
                "choirType" => request.choir_type = Some(value),
                "difficulty" => request.difficulty = value.parse().ok(),
                "isFree" => request.is_free = Some(value == "true"),
                "isFeatured" => request.is_featured = Some(value == "true"),
                "sortBy" => request.sort_by = SortKey::from_str(&value),
                "page" => request.page = value.parse().unwrap_or(1).max(1),
                "limit" => request.limit = value.parse().unwrap_or(20).clamp(1, 100),
                _ => {}
            }
        }

        request
    }
}

/// Percent-encode a query parameter value.
fn urlencode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push('+'),
            _ => {
                for byte in c.to_string().as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

/// Decode a percent-encoded query parameter value.
fn urldecode(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut chars = s.bytes().peekable();

    while let Some(b) = chars.next() {
        match b {
            b'%' => {
                let hi = chars.next();
                let lo = chars.next();
                let hex: String = [hi, lo].iter().flatten().map(|&b| b as char).collect();
                if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                    bytes.push(byte);
                }
            }
            b'+' => bytes.push(b' '),
            _ => bytes.push(b),
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use partitura_commerce::catalog::ChoirType;

    #[test]
    fn test_default_request_query_string() {
        let request = ScoresRequest::new();
        assert_eq!(request.to_query_string(), "sortBy=newest&page=1&limit=20");
    }

    #[test]
    fn test_query_string_includes_set_filters() {
        let request = ScoresRequest {
            search: Some("agur jaunak".to_string()),
            choir_type: Some("SATB".to_string()),
            is_free: Some(true),
            ..ScoresRequest::new()
        };
        let qs = request.to_query_string();
        assert!(qs.contains("search=agur+jaunak"));
        assert!(qs.contains("choirType=SATB"));
        assert!(qs.contains("isFree=true"));
        assert!(!qs.contains("composer="));
    }

    #[test]
    fn test_round_trip() {
        let request = ScoresRequest {
            search: Some("maitia nun zira?".to_string()),
            composer: Some("comp-2".to_string()),
            difficulty: Some(4),
            sort_by: SortKey::PriceDesc,
            page: 3,
            ..ScoresRequest::new()
        };
        let parsed = ScoresRequest::from_query_string(&request.to_query_string());
        assert_eq!(parsed, request);
    }

    #[test]
    fn test_parse_ignores_junk() {
        let request =
            ScoresRequest::from_query_string("?foo=bar&page=zero&sortBy=bogus&limit=5000");
        assert_eq!(request.page, 1);
        assert_eq!(request.sort_by, SortKey::Newest);
        assert_eq!(request.limit, 100);
    }

    #[test]
    fn test_from_filter_spec() {
        let spec = FilterSpec::new()
            .with_search("agur")
            .with_choir_type(ChoirType::TTBB)
            .with_sort(SortKey::Popular);
        let request = ScoresRequest::from_filter_spec(&spec, 2, 24);

        assert_eq!(request.search.as_deref(), Some("agur"));
        assert_eq!(request.choir_type.as_deref(), Some("TTBB"));
        assert_eq!(request.sort_by, SortKey::Popular);
        assert_eq!(request.page, 2);
        assert_eq!(request.limit, 24);
    }
}
