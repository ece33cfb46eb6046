//! Shared fixtures for unit tests.

use crate::catalog::{ChoirType, Difficulty, Score};
use crate::ids::{ComposerId, ScoreId};
use chrono::{TimeZone, Utc};

/// Build a minimal visible score for tests.
pub(crate) fn sample_score(id: &str, title: &str, price: f64, is_free: bool) -> Score {
    let created = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
    Score {
        id: ScoreId::new(id),
        title: title.to_string(),
        slug: title.to_lowercase().replace(' ', "-"),
        composer_id: ComposerId::new("comp-1"),
        composer: None,
        category_id: None,
        category: None,
        year: None,
        choir_type: ChoirType::SATB,
        language: None,
        difficulty: Difficulty::Medium,
        duration_minutes: None,
        duration_seconds: None,
        price,
        is_free,
        description: None,
        cover_image_url: None,
        preview_pages: 2,
        pdf_url: None,
        audio_sample_url: None,
        is_active: true,
        is_featured: false,
        download_count: 0,
        view_count: 0,
        created_at: created,
        updated_at: created,
        tags: Vec::new(),
    }
}
