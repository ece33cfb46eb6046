//! Score types.

use crate::catalog::{Category, Composer};
use crate::ids::{CategoryId, ComposerId, ScoreId, TagId};
use crate::money::{Currency, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vocal voicing of a choral score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoirType {
    SATB,
    SSA,
    TTBB,
    SSAA,
    SAB,
    SA,
    TB,
    Unison,
    Other,
}

impl ChoirType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoirType::SATB => "SATB",
            ChoirType::SSA => "SSA",
            ChoirType::TTBB => "TTBB",
            ChoirType::SSAA => "SSAA",
            ChoirType::SAB => "SAB",
            ChoirType::SA => "SA",
            ChoirType::TB => "TB",
            ChoirType::Unison => "Unison",
            ChoirType::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "SATB" => Some(ChoirType::SATB),
            "SSA" => Some(ChoirType::SSA),
            "TTBB" => Some(ChoirType::TTBB),
            "SSAA" => Some(ChoirType::SSAA),
            "SAB" => Some(ChoirType::SAB),
            "SA" => Some(ChoirType::SA),
            "TB" => Some(ChoirType::TB),
            "Unison" => Some(ChoirType::Unison),
            "Other" => Some(ChoirType::Other),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChoirType::SATB => "SATB (mixed choir)",
            ChoirType::SSA => "SSA (upper voices)",
            ChoirType::TTBB => "TTBB (lower voices)",
            ChoirType::SSAA => "SSAA",
            ChoirType::SAB => "SAB",
            ChoirType::SA => "SA",
            ChoirType::TB => "TB",
            ChoirType::Unison => "Unison",
            ChoirType::Other => "Other",
        }
    }
}

impl fmt::Display for ChoirType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Difficulty rating, 1 (very easy) through 5 (very hard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Difficulty {
    VeryEasy,
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl Difficulty {
    /// Get the numeric level (1-5).
    pub fn level(&self) -> u8 {
        match self {
            Difficulty::VeryEasy => 1,
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
            Difficulty::VeryHard => 5,
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::VeryEasy),
            2 => Some(Difficulty::Easy),
            3 => Some(Difficulty::Medium),
            4 => Some(Difficulty::Hard),
            5 => Some(Difficulty::VeryHard),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::VeryEasy => "Very easy",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::VeryHard => "Very hard",
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> u8 {
        d.level()
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Difficulty::from_level(level).ok_or_else(|| format!("invalid difficulty level: {}", level))
    }
}

/// A free-form label attached to scores (e.g., "basque", "a cappella").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Unique tag identifier.
    pub id: TagId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
}

/// A purchasable digital sheet-music item.
///
/// Scores are owned by the catalog service and read-only here. The JSON shape
/// matches the `GET /api/scores` payload, hence the camelCase field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    /// Unique score identifier.
    pub id: ScoreId,
    /// Score title.
    pub title: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Composer of this score.
    pub composer_id: ComposerId,
    /// Embedded composer record, when the listing includes it.
    #[serde(default)]
    pub composer: Option<Composer>,
    /// Category this score is filed under.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Embedded category record, when the listing includes it.
    #[serde(default)]
    pub category: Option<Category>,
    /// Year of composition.
    #[serde(default)]
    pub year: Option<i32>,
    /// Vocal voicing.
    pub choir_type: ChoirType,
    /// Lyrics language.
    #[serde(default)]
    pub language: Option<String>,
    /// Difficulty rating.
    pub difficulty: Difficulty,
    /// Approximate duration.
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub duration_seconds: Option<i32>,
    /// Price in currency units (e.g., euros), as delivered by the API.
    pub price: f64,
    /// Whether the score is free. Overrides `price` in all totals.
    pub is_free: bool,
    /// Plain-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Cover image URL.
    #[serde(default)]
    pub cover_image_url: Option<String>,
    /// Number of preview pages available before purchase.
    #[serde(default)]
    pub preview_pages: i32,
    /// Download URL for the full PDF (purchasers only).
    #[serde(default)]
    pub pdf_url: Option<String>,
    /// Audio sample URL.
    #[serde(default)]
    pub audio_sample_url: Option<String>,
    /// Whether the score is visible in the catalog.
    pub is_active: bool,
    /// Whether the score is featured on the home page.
    pub is_featured: bool,
    /// Number of completed downloads (popularity).
    pub download_count: i64,
    /// Number of detail-page views.
    #[serde(default)]
    pub view_count: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Tags, when the listing includes them.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Score {
    /// The stored price as [`Money`], in euros.
    pub fn price_money(&self) -> Money {
        Money::from_decimal(self.price, Currency::EUR)
    }

    /// The price that enters every total: zero for free scores, regardless of
    /// what the stored `price` field says.
    pub fn effective_price(&self) -> Money {
        if self.is_free {
            Money::zero(Currency::EUR)
        } else {
            self.price_money()
        }
    }

    /// Check if the score can appear in listings.
    pub fn is_visible(&self) -> bool {
        self.is_active
    }

    /// Composer name, when the listing embedded it.
    pub fn composer_name(&self) -> Option<&str> {
        self.composer.as_ref().map(|c| c.name.as_str())
    }
}
