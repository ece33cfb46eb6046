//! Per-session favorites.

use crate::ids::ScoreId;
use serde::{Deserialize, Serialize};

/// An ordered set of favorited score ids.
///
/// Insertion order is preserved so the favorites view lists scores in the
/// order the user saved them. Adding an id that is already present is a
/// no-op.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Favorites {
    ids: Vec<ScoreId>,
}

impl Favorites {
    /// Create an empty favorites set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a score as favorite. Returns false if it already was.
    pub fn add(&mut self, score_id: ScoreId) -> bool {
        if self.contains(&score_id) {
            return false;
        }
        self.ids.push(score_id);
        true
    }

    /// Unmark a score. Returns false if it was not a favorite.
    pub fn remove(&mut self, score_id: &ScoreId) -> bool {
        let len_before = self.ids.len();
        self.ids.retain(|id| id != score_id);
        self.ids.len() < len_before
    }

    /// Flip a score's favorite state. Returns whether it is now a favorite.
    pub fn toggle(&mut self, score_id: ScoreId) -> bool {
        if self.remove(&score_id) {
            false
        } else {
            self.ids.push(score_id);
            true
        }
    }

    /// Check whether a score is favorited.
    pub fn contains(&self, score_id: &ScoreId) -> bool {
        self.ids.contains(score_id)
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Remove all favorites.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Iterate ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoreId> {
        self.ids.iter()
    }
}
