use serde::{Deserialize, Serialize};

/// Current version of the default weight table.
pub const WEIGHTS_VERSION: u32 = 2;

/// Scoring weights for situation-based recommendation.
///
/// Situational and emotional matches (contexts, moods) dominate, textual
/// overlap (tags, names) barely moves rank, and popularity only separates
/// near-ties among already relevant records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Bumped whenever a default below changes.
    pub version: u32,

    pub context_exact: f64,
    pub context_partial: f64,
    /// Added once when two or more distinct contexts matched.
    pub context_multi_bonus: f64,

    pub mood_exact: f64,
    pub mood_partial: f64,
    /// Added when an inflected variant of a matched mood appears in the raw text.
    pub mood_variant_bonus: f64,

    /// Per token found in the joined example text.
    pub example_token: f64,
    pub example_min_token_chars: usize,
    /// Added when an example hit co-occurs with a context or mood hit.
    pub example_situational_bonus: f64,

    /// Per token found in the meaning text.
    pub meaning_token: f64,
    pub meaning_min_token_chars: usize,
    pub meaning_situational_bonus: f64,
    /// Added when a token's synonym family appears in the meaning and a
    /// context or mood matched.
    pub meaning_synonym_bonus: f64,

    pub tag_exact: f64,
    pub tag_partial: f64,

    /// Added once when any token overlaps the name or an alias.
    pub name_partial: f64,

    pub popularity_factor: f64,
    pub popularity_cap: f64,
    /// Running score required before the popularity bonus applies.
    pub popularity_min_score: f64,

    /// Candidates scoring below `top * relative_cutoff` are dropped.
    pub relative_cutoff: f64,
    pub max_results: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            version: WEIGHTS_VERSION,
            context_exact: 18.0,
            context_partial: 12.0,
            context_multi_bonus: 8.0,
            mood_exact: 16.0,
            mood_partial: 10.0,
            mood_variant_bonus: 14.0,
            example_token: 14.0,
            example_min_token_chars: 3,
            example_situational_bonus: 10.0,
            meaning_token: 8.0,
            meaning_min_token_chars: 3,
            meaning_situational_bonus: 6.0,
            meaning_synonym_bonus: 8.0,
            tag_exact: 4.0,
            tag_partial: 2.0,
            name_partial: 1.0,
            popularity_factor: 0.06,
            popularity_cap: 6.0,
            popularity_min_score: 15.0,
            relative_cutoff: 0.3,
            max_results: 3,
        }
    }
}

impl ScoringWeights {
    /// Popularity bonus for a record, before the eligibility check.
    #[must_use]
    pub fn popularity_bonus(&self, popularity: u32) -> f64 {
        (f64::from(popularity) * self.popularity_factor).min(self.popularity_cap)
    }
}
