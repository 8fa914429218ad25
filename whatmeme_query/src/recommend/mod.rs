//! Situation-based recommendation.
//!
//! Every catalog record is scored against the tokens of a situation sentence
//! with the tiered weights in [`ScoringWeights`]. Candidates are ranked by
//! score (catalog order breaks ties), cut off relative to the top score, and
//! truncated to a handful of results.

mod weights;

pub use weights::{ScoringWeights, WEIGHTS_VERSION};

use once_cell::sync::Lazy;
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use whatmeme_core::{Catalog, MemeRecord};

use crate::lexicon::{synonym_family, variants_of};
use crate::tokenizer::SituationTokenizer;

static DEFAULT_ENGINE: Lazy<RecommendationEngine> = Lazy::new(RecommendationEngine::with_defaults);

/// Recommend memes for a situation with the default weights.
#[must_use]
pub fn recommend_meme_for_context(catalog: &Catalog, situation: &str) -> RecommendOutcome {
    DEFAULT_ENGINE.recommend(catalog, situation)
}

/// A scored candidate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub meme: Arc<MemeRecord>,
    pub score: f64,
    /// Field-tagged match labels such as `context:퇴근`, in first-hit order.
    pub matched_tokens: Vec<String>,
}

/// Result of a recommendation request.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RecommendOutcome {
    /// No meaning tokens could be extracted from the situation.
    TooVague,
    /// Tokens were extracted but no record scored above zero.
    NoMatch { tokens: Vec<String> },
    Matched {
        tokens: Vec<String>,
        recommendations: Vec<Recommendation>,
    },
}

impl RecommendOutcome {
    #[must_use]
    pub fn recommendations(&self) -> &[Recommendation] {
        match self {
            Self::Matched {
                recommendations, ..
            } => recommendations,
            Self::TooVague | Self::NoMatch { .. } => &[],
        }
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        match self {
            Self::TooVague => &[],
            Self::NoMatch { tokens } | Self::Matched { tokens, .. } => tokens,
        }
    }

    #[must_use]
    pub const fn is_too_vague(&self) -> bool {
        matches!(self, Self::TooVague)
    }
}

/// How a token relates to a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlap {
    Exact,
    /// Substring in either direction.
    Partial,
}

impl Overlap {
    fn of(value: &str, token: &str) -> Option<Self> {
        if value.is_empty() || token.is_empty() {
            None
        } else if value == token {
            Some(Self::Exact)
        } else if value.contains(token) || token.contains(value) {
            Some(Self::Partial)
        } else {
            None
        }
    }

    /// Best overlap of `value` with any token, exact preferred.
    fn best(value: &str, tokens: &[String]) -> Option<Self> {
        let mut best = None;
        for token in tokens {
            match Self::of(value, token) {
                Some(Self::Exact) => return Some(Self::Exact),
                Some(Self::Partial) => best = Some(Self::Partial),
                None => {}
            }
        }
        best
    }

    const fn weight(self, exact: f64, partial: f64) -> f64 {
        match self {
            Self::Exact => exact,
            Self::Partial => partial,
        }
    }
}

/// Running score for one record.
#[derive(Debug, Default)]
struct Tally {
    score: f64,
    matched: Vec<String>,
}

impl Tally {
    fn add(&mut self, weight: f64, label: String) {
        self.score += weight;
        if !self.matched.contains(&label) {
            self.matched.push(label);
        }
    }
}

pub struct RecommendationEngine {
    tokenizer: SituationTokenizer,
    weights: ScoringWeights,
}

impl RecommendationEngine {
    #[must_use]
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            tokenizer: SituationTokenizer::new(),
            weights,
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ScoringWeights::default())
    }

    #[must_use]
    pub const fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Tokenize `situation` and rank the catalog against it.
    #[must_use]
    pub fn recommend(&self, catalog: &Catalog, situation: &str) -> RecommendOutcome {
        let tokens = self.tokenizer.tokenize(situation);
        if tokens.is_empty() {
            debug!("Situation {situation:?} yielded no tokens");
            return RecommendOutcome::TooVague;
        }

        let recommendations = self.rank(catalog, &tokens, situation);
        if recommendations.is_empty() {
            RecommendOutcome::NoMatch { tokens }
        } else {
            RecommendOutcome::Matched {
                tokens,
                recommendations,
            }
        }
    }

    /// Score every record against already extracted `tokens`.
    ///
    /// `situation` is the raw sentence, used only to spot inflected mood
    /// variants. Matching ignores case.
    #[must_use]
    pub fn rank(&self, catalog: &Catalog, tokens: &[String], situation: &str) -> Vec<Recommendation> {
        let situation = situation.to_lowercase();
        let tokens: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let tokens = tokens.as_slice();

        let mut scored: Vec<Recommendation> = catalog
            .records()
            .par_iter()
            .filter_map(|record| self.score_record(record, tokens, &situation))
            .collect();
        debug!(
            "Scored {} of {} records for tokens {tokens:?}",
            scored.len(),
            catalog.len()
        );

        // stable: equal scores keep catalog order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        let cutoff = relative_cutoff(&scored, self.weights.relative_cutoff);
        scored.truncate(cutoff.min(self.weights.max_results));
        scored
    }

    fn score_record(
        &self,
        record: &Arc<MemeRecord>,
        tokens: &[String],
        situation: &str,
    ) -> Option<Recommendation> {
        let w = &self.weights;
        let mut tally = Tally::default();

        let mut context_hits = 0;
        for context in &record.contexts {
            if let Some(overlap) = Overlap::best(&context.to_lowercase(), tokens) {
                tally.add(
                    overlap.weight(w.context_exact, w.context_partial),
                    format!("context:{context}"),
                );
                context_hits += 1;
            }
        }
        if context_hits >= 2 {
            tally.score += w.context_multi_bonus;
        }

        let mut mood_hits = 0;
        let mut variant_in_text = false;
        for mood in &record.moods {
            let mood_lower = mood.to_lowercase();
            if let Some(overlap) = Overlap::best(&mood_lower, tokens) {
                tally.add(
                    overlap.weight(w.mood_exact, w.mood_partial),
                    format!("mood:{mood}"),
                );
                mood_hits += 1;
                variant_in_text |= variants_of(&mood_lower).any(|v| situation.contains(v));
            }
        }
        if variant_in_text {
            tally.score += w.mood_variant_bonus;
        }

        let situational = context_hits > 0 || mood_hits > 0;

        let examples = record.examples.join(" ").to_lowercase();
        let mut example_hit = false;
        for token in long_tokens(tokens, w.example_min_token_chars) {
            if examples.contains(token) {
                tally.add(w.example_token, format!("example:{token}"));
                example_hit = true;
            }
        }
        if example_hit && situational {
            tally.score += w.example_situational_bonus;
        }

        let meaning = record.meaning.to_lowercase();
        let mut meaning_hit = false;
        for token in long_tokens(tokens, w.meaning_min_token_chars) {
            if meaning.contains(token) {
                tally.add(w.meaning_token, format!("meaning:{token}"));
                meaning_hit = true;
            }
        }
        if meaning_hit && situational {
            tally.score += w.meaning_situational_bonus;
        }
        if situational {
            let family = tokens
                .iter()
                .filter_map(|token| synonym_family(token))
                .find(|(_, members)| members.iter().any(|m| meaning.contains(m)));
            if let Some((family_id, _)) = family {
                tally.add(w.meaning_synonym_bonus, format!("synonym:{family_id}"));
            }
        }

        for tag in &record.tags {
            if let Some(overlap) = Overlap::best(&tag.to_lowercase(), tokens) {
                tally.add(overlap.weight(w.tag_exact, w.tag_partial), format!("tag:{tag}"));
            }
        }

        let name_hit = std::iter::once(&record.name)
            .chain(&record.aliases)
            .any(|name| Overlap::best(&name.to_lowercase(), tokens).is_some());
        if name_hit {
            tally.add(w.name_partial, format!("name:{}", record.name));
        }

        if tally.score >= w.popularity_min_score && (situational || example_hit) {
            tally.score += w.popularity_bonus(record.popularity);
        }

        (tally.score > 0.0).then(|| Recommendation {
            meme: Arc::clone(record),
            score: tally.score,
            matched_tokens: tally.matched,
        })
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn long_tokens(tokens: &[String], min_chars: usize) -> impl Iterator<Item = &str> {
    tokens
        .iter()
        .map(String::as_str)
        .filter(move |token| token.chars().count() >= min_chars)
}

/// Index of the first score below `top * min_ratio` in a descending list.
fn relative_cutoff(sorted: &[Recommendation], min_ratio: f64) -> usize {
    let Some(top) = sorted.first().map(|r| r.score) else {
        return 0;
    };
    let threshold = top * min_ratio;
    sorted
        .iter()
        .position(|r| r.score < threshold)
        .unwrap_or(sorted.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture<'a> {
        id: &'a str,
        contexts: &'a [&'a str],
        moods: &'a [&'a str],
        tags: &'a [&'a str],
        examples: &'a [&'a str],
        meaning: &'a str,
        popularity: u32,
    }

    impl Default for Fixture<'_> {
        fn default() -> Self {
            Self {
                id: "x",
                contexts: &[],
                moods: &[],
                tags: &[],
                examples: &[],
                meaning: "뜻",
                popularity: 0,
            }
        }
    }

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn record(fixture: &Fixture<'_>) -> MemeRecord {
        MemeRecord {
            id: fixture.id.to_string(),
            name: format!("name-{}", fixture.id),
            aliases: Vec::new(),
            meaning: fixture.meaning.to_string(),
            origin: String::new(),
            examples: owned(fixture.examples),
            tags: owned(fixture.tags),
            contexts: owned(fixture.contexts),
            moods: owned(fixture.moods),
            trend_rank: 1,
            popularity: fixture.popularity,
            updated_at: "2025-01-01".to_string(),
        }
    }

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn catalog(fixtures: &[Fixture<'_>]) -> Catalog {
        Catalog::from_records(fixtures.iter().map(record).collect())
            .expect("test catalog should be valid")
    }

    fn rank(catalog: &Catalog, tokens: &[&str], situation: &str) -> Vec<Recommendation> {
        RecommendationEngine::with_defaults().rank(catalog, &owned(tokens), situation)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn exact_context_outweighs_partial() {
        let c = catalog(&[
            Fixture {
                id: "partial",
                contexts: &["퇴근길"],
                ..Fixture::default()
            },
            Fixture {
                id: "exact",
                contexts: &["퇴근"],
                ..Fixture::default()
            },
        ]);
        let ranked = rank(&c, &["퇴근"], "퇴근");
        assert_eq!(ranked[0].meme.id, "exact");
        assert!(approx(ranked[0].score, 18.0));
        assert!(approx(ranked[1].score, 12.0));
        assert_eq!(ranked[0].matched_tokens, ["context:퇴근"]);
    }

    #[test]
    fn two_contexts_earn_bonus() {
        let c = catalog(&[Fixture {
            contexts: &["시험", "공부"],
            ..Fixture::default()
        }]);
        let ranked = rank(&c, &["시험", "공부"], "");
        assert!(approx(ranked[0].score, 18.0 + 18.0 + 8.0));
    }

    #[test]
    fn mood_variant_in_text_adds_extra() {
        let c = catalog(&[Fixture {
            moods: &["신남"],
            ..Fixture::default()
        }]);
        let with_variant = rank(&c, &["신남"], "신날 때");
        let without_variant = rank(&c, &["신남"], "신남");
        assert!(approx(with_variant[0].score, 16.0 + 14.0));
        assert!(approx(without_variant[0].score, 16.0));
    }

    #[test]
    fn example_and_meaning_need_three_char_tokens() {
        let c = catalog(&[Fixture {
            examples: &["프로젝트 마감 전"],
            meaning: "마감 전 프로젝트",
            ..Fixture::default()
        }]);
        assert!(rank(&c, &["마감"], "").is_empty());

        let ranked = rank(&c, &["프로젝트"], "");
        assert!(approx(ranked[0].score, 14.0 + 8.0));
        assert_eq!(
            ranked[0].matched_tokens,
            ["example:프로젝트", "meaning:프로젝트"]
        );
    }

    #[test]
    fn situational_bonuses_require_context_or_mood() {
        let c = catalog(&[Fixture {
            contexts: &["마감"],
            examples: &["프로젝트 마감 전"],
            meaning: "프로젝트 마감",
            ..Fixture::default()
        }]);
        let ranked = rank(&c, &["마감", "프로젝트"], "");
        // context 18 + example 14 + bonus 10 + meaning 8 + bonus 6
        assert!(approx(ranked[0].score, 56.0));
    }

    #[test]
    fn synonym_family_in_meaning_counts_with_context() {
        let c = catalog(&[Fixture {
            contexts: &["직장"],
            meaning: "칼같이 퇴근하는 것",
            ..Fixture::default()
        }]);
        let ranked = rank(&c, &["직장", "야근"], "");
        assert!(approx(ranked[0].score, 18.0 + 8.0));
        assert!(ranked[0].matched_tokens.contains(&"synonym:퇴근".to_string()));
    }

    #[test]
    fn tags_and_names_barely_move_rank() {
        let c = catalog(&[Fixture {
            id: "퇴근",
            tags: &["퇴근"],
            ..Fixture::default()
        }]);
        let ranked = rank(&c, &["퇴근"], "");
        // tag exact 4 + name overlap 1
        assert!(approx(ranked[0].score, 5.0));
        assert_eq!(ranked[0].matched_tokens, ["tag:퇴근", "name:name-퇴근"]);
    }

    #[test]
    fn popularity_needs_relevance_and_threshold() {
        let c = catalog(&[
            Fixture {
                id: "tags-only",
                tags: &["a1", "b1", "c1", "d1"],
                popularity: 100,
                ..Fixture::default()
            },
            Fixture {
                id: "context",
                contexts: &["a1"],
                popularity: 100,
                ..Fixture::default()
            },
        ]);
        let ranked = rank(&c, &["a1", "b1", "c1", "d1"], "");
        let score_of = |id: &str| {
            ranked
                .iter()
                .find(|r| r.meme.id == id)
                .map(|r| r.score)
                .unwrap_or_default()
        };
        assert!(approx(score_of("tags-only"), 16.0));
        assert!(approx(score_of("context"), 18.0 + 6.0));
    }

    #[test]
    fn weak_candidates_fall_below_relative_cutoff() {
        let c = catalog(&[
            Fixture {
                id: "weak",
                tags: &["퇴근길"],
                ..Fixture::default()
            },
            Fixture {
                id: "strong",
                contexts: &["퇴근"],
                ..Fixture::default()
            },
        ]);
        let ranked = rank(&c, &["퇴근"], "");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].meme.id, "strong");
    }

    #[test]
    fn ties_keep_catalog_order_and_truncate() {
        let fixtures: Vec<Fixture<'_>> = ["a", "b", "c", "d"]
            .into_iter()
            .map(|id| Fixture {
                id,
                contexts: &["시험"],
                ..Fixture::default()
            })
            .collect();
        let c = catalog(&fixtures);
        let ids: Vec<_> = rank(&c, &["시험"], "")
            .iter()
            .map(|r| r.meme.id.clone())
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn outcome_distinguishes_vague_from_unmatched() {
        let c = catalog(&[Fixture {
            contexts: &["시험"],
            ..Fixture::default()
        }]);
        let engine = RecommendationEngine::with_defaults();

        let vague = engine.recommend(&c, "밈 추천해줘");
        assert!(vague.is_too_vague());
        assert!(vague.recommendations().is_empty());

        let unmatched = engine.recommend(&c, "우주여행 갈 때");
        assert!(matches!(&unmatched, RecommendOutcome::NoMatch { tokens } if tokens == &["우주여행"]));

        let matched = engine.recommend(&c, "시험 볼 때");
        assert_eq!(matched.recommendations().len(), 1);
        assert_eq!(matched.tokens(), ["시험"]);
    }

    #[test]
    fn matching_ignores_token_case() {
        let c = catalog(&[Fixture {
            contexts: &["mbti"],
            ..Fixture::default()
        }]);
        let engine = RecommendationEngine::with_defaults();
        let outcome = engine.recommend(&c, "MBTI 얘기할 때");
        assert_eq!(outcome.tokens(), ["MBTI", "얘기"]);
        assert_eq!(outcome.recommendations().len(), 1);
        assert_eq!(outcome.recommendations()[0].matched_tokens, ["context:mbti"]);
    }

    #[test]
    fn custom_weights_change_result_size() {
        let fixtures: Vec<Fixture<'_>> = ["a", "b", "c", "d", "e"]
            .into_iter()
            .map(|id| Fixture {
                id,
                contexts: &["시험"],
                ..Fixture::default()
            })
            .collect();
        let c = catalog(&fixtures);
        let engine = RecommendationEngine::new(ScoringWeights {
            max_results: 5,
            ..ScoringWeights::default()
        });
        assert_eq!(engine.weights().max_results, 5);
        assert_eq!(engine.rank(&c, &owned(&["시험"]), "").len(), 5);
    }
}
