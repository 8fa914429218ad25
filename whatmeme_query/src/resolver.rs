use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};
use whatmeme_core::{Catalog, MemeRecord};

use crate::normalizer::normalize_query;

/// Why a question could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveFailure {
    /// Nothing was left after normalization.
    Empty,
    /// The normalized keyword matched no record.
    NotFound,
}

impl ResolveFailure {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Empty => "empty",
            Self::NotFound => "not_found",
        }
    }
}

impl std::fmt::Display for ResolveFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ResolveResult {
    Found {
        meme: Arc<MemeRecord>,
        normalized_query: String,
    },
    Unresolved {
        normalized_query: String,
        reason: ResolveFailure,
    },
}

impl ResolveResult {
    #[must_use]
    pub fn meme(&self) -> Option<&Arc<MemeRecord>> {
        match self {
            Self::Found { meme, .. } => Some(meme),
            Self::Unresolved { .. } => None,
        }
    }

    #[must_use]
    pub fn normalized_query(&self) -> &str {
        match self {
            Self::Found {
                normalized_query, ..
            }
            | Self::Unresolved {
                normalized_query, ..
            } => normalized_query,
        }
    }
}

/// Resolve a free-form question to a catalog record.
///
/// The normalized keyword is used as is: an empty normalization is reported
/// as [`ResolveFailure::Empty`] and never falls back to the raw input.
#[must_use]
pub fn resolve_meme(catalog: &Catalog, query: &str) -> ResolveResult {
    let normalized_query = normalize_query(query);
    if normalized_query.is_empty() {
        let reason = ResolveFailure::Empty;
        debug!("Query {query:?} unresolved: {reason}");
        return ResolveResult::Unresolved {
            normalized_query,
            reason,
        };
    }

    match catalog.find_by_keyword(&normalized_query) {
        Some(meme) => {
            info!("Resolved {query:?} to {}", meme.id);
            ResolveResult::Found {
                meme: Arc::clone(meme),
                normalized_query,
            }
        }
        None => {
            let reason = ResolveFailure::NotFound;
            debug!("Normalized query {normalized_query:?} unresolved: {reason}");
            ResolveResult::Unresolved {
                normalized_query,
                reason,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whatmeme_core::seed::seed_catalog;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn catalog() -> Catalog {
        seed_catalog().expect("seed catalog should be valid")
    }

    fn resolved_id(query: &str) -> Option<String> {
        resolve_meme(&catalog(), query).meme().map(|m| m.id.clone())
    }

    #[test]
    fn resolves_meaning_question() {
        assert_eq!(resolved_id("럭키비키 뜻이 뭐야?").as_deref(), Some("lucky-vicky"));
    }

    #[test]
    fn resolves_through_alias() {
        assert_eq!(resolved_id("칼퇴근 뜻").as_deref(), Some("kal-toe"));
    }

    #[test]
    fn resolves_partial_name() {
        assert_eq!(resolved_id("얼어붙은 한강 밈").as_deref(), Some("frozen-hangang"));
    }

    #[test]
    fn empty_normalization_is_reported() {
        let result = resolve_meme(&catalog(), "뭐야?");
        assert!(matches!(
            result,
            ResolveResult::Unresolved {
                reason: ResolveFailure::Empty,
                ..
            }
        ));
        assert_eq!(result.normalized_query(), "");

        let result = resolve_meme(&catalog(), "");
        assert!(matches!(
            result,
            ResolveResult::Unresolved {
                reason: ResolveFailure::Empty,
                ..
            }
        ));
    }

    #[test]
    fn failure_reasons_match_their_json_names() {
        assert_eq!(ResolveFailure::Empty.as_str(), "empty");
        assert_eq!(ResolveFailure::NotFound.to_string(), "not_found");
        let result = resolve_meme(&catalog(), "");
        assert_eq!(
            serde_json::to_value(&result).ok().and_then(|v| v["reason"].as_str().map(String::from)),
            Some(ResolveFailure::Empty.as_str().to_string())
        );
    }

    #[test]
    fn unknown_keyword_is_not_found() {
        let result = resolve_meme(&catalog(), "존재하지않는밈XY");
        match result {
            ResolveResult::Unresolved {
                normalized_query,
                reason,
            } => {
                assert_eq!(reason, ResolveFailure::NotFound);
                assert_eq!(normalized_query, "존재하지않는밈XY");
            }
            ResolveResult::Found { meme, .. } => panic!("unexpected match {}", meme.id),
        }
    }
}
