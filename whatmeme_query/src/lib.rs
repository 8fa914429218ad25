#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

//! Query side of the meme lookup engine: question normalization, situation
//! tokenization, name resolution, recommendation and trend status.

pub mod lexicon;
mod normalizer;
pub mod recommend;
mod resolver;
pub mod status;
mod tokenizer;

pub use normalizer::{QueryNormalizer, normalize_query};
pub use recommend::{
    Recommendation, RecommendOutcome, RecommendationEngine, ScoringWeights, WEIGHTS_VERSION,
    recommend_meme_for_context,
};
pub use resolver::{ResolveFailure, ResolveResult, resolve_meme};
pub use status::{StatusThresholds, StatusVerdict, TrendStatus, check_status};
pub use tokenizer::{SituationTokenizer, tokenize_situation};
