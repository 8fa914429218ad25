//! Situation tokenization.
//!
//! Unlike the question normalizer, this extracts several meaning tokens from a
//! sentence describing a situation: "퇴근하고 싶을 때 밈 추천해줘" -> ["퇴근"].

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

use crate::lexicon::{
    QUOTE_CHARS, SITUATION_FILLERS, SITUATION_PARTICLES, TERMINAL_PUNCTUATION, VERB_ENDINGS,
    canonical_word, is_stray_fragment, longest_first,
};

static DEFAULT_TOKENIZER: Lazy<SituationTokenizer> = Lazy::new(SituationTokenizer::new);

/// Tokenize a situation sentence with the built-in tables.
#[must_use]
pub fn tokenize_situation(input: &str) -> Vec<String> {
    DEFAULT_TOKENIZER.tokenize(input)
}

#[derive(Debug, Clone)]
pub struct SituationTokenizer {
    fillers: Option<Regex>,
    particles: Vec<&'static str>,
    endings: Vec<&'static str>,
}

impl SituationTokenizer {
    #[must_use]
    pub fn new() -> Self {
        let alternation = longest_first(SITUATION_FILLERS)
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        let fillers = Regex::new(&format!(r"(?i)\s*(?:{alternation})\s*")).ok();

        Self {
            fillers,
            particles: longest_first(SITUATION_PARTICLES),
            endings: longest_first(VERB_ENDINGS),
        }
    }

    /// Ordered, deduplicated meaning tokens of `input`.
    #[must_use]
    pub fn tokenize(&self, input: &str) -> Vec<String> {
        let cleaned: String = input
            .trim()
            .chars()
            .filter(|c| !is_punctuation(*c))
            .collect();

        let text = match &self.fillers {
            Some(re) => re.replace_all(&cleaned, " ").into_owned(),
            None => cleaned,
        };

        let mut seen = HashSet::new();
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|raw| self.reduce(raw))
            .filter(|token| token.chars().count() >= 2 && !is_stray_fragment(token))
            .filter(|token| seen.insert(token.clone()))
            .collect();

        debug!("Tokenized situation {input:?} -> {tokens:?}");
        tokens
    }

    /// Strip one particle, then one verb ending, then canonicalize.
    ///
    /// Particles and endings are Hangul, so the token keeps its own case.
    fn reduce(&self, raw: &str) -> String {
        let mut token = raw;

        if let Some(stripped) = self.particles.iter().find_map(|p| token.strip_suffix(p)) {
            token = stripped;
        }
        if let Some(stripped) = self.endings.iter().find_map(|e| token.strip_suffix(e)) {
            token = stripped;
        }

        let token = token.trim();
        canonical_word(token).unwrap_or(token).to_string()
    }
}

impl Default for SituationTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_punctuation(c: char) -> bool {
    TERMINAL_PUNCTUATION.contains(&c) || QUOTE_CHARS.contains(&c) || c == ','
}
