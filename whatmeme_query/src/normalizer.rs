//! Question normalization.
//!
//! Reduces a free-form question ("요즘 헬창 밈 식었어?") to the bare catalog
//! name candidate ("헬창"). Patterns are compiled once per normalizer.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::lexicon::{
    QUERY_PARTICLES, QUESTION_SUFFIXES, QUOTE_CHARS, TEMPORAL_PREFIXES, TERMINAL_PUNCTUATION,
    longest_first,
};

static DEFAULT_NORMALIZER: Lazy<QueryNormalizer> = Lazy::new(QueryNormalizer::new);

/// Normalize a question with the built-in phrase tables.
#[must_use]
pub fn normalize_query(input: &str) -> String {
    DEFAULT_NORMALIZER.normalize(input)
}

/// Multi-stage affix stripper for questions.
#[derive(Debug, Clone)]
pub struct QueryNormalizer {
    /// Matches one leading temporal adverb followed by whitespace.
    prefix: Option<Regex>,
    /// One pattern per trailing phrase, longest phrase first.
    suffixes: Vec<Regex>,
}

impl QueryNormalizer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_phrases(TEMPORAL_PREFIXES, QUESTION_SUFFIXES)
    }

    /// Build a normalizer from custom prefix and suffix tables.
    ///
    /// Phrases are matched literally and case-insensitively.
    #[must_use]
    pub fn with_phrases(prefixes: &[&'static str], suffixes: &[&'static str]) -> Self {
        let alternation = prefixes
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        let prefix = if alternation.is_empty() {
            None
        } else {
            Regex::new(&format!(r"(?i)^(?:{alternation})\s+")).ok()
        };

        let suffixes = longest_first(suffixes)
            .into_iter()
            .filter(|phrase| !phrase.is_empty())
            .filter_map(|phrase| Regex::new(&format!(r"(?i)\s*{}$", regex::escape(phrase))).ok())
            .collect();

        Self { prefix, suffixes }
    }

    /// Reduce `input` to a bare name candidate, or `""` if nothing is left.
    #[must_use]
    pub fn normalize(&self, input: &str) -> String {
        // whitespace runs collapse to one space
        let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");

        let unquoted: String = collapsed
            .trim_end_matches(|c: char| {
                TERMINAL_PUNCTUATION.contains(&c) || QUOTE_CHARS.contains(&c) || c.is_whitespace()
            })
            .chars()
            .filter(|c| !QUOTE_CHARS.contains(c))
            .collect();
        let mut text = unquoted.trim().to_string();

        if let Some(prefix) = &self.prefix {
            text = prefix.replace(&text, "").into_owned();
        }

        text = self.strip_suffixes(text);
        let text = strip_particle(&text).trim().to_string();

        debug!("Normalized query {input:?} -> {text:?}");
        text
    }

    /// Strip trailing phrases until none matches the current tail.
    fn strip_suffixes(&self, mut text: String) -> String {
        while !text.is_empty() {
            let Some(pattern) = self.suffixes.iter().find(|re| re.is_match(&text)) else {
                break;
            };
            let stripped = pattern.replace(&text, "").trim_end().to_string();
            if stripped.len() == text.len() {
                break;
            }
            text = stripped;
        }
        text
    }
}

impl Default for QueryNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop one trailing particle from strings of two or more characters,
/// keeping it when nothing would remain.
fn strip_particle(text: &str) -> &str {
    if text.chars().count() < 2 {
        return text;
    }
    let Some(stripped) = text.strip_suffix(QUERY_PARTICLES) else {
        return text;
    };
    let stripped = stripped.trim_end();
    if stripped.is_empty() { text } else { stripped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_input_normalize_to_empty() {
        assert_eq!(normalize_query(""), "");
        assert_eq!(normalize_query("   \t "), "");
        assert_eq!(normalize_query("?!"), "");
    }

    #[test]
    fn status_question_cascades() {
        assert_eq!(normalize_query("중꺾마 아직 살아있어?"), "중꺾마");
    }

    #[test]
    fn prefix_then_stacked_suffixes() {
        assert_eq!(normalize_query("요즘 헬창 밈 식었어?"), "헬창");
    }

    #[test]
    fn pure_question_word_yields_empty() {
        assert_eq!(normalize_query("뭐야"), "");
        assert_eq!(normalize_query("밈 뭐야?"), "");
    }

    #[test]
    fn meaning_questions() {
        assert_eq!(normalize_query("중꺾마 뜻"), "중꺾마");
        assert_eq!(normalize_query("중꺾마 뜻 알려줘"), "중꺾마");
        assert_eq!(normalize_query("골반춤 밈 알아?"), "골반춤");
        assert_eq!(normalize_query("럭키비키 무슨 뜻이야??"), "럭키비키");
        assert_eq!(normalize_query("  럭키비키  "), "럭키비키");
    }

    #[test]
    fn suffix_without_space_is_stripped() {
        assert_eq!(normalize_query("헬창밈"), "헬창");
        assert_eq!(normalize_query("어쩔티비뜻"), "어쩔티비");
    }

    #[test]
    fn only_one_prefix_is_removed() {
        assert_eq!(normalize_query("요즘 지금 헬창"), "지금 헬창");
    }

    #[test]
    fn prefix_requires_following_whitespace() {
        assert_eq!(normalize_query("지금헬창"), "지금헬창");
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(normalize_query("꽁꽁   얼어붙은\t한강  뜻"), "꽁꽁 얼어붙은 한강");
    }

    #[test]
    fn quotes_are_removed() {
        assert_eq!(normalize_query("\"럭키비키\" 뜻?"), "럭키비키");
        assert_eq!(normalize_query("‘중꺾마’ 설명해줘"), "중꺾마");
    }

    #[test]
    fn suffix_matching_ignores_case() {
        assert_eq!(normalize_query("럭키비키 MEME"), "럭키비키");
    }

    #[test]
    fn trailing_particle_is_stripped() {
        assert_eq!(normalize_query("골반춤이"), "골반춤");
        assert_eq!(normalize_query("헬창은 뭐야"), "헬창");
    }

    #[test]
    fn particle_guard_keeps_single_char() {
        assert_eq!(normalize_query("가"), "가");
        assert_eq!(normalize_query("이가"), "이");
    }

    #[test]
    fn never_returns_raw_input_as_fallback() {
        assert_eq!(normalize_query("  뭐야?  "), "");
    }

    #[test]
    fn phrases_are_matched_literally() {
        let normalizer = QueryNormalizer::with_phrases(&[], &["a.b", "(x)"]);
        assert_eq!(normalizer.normalize("헬창 a.b"), "헬창");
        assert_eq!(normalizer.normalize("헬창 acb"), "헬창 acb");
        assert_eq!(normalizer.normalize("헬창(x)"), "헬창");
    }

    #[test]
    fn custom_prefixes_are_applied_once() {
        let normalizer = QueryNormalizer::with_phrases(&["still"], &[]);
        assert_eq!(normalizer.normalize("Still still alive"), "still alive");
    }
}
