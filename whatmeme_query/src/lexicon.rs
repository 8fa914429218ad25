//! Fixed word tables shared by the normalizer, tokenizer and scorer.
//!
//! Lists that are matched as suffixes are kept in declaration order here and
//! re-sorted longest-first by their consumers.

/// Temporal adverbs removed once from the front of a question.
pub const TEMPORAL_PREFIXES: &[&str] = &["요즘", "최근", "지금", "아직"];

/// Question and filler phrases stripped from the tail of a question.
pub const QUESTION_SUFFIXES: &[&str] = &[
    // meaning questions
    "무슨 뜻이야",
    "무슨 뜻",
    "뜻이 뭐야",
    "뜻이 뭔데",
    "이게 뭐야",
    "이 뭐야",
    "뭐야",
    "뭔데",
    "무엇",
    "뭐",
    "뜻",
    "유래",
    "이란",
    "란",
    "에 대해",
    // explain / tell me
    "설명해줘",
    "설명해",
    "설명",
    "알려줘",
    "알려",
    "정리해줘",
    "정리해",
    "알고 있어",
    "알고있어",
    "알아",
    // status questions
    "아직 살아있어",
    "아직도 유행해",
    "살아있어",
    "유행이야",
    "유행해",
    "유행",
    "핫해",
    "끝났어",
    "식었어",
    "아직도",
    "아직",
    // the word "meme" itself
    "meme",
    "밈",
];

/// Characters stripped from the end of a question.
pub const TERMINAL_PUNCTUATION: &[char] = &['?', '!', '.', '。', '！', '？', '~'];

/// Quote characters removed wherever they appear.
pub const QUOTE_CHARS: &[char] = &['\'', '"', '“', '”', '‘', '’', '`'];

/// Single-character particles a question may end with.
pub const QUERY_PARTICLES: &[char] = &['는', '은', '이', '가', '를', '을'];

/// Request and filler words removed from situation sentences.
pub const SITUATION_FILLERS: &[&str] = &[
    "추천해줘",
    "추천해",
    "추천",
    "알려줘",
    "보여줘",
    "뭐있어",
    "뭐야",
    "사용하는",
    "사용할",
    "쓰는",
    "meme",
    "밈",
];

/// Object and locative particles stripped from situation tokens.
pub const SITUATION_PARTICLES: &[&str] = &["에서", "에게", "가", "이", "을", "를", "의", "에"];

/// Verb-ending fragments stripped from situation tokens.
pub const VERB_ENDINGS: &[&str] = &[
    "하고", "하고서", "하려고", "할", "하는", "해", "해줘", "좀", "싶어", "싶을", "했을",
    "했어", "했네", "했어요", "했죠", "했지", "했나", "했니", "사왔을", "사왔어", "사왔네",
    "받을", "받았을", "받았어", "받고", "싫을", "싫어", "싫네", "싫어요", "하기", "하기를",
    "하기가", "쓰는", "사용하는", "사용할",
];

/// Leftover fragments that never count as a token on their own.
pub const STRAY_FRAGMENTS: &[&str] = &["때", "사왔", "받았", "싶"];

/// Inflected variant to canonical word.
pub const WORD_NORMALIZATION: &[(&str, &str)] = &[
    ("신날", "신남"),
    ("신나", "신남"),
    ("신난", "신남"),
    ("신나는", "신남"),
    ("설렐", "설렘"),
    ("설레", "설렘"),
    ("설레는", "설렘"),
    ("짜증날", "짜증"),
    ("짜증나", "짜증"),
    ("짜증난", "짜증"),
    ("피곤할", "피곤"),
    ("피곤한", "피곤"),
    ("어색할", "어색"),
    ("어색한", "어색"),
];

/// Synonym families: family id and its members.
pub const SYNONYM_FAMILIES: &[(&str, &[&str])] = &[
    ("퇴근", &["퇴근", "칼퇴", "야근", "회사"]),
    ("시험", &["시험", "공부", "기말", "중간고사", "점수"]),
    ("긍정", &["긍정", "낙관", "희망", "좋은 일"]),
    ("신남", &["신남", "신나", "흥분", "들뜬"]),
    ("포기", &["포기", "버티", "의지", "끝까지"]),
    ("운동", &["운동", "헬스", "다이어트", "근육"]),
    ("분위기", &["분위기", "어색", "냉랭", "경직"]),
];

/// Canonical form for a known inflected variant.
#[must_use]
pub fn canonical_word(word: &str) -> Option<&'static str> {
    WORD_NORMALIZATION
        .iter()
        .find(|(variant, _)| *variant == word)
        .map(|(_, canonical)| *canonical)
}

/// All known inflected variants of a canonical word.
pub fn variants_of(canonical: &str) -> impl Iterator<Item = &'static str> + '_ {
    WORD_NORMALIZATION
        .iter()
        .filter(move |(_, c)| *c == canonical)
        .map(|(variant, _)| *variant)
}

/// The synonym family a token belongs to, if any.
#[must_use]
pub fn synonym_family(token: &str) -> Option<(&'static str, &'static [&'static str])> {
    SYNONYM_FAMILIES
        .iter()
        .find(|(_, members)| members.contains(&token))
        .copied()
}

/// Whether a whole token is a particle or ending fragment left over by mistake.
#[must_use]
pub fn is_stray_fragment(token: &str) -> bool {
    STRAY_FRAGMENTS.contains(&token)
        || SITUATION_PARTICLES.contains(&token)
        || VERB_ENDINGS.contains(&token)
}

/// Copy of `items` sorted longest first (by characters), stable for equal lengths.
#[must_use]
pub fn longest_first(items: &[&'static str]) -> Vec<&'static str> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_word_maps_variants() {
        assert_eq!(canonical_word("신날"), Some("신남"));
        assert_eq!(canonical_word("신남"), None);
    }

    #[test]
    fn variants_of_lists_all_inflections() {
        let variants: Vec<_> = variants_of("신남").collect();
        assert_eq!(variants, ["신날", "신나", "신난", "신나는"]);
    }

    #[test]
    fn synonym_family_finds_members() {
        assert_eq!(synonym_family("칼퇴").map(|(id, _)| id), Some("퇴근"));
        assert!(synonym_family("우주").is_none());
    }

    #[test]
    fn longest_first_is_stable() {
        let sorted = longest_first(&["뜻", "유래", "밈", "무슨 뜻"]);
        assert_eq!(sorted, ["무슨 뜻", "유래", "뜻", "밈"]);
    }

    #[test]
    fn stray_fragments_include_endings() {
        assert!(is_stray_fragment("때"));
        assert!(is_stray_fragment("하고"));
        assert!(!is_stray_fragment("퇴근"));
    }
}
