//! Heuristic part-of-speech tagging: closed-class lexicon plus suffix rules.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Word classes the lemmatizer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Adjective,
    Noun,
    Verb,
    Adverb,
}

impl WordClass {
    /// Map a Penn-style tag to a word class by its first letter.
    /// Anything outside J/V/R (including unknown tags) is treated as a noun.
    pub fn from_tag(tag: &str) -> Self {
        match tag.as_bytes().first() {
            Some(b'J') => WordClass::Adjective,
            Some(b'V') => WordClass::Verb,
            Some(b'R') => WordClass::Adverb,
            _ => WordClass::Noun,
        }
    }
}

/// Closed-class words carry their tag outright; open-class words fall
/// through to the suffix rules in [`tag`].
static LEXICON: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let entries: &[(&str, &str)] = &[
        // determiners
        ("the", "DT"),
        ("a", "DT"),
        ("an", "DT"),
        ("this", "DT"),
        ("that", "DT"),
        ("these", "DT"),
        ("those", "DT"),
        // forms of be / have / do
        ("am", "VBP"),
        ("is", "VBZ"),
        ("are", "VBP"),
        ("was", "VBD"),
        ("were", "VBD"),
        ("be", "VB"),
        ("been", "VBN"),
        ("being", "VBG"),
        ("have", "VBP"),
        ("has", "VBZ"),
        ("had", "VBD"),
        ("having", "VBG"),
        ("do", "VBP"),
        ("does", "VBZ"),
        ("did", "VBD"),
        ("done", "VBN"),
        // modals
        ("will", "MD"),
        ("would", "MD"),
        ("can", "MD"),
        ("could", "MD"),
        ("shall", "MD"),
        ("should", "MD"),
        ("may", "MD"),
        ("might", "MD"),
        ("must", "MD"),
        // pronouns
        ("i", "PRP"),
        ("you", "PRP"),
        ("he", "PRP"),
        ("she", "PRP"),
        ("it", "PRP"),
        ("we", "PRP"),
        ("they", "PRP"),
        ("me", "PRP"),
        ("him", "PRP"),
        ("her", "PRP"),
        ("us", "PRP"),
        ("them", "PRP"),
        ("my", "PRP$"),
        ("your", "PRP$"),
        ("his", "PRP$"),
        ("its", "PRP$"),
        ("our", "PRP$"),
        ("their", "PRP$"),
        // prepositions
        ("in", "IN"),
        ("on", "IN"),
        ("at", "IN"),
        ("by", "IN"),
        ("for", "IN"),
        ("with", "IN"),
        ("from", "IN"),
        ("to", "IN"),
        ("of", "IN"),
        ("into", "IN"),
        ("over", "IN"),
        ("under", "IN"),
        ("about", "IN"),
        // conjunctions
        ("and", "CC"),
        ("or", "CC"),
        ("but", "CC"),
        ("nor", "CC"),
        ("so", "CC"),
        ("yet", "CC"),
        // wh-words
        ("who", "WP"),
        ("whom", "WP"),
        ("whose", "WP$"),
        ("what", "WDT"),
        ("which", "WDT"),
        ("when", "WRB"),
        ("where", "WRB"),
        ("why", "WRB"),
        ("how", "WRB"),
        // frequent adverbs without -ly
        ("not", "RB"),
        ("never", "RB"),
        ("also", "RB"),
        ("very", "RB"),
        ("too", "RB"),
        ("quite", "RB"),
        ("always", "RB"),
        ("often", "RB"),
        ("there", "EX"),
    ];
    entries.iter().copied().collect()
});

/// Tag a single token with a Penn-style part-of-speech tag.
pub fn tag(token: &str) -> &'static str {
    let lower = token.to_lowercase();
    if let Some(&t) = LEXICON.get(lower.as_str()) {
        return t;
    }
    if lower.chars().any(|c| c.is_ascii_digit())
        && lower.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
    {
        return "CD";
    }
    let n = lower.len();
    if n > 4 && lower.ends_with("ing") {
        return "VBG";
    }
    if n > 3 && lower.ends_with("ed") {
        return "VBD";
    }
    if n > 3 && lower.ends_with("ly") {
        return "RB";
    }
    if ["able", "ible", "ful", "ous", "ive", "ish"]
        .iter()
        .any(|s| n > s.len() + 1 && lower.ends_with(s))
    {
        return "JJ";
    }
    if n > 4 && lower.ends_with("est") {
        return "JJS";
    }
    if n > 2
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return "NNS";
    }
    "NN"
}

/// Tag every token in sequence.
pub fn pos_tag(tokens: &[String]) -> Vec<(String, &'static str)> {
    tokens.iter().map(|t| (t.clone(), tag(t))).collect()
}
