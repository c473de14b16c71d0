//! Lemmatization: irregular-form tables, then ordered suffix substitutions
//! per word class, with orthographic repair of the stripped stem.
//!
//! Output is always lower-cased; a word matching no table and no rule comes
//! back unchanged.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::pos::WordClass;

static NOUN_IRREGULARS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("lice", "louse"),
        ("oxen", "ox"),
        ("gentlemen", "gentleman"),
        ("firemen", "fireman"),
        ("policemen", "policeman"),
        ("leaves", "leaf"),
        ("wolves", "wolf"),
        ("knives", "knife"),
        ("lives", "life"),
        ("wives", "wife"),
        ("halves", "half"),
        ("selves", "self"),
        ("shelves", "shelf"),
        ("thieves", "thief"),
        ("loaves", "loaf"),
        ("calves", "calf"),
        ("scarves", "scarf"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("analyses", "analysis"),
        ("crises", "crisis"),
        ("theses", "thesis"),
        ("phenomena", "phenomenon"),
        ("criteria", "criterion"),
    ]
    .into_iter()
    .collect()
});

static VERB_IRREGULARS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("am", "be"),
        ("is", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("being", "be"),
        ("has", "have"),
        ("had", "have"),
        ("does", "do"),
        ("did", "do"),
        ("done", "do"),
        ("goes", "go"),
        ("went", "go"),
        ("gone", "go"),
        ("ran", "run"),
        ("running", "run"),
        ("said", "say"),
        ("saw", "see"),
        ("seen", "see"),
        ("took", "take"),
        ("taken", "take"),
        ("came", "come"),
        ("made", "make"),
        ("got", "get"),
        ("gotten", "get"),
        ("gave", "give"),
        ("given", "give"),
        ("knew", "know"),
        ("known", "know"),
        ("thought", "think"),
        ("found", "find"),
        ("left", "leave"),
        ("felt", "feel"),
        ("kept", "keep"),
        ("held", "hold"),
        ("brought", "bring"),
        ("wrote", "write"),
        ("written", "write"),
        ("ate", "eat"),
        ("eaten", "eat"),
        ("spoke", "speak"),
        ("spoken", "speak"),
        ("sat", "sit"),
        ("stood", "stand"),
        ("lost", "lose"),
        ("paid", "pay"),
        ("met", "meet"),
        ("sent", "send"),
        ("built", "build"),
        ("fell", "fall"),
        ("fallen", "fall"),
        ("drove", "drive"),
        ("driven", "drive"),
        ("bought", "buy"),
        ("caught", "catch"),
        ("taught", "teach"),
        ("sought", "seek"),
        ("flew", "fly"),
        ("flown", "fly"),
        ("swam", "swim"),
        ("swum", "swim"),
        ("began", "begin"),
        ("begun", "begin"),
        ("broke", "break"),
        ("broken", "break"),
        ("chose", "choose"),
        ("chosen", "choose"),
        ("spent", "spend"),
        ("meant", "mean"),
        ("led", "lead"),
        ("grew", "grow"),
        ("grown", "grow"),
        ("threw", "throw"),
        ("thrown", "throw"),
        ("told", "tell"),
        ("heard", "hear"),
        ("became", "become"),
        ("won", "win"),
        ("wore", "wear"),
        ("worn", "wear"),
        ("slept", "sleep"),
        ("drew", "draw"),
        ("drawn", "draw"),
        ("sang", "sing"),
        ("sung", "sing"),
        ("drank", "drink"),
        ("drunk", "drink"),
    ]
    .into_iter()
    .collect()
});

static ADJ_IRREGULARS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("better", "good"),
        ("best", "good"),
        ("worse", "bad"),
        ("worst", "bad"),
        ("further", "far"),
        ("furthest", "far"),
        // base forms that the -est rule would mangle
        ("honest", "honest"),
        ("modest", "modest"),
        ("earnest", "earnest"),
    ]
    .into_iter()
    .collect()
});

static ADV_IRREGULARS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [("better", "well"), ("best", "well"), ("further", "far")]
        .into_iter()
        .collect()
});

/// Reduce a word to its base form for the given word class.
pub fn lemmatize(word: &str, class: WordClass) -> String {
    let w = word.to_lowercase();
    let irregulars = match class {
        WordClass::Noun => &NOUN_IRREGULARS,
        WordClass::Verb => &VERB_IRREGULARS,
        WordClass::Adjective => &ADJ_IRREGULARS,
        WordClass::Adverb => &ADV_IRREGULARS,
    };
    if let Some(lemma) = irregulars.get(w.as_str()) {
        return (*lemma).to_string();
    }
    match class {
        WordClass::Noun => noun_rules(&w),
        WordClass::Verb => verb_rules(&w),
        WordClass::Adjective => adjective_rules(&w),
        WordClass::Adverb => w,
    }
}

/// Suffixes where the plural is base + "es".
const SIBILANT_PLURALS: [&str; 5] = ["ches", "shes", "sses", "xes", "zes"];

fn noun_rules(w: &str) -> String {
    let n = w.len();
    for s in SIBILANT_PLURALS {
        if n > s.len() + 1 && w.ends_with(s) {
            return w[..n - 2].to_string();
        }
    }
    if n >= 5 {
        if let Some(stem) = w.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }
    if n >= 6 {
        if let Some(stem) = w.strip_suffix("oes") {
            return format!("{stem}o");
        }
    }
    if plain_plural(w, n) {
        return w[..n - 1].to_string();
    }
    w.to_string()
}

fn verb_rules(w: &str) -> String {
    let n = w.len();
    if n >= 5 {
        if let Some(stem) = w.strip_suffix("ies") {
            return format!("{stem}y");
        }
        if let Some(stem) = w.strip_suffix("ied") {
            return format!("{stem}y");
        }
    }
    for s in SIBILANT_PLURALS {
        if n > s.len() + 1 && w.ends_with(s) {
            return w[..n - 2].to_string();
        }
    }
    if n >= 6 {
        if let Some(stem) = w.strip_suffix("oes") {
            return format!("{stem}o");
        }
        if let Some(stem) = w.strip_suffix("eed") {
            return format!("{stem}ee");
        }
    }
    if n >= 4 {
        if let Some(stem) = w.strip_suffix("es") {
            return format!("{stem}e");
        }
    }
    if plain_plural(w, n) {
        return w[..n - 1].to_string();
    }
    if n >= 4 {
        if let Some(stem) = w.strip_suffix("ed") {
            return repair(stem);
        }
    }
    if n >= 5 {
        if let Some(stem) = w.strip_suffix("ing") {
            return repair(stem);
        }
    }
    w.to_string()
}

fn adjective_rules(w: &str) -> String {
    let n = w.len();
    if n >= 6 {
        if let Some(stem) = w.strip_suffix("iest") {
            return format!("{stem}y");
        }
    }
    if n >= 5 {
        if let Some(stem) = w.strip_suffix("ier") {
            return format!("{stem}y");
        }
        if let Some(stem) = w.strip_suffix("est") {
            return repair(stem);
        }
    }
    if n >= 4 {
        if let Some(stem) = w.strip_suffix("er") {
            return repair(stem);
        }
    }
    w.to_string()
}

/// Bare trailing -s, excluding -ss/-us/-is endings that are usually singular.
fn plain_plural(w: &str, n: usize) -> bool {
    n >= 4
        && w.ends_with('s')
        && !w.ends_with("ss")
        && !w.ends_with("us")
        && !w.ends_with("is")
}

/// Fix the orthography of a stem left by stripping -ed/-ing/-er/-est:
/// collapse a doubled final consonant (except l/s/z), or restore a final
/// "e" the inflection consumed.
fn repair(stem: &str) -> String {
    let b = stem.as_bytes();
    let n = b.len();
    if n >= 3
        && b[n - 1] == b[n - 2]
        && b[n - 1].is_ascii_alphabetic()
        && !is_vowel_at(b, n - 1)
        && !matches!(b[n - 1], b'l' | b's' | b'z')
    {
        return stem[..n - 1].to_string();
    }
    if n >= 2 {
        let needs_e = matches!(b[n - 1], b'v' | b'c' | b'i')
            || (b[n - 1] == b'g' && matches!(b[n - 2], b'r' | b'l' | b'd' | b'u'));
        if needs_e {
            return format!("{stem}e");
        }
    }
    if n >= 3 && ends_cvc(b) && measure(b) == 1 {
        return format!("{stem}e");
    }
    stem.to_string()
}

fn is_vowel_at(b: &[u8], i: usize) -> bool {
    match b[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => true,
        b'y' => i > 0 && !is_vowel_at(b, i - 1),
        _ => false,
    }
}

/// Count vowel-to-consonant transitions (the Porter measure).
fn measure(b: &[u8]) -> usize {
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..b.len() {
        let vowel = is_vowel_at(b, i);
        if prev_vowel && !vowel {
            m += 1;
        }
        prev_vowel = vowel;
    }
    m
}

fn ends_cvc(b: &[u8]) -> bool {
    let n = b.len();
    n >= 3
        && !is_vowel_at(b, n - 3)
        && is_vowel_at(b, n - 2)
        && !is_vowel_at(b, n - 1)
        && !matches!(b[n - 1], b'w' | b'x' | b'y')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::WordClass::{Adjective, Adverb, Noun, Verb};

    #[test]
    fn noun_plurals() {
        assert_eq!(lemmatize("cats", Noun), "cat");
        assert_eq!(lemmatize("boxes", Noun), "box");
        assert_eq!(lemmatize("dishes", Noun), "dish");
        assert_eq!(lemmatize("glasses", Noun), "glass");
        assert_eq!(lemmatize("cities", Noun), "city");
        assert_eq!(lemmatize("houses", Noun), "house");
        assert_eq!(lemmatize("heroes", Noun), "hero");
    }

    #[test]
    fn noun_irregulars() {
        assert_eq!(lemmatize("women", Noun), "woman");
        assert_eq!(lemmatize("children", Noun), "child");
        assert_eq!(lemmatize("wolves", Noun), "wolf");
    }

    #[test]
    fn noun_singulars_pass_through() {
        assert_eq!(lemmatize("cat", Noun), "cat");
        assert_eq!(lemmatize("glass", Noun), "glass");
        assert_eq!(lemmatize("virus", Noun), "virus");
        assert_eq!(lemmatize("analysis", Noun), "analysis");
        assert_eq!(lemmatize("gas", Noun), "gas");
    }

    #[test]
    fn verb_inflections() {
        assert_eq!(lemmatize("runs", Verb), "run");
        assert_eq!(lemmatize("takes", Verb), "take");
        assert_eq!(lemmatize("watches", Verb), "watch");
        assert_eq!(lemmatize("jumped", Verb), "jump");
        assert_eq!(lemmatize("stopped", Verb), "stop");
        assert_eq!(lemmatize("carried", Verb), "carry");
        assert_eq!(lemmatize("died", Verb), "die");
        assert_eq!(lemmatize("agreed", Verb), "agree");
        assert_eq!(lemmatize("making", Verb), "make");
        assert_eq!(lemmatize("falling", Verb), "fall");
        assert_eq!(lemmatize("visiting", Verb), "visit");
    }

    #[test]
    fn verb_irregulars() {
        assert_eq!(lemmatize("are", Verb), "be");
        assert_eq!(lemmatize("was", Verb), "be");
        assert_eq!(lemmatize("running", Verb), "run");
        assert_eq!(lemmatize("went", Verb), "go");
        assert_eq!(lemmatize("thought", Verb), "think");
    }

    #[test]
    fn adjective_grades() {
        assert_eq!(lemmatize("bigger", Adjective), "big");
        assert_eq!(lemmatize("larger", Adjective), "large");
        assert_eq!(lemmatize("nicer", Adjective), "nice");
        assert_eq!(lemmatize("happier", Adjective), "happy");
        assert_eq!(lemmatize("happiest", Adjective), "happy");
        assert_eq!(lemmatize("better", Adjective), "good");
        assert_eq!(lemmatize("honest", Adjective), "honest");
    }

    #[test]
    fn adverbs_only_use_the_table() {
        assert_eq!(lemmatize("quickly", Adverb), "quickly");
        assert_eq!(lemmatize("better", Adverb), "well");
    }

    #[test]
    fn output_is_lowercased() {
        assert_eq!(lemmatize("Cats", Noun), "cat");
        assert_eq!(lemmatize("The", Noun), "the");
    }
}
