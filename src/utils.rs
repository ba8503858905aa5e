use serde::Serialize;

pub const VIRAMA: char = '\u{0CCD}';
pub const ANUSVARA: char = '\u{0C82}';
pub const VISARGA: char = '\u{0C83}';

/// Linguistic class of a single scalar value within the Kannada block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CodepointClass {
    Vowel,
    Consonant,
    DependentVowelSign,
    Virama,
    Yogavaha,
    Other,
}

pub fn classify(c: char) -> CodepointClass {
    match c {
        '\u{0C85}'..='\u{0C94}' => CodepointClass::Vowel, // A .. AU
        '\u{0CE0}' | '\u{0CE1}' => CodepointClass::Vowel, // vocalic RR, vocalic LL
        '\u{0C95}'..='\u{0CB9}' => CodepointClass::Consonant, // KA .. HA
        '\u{0CDE}' => CodepointClass::Consonant, // FA, nukta-style
        '\u{0CBE}'..='\u{0CCC}' => CodepointClass::DependentVowelSign,
        VIRAMA => CodepointClass::Virama,
        ANUSVARA | VISARGA => CodepointClass::Yogavaha,
        _ => CodepointClass::Other,
    }
}

pub fn is_kannada_char(c: char) -> bool {
    c >= '\u{0C80}' && c <= '\u{0CFF}'
}

/// Independent long vowels and long vowel signs. Any of these makes an akshara Guru.
pub fn is_long_vowel(c: char) -> bool {
    matches!(
        c,
        '\u{0C86}' // AA
            | '\u{0C88}' // II
            | '\u{0C8A}' // UU
            | '\u{0C8F}' // EE
            | '\u{0C90}' // AI
            | '\u{0C93}' // OO
            | '\u{0C94}' // AU
            | '\u{0CE0}' // vocalic RR
            | '\u{0CE1}' // vocalic LL
            | '\u{0CBE}' // sign AA
            | '\u{0CC0}' // sign II
            | '\u{0CC2}' // sign UU
            | '\u{0CC4}' // sign vocalic RR
            | '\u{0CC7}' // sign EE
            | '\u{0CC8}' // sign AI
            | '\u{0CCB}' // sign OO
            | '\u{0CCC}' // sign AU
    )
}

/// Picks the longest candidate accepted by `matches`, measured in scalar values.
/// Ties go to the candidate declared first.
pub fn longest_match<'a, F>(candidates: &[&'a str], matches: F) -> Option<&'a str>
where
    F: Fn(&str) -> bool,
{
    let mut best: Option<(&'a str, usize)> = None;
    for &cand in candidates {
        if !matches(cand) {
            continue;
        }
        let len = cand.chars().count();
        match best {
            Some((_, best_len)) if best_len >= len => {}
            _ => best = Some((cand, len)),
        }
    }
    best.map(|(cand, _)| cand)
}
