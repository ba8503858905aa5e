use std::fmt;

use serde::Serialize;

use crate::normalization::kannada_normalize;

/// Sound-based code for a word: the literal first scalar followed by
/// consonant-class symbols with consecutive repeats collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneticCode(String);

impl PhoneticCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of symbols in the code.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for PhoneticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Consonant equivalence class, by place of articulation.
/// Scalars without an entry (vowels, signs, virama) yield `None`.
pub fn consonant_class(c: char) -> Option<char> {
    match c {
        '\u{0C95}'..='\u{0C98}' => Some('1'), // velar stops
        '\u{0C9A}'..='\u{0C9D}' => Some('2'), // palatal stops
        '\u{0C9F}'..='\u{0CA2}' => Some('3'), // retroflex stops
        '\u{0CA4}'..='\u{0CA7}' => Some('4'), // dental stops
        '\u{0CAA}'..='\u{0CAD}' => Some('5'), // labial stops
        '\u{0C99}' | '\u{0C9E}' | '\u{0CA3}' | '\u{0CA8}' | '\u{0CAE}' => Some('N'),
        '\u{0CB6}'..='\u{0CB8}' => Some('S'),
        '\u{0CB0}' => Some('R'),
        '\u{0CB2}' => Some('L'),
        '\u{0CB5}' => Some('V'),
        '\u{0CB9}' => Some('H'),
        '\u{0CB3}' => Some('Z'), // retroflex LLA
        _ => None,
    }
}

pub fn phonetic_hash(word: &str) -> PhoneticCode {
    let normalized = kannada_normalize(word);
    let mut chars = normalized.chars();

    let first = match chars.next() {
        Some(c) => c,
        None => return PhoneticCode::default(),
    };

    let mut code = String::with_capacity(normalized.len());
    code.push(first);
    let mut last = first;

    for c in chars {
        if let Some(class) = consonant_class(c) {
            if class != last {
                code.push(class);
                last = class;
            }
        }
    }

    PhoneticCode(code)
}
