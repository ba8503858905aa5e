use log::trace;

use crate::normalization::kannada_normalize;
use crate::utils::longest_match;

/// Words shorter than this many scalars are never stemmed.
pub const MIN_STEMMABLE_LEN: usize = 4;
/// A stem never drops below this many scalars.
pub const MIN_STEM_LEN: usize = 2;

/// Built-in ranked suffix table. On equal length the earlier entry wins.
pub const DEFAULT_SUFFIXES: &[&str] = &[
    // accusative
    "ವನ್ನು",
    "ಯನ್ನು",
    "ನ್ನು",
    // instrumental
    "ದಿಂದ",
    "ಯಿಂದ",
    "ಿಂದ",
    // dative
    "ಕ್ಕೆ",
    "ಿಗೆ",
    "ಗೆ",
    // genitive
    "ದ",
    "ಿನ",
    // locative
    "ಯಲ್ಲಿ",
    "ದಲ್ಲಿ",
    "ಲ್ಲಿ",
    // adverbial
    "ವಾಗಿ",
    "ಾಗಿ",
    // plural
    "ಗಳನ್ನು",
    "ಗಳಿಗೆ",
    "ಗಳು",
    "ಗಳ",
    "ರು",
    // past tense
    "ದನು",
    "ದಳು",
    "ದರು",
    "ತು",
    // single scalar
    "ು",
    "ೆ",
    "ನ",
];

/// Strips at most one inflectional suffix, longest match first.
#[derive(Debug, Clone)]
pub struct KannadaStemmer {
    suffixes: Vec<&'static str>,
}

impl Default for KannadaStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl KannadaStemmer {
    pub fn new() -> Self {
        Self { suffixes: DEFAULT_SUFFIXES.to_vec() }
    }

    /// Uses a custom ranked suffix table instead of the built-in one.
    pub fn with_suffixes(suffixes: Vec<&'static str>) -> Self {
        Self { suffixes }
    }

    pub fn suffixes(&self) -> &[&'static str] {
        &self.suffixes
    }

    pub fn stem(&self, word: &str) -> String {
        let word = kannada_normalize(word);
        let len = word.chars().count();
        if len < MIN_STEMMABLE_LEN {
            return word;
        }

        let suffix = match longest_match(&self.suffixes, |s| !s.is_empty() && word.ends_with(s)) {
            Some(s) => s,
            None => return word,
        };

        let residual = len - suffix.chars().count();
        if residual < MIN_STEM_LEN {
            trace!("keeping {word:?}: stripping {suffix:?} leaves {residual} scalars");
            return word;
        }

        trace!("stripped {suffix:?} from {word:?}");
        word[..word.len() - suffix.len()].to_string()
    }
}
