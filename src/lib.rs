//! Akshara-level analysis of Kannada text: segmentation, Chandassu meter,
//! phonetic hashing, and suffix-stripping stemming.
//!
//! ```
//! use kannada_akshara::{meter, segment, MeterSymbol};
//!
//! let seg = segment("ನಮಸ್ಕಾರ");
//! assert_eq!(seg.len(), 4);
//! assert_eq!(
//!     meter("ನಮಸ್ಕಾರ"),
//!     vec![MeterSymbol::Laghu, MeterSymbol::Guru, MeterSymbol::Guru, MeterSymbol::Laghu]
//! );
//! ```

pub mod akshara_segmenter;
pub mod analyzer;
pub mod chandassu;
pub mod cognate;
pub mod corpus;
pub mod error;
pub mod normalization;
pub mod phonetic;
pub mod stemmer;
pub mod tokenizer;
pub mod utils;

pub use akshara_segmenter::{Akshara, AksharaSegmenter, AksharaStats, Segmentation, SegmenterConfig};
pub use analyzer::{AnalysisReport, AnalyzerConfig, KannadaAnalyzer, TokenAnalysis};
pub use chandassu::{ChandassuEngine, MeterSymbol};
pub use cognate::{script_similarity, to_kannada, to_telugu, CognateReport};
pub use corpus::Corpus;
pub use error::{Error, Result};
pub use phonetic::{phonetic_hash, PhoneticCode};
pub use stemmer::KannadaStemmer;
pub use tokenizer::{is_stopword, preprocess_text};
pub use utils::{classify, CodepointClass};

/// NFC-composes, drops ZWJ/ZWNJ, trims, and collapses whitespace.
pub fn normalize(text: &str) -> String {
    normalization::kannada_normalize(text)
}

/// Normalizes `text` and splits it into aksharas.
pub fn segment(text: &str) -> Segmentation {
    akshara_segmenter::segment_normalized(&normalize(text))
}

/// Guru/Laghu weight for each akshara of `text`.
pub fn meter(text: &str) -> Vec<MeterSymbol> {
    ChandassuEngine::new().apply(&segment(text).aksharas)
}

/// The meter of `text` in `U`/`-` notation.
pub fn meter_pattern(text: &str) -> String {
    chandassu::render_pattern(&meter(text))
}

/// Strips one inflectional suffix using the built-in suffix table.
pub fn stem(word: &str) -> String {
    KannadaStemmer::new().stem(word)
}
