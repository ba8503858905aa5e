use crate::normalization::kannada_normalize;

/// Common Kannada function words.
pub const STOPWORDS: &[&str] = &[
    "ಮತ್ತು", "ಒಂದು", "ಈ", "ಆ", "ನನ್ನ", "ನಿಮ್ಮ", "ಅವರು", "ಇದು", "ಆದರೆ",
    "ಬಗ್ಗೆ", "ನಾವು", "ನೀವು", "ಎಂದು", "ಇದೆ", "ಆಗಿ", "ಅದು", "ಅಲ್ಲಿ", "ಇಲ್ಲಿ",
];

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Normalizes `text` and splits it on whitespace, optionally dropping stopwords.
pub fn preprocess_text(text: &str, remove_stopwords: bool) -> Vec<String> {
    kannada_normalize(text)
        .split(' ')
        .filter(|t| !t.is_empty())
        .filter(|t| !(remove_stopwords && is_stopword(t)))
        .map(str::to_string)
        .collect()
}
