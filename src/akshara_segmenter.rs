use serde::Serialize;

use crate::normalization::kannada_normalize;
use crate::utils::{classify, CodepointClass};

/// One orthographic syllable, a contiguous slice of the normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Akshara {
    pub text: String,
    /// Byte offset of the akshara within the normalized text.
    pub offset: usize,
}

impl Akshara {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }

    pub fn contains_class(&self, class: CodepointClass) -> bool {
        self.text.chars().any(|c| classify(c) == class)
    }
}

/// Per-category counts collected during segmentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AksharaStats {
    pub swara: usize,
    pub vyanjana: usize,
    pub yogavaha: usize,
    pub ottakshara: usize,
    pub matra: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Segmentation {
    pub aksharas: Vec<Akshara>,
    pub stats: AksharaStats,
}

impl Segmentation {
    pub fn len(&self) -> usize {
        self.aksharas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aksharas.is_empty()
    }

    /// Concatenates the aksharas, separated by `separator` (ZERO WIDTH SPACE when `None`).
    pub fn join(&self, separator: Option<&str>) -> String {
        let sep = separator.unwrap_or("\u{200B}");
        let total_len = self.aksharas.iter().map(|a| a.text.len()).sum::<usize>()
            + self.aksharas.len() * sep.len();
        let mut result = String::with_capacity(total_len);

        for (i, akshara) in self.aksharas.iter().enumerate() {
            if i > 0 { result.push_str(sep); }
            result.push_str(&akshara.text);
        }

        result
    }
}

#[derive(Clone, Debug)]
pub struct SegmenterConfig {
    pub enable_normalization: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self { enable_normalization: true }
    }
}

#[derive(Debug)]
pub struct AksharaSegmenter {
    config: SegmenterConfig,
}

impl Default for AksharaSegmenter {
    fn default() -> Self {
        Self::new(SegmenterConfig::default())
    }
}

impl AksharaSegmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        Self { config }
    }

    pub fn segment(&self, raw_text: &str) -> Segmentation {
        if self.config.enable_normalization {
            segment_normalized(&kannada_normalize(raw_text))
        } else {
            segment_normalized(raw_text)
        }
    }
}

/// Splits already-normalized text into aksharas. Other-class scalars act as
/// delimiters and are dropped.
pub fn segment_normalized(text: &str) -> Segmentation {
    let mut stats = AksharaStats::default();
    let mut segments: Vec<(usize, usize)> = Vec::with_capacity(text.len() / 3);

    // Open buffer as a byte range into `text`.
    let mut open: Option<(usize, usize)> = None;
    let mut prev_class = CodepointClass::Other;

    for (i, c) in text.char_indices() {
        let end = i + c.len_utf8();
        let class = classify(c);

        match class {
            CodepointClass::Vowel => {
                flush(&mut segments, &mut open);
                open = Some((i, end));
                stats.swara += 1;
            }
            CodepointClass::Consonant => {
                if prev_class == CodepointClass::Virama {
                    // Joins the open conjunct; after a delimiter flush it starts a new one.
                    extend(&mut open, i, end);
                    stats.ottakshara += 1;
                } else {
                    flush(&mut segments, &mut open);
                    open = Some((i, end));
                }
                stats.vyanjana += 1;
            }
            CodepointClass::DependentVowelSign
            | CodepointClass::Virama
            | CodepointClass::Yogavaha => {
                extend(&mut open, i, end);
                match class {
                    CodepointClass::DependentVowelSign => stats.matra += 1,
                    CodepointClass::Yogavaha => stats.yogavaha += 1,
                    _ => {}
                }
            }
            CodepointClass::Other => {
                // Not appended, so the previous appended class is kept.
                flush(&mut segments, &mut open);
                continue;
            }
        }

        prev_class = class;
    }
    flush(&mut segments, &mut open);

    let aksharas = segments
        .into_iter()
        .map(|(start, end)| Akshara { text: text[start..end].to_string(), offset: start })
        .collect();

    Segmentation { aksharas, stats }
}

fn extend(open: &mut Option<(usize, usize)>, start: usize, end: usize) {
    match open {
        Some((_, e)) => *e = end,
        // Mark with no base; start a degenerate akshara.
        None => *open = Some((start, end)),
    }
}

fn flush(segments: &mut Vec<(usize, usize)>, open: &mut Option<(usize, usize)>) {
    if let Some(range) = open.take() {
        segments.push(range);
    }
}
