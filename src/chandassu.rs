use std::fmt;

use serde::Serialize;

use crate::akshara_segmenter::Akshara;
use crate::utils::{classify, is_long_vowel, CodepointClass};

/// Metrical weight of one akshara.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MeterSymbol {
    Guru,
    Laghu,
}

impl MeterSymbol {
    /// Traditional notation: `-` for Guru, `U` for Laghu.
    pub fn symbol(self) -> char {
        match self {
            MeterSymbol::Guru => '-',
            MeterSymbol::Laghu => 'U',
        }
    }
}

impl fmt::Display for MeterSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug)]
pub struct ChandassuEngine;

impl Default for ChandassuEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChandassuEngine {
    pub fn new() -> Self {
        ChandassuEngine
    }

    /// Assigns a weight to each akshara. The result is index-aligned with `aksharas`.
    ///
    /// Each weight depends only on the akshara itself and its successor.
    pub fn apply(&self, aksharas: &[Akshara]) -> Vec<MeterSymbol> {
        let mut meter = Vec::with_capacity(aksharas.len());

        for (i, akshara) in aksharas.iter().enumerate() {
            // Rule 1: intrinsic length (long vowel or yogavaha)
            if is_intrinsically_guru(akshara) {
                meter.push(MeterSymbol::Guru);
                continue;
            }

            // Rule 2: a virama anywhere in the next akshara closes this one
            if let Some(next) = aksharas.get(i + 1) {
                if next.contains_class(CodepointClass::Virama) {
                    meter.push(MeterSymbol::Guru);
                    continue;
                }
            }

            meter.push(MeterSymbol::Laghu);
        }

        meter
    }
}

fn is_intrinsically_guru(akshara: &Akshara) -> bool {
    akshara
        .chars()
        .any(|c| is_long_vowel(c) || classify(c) == CodepointClass::Yogavaha)
}

/// Renders a meter sequence in `U`/`-` notation.
pub fn render_pattern(meter: &[MeterSymbol]) -> String {
    meter.iter().map(|m| m.symbol()).collect()
}
