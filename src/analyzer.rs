use log::debug;
use serde::Serialize;

use crate::akshara_segmenter::{segment_normalized, AksharaStats};
use crate::chandassu::{render_pattern, ChandassuEngine, MeterSymbol};
use crate::error::Result;
use crate::normalization::kannada_normalize;
use crate::phonetic::{phonetic_hash, PhoneticCode};
use crate::stemmer::KannadaStemmer;
use crate::tokenizer::is_stopword;

#[derive(Clone, Debug)]
pub struct AnalyzerConfig {
    pub enable_normalization: bool,
    pub enable_stopword_removal: bool,
    pub enable_stemming: bool,
    pub enable_phonetic_hash: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            enable_normalization: true,
            enable_stopword_removal: false,
            enable_stemming: true,
            enable_phonetic_hash: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenAnalysis {
    pub token: String,
    pub stem: Option<String>,
    pub phonetic: Option<PhoneticCode>,
}

/// Everything the engine derives from one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub normalized: String,
    pub aksharas: Vec<String>,
    pub stats: AksharaStats,
    pub meter: Vec<MeterSymbol>,
    pub meter_pattern: String,
    pub tokens: Vec<TokenAnalysis>,
}

impl AnalysisReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug)]
pub struct KannadaAnalyzer {
    stemmer: KannadaStemmer,
    chandassu: ChandassuEngine,
    config: AnalyzerConfig,
}

impl Default for KannadaAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl KannadaAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self::with_stemmer(KannadaStemmer::new(), config)
    }

    pub fn with_stemmer(stemmer: KannadaStemmer, config: AnalyzerConfig) -> Self {
        Self {
            stemmer,
            chandassu: ChandassuEngine::new(),
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn analyze(&self, raw_text: &str) -> AnalysisReport {
        let text = if self.config.enable_normalization {
            kannada_normalize(raw_text)
        } else {
            raw_text.to_string()
        };

        let segmentation = segment_normalized(&text);
        let meter = self.chandassu.apply(&segmentation.aksharas);
        debug!(
            "analyzed {} aksharas ({} bytes of text)",
            segmentation.len(),
            text.len()
        );

        let tokens = text
            .split_whitespace()
            .filter(|t| !(self.config.enable_stopword_removal && is_stopword(t)))
            .map(|token| TokenAnalysis {
                token: token.to_string(),
                stem: self.config.enable_stemming.then(|| self.stemmer.stem(token)),
                phonetic: self.config.enable_phonetic_hash.then(|| phonetic_hash(token)),
            })
            .collect();

        AnalysisReport {
            meter_pattern: render_pattern(&meter),
            aksharas: segmentation.aksharas.into_iter().map(|a| a.text).collect(),
            stats: segmentation.stats,
            meter,
            tokens,
            normalized: text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_report() {
        let analyzer = KannadaAnalyzer::default();
        let report = analyzer.analyze("  ನಮಸ್ಕಾರ  ಮನೆಯಲ್ಲಿ ");

        assert_eq!(report.normalized, "ನಮಸ್ಕಾರ ಮನೆಯಲ್ಲಿ");
        assert_eq!(report.aksharas.len(), report.meter.len());
        assert_eq!(&report.aksharas[..4], &["ನ", "ಮ", "ಸ್ಕಾ", "ರ"]);
        assert!(report.meter_pattern.starts_with("U--U"));
        assert_eq!(report.tokens.len(), 2);
        assert_eq!(report.tokens[1].stem.as_deref(), Some("ಮನೆ"));
        assert_eq!(
            report.tokens[0].phonetic.as_ref().map(|p| p.as_str()),
            Some("ನNS1R")
        );
    }

    #[test]
    fn test_config_toggles() {
        let analyzer = KannadaAnalyzer::new(AnalyzerConfig {
            enable_stopword_removal: true,
            enable_stemming: false,
            enable_phonetic_hash: false,
            ..AnalyzerConfig::default()
        });
        let report = analyzer.analyze("ಕನ್ನಡ ಮತ್ತು ನುಡಿ");

        let tokens: Vec<&str> = report.tokens.iter().map(|t| t.token.as_str()).collect();
        assert_eq!(tokens, vec!["ಕನ್ನಡ", "ನುಡಿ"]);
        assert!(report.tokens.iter().all(|t| t.stem.is_none() && t.phonetic.is_none()));
        // stopwords only affect tokens, not aksharas
        assert_eq!(report.aksharas.len(), 3 + 2 + 2);
    }

    #[test]
    fn test_empty_input() {
        let report = KannadaAnalyzer::default().analyze("");
        assert!(report.aksharas.is_empty());
        assert!(report.meter.is_empty());
        assert_eq!(report.meter_pattern, "");
        assert!(report.tokens.is_empty());
        assert_eq!(report.stats, AksharaStats::default());
    }

    #[test]
    fn test_to_json() {
        let report = KannadaAnalyzer::default().analyze("ನಮಸ್ಕಾರ");
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["meter_pattern"], "U--U");
        assert_eq!(value["meter"][1], "Guru");
        assert_eq!(value["stats"]["ottakshara"], 1);
        assert_eq!(value["tokens"][0]["phonetic"], "ನNS1R");
    }
}
