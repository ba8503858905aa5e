use std::fs::File;
use std::path::Path;

use log::debug;
use memmap2::Mmap;
use rayon::prelude::*;

use crate::analyzer::{AnalysisReport, KannadaAnalyzer};
use crate::error::{Error, Result};

#[derive(Debug)]
pub enum DataSource {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl DataSource {
    fn as_bytes(&self) -> &[u8] {
        match self {
            DataSource::Mmap(m) => &m[..],
            DataSource::Owned(v) => v.as_slice(),
        }
    }
}

/// A UTF-8 text corpus, one sample per line.
#[derive(Debug)]
pub struct Corpus {
    source: DataSource,
}

impl Corpus {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        // The map is read-only and the corpus is not expected to change underneath us.
        let mmap = unsafe { Mmap::map(&file)? };
        debug!("mapped corpus {:?} ({} bytes)", path.as_ref(), mmap.len());
        Self::from_source(DataSource::Mmap(mmap))
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::from_source(DataSource::Owned(bytes))
    }

    fn from_source(source: DataSource) -> Result<Self> {
        if let Err(e) = std::str::from_utf8(source.as_bytes()) {
            return Err(Error::InvalidUtf8 { offset: e.valid_up_to() });
        }
        Ok(Corpus { source })
    }

    pub fn text(&self) -> &str {
        // Validated in `from_source`.
        std::str::from_utf8(self.source.as_bytes()).unwrap_or_default()
    }

    /// Non-blank lines, with a leading byte-order mark removed.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        let text = self.text();
        text.strip_prefix('\u{FEFF}')
            .unwrap_or(text)
            .lines()
            .filter(|l| !l.trim().is_empty())
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// Analyzes every line in parallel. Reports come back in line order.
    pub fn analyze(&self, analyzer: &KannadaAnalyzer) -> Vec<AnalysisReport> {
        let lines: Vec<&str> = self.lines().collect();
        debug!("analyzing {} corpus lines", lines.len());
        lines.par_iter().map(|l| analyzer.analyze(l)).collect()
    }
}
