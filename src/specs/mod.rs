// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! One spec per dictionary site. Each spec encodes *where the ground truth
//! lives in the HTML* of that site and *how to read it* into `WordRecord`s.
//!
//! ## What lives here
//! - **Selector choice & precedence** (e.g. Glosbe's container-anchored entry
//!   discovery before the heading walk).
//! - **Per part-of-speech extraction rules** (noun declension rows, adjective
//!   comparison forms, verb conjugation tables).
//! - **Site label tables**: which label text maps to which `PartOfSpeech`.
//!
//! ## What does **not** live here
//! - **Networking**: specs receive an already parsed `Document`.
//! - **Aggregation across sites or words**: see `scrape`.
//!
//! ## Conventions & invariants
//! - Selectors and regexes are compiled once in the spec's constructor and
//!   never mutated afterwards, so one spec instance can serve many threads.
//! - Extraction is a pure function of the document: running it twice on the
//!   same page yields the same records.
//! - Specs should be testable **offline** against synthetic HTML fixtures.

pub mod duden;
pub mod glosbe;

pub use duden::Duden;
pub use glosbe::Glosbe;

use crate::config::options::{LookupOptions, SourceKind};
use crate::core::Document;
use crate::core::net::word_url;
use crate::error::LookupError;
use crate::word::WordRecord;

/// A dictionary site adapter.
pub trait Source: Send + Sync {
    fn kind(&self) -> SourceKind;

    fn url(&self, word: &str) -> Result<String, LookupError> {
        word_url(self.kind().base_url(), word)
    }

    /// Read every record the page offers for `word`.
    fn extract(&self, doc: &Document, word: &str) -> Result<Vec<WordRecord>, LookupError>;
}

/// Build the adapter for `kind` with its selectors compiled.
pub fn build(kind: SourceKind, options: &LookupOptions) -> Result<Box<dyn Source>, LookupError> {
    Ok(match kind {
        SourceKind::Duden => Box::new(Duden::new()?),
        SourceKind::Glosbe => Box::new(Glosbe::new(options.exact_match)?),
    })
}
