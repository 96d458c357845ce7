// src/scrape/lookup.rs
use crate::config::options::{LookupOptions, SourceKind};
use crate::core::{Document, Fetch, HttpFetcher};
use crate::error::LookupError;
use crate::specs::{self, Source};
use crate::word::WordRecord;

/// Lookup façade: one fetch + parse + extract per configured source.
///
/// Holds no per-request state; every call re-fetches and owns its document,
/// so a single `Lookup` can be shared by concurrent workers.
pub struct Lookup {
    sources: Vec<Box<dyn Source>>,
    fetcher: Box<dyn Fetch>,
}

impl Lookup {
    pub fn new(options: &LookupOptions) -> Result<Self, LookupError> {
        let fetcher = HttpFetcher::new(options.timeout, &options.user_agent)?;
        Self::with_fetcher(options, Box::new(fetcher))
    }

    pub fn with_fetcher(options: &LookupOptions, fetcher: Box<dyn Fetch>) -> Result<Self, LookupError> {
        let sources = options
            .sources
            .iter()
            .map(|&kind| specs::build(kind, options))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { sources, fetcher })
    }

    pub fn sources(&self) -> Vec<SourceKind> {
        self.sources.iter().map(|s| s.kind()).collect()
    }

    /// Query one site. Page-level failures propagate.
    pub fn lookup_source(&self, kind: SourceKind, word: &str) -> Result<Vec<WordRecord>, LookupError> {
        let source = self
            .sources
            .iter()
            .find(|s| s.kind() == kind)
            .ok_or_else(|| LookupError::UnknownSource(kind.to_string()))?;
        self.query(source.as_ref(), word)
    }

    /// Query every configured site in order and concatenate the records.
    /// A failing site is logged and skipped; only if all of them fail is the
    /// first error returned.
    pub fn lookup(&self, word: &str) -> Result<Vec<WordRecord>, LookupError> {
        let mut records = Vec::new();
        let mut first_err = None;
        let mut any_ok = false;

        for source in &self.sources {
            match self.query(source.as_ref(), word) {
                Ok(mut found) => {
                    any_ok = true;
                    records.append(&mut found);
                }
                Err(e) => {
                    logw!("{}: {word}: {e}", source.kind());
                    first_err.get_or_insert(e);
                }
            }
        }

        match first_err {
            Some(e) if !any_ok => Err(e),
            _ => Ok(records),
        }
    }

    fn query(&self, source: &dyn Source, word: &str) -> Result<Vec<WordRecord>, LookupError> {
        let url = source.url(word)?;
        let body = self.fetcher.get(&url)?;
        let t = std::time::Instant::now();
        let doc = Document::parse(&body);
        let records = source.extract(&doc, word)?;
        logd!("{}: {word}: {} record(s), parsed in {:?}", source.kind(), records.len(), t.elapsed());
        Ok(records)
    }
}
