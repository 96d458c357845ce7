// src/scrape/mod.rs
mod batch;
mod lookup;

pub use batch::WordResult;
pub use lookup::Lookup;

use crate::config::options::LookupOptions;
use crate::error::LookupError;
use crate::word::WordRecord;

/// One-shot lookup against every site with default options.
pub fn lookup(word: &str) -> Result<Vec<WordRecord>, LookupError> {
    Lookup::new(&LookupOptions::default())?.lookup(word)
}
