// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod progress;
pub mod scrape;
pub mod specs;
pub mod word;

pub use config::options::{LookupOptions, SourceKind};
pub use error::LookupError;
pub use scrape::{Lookup, WordResult, lookup};
pub use word::{PartOfSpeech, WordRecord};
