// src/config/consts.rs

// Net config
pub const DUDEN_BASE_URL: &str = "https://www.duden.de/rechtschreibung";
pub const GLOSBE_BASE_URL: &str = "https://glosbe.com/de/en";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!("lernkartei/", env!("CARGO_PKG_VERSION"));

// Extraction
pub const MAX_DEFINITIONS: usize = 4;

// Batching
pub const MAX_BATCH_WORDS: usize = 10;
pub const WORKERS: usize = 4;

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "warn";
