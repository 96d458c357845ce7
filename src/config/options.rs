// src/config/options.rs
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::consts::*;
use crate::error::LookupError;

/// Dictionary sites we know how to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Duden,
    Glosbe,
}

impl SourceKind {
    pub const ALL: [SourceKind; 2] = [SourceKind::Duden, SourceKind::Glosbe];

    pub fn name(&self) -> &'static str {
        match self {
            SourceKind::Duden => "duden",
            SourceKind::Glosbe => "glosbe",
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            SourceKind::Duden => DUDEN_BASE_URL,
            SourceKind::Glosbe => GLOSBE_BASE_URL,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceKind {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "duden" => Ok(SourceKind::Duden),
            "glosbe" => Ok(SourceKind::Glosbe),
            other => Err(LookupError::UnknownSource(s!(other))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupOptions {
    /// Queried in this order; records are concatenated in the same order.
    pub sources: Vec<SourceKind>,
    pub timeout: Duration,
    pub user_agent: String,
    /// Drop Glosbe entries whose heading differs from the queried word.
    pub exact_match: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            sources: SourceKind::ALL.to_vec(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
            exact_match: false,
        }
    }
}

impl LookupOptions {
    pub fn with_sources(mut self, sources: Vec<SourceKind>) -> Self {
        if !sources.is_empty() {
            self.sources = sources;
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_exact_match(mut self, exact: bool) -> Self {
        self.exact_match = exact;
        self
    }
}
