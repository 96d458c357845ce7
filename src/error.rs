// src/error.rs

/// Everything a lookup can fail with.
///
/// Page-level variants (`Network`, `Timeout`, `Parse`, `NoEntries`, and every
/// Duden extraction failure) abort the lookup for one source. Per-entry Glosbe
/// variants are swallowed by the adapter and only logged.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("found too many nodes for `{0}`")]
    TooManyNodes(String),
    #[error("could not find node for `{0}`")]
    MissingNode(String),
    #[error("unknown part of speech")]
    UnknownPartOfSpeech,
    #[error("could not find grammar")]
    NoGrammar,
    #[error("could not extract adjective forms")]
    NoAdjectiveForms,
    #[error("could not extract noun forms")]
    NoNounForms,
    #[error("could not extract verb forms")]
    NoVerbForms,
    #[error("could not find conjugations")]
    NoConjugations,
    #[error("could not find definitions")]
    NoDefinitions,
    #[error("could not find any entries")]
    NoEntries,
    #[error("could not find auxilliary verb")]
    UnknownAuxilliary,
    #[error("network request failed: {0}")]
    Network(String),
    #[error("request to {0} timed out")]
    Timeout(String),
    #[error("parse failed: {0}")]
    Parse(String),
    #[error("unknown dictionary source: {0}")]
    UnknownSource(String),
    #[error("too many words in one request: {given} (max {max})")]
    TooManyWords { given: usize, max: usize },
}

impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            let url = error.url().map(|u| u.to_string()).unwrap_or_default();
            Self::Timeout(url)
        } else {
            Self::Network(error.to_string())
        }
    }
}

impl From<regex::Error> for LookupError {
    fn from(error: regex::Error) -> Self {
        Self::Parse(error.to_string())
    }
}
