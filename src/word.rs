// src/word.rs
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartOfSpeech::Noun => write!(f, "Noun"),
            PartOfSpeech::Verb => write!(f, "Verb"),
            PartOfSpeech::Adjective => write!(f, "Adjective"),
        }
    }
}

/// One normalized dictionary hit.
///
/// `forms` depends on the part of speech:
/// - Noun: declension cells (e.g. singular, plural)
/// - Adjective: comparative, superlative
/// - Verb: 3rd person present, preterite, perfect (`"<participle> <auxiliary>"`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    base: String,
    part_of_speech: PartOfSpeech,
    #[serde(default)]
    forms: Vec<String>,
    #[serde(default)]
    definitions: Vec<String>,
}

impl WordRecord {
    pub fn new(
        base: impl Into<String>,
        part_of_speech: PartOfSpeech,
        forms: Vec<String>,
        definitions: Vec<String>,
    ) -> Self {
        Self { base: base.into(), part_of_speech, forms, definitions }
    }

    pub fn base(&self) -> &str { &self.base }
    pub fn part_of_speech(&self) -> PartOfSpeech { self.part_of_speech }
    pub fn forms(&self) -> &[String] { &self.forms }
    pub fn definitions(&self) -> &[String] { &self.definitions }
}
