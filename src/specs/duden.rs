// src/specs/duden.rs
//! Scraping *spec* for Duden (`/rechtschreibung/<word>`).
//!
//! One page describes one word, so a lookup yields exactly one record or fails.
//!
//! Where the ground truth lives:
//! - **Base**: the single `<h1>`.
//! - **Part of speech**: the first `strong.lexem` mentioning a known label
//!   (`Substantiv`, `Verb`, `Adjektiv`).
//! - **Forms**: the `<section>` enclosing the `<h2>` that says "Grammatik".
//!   Adjectives read the "Steigerungsformen" lexem, nouns the "Nominativ" table
//!   row, verbs the three conjugation tables plus the auxiliary lexem.
//!
//! Duden has no English definitions; `definitions` is always empty.

use regex::Regex;

use super::Source;
use crate::config::options::SourceKind;
use crate::core::{Document, Node, Query};
use crate::core::sanitize::normalize_ws;
use crate::error::LookupError;
use crate::word::{PartOfSpeech, WordRecord};

const KEYWORD_GRAMMAR: &str = "Grammatik";
const KEYWORD_NOMINATIVE: &str = "Nominativ";
const KEYWORD_PAST_PARTICIPLE: &str = "Partizip II";

/// Checked in order against each `strong.lexem`; first hit wins.
const PART_OF_SPEECH_LABELS: &[(&str, PartOfSpeech)] = &[
    ("Substantiv", PartOfSpeech::Noun),
    ("Verb", PartOfSpeech::Verb),
    ("Adjektiv", PartOfSpeech::Adjective),
];

/// Conjugated auxiliary as printed by Duden -> infinitive.
const AUXILIARIES: &[(&str, &str)] = &[("hat", "haben"), ("ist", "sein")];

pub struct Duden {
    headword: Query,
    pos_lexem: Query,
    lexem: Query,
    heading: Query,
    table_row: Query,
    table_body: Query,
    comparison: Regex,
    third_singular: Regex,
    aux_marker: Regex,
}

impl Duden {
    pub fn new() -> Result<Self, LookupError> {
        Ok(Self {
            headword: Query::new("h1")?,
            pos_lexem: Query::new("strong.lexem")?,
            lexem: Query::new(".lexem")?,
            heading: Query::new("h2")?,
            table_row: Query::new("tbody tr")?,
            table_body: Query::new("tbody")?,
            comparison: Regex::new(r"Steigerungsformen:\s*(.*)\s*,\s*(.*)\s*")?,
            third_singular: Regex::new(r"er/sie/es (.*)")?,
            aux_marker: Regex::new(r"»(.*)«")?,
        })
    }

    pub fn extract_record(&self, doc: &Document) -> Result<WordRecord, LookupError> {
        let base = self.extract_base(doc)?;
        let pos = self.extract_part_of_speech(doc)?;
        let forms = self.extract_forms(doc, pos)?;
        Ok(WordRecord::new(base, pos, forms, Vec::new()))
    }

    pub fn extract_base(&self, doc: &Document) -> Result<String, LookupError> {
        let h1 = doc.exactly_one(&self.headword)?;
        Ok(normalize_ws(&h1.text()))
    }

    pub fn extract_part_of_speech(&self, doc: &Document) -> Result<PartOfSpeech, LookupError> {
        doc.select(&self.pos_lexem)
            .into_iter()
            .find_map(|n| {
                let text = n.text();
                PART_OF_SPEECH_LABELS
                    .iter()
                    .find(|(label, _)| text.contains(label))
                    .map(|&(_, pos)| pos)
            })
            .ok_or(LookupError::UnknownPartOfSpeech)
    }

    pub fn extract_forms(&self, doc: &Document, pos: PartOfSpeech) -> Result<Vec<String>, LookupError> {
        let grammar = self.grammar_section(doc)?;
        match pos {
            PartOfSpeech::Adjective => self.adjective_forms(grammar),
            PartOfSpeech::Noun => self.noun_forms(grammar),
            PartOfSpeech::Verb => self.verb_forms(grammar),
        }
    }

    /// The `<section>` around the first "Grammatik" heading.
    pub fn grammar_section<'d>(&self, doc: &'d Document) -> Result<Node<'d>, LookupError> {
        doc.select(&self.heading)
            .into_iter()
            .filter(|h| h.text().contains(KEYWORD_GRAMMAR))
            .find_map(|h| h.closest("section"))
            .ok_or(LookupError::NoGrammar)
    }

    /// "Steigerungsformen: schneller, am schnellsten" -> [comparative, superlative]
    fn adjective_forms(&self, grammar: Node<'_>) -> Result<Vec<String>, LookupError> {
        let lexem = grammar.exactly_one(&self.lexem)?;
        let text = lexem.text();
        let caps = self
            .comparison
            .captures(&text)
            .ok_or(LookupError::NoAdjectiveForms)?;
        Ok(vec![s!(caps[1].trim()), s!(caps[2].trim())])
    }

    /// Every cell after the "Nominativ" label, in column order.
    fn noun_forms(&self, grammar: Node<'_>) -> Result<Vec<String>, LookupError> {
        for row in grammar.select(&self.table_row) {
            let Some(label) = row.first_element_child() else { continue };
            if !label.text().contains(KEYWORD_NOMINATIVE) {
                continue;
            }
            return Ok(label
                .next_element_siblings()
                .map(|cell| normalize_ws(&cell.text()))
                .collect());
        }
        Err(LookupError::NoNounForms)
    }

    /// [3rd sg. present, 3rd sg. preterite, "<Partizip II> <auxiliary>"]
    fn verb_forms(&self, grammar: Node<'_>) -> Result<Vec<String>, LookupError> {
        let aux = self.auxiliary(grammar)?;

        let bodies = grammar.select(&self.table_body);
        let [present, past, perfect] = bodies.as_slice() else {
            return Err(LookupError::NoVerbForms);
        };

        let mut out = vec![
            self.third_person_form(*present).unwrap_or_default(),
            self.third_person_form(*past).unwrap_or_default(),
            s!(),
        ];

        for row in perfect.element_children() {
            let Some(first) = row.first_element_child() else { continue };
            if !first.text().contains(KEYWORD_PAST_PARTICIPLE) {
                continue;
            }
            if let Some(last) = row.last_element_child() {
                out[2] = join!(last.text().trim(), " ", aux);
            }
        }

        for form in out.iter_mut() {
            *form = s!(form.trim());
            if form.is_empty() {
                return Err(LookupError::NoVerbForms);
            }
        }
        Ok(out)
    }

    /// The form in the second cell of an "er/sie/es …" row. The last such
    /// row in the table body wins.
    fn third_person_form(&self, body: Node<'_>) -> Option<String> {
        body.element_children()
            .filter_map(|row| {
                let cell = row.element_children().nth(1)?;
                let text = cell.text();
                self.third_singular.captures(&text).map(|c| s!(c[1].trim()))
            })
            .last()
    }

    /// `»hat«` -> "haben", `»ist«` -> "sein".
    fn auxiliary(&self, grammar: Node<'_>) -> Result<&'static str, LookupError> {
        let lexem = grammar
            .exactly_one(&self.lexem)
            .map_err(|_| LookupError::UnknownAuxilliary)?;
        let text = lexem.text();
        let caps = self
            .aux_marker
            .captures(&text)
            .ok_or(LookupError::UnknownAuxilliary)?;
        normalize_auxiliary(&caps[1])
    }
}

pub fn normalize_auxiliary(word: &str) -> Result<&'static str, LookupError> {
    AUXILIARIES
        .iter()
        .find(|(conjugated, _)| *conjugated == word)
        .map(|&(_, infinitive)| infinitive)
        .ok_or(LookupError::UnknownAuxilliary)
}

impl Source for Duden {
    fn kind(&self) -> SourceKind {
        SourceKind::Duden
    }

    fn extract(&self, doc: &Document, _word: &str) -> Result<Vec<WordRecord>, LookupError> {
        Ok(vec![self.extract_record(doc)?])
    }
}
