// src/specs/glosbe.rs
//! Scraping *spec* for Glosbe (`/de/en/<word>`).
//!
//! A results page lists several senses ("entries"). Each entry is made of:
//! - an `<h3>` heading (the German base form),
//! - a `<ul>` of translations (`li strong` are the English definitions),
//! - a grammar block inside a `.additional-data` container whose first label
//!   is the part of speech and whose tables hold the inflections.
//!
//! Entry discovery is anchored on the `.additional-data` containers; pages
//! without them inside `#phraseTranslation` fall back to walking forward from
//! each `<h3>`.
//!
//! Failure policy is per field: an entry without a recognized part of speech
//! is dropped, missing definitions or forms leave that field empty. Only a
//! page with no entries at all is an error.

use regex::Regex;

use super::Source;
use crate::config::consts::MAX_DEFINITIONS;
use crate::config::options::SourceKind;
use crate::core::{Document, Node, Query};
use crate::core::sanitize::{normalize_ws, trim_trailing_empty};
use crate::error::LookupError;
use crate::word::{PartOfSpeech, WordRecord};

const MARKER_ADDITIONAL_DATA: &str = "additional-data";

const KEYWORD_COMPARATIVE: &str = "comparative forms";
const KEYWORD_SUPERLATIVE: &str = "superlative forms";
const KEYWORD_CONJUGATION: &str = "conjugation of";
const KEYWORD_AUXILIARY: &str = "auxiliary";
const KEYWORD_PRESENT: &str = "present";
const KEYWORD_PRETERITE: &str = "preterite";
const KEYWORDS_PAST_PARTICIPLE: &[&str] = &["past participle", "partizip ii"];

/// Grammar block label (lowercased) -> part of speech.
const PART_OF_SPEECH_LABELS: &[(&str, PartOfSpeech)] = &[
    ("noun", PartOfSpeech::Noun),
    ("verb", PartOfSpeech::Verb),
    ("adjective", PartOfSpeech::Adjective),
];

/// One candidate sense on a results page. Borrowed from the parsed page.
#[derive(Clone, Copy, Debug, Default)]
pub struct Entry<'a> {
    pub heading: Option<Node<'a>>,
    pub definitions: Option<Node<'a>>,
    pub grammar: Option<Node<'a>>,
}

pub struct Glosbe {
    containers: Query,
    headings: Query,
    definition_items: Query,
    rows: Query,
    cells: Query,
    noun_cells: Query,
    predicative: Regex,
    third_person: Regex,
    exact_match: bool,
}

impl Glosbe {
    pub fn new(exact_match: bool) -> Result<Self, LookupError> {
        Ok(Self {
            containers: Query::new("#phraseTranslation .additional-data")?,
            headings: Query::new("h3")?,
            definition_items: Query::new("li strong")?,
            rows: Query::new("tr")?,
            cells: Query::new("td")?,
            noun_cells: Query::new("td + td")?,
            predicative: Regex::new(r"er ist (.*)")?,
            third_person: Regex::new(r"er (.*)")?,
            exact_match,
        })
    }

    /// All entries on the page. `NoEntries` if neither strategy finds any.
    pub fn extract_entries<'d>(&self, doc: &'d Document) -> Result<Vec<Entry<'d>>, LookupError> {
        let mut entries = self.entries_by_container(doc);
        if entries.is_empty() {
            logd!("glosbe: no additional-data containers, walking headings");
            entries = self.entries_by_heading(doc);
        }
        if entries.is_empty() {
            return Err(LookupError::NoEntries);
        }
        Ok(entries)
    }

    /// Every block inside a `.additional-data` container is an entry; its
    /// heading and definitions are the nearest `h3`/`ul` before the container,
    /// not looking past the previous container.
    fn entries_by_container<'d>(&self, doc: &'d Document) -> Vec<Entry<'d>> {
        let mut out = Vec::new();
        for container in doc.select(&self.containers) {
            let mut heading = None;
            let mut definitions = None;
            for prev in container.prev_element_siblings() {
                if prev.has_class(MARKER_ADDITIONAL_DATA) {
                    break;
                }
                if prev.is_tag("ul") && definitions.is_none() {
                    definitions = Some(prev);
                } else if prev.is_tag("h3") && heading.is_none() {
                    heading = Some(prev);
                }
            }
            out.extend(container.element_children().map(|grammar| Entry {
                heading,
                definitions,
                grammar: Some(grammar),
            }));
        }
        out
    }

    /// Each `h3` followed by a `.additional-data` block opens one entry per
    /// grammar block; a `ul` in between holds the definitions. Headings with
    /// no grammar before the next `h3` (sidebars, footers) are skipped.
    fn entries_by_heading<'d>(&self, doc: &'d Document) -> Vec<Entry<'d>> {
        let mut out = Vec::new();
        for heading in doc.select(&self.headings) {
            let mut entry = Entry { heading: Some(heading), ..Entry::default() };
            let mut grammar_blocks = Vec::new();
            for next in heading.next_element_siblings() {
                if next.is_tag("h3") {
                    break;
                }
                if next.is_tag("ul") && entry.definitions.is_none() {
                    entry.definitions = Some(next);
                } else if next.has_class(MARKER_ADDITIONAL_DATA) {
                    grammar_blocks.extend(next.element_children());
                    break;
                }
            }
            out.extend(grammar_blocks.into_iter().map(|g| Entry { grammar: Some(g), ..entry }));
        }
        out
    }

    /// Turn one entry into a record, or `None` if its part of speech is unknown.
    pub fn extract_record(&self, entry: &Entry<'_>) -> Option<WordRecord> {
        let pos = match self.extract_part_of_speech(entry) {
            Ok(pos) => pos,
            Err(e) => {
                logd!("glosbe: dropping entry: {e}");
                return None;
            }
        };
        let base = extract_base(entry);
        let definitions = self.extract_definitions(entry).unwrap_or_else(|e| {
            logd!("glosbe: {base}: {e}");
            Vec::new()
        });
        let forms = self.extract_forms(entry, pos).unwrap_or_else(|e| {
            logd!("glosbe: {base}: {e}");
            Vec::new()
        });
        Some(WordRecord::new(base, pos, forms, definitions))
    }

    pub fn extract_part_of_speech(&self, entry: &Entry<'_>) -> Result<PartOfSpeech, LookupError> {
        let grammar = entry.grammar.ok_or(LookupError::UnknownPartOfSpeech)?;
        let label = grammar.label().to_lowercase();
        PART_OF_SPEECH_LABELS
            .iter()
            .find(|(name, _)| *name == label)
            .map(|&(_, pos)| pos)
            .ok_or(LookupError::UnknownPartOfSpeech)
    }

    /// Up to `MAX_DEFINITIONS` translations, in page order.
    pub fn extract_definitions(&self, entry: &Entry<'_>) -> Result<Vec<String>, LookupError> {
        let list = entry.definitions.ok_or(LookupError::NoDefinitions)?;
        Ok(list
            .select(&self.definition_items)
            .into_iter()
            .map(|n| normalize_ws(&n.text()))
            .take(MAX_DEFINITIONS)
            .collect())
    }

    pub fn extract_forms(&self, entry: &Entry<'_>, pos: PartOfSpeech) -> Result<Vec<String>, LookupError> {
        let grammar = entry.grammar.ok_or(LookupError::UnknownPartOfSpeech)?;
        match pos {
            PartOfSpeech::Adjective => Ok(self.adjective_forms(grammar)),
            PartOfSpeech::Noun => Ok(self.noun_forms(grammar)),
            PartOfSpeech::Verb => self.verb_forms(grammar),
        }
    }

    /// [comparative, superlative], each from the first cell of the table
    /// following its label ("er ist schneller"). Missing ones are left out.
    fn adjective_forms(&self, grammar: Node<'_>) -> Vec<String> {
        let mut forms = vec![s!(); 2];
        let mut slot = None;
        for child in grammar.children() {
            let table = match child.element() {
                Some(n) if n.is_tag("table") => n,
                _ => {
                    let label = child.text().to_lowercase();
                    if label.contains(KEYWORD_COMPARATIVE) {
                        slot = Some(0);
                    } else if label.contains(KEYWORD_SUPERLATIVE) {
                        slot = Some(1);
                    }
                    continue;
                }
            };
            let Some(i) = slot else { continue };
            let Some(cell) = table.select(&self.cells).into_iter().next() else { continue };
            let text = cell.text();
            if let Some(caps) = self.predicative.captures(&text) {
                forms[i] = s!(caps[1].trim());
            }
        }
        forms.retain(|f| !f.is_empty());
        forms
    }

    /// Cells from the second column on, paired up: cells 0+1 form the first
    /// entry, 2+3 the second, and so on (space-joined).
    fn noun_forms(&self, grammar: Node<'_>) -> Vec<String> {
        let Some(first) = grammar.select(&self.noun_cells).into_iter().next() else {
            return Vec::new();
        };
        let mut forms: Vec<String> = Vec::new();
        for (i, cell) in std::iter::once(first).chain(first.next_element_siblings()).enumerate() {
            let text = cell.text();
            let text = text.trim();
            match forms.get_mut(i / 2) {
                Some(form) => {
                    form.push(' ');
                    form.push_str(text);
                }
                None => forms.push(s!(text)),
            }
        }
        forms
    }

    /// [3rd sg. present, 3rd sg. preterite, "<past participle> <auxiliary>"]
    /// read from the first table after the "conjugation of" label.
    fn verb_forms(&self, grammar: Node<'_>) -> Result<Vec<String>, LookupError> {
        let mut after_label = false;
        for child in grammar.children() {
            match child.element() {
                Some(table) if table.is_tag("table") => {
                    if after_label {
                        return Ok(self.conjugation_table(table));
                    }
                }
                _ => {
                    if child.text().to_lowercase().contains(KEYWORD_CONJUGATION) {
                        after_label = true;
                    }
                }
            }
        }
        Err(LookupError::NoConjugations)
    }

    fn conjugation_table(&self, table: Node<'_>) -> Vec<String> {
        // Slot 2 starts as a separator so participle and auxiliary can be
        // prepended/appended in either row order.
        let mut out = vec![s!(), s!(), s!(" ")];
        let mut slot: Option<usize> = None;

        for row in table.select(&self.rows) {
            let (Some(first), Some(last)) = (row.first_element_child(), row.last_element_child()) else {
                continue;
            };
            let keyword = first.text();
            let lower = keyword.to_lowercase();
            let data = last.text();
            let data = data.trim();

            if KEYWORDS_PAST_PARTICIPLE.iter().any(|k| lower.contains(k)) {
                out[2] = join!(data, &out[2]);
            } else if lower.contains(KEYWORD_AUXILIARY) {
                out[2].push_str(data);
            } else if lower.contains(KEYWORD_PRESENT) {
                slot = Some(0);
            } else if lower.contains(KEYWORD_PRETERITE) {
                slot = Some(1);
            } else if let (Some(i), Some(caps)) = (slot, self.third_person.captures(&keyword)) {
                out[i] = s!(caps[1].trim());
            }
        }

        for form in out.iter_mut() {
            *form = s!(form.trim());
        }
        trim_trailing_empty(&mut out);
        out
    }

    fn keep(&self, record: &WordRecord, word: &str) -> bool {
        !self.exact_match || record.base().to_lowercase() == word.trim().to_lowercase()
    }
}

pub fn extract_base(entry: &Entry<'_>) -> String {
    entry.heading.map(|h| s!(h.text().trim())).unwrap_or_default()
}

impl Source for Glosbe {
    fn kind(&self) -> SourceKind {
        SourceKind::Glosbe
    }

    fn extract(&self, doc: &Document, word: &str) -> Result<Vec<WordRecord>, LookupError> {
        let entries = self.extract_entries(doc)?;
        Ok(entries
            .iter()
            .filter_map(|e| self.extract_record(e))
            .filter(|r| self.keep(r, word))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> Document {
        Document::parse(&format!(
            r#"<html><body><div id="phraseTranslation">{body}</div></body></html>"#
        ))
    }

    #[test]
    fn part_of_speech_label_is_case_insensitive() {
        let g = Glosbe::new(false).unwrap();
        let doc = page(r#"<h3>Haus</h3><div class="additional-data"><div> Noun <span>neuter</span></div></div>"#);
        let entries = g.extract_entries(&doc).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(g.extract_part_of_speech(&entries[0]).unwrap(), PartOfSpeech::Noun);
    }

    #[test]
    fn missing_definitions_is_per_entry() {
        let g = Glosbe::new(false).unwrap();
        let doc = page(r#"<h3>rot</h3><div class="additional-data"><div>adjective</div></div>"#);
        let entries = g.extract_entries(&doc).unwrap();
        assert!(matches!(g.extract_definitions(&entries[0]), Err(LookupError::NoDefinitions)));

        let w = g.extract_record(&entries[0]).unwrap();
        assert_eq!(w.base(), "rot");
        assert!(w.definitions().is_empty());
        assert!(w.forms().is_empty());
    }

    #[test]
    fn container_walk_stops_at_previous_container() {
        let g = Glosbe::new(false).unwrap();
        let doc = page(
            r#"<h3>Bank</h3><ul><li><strong>bank</strong></li></ul>
               <div class="additional-data"><div>noun</div></div>
               <div class="additional-data"><div>noun</div></div>"#,
        );
        let entries = g.extract_entries(&doc).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(extract_base(&entries[0]), "Bank");
        assert!(entries[1].heading.is_none());
        assert_eq!(extract_base(&entries[1]), "");
    }

    #[test]
    fn heading_walk_is_the_fallback() {
        let g = Glosbe::new(false).unwrap();
        let doc = Document::parse(
            r#"<main><h3>gehen</h3><ul><li><strong>go</strong></li></ul>
               <p>noise</p><div class="additional-data"><div>verb</div></div>
               <h3>Gang</h3><ul><li><strong>walk</strong></li></ul></main>"#,
        );
        let entries = g.extract_entries(&doc).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(extract_base(&entries[0]), "gehen");
        assert_eq!(g.extract_part_of_speech(&entries[0]).unwrap(), PartOfSpeech::Verb);
        assert_eq!(g.extract_definitions(&entries[0]).unwrap(), vec!["go"]);
    }

    #[test]
    fn stray_headings_alone_are_no_entries() {
        let g = Glosbe::new(false).unwrap();
        let doc = Document::parse(
            r#"<div id="phraseTranslation"><p>No results found</p></div>
               <aside><h3>Recently searched</h3><ul><li><a>Haus</a></li></ul></aside>
               <footer><h3>About</h3></footer>"#,
        );
        assert!(matches!(g.extract(&doc, "xyzzy"), Err(LookupError::NoEntries)));
    }

    #[test]
    fn no_entries_is_a_page_error() {
        let g = Glosbe::new(false).unwrap();
        let doc = Document::parse("<p>Keine Ergebnisse</p>");
        assert!(matches!(g.extract(&doc, "xyz"), Err(LookupError::NoEntries)));
    }

    #[test]
    fn adjective_forms_skip_missing_comparative() {
        let g = Glosbe::new(false).unwrap();
        let doc = page(
            r#"<h3>schnell</h3><div class="additional-data"><div>adjective
                 <span>superlative forms</span><table><tr><td>er ist am schnellsten</td></tr></table>
               </div></div>"#,
        );
        let entries = g.extract_entries(&doc).unwrap();
        let forms = g.extract_forms(&entries[0], PartOfSpeech::Adjective).unwrap();
        assert_eq!(forms, vec!["am schnellsten"]);
    }

    #[test]
    fn noun_cells_pair_up() {
        let g = Glosbe::new(false).unwrap();
        let doc = page(
            r#"<h3>Hund</h3><div class="additional-data"><div>noun
                 <table><tr><td>nominative</td><td>der</td><td>Hund</td><td>die</td><td>Hunde</td></tr></table>
               </div></div>"#,
        );
        let entries = g.extract_entries(&doc).unwrap();
        let forms = g.extract_forms(&entries[0], PartOfSpeech::Noun).unwrap();
        assert_eq!(forms, vec!["der Hund", "die Hunde"]);
    }

    #[test]
    fn noun_without_cells_is_empty_not_an_error() {
        let g = Glosbe::new(false).unwrap();
        let doc = page(r#"<h3>Hund</h3><div class="additional-data"><div>noun</div></div>"#);
        let entries = g.extract_entries(&doc).unwrap();
        assert!(g.extract_forms(&entries[0], PartOfSpeech::Noun).unwrap().is_empty());
    }

    #[test]
    fn verb_without_conjugation_table_fails() {
        let g = Glosbe::new(false).unwrap();
        let doc = page(
            r#"<h3>gehen</h3><div class="additional-data"><div>verb
                 <table><tr><td>er geht</td></tr></table></div></div>"#,
        );
        let entries = g.extract_entries(&doc).unwrap();
        assert!(matches!(
            g.extract_forms(&entries[0], PartOfSpeech::Verb),
            Err(LookupError::NoConjugations)
        ));
    }

    #[test]
    fn verb_gap_in_the_middle_is_kept() {
        let g = Glosbe::new(false).unwrap();
        let doc = page(
            r#"<h3>gehen</h3><div class="additional-data"><div>verb
                 <p>conjugation of gehen</p>
                 <table>
                   <tr><th>present</th></tr>
                   <tr><td>er geht</td></tr>
                   <tr><td>past participle</td><td>gegangen</td></tr>
                 </table></div></div>"#,
        );
        let entries = g.extract_entries(&doc).unwrap();
        let forms = g.extract_forms(&entries[0], PartOfSpeech::Verb).unwrap();
        assert_eq!(forms, vec!["geht", "", "gegangen"]);
    }

    #[test]
    fn exact_match_filters_other_headings() {
        let doc = page(
            r#"<h3>gehen</h3><div class="additional-data"><div>verb</div></div>
               <h3>Gehen</h3><div class="additional-data"><div>noun</div></div>
               <h3>Geher</h3><div class="additional-data"><div>noun</div></div>"#,
        );
        let loose = Glosbe::new(false).unwrap().extract(&doc, "gehen").unwrap();
        assert_eq!(loose.len(), 3);
        let strict = Glosbe::new(true).unwrap().extract(&doc, "gehen").unwrap();
        assert_eq!(strict.len(), 2);
    }
}
