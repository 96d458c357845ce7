// tests/duden_pages.rs
//
// Duden pages end to end: canned HTML through the Lookup façade.
//
use std::collections::HashMap;

use lernkartei::core::Fetch;
use lernkartei::{Lookup, LookupError, LookupOptions, PartOfSpeech, SourceKind, WordRecord};
use pretty_assertions::assert_eq;

struct Pages(HashMap<String, String>);

impl Fetch for Pages {
    fn get(&self, url: &str) -> Result<String, LookupError> {
        self.0
            .get(url)
            .cloned()
            .ok_or_else(|| LookupError::Network(format!("HTTP 404 Not Found for {url}")))
    }
}

fn duden(word: &str, html: String) -> Lookup {
    let pages = HashMap::from([(format!("https://www.duden.de/rechtschreibung/{word}"), html)]);
    let opts = LookupOptions::default().with_sources(vec![SourceKind::Duden]);
    Lookup::with_fetcher(&opts, Box::new(Pages(pages))).unwrap()
}

fn page(h1: &str, lexem: &str, grammar: &str) -> String {
    format!(
        r#"<!doctype html><html><body><article>
        <h1>{h1}</h1>
        <dl><dt>Wortart:</dt><dd><strong class="lexem">{lexem}</strong></dd></dl>
        <section id="grammatik"><header><h2>Grammatik</h2></header>{grammar}</section>
        <section><h2>Bedeutungen</h2><p>…</p></section>
        </article></body></html>"#
    )
}

fn verb_page(aux: &str) -> String {
    let grammar = format!(
        r#"<p><span class="lexem">Perfektbildung mit »{aux}«</span></p>
        <table><tbody>
          <tr><td>Indikativ</td><td>ich gehe</td></tr>
          <tr><td></td><td>er/sie/es geht</td></tr>
        </tbody></table>
        <table><tbody>
          <tr><td>Indikativ</td><td>ich ging</td></tr>
          <tr><td></td><td>er/sie/es ging</td></tr>
        </tbody></table>
        <table><tbody>
          <tr><th>Infinitiv I</th><td>gehen</td></tr>
          <tr><th>Partizip II</th><td>gegangen</td></tr>
        </tbody></table>"#
    );
    page("ge\u{ad}hen", "starkes Verb", &grammar)
}

#[test]
fn noun_reads_the_nominative_row() {
    let html = page(
        "Haus, das",
        "Substantiv, Neutrum",
        r#"<table><thead><tr><th>Kasus</th><th>Singular</th><th>Plural</th></tr></thead>
           <tbody>
             <tr><th>Nominativ</th><td>das Haus</td><td>die Häuser</td></tr>
             <tr><th>Genitiv</th><td>des Hauses</td><td>der Häuser</td></tr>
           </tbody></table>"#,
    );
    let records = duden("Haus", html).lookup("Haus").unwrap();
    assert_eq!(
        records,
        vec![WordRecord::new(
            "Haus, das",
            PartOfSpeech::Noun,
            vec!["das Haus".into(), "die Häuser".into()],
            Vec::new(),
        )]
    );
}

#[test]
fn adjective_reads_comparison_forms() {
    let html = page(
        "schnell",
        "Adjektiv",
        r#"<p><span class="lexem">Steigerungsformen: schneller, am schnellsten</span></p>"#,
    );
    let records = duden("schnell", html).lookup("schnell").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].part_of_speech(), PartOfSpeech::Adjective);
    assert_eq!(records[0].forms(), ["schneller", "am schnellsten"]);
    assert!(records[0].definitions().is_empty());
}

#[test]
fn verb_forms_with_normalized_auxiliary() {
    let records = duden("gehen", verb_page("ist")).lookup("gehen").unwrap();
    assert_eq!(records[0].base(), "gehen", "soft hyphen is stripped");
    assert_eq!(records[0].part_of_speech(), PartOfSpeech::Verb);
    assert_eq!(records[0].forms(), ["geht", "ging", "gegangen sein"]);

    let records = duden("gehen", verb_page("hat")).lookup("gehen").unwrap();
    assert_eq!(records[0].forms()[2], "gegangen haben");
}

#[test]
fn unknown_auxiliary_fails() {
    let err = duden("gehen", verb_page("wird")).lookup("gehen").unwrap_err();
    assert!(matches!(err, LookupError::UnknownAuxilliary), "{err:?}");
}

#[test]
fn page_without_grammar_section_fails() {
    let html = r#"<html><body><h1>Haus</h1><strong class="lexem">Substantiv</strong>
        <section><h2>Bedeutungen</h2></section></body></html>"#;
    let err = duden("Haus", html.to_string()).lookup("Haus").unwrap_err();
    assert!(matches!(err, LookupError::NoGrammar), "{err:?}");
}

#[test]
fn missing_grammar_fails_for_every_part_of_speech() {
    for (word, lexem) in [("gehen", "starkes Verb"), ("schnell", "Adjektiv")] {
        let html = format!(
            r#"<html><body><h1>{word}</h1><strong class="lexem">{lexem}</strong>
            <section><h2>Bedeutungen</h2><span class="lexem">»ist«</span></section></body></html>"#
        );
        let err = duden(word, html).lookup(word).unwrap_err();
        assert!(matches!(err, LookupError::NoGrammar), "{word}: {err:?}");
    }
}

#[test]
fn verb_table_without_third_person_row_fails() {
    let html = verb_page("ist").replace("er/sie/es ging", "wir gingen");
    let err = duden("gehen", html).lookup("gehen").unwrap_err();
    assert!(matches!(err, LookupError::NoVerbForms), "{err:?}");
}

#[test]
fn extraction_is_idempotent() {
    let lookup = duden("gehen", verb_page("ist"));
    let first = lookup.lookup_source(SourceKind::Duden, "gehen").unwrap();
    let second = lookup.lookup_source(SourceKind::Duden, "gehen").unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_page_is_a_network_error() {
    let err = duden("Haus", String::new()).lookup("Baum").unwrap_err();
    assert!(matches!(err, LookupError::Network(_)), "{err:?}");
}
