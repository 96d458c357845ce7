// src/scrape/batch.rs
use std::{
    sync::{ mpsc, atomic::{ AtomicUsize, Ordering }},
    thread,
};

use serde::Serialize;

use super::Lookup;
use crate::{
    config::consts::{ MAX_BATCH_WORDS, WORKERS },
    error::LookupError,
    progress::Progress,
    word::WordRecord,
};

/// Records found for one requested word. Empty if every source failed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordResult {
    pub word: String,
    pub records: Vec<WordRecord>,
}

impl Lookup {
    /// Look up several words concurrently and return them in input order.
    /// A failing word is logged and reported, never fatal for the batch.
    pub fn lookup_batch(
        &self,
        words: &[String],
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<Vec<WordResult>, LookupError> {
        if words.len() > MAX_BATCH_WORDS {
            return Err(LookupError::TooManyWords { given: words.len(), max: MAX_BATCH_WORDS });
        }

        type Outcome = (usize, Result<Vec<WordRecord>, LookupError>);

        let counter = AtomicUsize::new(0);
        let (res_tx, res_rx) = mpsc::channel::<Outcome>();
        let workers = WORKERS.min(words.len()).max(1);

        if let Some(p) = progress.as_deref_mut() {
            p.begin(words.len());
            p.log(&format!("looking up {} word(s) with {workers} worker(s)", words.len()));
        }
        let mut per_word: Vec<(usize, Vec<WordRecord>)> = Vec::with_capacity(words.len());

        thread::scope(|scope| {
            for _ in 0..workers {
                let tx = res_tx.clone();
                let idx = &counter;
                scope.spawn(move || {
                    loop {
                        let i = idx.fetch_add(1, Ordering::Relaxed);
                        let Some(word) = words.get(i) else { break };
                        if tx.send((i, self.lookup(word))).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(res_tx); // this thread is sole receiver now

            for (i, outcome) in res_rx {
                let word = &words[i];
                match outcome {
                    Ok(records) => {
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_done(word, records.len());
                        }
                        per_word.push((i, records));
                    }
                    Err(e) => {
                        loge!("{word}: {e}");
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_failed(word, &e.to_string());
                        }
                        per_word.push((i, Vec::new()));
                    }
                }
            }
        });

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }

        per_word.sort_by_key(|(i, _)| *i);
        Ok(per_word
            .into_iter()
            .map(|(i, records)| WordResult { word: words[i].clone(), records })
            .collect())
    }
}
