//! BM25 Okapi ranking over a small in-memory corpus.
//!
//! The index is built fresh for every query: tables hold a few hundred rows,
//! so fitting is cheaper than keeping a persistent index consistent with the
//! files on disk.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use super::tokenizer::Tokenizer;

/// BM25 tuning constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25Params {
    /// Term-frequency saturation (default: 1.5)
    pub k1: f64,
    /// Document-length normalization strength (default: 0.75)
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.5, b: 0.75 }
    }
}

/// Fitted BM25 statistics for one corpus.
#[derive(Debug, Clone)]
pub struct Bm25Index {
    tokenizer: Tokenizer,
    params: Bm25Params,
    term_freqs: Vec<HashMap<String, usize>>,
    doc_lengths: Vec<usize>,
    avgdl: f64,
    doc_freqs: HashMap<String, usize>,
    idf: HashMap<String, f64>,
}

impl Bm25Index {
    /// Tokenize `documents` and compute document frequencies and IDF.
    ///
    /// Position `i` of the corpus corresponds to `documents[i]`.
    pub fn fit<S: AsRef<str>>(tokenizer: Tokenizer, params: Bm25Params, documents: &[S]) -> Self {
        let corpus: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenizer.tokenize(doc.as_ref()))
            .collect();

        let mut index = Self {
            tokenizer,
            params,
            term_freqs: Vec::with_capacity(corpus.len()),
            doc_lengths: Vec::with_capacity(corpus.len()),
            avgdl: 0.0,
            doc_freqs: HashMap::new(),
            idf: HashMap::new(),
        };

        let n = corpus.len();
        if n == 0 {
            return index;
        }

        for doc in &corpus {
            index.doc_lengths.push(doc.len());

            let mut tf: HashMap<String, usize> = HashMap::new();
            for term in doc {
                *tf.entry(term.clone()).or_insert(0) += 1;
            }
            index.term_freqs.push(tf);

            let mut seen = HashSet::new();
            for term in doc {
                if seen.insert(term.as_str()) {
                    *index.doc_freqs.entry(term.clone()).or_insert(0) += 1;
                }
            }
        }

        let total: usize = index.doc_lengths.iter().sum();
        index.avgdl = total as f64 / n as f64;

        let n = n as f64;
        for (term, &df) in &index.doc_freqs {
            let df = df as f64;
            // Non-negative for every df in [0, N]; no floor needed.
            let idf = ((n - df + 0.5) / (df + 0.5) + 1.0).ln();
            index.idf.insert(term.clone(), idf);
        }

        index
    }

    /// Score every document against `query`.
    ///
    /// Returns `(document index, score)` for the whole corpus, highest score
    /// first. The sort is stable, so equal scores keep corpus order.
    pub fn score(&self, query: &str) -> Vec<(usize, f64)> {
        let query_tokens = self.tokenizer.tokenize(query);
        let Bm25Params { k1, b } = self.params;

        let mut scores: Vec<(usize, f64)> = self
            .term_freqs
            .iter()
            .enumerate()
            .map(|(idx, tf_map)| {
                let doc_len = self.doc_lengths[idx] as f64;
                let mut score = 0.0;
                for token in &query_tokens {
                    let Some(&idf) = self.idf.get(token) else {
                        continue;
                    };
                    let Some(&tf) = tf_map.get(token) else {
                        continue;
                    };
                    let tf = tf as f64;
                    let numerator = tf * (k1 + 1.0);
                    let denominator = tf + k1 * (1.0 - b + b * doc_len / self.avgdl);
                    score += idf * numerator / denominator;
                }
                (idx, score)
            })
            .collect();

        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scores
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.doc_lengths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.doc_lengths.is_empty()
    }

    #[must_use]
    pub const fn avgdl(&self) -> f64 {
        self.avgdl
    }

    #[must_use]
    pub const fn params(&self) -> Bm25Params {
        self.params
    }

    /// Token count of document `idx` after tokenization.
    #[must_use]
    pub fn doc_length(&self, idx: usize) -> Option<usize> {
        self.doc_lengths.get(idx).copied()
    }

    /// Number of documents containing `term` at least once.
    #[must_use]
    pub fn doc_freq(&self, term: &str) -> usize {
        self.doc_freqs.get(term).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }
}
