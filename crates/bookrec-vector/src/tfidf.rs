//! TF-IDF vector space over the run's documents.
//!
//! - terms: lowercase alphanumeric runs of two or more characters, minus the
//!   vocabulary stopword list; columns follow lexicographic term order
//! - `tf`: raw count of the term in the document
//! - `idf(t) = ln((1 + n) / (1 + df(t))) + 1`
//! - every item vector is L2-normalized (documents without terms stay zero)

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tantivy::tokenizer::TextAnalyzer;
use tracing::debug;

use bookrec_core::types::Document;
use bookrec_text::tantivy_utils::{collect_tokens, vocabulary_analyzer};

use crate::sparse::SparseVector;

const MIN_TERM_CHARS: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct VectorSpace {
    vocabulary: BTreeMap<String, u32>,
    idf: Vec<f64>,
    vectors: Vec<SparseVector>,
}

fn term_counts(text: &str, analyzer: &mut TextAnalyzer) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in collect_tokens(analyzer, text) {
        if token.chars().count() >= MIN_TERM_CHARS {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    counts
}

impl VectorSpace {
    /// Fit over `documents`; vector `i` belongs to `documents[i]`.
    pub fn fit(documents: &[Document]) -> Self {
        let mut analyzer = vocabulary_analyzer();
        let counts: Vec<HashMap<String, usize>> =
            documents.iter().map(|d| term_counts(&d.text, &mut analyzer)).collect();

        let terms: BTreeSet<&str> = counts.iter().flat_map(|c| c.keys().map(String::as_str)).collect();
        let vocabulary: BTreeMap<String, u32> =
            terms.into_iter().enumerate().map(|(i, t)| (t.to_string(), i as u32)).collect();

        let mut df = vec![0usize; vocabulary.len()];
        for doc in &counts {
            for term in doc.keys() {
                if let Some(&col) = vocabulary.get(term) {
                    df[col as usize] += 1;
                }
            }
        }
        let n = documents.len() as f64;
        let idf: Vec<f64> = df.iter().map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0).collect();

        let vectors = counts
            .iter()
            .map(|doc| {
                SparseVector::from_pairs(doc.iter().filter_map(|(term, &tf)| {
                    vocabulary.get(term).map(|&col| (col, tf as f64 * idf[col as usize]))
                }))
                .l2_normalized()
            })
            .collect::<Vec<_>>();

        debug!(items = vectors.len(), terms = vocabulary.len(), "vector space fitted");
        Self { vocabulary, idf, vectors }
    }

    pub fn len(&self) -> usize { self.vectors.len() }

    pub fn is_empty(&self) -> bool { self.vectors.is_empty() }

    /// Vocabulary size, the dimension of every vector in the space.
    pub fn dimension(&self) -> usize { self.vocabulary.len() }

    pub fn vector(&self, index: usize) -> Option<&SparseVector> { self.vectors.get(index) }

    pub fn vectors(&self) -> &[SparseVector] { &self.vectors }

    pub fn term_index(&self, term: &str) -> Option<u32> { self.vocabulary.get(term).copied() }

    pub fn idf(&self, term: &str) -> Option<f64> { self.term_index(term).map(|c| self.idf[c as usize]) }

    /// Cosine similarity of `query` against every item, aligned with item index.
    pub fn query(&self, query: &SparseVector) -> Vec<f64> {
        self.vectors.iter().map(|v| query.cosine(v)).collect()
    }
}
