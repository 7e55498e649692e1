//! bookrec-text
//!
//! Text Normalizer (tantivy analyzer chain plus a noun lemmatizer), the
//! stopword lists used by normalization and vocabulary building, and title
//! similarity measures for near-duplicate detection.

pub mod lemma;
pub mod normalize;
pub mod stopwords;
pub mod tantivy_utils;
pub mod title;

pub use normalize::TextNormalizer;
pub use title::title_similarity;
