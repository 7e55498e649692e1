//! bookrec-vector
//!
//! Sparse TF-IDF vector space over the run's documents and the rating-weighted
//! user profile built on top of it. Everything here is rebuilt per run; item
//! vectors are addressed by the corpus index.

pub mod profile;
pub mod sparse;
pub mod tfidf;

pub use profile::Profile;
pub use sparse::SparseVector;
pub use tfidf::VectorSpace;
