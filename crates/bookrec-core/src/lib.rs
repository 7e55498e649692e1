//! bookrec-core
//!
//! Domain types, error taxonomy, configuration and the collaborator seams
//! (catalog, rating history, recommendation store) shared by the text,
//! vector and engine crates. The Corpus Builder lives here as well.

pub mod config;
pub mod corpus;
pub mod error;
pub mod sources;
pub mod store;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
