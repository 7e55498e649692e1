use tantivy::tokenizer::TextAnalyzer;

use bookrec_core::traits::Normalizer;

use crate::lemma::lemmatize;
use crate::tantivy_utils::{collect_tokens, normalizer_analyzer};

/// Lowercases, drops stopwords and lemmatizes. Output tokens are joined by
/// single spaces; empty input gives an empty string.
#[derive(Clone)]
pub struct TextNormalizer {
	analyzer: TextAnalyzer,
}

impl Default for TextNormalizer {
	fn default() -> Self { Self { analyzer: normalizer_analyzer() } }
}

impl TextNormalizer {
	pub fn new() -> Self { Self::default() }

	pub fn tokens(&self, text: &str) -> Vec<String> {
		// token_stream needs &mut; a clone keeps normalize() shareable across threads
		let mut analyzer = self.analyzer.clone();
		collect_tokens(&mut analyzer, text).into_iter().map(|t| lemmatize(&t)).collect()
	}
}

impl Normalizer for TextNormalizer {
	fn normalize(&self, text: &str) -> String { self.tokens(text).join(" ") }
}
