use tantivy::tokenizer::{LowerCaser, RemoveLongFilter, SimpleTokenizer, StopWordFilter, TextAnalyzer, TokenStream};

use crate::stopwords;

/// Tokens longer than this are dropped (base64 blobs, URLs run together).
pub const MAX_TOKEN_LEN: usize = 40;

/// Analyzer for item text: split on non-alphanumerics, lowercase, drop NLTK stopwords.
pub fn normalizer_analyzer() -> TextAnalyzer {
	TextAnalyzer::builder(SimpleTokenizer::default())
		.filter(RemoveLongFilter::limit(MAX_TOKEN_LEN))
		.filter(LowerCaser)
		.filter(StopWordFilter::remove(stopwords::normalizer_words()))
		.build()
}

/// Analyzer for vocabulary terms: same split, scikit-learn stopwords.
pub fn vocabulary_analyzer() -> TextAnalyzer {
	TextAnalyzer::builder(SimpleTokenizer::default())
		.filter(RemoveLongFilter::limit(MAX_TOKEN_LEN))
		.filter(LowerCaser)
		.filter(StopWordFilter::remove(stopwords::vocabulary_words()))
		.build()
}

pub fn collect_tokens(analyzer: &mut TextAnalyzer, text: &str) -> Vec<String> {
	let mut stream = analyzer.token_stream(text);
	let mut tokens = Vec::new();
	while stream.advance() {
		tokens.push(stream.token().text.clone());
	}
	tokens
}
