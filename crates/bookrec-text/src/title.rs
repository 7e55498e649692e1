//! Title similarity for near-duplicate detection (alternate editions,
//! printings and subtitles of the same book).

use bookrec_core::config::TitleMetric;

/// Similarity of two titles in `[0, 1]`, compared lowercase and in full.
pub fn title_similarity(metric: TitleMetric, a: &str, b: &str) -> f64 {
	let a = a.to_lowercase();
	let b = b.to_lowercase();
	match metric {
		TitleMetric::SequenceRatio => sequence_ratio(&a, &b),
		TitleMetric::NormalizedLevenshtein => strsim::normalized_levenshtein(&a, &b),
		TitleMetric::JaroWinkler => strsim::jaro_winkler(&a, &b),
		TitleMetric::SorensenDice => strsim::sorensen_dice(&a, &b),
	}
}

/// Ratcliff/Obershelp ratio: `2 * M / (len(a) + len(b))` where `M` counts the
/// characters in matching blocks found by recursively taking the longest
/// common substring and repeating on both sides of it. Two empty strings are
/// identical (1.0).
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
	let a: Vec<char> = a.chars().collect();
	let b: Vec<char> = b.chars().collect();
	let total = a.len() + b.len();
	if total == 0 {
		return 1.0;
	}
	2.0 * matching_chars(&a, &b) as f64 / total as f64
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
	let (i, j, k) = longest_match(a, b);
	if k == 0 {
		return 0;
	}
	k + matching_chars(&a[..i], &b[..j]) + matching_chars(&a[i + k..], &b[j + k..])
}

/// Longest common substring as `(start_a, start_b, len)`; earliest block wins ties.
fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
	let mut best = (0, 0, 0);
	let mut prev = vec![0usize; b.len() + 1];
	let mut cur = vec![0usize; b.len() + 1];
	for (i, ca) in a.iter().enumerate() {
		for (j, cb) in b.iter().enumerate() {
			cur[j + 1] = if ca == cb { prev[j] + 1 } else { 0 };
			let k = cur[j + 1];
			if k > best.2 {
				best = (i + 1 - k, j + 1 - k, k);
			}
		}
		std::mem::swap(&mut prev, &mut cur);
	}
	best
}
