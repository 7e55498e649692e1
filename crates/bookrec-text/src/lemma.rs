//! Noun lemmatizer.
//!
//! Reduces plural nouns to their singular dictionary form using WordNet's
//! detachment rules plus a table of irregular forms. There is no dictionary
//! lookup, so the rules are guarded to leave common singular endings
//! (`-ss`, `-us`, `-is`, `-ous`, `-ics`) and very short words alone.

const IRREGULAR: &[(&str, &str)] = &[
	("calves", "calf"),
	("children", "child"),
	("cookies", "cookie"),
	("criteria", "criterion"),
	("echoes", "echo"),
	("elves", "elf"),
	("feet", "foot"),
	("geese", "goose"),
	("halves", "half"),
	("heroes", "hero"),
	("knives", "knife"),
	("leaves", "leaf"),
	("lives", "life"),
	("loaves", "loaf"),
	("men", "man"),
	("mice", "mouse"),
	("movies", "movie"),
	("news", "news"),
	("oxen", "ox"),
	("phenomena", "phenomenon"),
	("potatoes", "potato"),
	("selves", "self"),
	("series", "series"),
	("shelves", "shelf"),
	("species", "species"),
	("teeth", "tooth"),
	("thieves", "thief"),
	("tomatoes", "tomato"),
	("wives", "wife"),
	("wolves", "wolf"),
	("women", "woman"),
];

const KEEP_SUFFIXES: &[&str] = &["ss", "us", "is", "ous", "ics"];

/// Suffix to detach and what replaces it. First match wins.
const RULES: &[(&str, &str)] = &[
	("sses", "ss"),
	("ches", "ch"),
	("shes", "sh"),
	("xes", "x"),
	("zes", "z"),
	("ies", "y"),
	("s", ""),
];

const MIN_LEN: usize = 4;

/// Lemma of a lowercase token. Tokens that are not plural nouns come back unchanged.
pub fn lemmatize(token: &str) -> String {
	if let Ok(pos) = IRREGULAR.binary_search_by(|(plural, _)| plural.cmp(&token)) {
		return IRREGULAR[pos].1.to_string();
	}
	if token.len() < MIN_LEN || !token.chars().all(char::is_alphabetic) {
		return token.to_string();
	}
	if KEEP_SUFFIXES.iter().any(|s| token.ends_with(s)) {
		return token.to_string();
	}
	for (suffix, replacement) in RULES {
		if let Some(stem) = token.strip_suffix(suffix) {
			if stem.len() < 2 {
				break;
			}
			return format!("{stem}{replacement}");
		}
	}
	token.to_string()
}
