use std::cmp::Ordering;

use tracing::{debug, Level};

use bookrec_core::config::RecommenderSettings;
use bookrec_core::corpus::{Corpus, UserRatings};
use bookrec_core::types::ScoredItem;
use bookrec_text::title_similarity;
use bookrec_vector::{Profile, VectorSpace};

/// How many pre-deduplication candidates the debug log shows.
const DEBUG_HEAD: usize = 10;

/// Scores a profile against every item and picks the top candidates.
#[derive(Debug, Clone)]
pub struct SimilarityRanker {
    settings: RecommenderSettings,
}

impl SimilarityRanker {
    pub fn new(settings: RecommenderSettings) -> Self { Self { settings } }

    pub fn settings(&self) -> &RecommenderSettings { &self.settings }

    /// Top-N unseen items for the user behind `ratings`.
    ///
    /// Rated items are dropped by id, then any candidate whose title reaches
    /// the similarity threshold against a rated title is dropped too. The rest
    /// is ordered by score, ties going to the lower item index.
    pub fn rank(&self, profile: &Profile, space: &VectorSpace, corpus: &Corpus, ratings: &UserRatings) -> Vec<ScoredItem> {
        let Some(vector) = profile.vector() else {
            return Vec::new();
        };
        let scores = space.query(vector);
        let rated_titles: Vec<&str> =
            ratings.iter().filter_map(|r| corpus.document(r.index)).map(|d| d.title.as_str()).collect();

        let unseen: Vec<ScoredItem> = corpus
            .documents()
            .iter()
            .filter(|d| !ratings.contains(d.index))
            .map(|d| ScoredItem { index: d.index, item_id: d.item_id, title: d.title.clone(), score: scores[d.index] })
            .collect();
        let unseen_count = unseen.len();
        if tracing::enabled!(Level::DEBUG) {
            let head: Vec<String> = select_top(unseen.clone(), DEBUG_HEAD)
                .into_iter()
                .map(|c| format!("{} {:?} {:.3}", c.item_id, c.title, c.score))
                .collect();
            debug!(user_id = ratings.user_id(), top = ?head, "top candidates before deduplication");
        }
        let candidates: Vec<ScoredItem> =
            unseen.into_iter().filter(|c| !self.is_near_duplicate(&c.title, &rated_titles)).collect();
        debug!(
            user_id = ratings.user_id(),
            unseen = unseen_count,
            near_duplicates = unseen_count - candidates.len(),
            "ranking candidates"
        );
        select_top(candidates, self.settings.top_n)
    }

    /// Items most like the one at `index`, excluding itself.
    pub fn rank_similar(&self, index: usize, space: &VectorSpace, corpus: &Corpus, top_n: usize) -> Vec<ScoredItem> {
        let Some(vector) = space.vector(index) else {
            return Vec::new();
        };
        let scores = space.query(vector);
        let candidates = corpus
            .documents()
            .iter()
            .filter(|d| d.index != index)
            .map(|d| ScoredItem { index: d.index, item_id: d.item_id, title: d.title.clone(), score: scores[d.index] })
            .collect();
        select_top(candidates, top_n)
    }

    fn is_near_duplicate(&self, title: &str, rated_titles: &[&str]) -> bool {
        rated_titles.iter().any(|rated| {
            title_similarity(self.settings.title_metric, title, rated) >= self.settings.title_similarity_threshold
        })
    }
}

fn select_top(mut candidates: Vec<ScoredItem>, top_n: usize) -> Vec<ScoredItem> {
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal).then(a.index.cmp(&b.index)));
    candidates.truncate(top_n);
    candidates
}
