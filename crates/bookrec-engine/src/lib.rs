//! bookrec-engine
//!
//! End-to-end recommendation pipeline:
//! Corpus Builder -> Vector Space Model -> User Profile Builder -> Similarity Ranker.
//! Every call reads a fresh catalog snapshot and builds its own [`RunContext`];
//! nothing computed for one run is reused by the next.

pub mod ranker;

use chrono::Utc;
use tracing::{debug, info};

use bookrec_core::config::RecommenderSettings;
use bookrec_core::corpus::Corpus;
use bookrec_core::error::{Error, Result};
use bookrec_core::traits::{CatalogSource, RatingSource, RecommendationStore};
use bookrec_core::types::{Item, ItemId, Recommendation, ScoredItem, UserId};
use bookrec_text::TextNormalizer;
use bookrec_vector::{Profile, VectorSpace};

pub use ranker::SimilarityRanker;

/// Documents and vectors of one run. Item indices are only meaningful
/// within the context that produced them.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub corpus: Corpus,
    pub space: VectorSpace,
}

impl RunContext {
    pub fn build(items: &[Item], normalizer: &TextNormalizer) -> Result<Self> {
        let corpus = Corpus::build(items, normalizer)?;
        let space = VectorSpace::fit(corpus.documents());
        Ok(Self { corpus, space })
    }
}

pub struct Recommender<C, R>
where
    C: CatalogSource,
    R: RatingSource,
{
    catalog: C,
    ratings: R,
    normalizer: TextNormalizer,
    ranker: SimilarityRanker,
}

impl<C, R> Recommender<C, R>
where
    C: CatalogSource,
    R: RatingSource,
{
    pub fn new(catalog: C, ratings: R, settings: RecommenderSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { catalog, ratings, normalizer: TextNormalizer::new(), ranker: SimilarityRanker::new(settings) })
    }

    pub fn settings(&self) -> &RecommenderSettings { self.ranker.settings() }

    /// Ranked unseen items for `user_id`. Empty history, all-zero ratings and
    /// an empty catalog all give an empty list.
    pub fn rank(&self, user_id: UserId) -> Result<Vec<ScoredItem>> {
        let items = self.catalog.items()?;
        let events = self.ratings.ratings_for(user_id)?;
        let run = RunContext::build(&items, &self.normalizer)?;
        let ratings = run.corpus.user_ratings(user_id, &events)?;
        let profile = Profile::build(&ratings, &run.space);
        if profile.vector().is_none() {
            debug!(user_id, ?profile, "nothing to rank against");
        }
        Ok(self.ranker.rank(&profile, &run.space, &run.corpus, &ratings))
    }

    /// Compute the user's recommendations without persisting them.
    pub fn recommend(&self, user_id: UserId) -> Result<Vec<Recommendation>> {
        let ranked = self.rank(user_id)?;
        let created_at = Utc::now();
        Ok(ranked
            .into_iter()
            .map(|s| Recommendation { user_id, item_id: s.item_id, score: s.score, created_at })
            .collect())
    }

    /// Recompute and replace the stored set. Call after the user's rating
    /// history changes. Nothing is written when validation fails.
    pub fn refresh(&self, user_id: UserId, store: &dyn RecommendationStore) -> Result<Vec<Recommendation>> {
        let recommendations = self.recommend(user_id)?;
        store.replace(user_id, recommendations.clone())?;
        info!(user_id, count = recommendations.len(), "recommendations refreshed");
        Ok(recommendations)
    }

    /// Items whose content is closest to `item_id`, excluding the item itself.
    pub fn similar_items(&self, item_id: ItemId, top_n: usize) -> Result<Vec<ScoredItem>> {
        let items = self.catalog.items()?;
        let run = RunContext::build(&items, &self.normalizer)?;
        let index = run.corpus.index_of(item_id).ok_or(Error::UnknownItem(item_id))?;
        Ok(self.ranker.rank_similar(index, &run.space, &run.corpus, top_n))
    }
}
