use tracing::debug;

use bookrec_core::corpus::UserRatings;

use crate::sparse::SparseVector;
use crate::tfidf::VectorSpace;

/// Result of building a user's profile.
///
/// `NoHistory` and `ZeroWeight` are distinct outcomes but both mean there is
/// nothing to rank against.
#[derive(Debug, Clone, PartialEq)]
pub enum Profile {
    /// The user has not rated anything.
    NoHistory,
    /// Every rating is 0, so the weighted average is undefined.
    ZeroWeight,
    Built(SparseVector),
}

impl Profile {
    /// Rating-weighted average of the vectors of the items the user rated.
    pub fn build(ratings: &UserRatings, space: &VectorSpace) -> Profile {
        if ratings.is_empty() {
            return Profile::NoHistory;
        }
        let total: f64 = ratings.iter().map(|r| r.rating).sum();
        if total <= 0.0 {
            debug!(user_id = ratings.user_id(), "all ratings are zero, no profile");
            return Profile::ZeroWeight;
        }
        let weighted = ratings.iter().filter_map(|r| {
            space.vector(r.index).map(|v| v.iter().map(move |(col, w)| (col, w * r.rating / total)))
        });
        let vector = SparseVector::from_pairs(weighted.flatten());
        debug!(user_id = ratings.user_id(), rated = ratings.len(), terms = vector.nnz(), "profile built");
        Profile::Built(vector)
    }

    pub fn vector(&self) -> Option<&SparseVector> {
        match self {
            Profile::Built(v) => Some(v),
            Profile::NoHistory | Profile::ZeroWeight => None,
        }
    }

    /// Share of the profile each rated item contributes, `rating / total`,
    /// by item index. Empty when the total weight is zero.
    pub fn contribution_weights(ratings: &UserRatings) -> Vec<(usize, f64)> {
        let total: f64 = ratings.iter().map(|r| r.rating).sum();
        if total <= 0.0 {
            return Vec::new();
        }
        ratings.iter().map(|r| (r.index, r.rating / total)).collect()
    }
}
