use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse vector of `(column, weight)` pairs sorted by column, zeros omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    entries: Vec<(u32, f64)>,
}

impl SparseVector {
    pub fn new() -> Self { Self::default() }

    /// Build from unordered pairs; repeated columns are summed.
    pub fn from_pairs<I: IntoIterator<Item = (u32, f64)>>(pairs: I) -> Self {
        let mut acc: BTreeMap<u32, f64> = BTreeMap::new();
        for (col, w) in pairs {
            *acc.entry(col).or_insert(0.0) += w;
        }
        Self { entries: acc.into_iter().filter(|(_, w)| *w != 0.0).collect() }
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ { self.entries.iter().copied() }

    pub fn nnz(&self) -> usize { self.entries.len() }

    pub fn is_zero(&self) -> bool { self.entries.is_empty() }

    pub fn get(&self, col: u32) -> f64 {
        self.entries.binary_search_by_key(&col, |(c, _)| *c).map(|i| self.entries[i].1).unwrap_or(0.0)
    }

    pub fn norm(&self) -> f64 { self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt() }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j, mut sum) = (0, 0, 0.0);
        while i < self.entries.len() && j < other.entries.len() {
            let (ca, wa) = self.entries[i];
            let (cb, wb) = other.entries[j];
            match ca.cmp(&cb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Cosine of the angle between the two vectors; 0 when either is zero.
    pub fn cosine(&self, other: &SparseVector) -> f64 {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            return 0.0;
        }
        self.dot(other) / denom
    }

    pub fn scaled(&self, factor: f64) -> SparseVector {
        Self::from_pairs(self.entries.iter().map(|(c, w)| (*c, w * factor)))
    }

    /// Unit-length copy; the zero vector stays zero.
    pub fn l2_normalized(&self) -> SparseVector {
        let norm = self.norm();
        if norm == 0.0 { self.clone() } else { self.scaled(1.0 / norm) }
    }
}
