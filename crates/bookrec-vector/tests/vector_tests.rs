use chrono::{TimeZone, Utc};

use bookrec_core::corpus::Corpus;
use bookrec_core::types::{Item, RatingEvent};
use bookrec_text::TextNormalizer;
use bookrec_vector::{Profile, SparseVector, VectorSpace};

fn corpus(items: &[Item]) -> Corpus {
    Corpus::build(items, &TextNormalizer::new()).expect("corpus")
}

fn rating(item_id: u64, rating: f64) -> RatingEvent {
    RatingEvent { user_id: 1, item_id, rating, timestamp: Utc.timestamp_opt(1_700_000_000, 0).unwrap() }
}

fn library() -> Vec<Item> {
    vec![
        Item::new(1, "Space Opera Saga").with_genres(["Science Fiction"]),
        Item::new(2, "Galactic Empire").with_genres(["Science Fiction"]).with_description("Space battles"),
        Item::new(3, "Cooking with Herbs").with_genres(["Cookbook"]),
        Item::new(4, "The"),
    ]
}

#[test]
fn sparse_cosine_and_zero_vectors() {
    let a = SparseVector::from_pairs([(0, 1.0), (2, 1.0)]);
    let b = SparseVector::from_pairs([(2, 3.0)]);
    assert!((a.cosine(&b) - 1.0 / 2f64.sqrt()).abs() < 1e-12);
    assert_eq!(a.cosine(&SparseVector::new()), 0.0);
    assert_eq!(SparseVector::new().cosine(&SparseVector::new()), 0.0);
    assert_eq!(a.dot(&b), 3.0);
    assert_eq!(b.get(2), 3.0);
    assert_eq!(b.get(1), 0.0);
}

#[test]
fn fit_builds_normalized_aligned_vectors() {
    let c = corpus(&library());
    let space = VectorSpace::fit(c.documents());
    assert_eq!(space.len(), 4);
    for i in 0..3 {
        let norm = space.vector(i).unwrap().norm();
        assert!((norm - 1.0).abs() < 1e-9, "vector {i} has unit norm");
    }
    // "The" normalizes to nothing: zero vector, no failure
    assert!(space.vector(3).unwrap().is_zero());

    // "science" appears in 2 of 4 documents, "herb" in 1
    let n = 4.0f64;
    let science = space.idf("science").unwrap();
    assert!((science - (((1.0 + n) / 3.0).ln() + 1.0)).abs() < 1e-12);
    let herb = space.idf("herb").unwrap();
    assert!(herb > science);
    assert!(space.idf("with").is_none());
}

#[test]
fn vocabulary_columns_are_sorted_terms() {
    let c = corpus(&library());
    let space = VectorSpace::fit(c.documents());
    let cookbook = space.term_index("cookbook").unwrap();
    let space_col = space.term_index("space").unwrap();
    assert!(cookbook < space_col);
    assert_eq!(space.dimension(), space.vectors().iter().flat_map(|v| v.iter().map(|(c, _)| c)).max().unwrap() as usize + 1);
}

#[test]
fn query_scores_every_item_in_index_order() {
    let c = corpus(&library());
    let space = VectorSpace::fit(c.documents());
    let q = space.vector(0).unwrap().clone();
    let scores = space.query(&q);
    assert_eq!(scores.len(), 4);
    assert!((scores[0] - 1.0).abs() < 1e-9);
    assert!(scores[1] > 0.0);
    assert_eq!(scores[2], 0.0);
    assert_eq!(scores[3], 0.0);
    assert!(scores.iter().all(|s| (0.0..=1.0 + 1e-12).contains(s)));
}

#[test]
fn empty_corpus_gives_empty_space() {
    let space = VectorSpace::fit(&[]);
    assert!(space.is_empty());
    assert_eq!(space.dimension(), 0);
    assert!(space.query(&SparseVector::from_pairs([(0, 1.0)])).is_empty());
}

#[test]
fn profile_outcomes() {
    let c = corpus(&library());
    let space = VectorSpace::fit(c.documents());

    let none = c.user_ratings(1, &[]).unwrap();
    assert_eq!(Profile::build(&none, &space), Profile::NoHistory);

    let zero = c.user_ratings(1, &[rating(1, 0.0), rating(3, 0.0)]).unwrap();
    let p = Profile::build(&zero, &space);
    assert_eq!(p, Profile::ZeroWeight);
    assert!(p.vector().is_none());

    let single = c.user_ratings(1, &[rating(1, 4.0)]).unwrap();
    let p = Profile::build(&single, &space);
    assert_eq!(p.vector().unwrap(), space.vector(0).unwrap());
}

#[test]
fn profile_is_rating_weighted_average() {
    let c = corpus(&library());
    let space = VectorSpace::fit(c.documents());
    let ratings = c.user_ratings(1, &[rating(1, 3.0), rating(3, 1.0), rating(2, 0.0)]).unwrap();
    let profile = Profile::build(&ratings, &space);
    let v = profile.vector().unwrap();
    let col = space.term_index("herb").unwrap();
    let expected = space.vector(2).unwrap().get(col) * 0.25;
    assert!((v.get(col) - expected).abs() < 1e-12);
    // zero-rated item contributes nothing
    let battle = space.term_index("battle").or_else(|| space.term_index("battles")).unwrap();
    assert_eq!(v.get(battle), 0.0);
}

#[test]
fn raising_a_rating_never_lowers_its_weight() {
    let c = corpus(&library());
    let low = c.user_ratings(1, &[rating(1, 2.0), rating(3, 3.0)]).unwrap();
    let high = c.user_ratings(1, &[rating(1, 4.5), rating(3, 3.0)]).unwrap();
    let w_low = Profile::contribution_weights(&low);
    let w_high = Profile::contribution_weights(&high);
    assert_eq!(w_low.iter().map(|(i, _)| *i).collect::<Vec<_>>(), w_high.iter().map(|(i, _)| *i).collect::<Vec<_>>());
    assert!(w_high[0].1 >= w_low[0].1);
}
