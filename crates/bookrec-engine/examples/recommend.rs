use chrono::Utc;

use bookrec_core::config::RecommenderSettings;
use bookrec_core::types::{Item, RatingEvent};
use bookrec_engine::Recommender;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    let catalog = vec![
        Item::new(1, "Space Opera Saga").with_genres(["Science Fiction"]).with_description("Fleets clash among distant stars"),
        Item::new(2, "Space Opera Saga: Book Two").with_genres(["Science Fiction"]),
        Item::new(3, "Starship Mutiny").with_genres(["Science Fiction"]).with_description("A crew turns on its captain among the stars"),
        Item::new(4, "Cooking with Herbs").with_genres(["Cookbook"]),
    ];
    let ratings = vec![RatingEvent { user_id: 1, item_id: 1, rating: 5.0, timestamp: Utc::now() }];

    let recommender = Recommender::new(catalog, ratings, RecommenderSettings::default())?;
    for rec in recommender.rank(1)? {
        println!("{:>6.3}  {}", rec.score, rec.title);
    }
    Ok(())
}
