pub mod distance;
pub mod ranking;
pub mod recommend;

pub use distance::{DistanceEngine, DistanceScores, FeatureSpace};
pub use ranking::{Alpha, RankingSelector};
pub use recommend::{recommend, Recommender, RecommenderOptions};
