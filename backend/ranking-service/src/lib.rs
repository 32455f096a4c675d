pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod services;

pub use config::Config;
pub use error::{RankingError, Result};
pub use models::RecommendationRecord;
pub use services::{
    recommend, Alpha, DistanceEngine, RankingSelector, Recommender, RecommenderOptions,
};
