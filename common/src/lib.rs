//! Style Genome Common Library
//!
//! 好み記録からスタイルプロファイルとおすすめを導出する純粋関数群。
//! CLIなどの表示層はカタログと好み記録を渡し、結果を受け取るだけ。

pub mod types;
pub mod catalog;
pub mod error;
pub mod frequency;
pub mod preference;
pub mod profile;
pub mod recommend;

pub use types::{CatalogItem, Formality, ScoredCandidate, StyleProfile, Verdict};
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use frequency::most_frequent;
pub use preference::{PreferenceRecord, PreferenceSnapshot};
pub use profile::synthesize_profile;
pub use recommend::{score_recommendations, score_recommendations_with, RecommendOptions, CURATED_PICKS};
