pub mod catalog;
pub mod index;
pub mod recommend;
pub mod similarity;
pub mod tokenizer;

pub use catalog::{load_catalog, CatalogRecord, TitleIndex};
pub use index::{FeatureSpace, TermId, VectorMatrix};
pub use recommend::{Recommendation, Recommender};
