use crate::catalog::{CatalogRecord, TitleIndex};
use crate::index::{self, FeatureSpace, VectorMatrix};
use crate::similarity::score_all;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::collections::HashSet;

/// How deep into the similarity ranking the sampler may reach.
const CANDIDATE_POOL: usize = 30;
/// How many candidates each query title contributes at most.
const SAMPLE_SIZE: usize = 10;

/// Output record. A missing director serializes as JSON null; a missing
/// genre string as "".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub director: Option<String>,
    pub genres: String,
}

/// Catalog plus its feature index, built once at startup and immutable
/// afterwards. Requests share it read-only; `recommend` takes `&self` and
/// touches no shared mutable state beyond the process-wide RNG.
pub struct Recommender {
    records: Vec<CatalogRecord>,
    title_index: TitleIndex,
    space: FeatureSpace,
    matrix: VectorMatrix,
}

impl Recommender {
    pub fn build(records: Vec<CatalogRecord>) -> Self {
        let title_index = TitleIndex::build(&records);
        let (space, matrix) = index::build(&records);
        tracing::info!(
            records = records.len(),
            vocabulary = space.vocabulary.len(),
            "feature index built"
        );
        Self { records, title_index, space, matrix }
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn space(&self) -> &FeatureSpace { &self.space }

    /// Recommend titles by genre similarity to the given titles.
    ///
    /// Per input title: case-insensitive lookup (absent titles are skipped,
    /// not errors), score every row, keep the top candidates with non-zero
    /// similarity, then sample up to [`SAMPLE_SIZE`] of them uniformly
    /// without replacement. Sampled rows accumulate as a set across input
    /// titles, and every row matching an input title is removed at the end,
    /// so a query title never comes back as a recommendation.
    ///
    /// Output order carries no ranking guarantee. Callers must reject an
    /// empty `titles` list before invoking this.
    pub fn recommend(&self, titles: &[String]) -> Vec<Recommendation> {
        let mut picked: HashSet<usize> = HashSet::new();
        let mut rng = rand::thread_rng();

        for title in titles {
            let Some(query_row) = self.title_index.get(title) else {
                tracing::debug!(%title, "title not in catalog, skipped");
                continue;
            };
            let scores = score_all(&self.matrix, query_row);
            let mut ranked: Vec<(usize, f32)> = scores
                .into_iter()
                .enumerate()
                .filter(|&(_, score)| score > 0.0)
                .collect();
            // Stable sort keeps original row order among equal scores.
            ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
            ranked.truncate(CANDIDATE_POOL);

            let take = SAMPLE_SIZE.min(ranked.len());
            for (row, _) in ranked.choose_multiple(&mut rng, take) {
                picked.insert(*row);
            }
        }

        // Remove every row whose title matches an input title, duplicate
        // rows included.
        let queried: HashSet<String> = titles.iter().map(|t| t.to_lowercase()).collect();
        for (row, record) in self.records.iter().enumerate() {
            if queried.contains(&record.title.to_lowercase()) {
                picked.remove(&row);
            }
        }

        picked
            .into_iter()
            .map(|row| {
                let record = &self.records[row];
                Recommendation {
                    title: record.title.clone(),
                    director: record.director.clone(),
                    genres: record.genres.clone(),
                }
            })
            .collect()
    }
}
