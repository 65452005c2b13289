use crate::catalog::CatalogRecord;
use crate::tokenizer::tokenize;
use std::collections::HashMap;

pub type TermId = u32;

/// Vocabulary over the whole genre corpus: term -> dimension index, plus
/// per-term document frequency. Dimension count equals vocabulary size.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSpace {
    pub vocabulary: HashMap<String, TermId>,
    pub df: Vec<u32>,
    pub num_docs: u32,
}

/// One L2-normalized sparse TF-IDF row per catalog record, entries sorted
/// by term id. Row positions match catalog record positions.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorMatrix {
    rows: Vec<Vec<(TermId, f32)>>,
}

impl VectorMatrix {
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn row(&self, row: usize) -> &[(TermId, f32)] { &self.rows[row] }
}

/// Build the feature space and TF-IDF matrix from every record's genre
/// text. Runs once at startup; both results are immutable afterwards and
/// shared read-only across requests.
///
/// Weight per (record, term) is `tf * idf` with raw term counts and
/// `idf = ln((1 + N) / (1 + df)) + 1`, then each row is L2-normalized.
/// An empty corpus or all-empty genre strings produce an empty vocabulary
/// and all-empty rows, never an error.
pub fn build(records: &[CatalogRecord]) -> (FeatureSpace, VectorMatrix) {
    let mut vocabulary: HashMap<String, TermId> = HashMap::new();
    let mut df: Vec<u32> = Vec::new();
    let mut row_counts: Vec<Vec<(TermId, u32)>> = Vec::with_capacity(records.len());

    for record in records {
        let mut counts: HashMap<TermId, u32> = HashMap::new();
        for term in tokenize(&record.genres) {
            let next_id = vocabulary.len() as TermId;
            let term_id = *vocabulary.entry(term).or_insert(next_id);
            if term_id as usize == df.len() {
                df.push(0);
            }
            *counts.entry(term_id).or_insert(0) += 1;
        }
        for term_id in counts.keys() {
            df[*term_id as usize] += 1;
        }
        let mut row: Vec<(TermId, u32)> = counts.into_iter().collect();
        row.sort_by_key(|&(term_id, _)| term_id);
        row_counts.push(row);
    }

    let n = records.len() as f32;
    let mut rows: Vec<Vec<(TermId, f32)>> = Vec::with_capacity(row_counts.len());
    for counts in row_counts {
        let mut row: Vec<(TermId, f32)> = counts
            .into_iter()
            .map(|(term_id, tf)| {
                let idf = ((1.0 + n) / (1.0 + df[term_id as usize] as f32)).ln() + 1.0;
                (term_id, tf as f32 * idf)
            })
            .collect();
        let norm = row.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for entry in row.iter_mut() {
                entry.1 /= norm;
            }
        }
        rows.push(row);
    }

    let space = FeatureSpace { vocabulary, df, num_docs: records.len() as u32 };
    (space, VectorMatrix { rows })
}
