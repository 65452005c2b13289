use crate::index::{TermId, VectorMatrix};
use std::cmp::Ordering;

/// Cosine similarity of `query_row` against every row in the matrix, self
/// included. Rows are unit-normalized so this reduces to a sparse dot
/// product. Output is in row order; ranking is the caller's job.
///
/// Pure function of immutable inputs, safe to call concurrently for
/// different query rows against the same matrix.
pub fn score_all(matrix: &VectorMatrix, query_row: usize) -> Vec<f32> {
    let query = matrix.row(query_row);
    (0..matrix.len()).map(|row| dot(query, matrix.row(row))).collect()
}

fn dot(a: &[(TermId, f32)], b: &[(TermId, f32)]) -> f32 {
    let mut acc = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                acc += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    acc
}
