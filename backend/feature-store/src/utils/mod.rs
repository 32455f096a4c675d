// Vector utilities shared by the distance computations

use ndarray::{Array2, ArrayView1, Axis};

/// Rows scaled to unit length, plus the rows that could not be scaled
#[derive(Debug, Clone)]
pub struct NormalizedRows {
    pub matrix: Array2<f64>,
    /// Indices of zero-magnitude rows; they stay all-zero in `matrix`
    pub zero_rows: Vec<usize>,
}

/// Calculate cosine similarity between two vectors
///
/// A zero-magnitude vector has similarity 0 with everything.
pub fn cosine_similarity(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product = a.dot(&b);
    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

/// Normalize every row of a matrix to unit length
pub fn normalize_rows(matrix: &Array2<f64>) -> NormalizedRows {
    let mut normalized = matrix.to_owned();
    let mut zero_rows = Vec::new();

    for (idx, mut row) in normalized.axis_iter_mut(Axis(0)).enumerate() {
        let norm = row.dot(&row).sqrt();
        if norm > 0.0 {
            row /= norm;
        } else {
            zero_rows.push(idx);
        }
    }

    NormalizedRows {
        matrix: normalized,
        zero_rows,
    }
}
