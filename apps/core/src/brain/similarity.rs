//! Vector math shared by the trainer and the classifier.

use crate::error::{Result, RouterError};

/// Cosine similarity between two embeddings of the same dimension.
///
/// Dot product and both squared norms are accumulated in a single `f64` pass,
/// so tiny or huge components neither underflow nor overflow, and the result
/// is clamped to `[-1, 1]`. Only a true zero-magnitude operand scores `0.0`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(RouterError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let magnitude = norm_a.sqrt() * norm_b.sqrt();
    if magnitude == 0.0 {
        return Ok(0.0);
    }

    Ok((dot / magnitude).clamp(-1.0, 1.0) as f32)
}

/// Element-wise arithmetic mean of a non-empty set of equal-length vectors.
pub fn centroid(vectors: &[Vec<f32>]) -> Result<Vec<f32>> {
    let first = vectors.first().ok_or_else(|| {
        RouterError::InvalidTrainingData("cannot average an empty set of vectors".to_string())
    })?;

    let dim = first.len();
    let mut sum = vec![0.0f32; dim];
    for vector in vectors {
        if vector.len() != dim {
            return Err(RouterError::DimensionMismatch {
                expected: dim,
                actual: vector.len(),
            });
        }
        for (acc, value) in sum.iter_mut().zip(vector) {
            *acc += value;
        }
    }

    let count = vectors.len() as f32;
    Ok(sum.into_iter().map(|v| v / count).collect())
}
