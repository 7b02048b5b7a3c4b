//! Vector math over fixed-length attribute vectors

use tracing::warn;

/// Dot product, accumulated in f64
#[inline]
pub fn dot(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum()
}

/// Euclidean norm, accumulated in f64
#[inline]
pub fn norm(a: &[f32]) -> f64 {
    a.iter().map(|x| f64::from(*x) * f64::from(*x)).sum::<f64>().sqrt()
}

/// Cosine similarity of two vectors, clamped to [-1.0, 1.0].
///
/// Returns 0.0 when the lengths differ (logged) or when either vector has
/// zero magnitude (no preference signal, not logged). Non-finite inputs also
/// score 0.0.
pub fn similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        warn!(left = a.len(), right = b.len(), "vector dimension mismatch, scoring 0.0");
        return 0.0;
    }

    let norm_a = norm(a);
    let norm_b = norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let cosine = dot(a, b) / (norm_a * norm_b);
    if !cosine.is_finite() {
        warn!("non-finite cosine similarity, scoring 0.0");
        return 0.0;
    }
    cosine.clamp(-1.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_unit_vectors() {
        let a = [1.0, 0.0, 0.0, 0.0, 0.0];
        assert_eq!(similarity(&a, &a), 1.0);
    }

    #[test]
    fn test_self_similarity_nonzero() {
        let a = [0.3, 0.7, 0.1, 0.9, 0.25];
        assert!((similarity(&a, &a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_orthogonal_vectors() {
        let a = [1.0, 0.0];
        let b = [0.0, 1.0];
        assert_eq!(similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_opposite_vectors() {
        let a = [1.0, 2.0, 3.0];
        let b = [-1.0, -2.0, -3.0];
        assert!((similarity(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector() {
        let a = [0.4, 0.5, 0.6];
        let zero = [0.0, 0.0, 0.0];
        assert_eq!(similarity(&a, &zero), 0.0);
        assert_eq!(similarity(&zero, &a), 0.0);
        assert_eq!(similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn test_dimension_mismatch() {
        assert_eq!(similarity(&[1.0, 0.0], &[1.0, 0.0, 0.0]), 0.0);
        assert_eq!(similarity(&[], &[1.0]), 0.0);
    }

    #[test]
    fn test_symmetry_and_range() {
        let vectors: [[f32; 5]; 4] = [
            [0.1, 0.9, 0.4, 0.2, 0.8],
            [1.0, 0.0, 0.5, 0.5, 0.0],
            [-0.3, 0.2, 0.0, 0.7, 0.1],
            [0.5, 0.5, 0.5, 0.5, 0.5],
        ];
        for a in &vectors {
            for b in &vectors {
                let ab = similarity(a, b);
                assert_eq!(ab, similarity(b, a));
                assert!((-1.0..=1.0).contains(&ab), "out of range: {}", ab);
            }
        }
    }

    #[test]
    fn test_non_finite_input() {
        assert_eq!(similarity(&[f32::INFINITY, 1.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_clamped_on_overshoot() {
        let a = [1e-3, 1e-3, 1e-3];
        let s = similarity(&a, &a);
        assert!(s <= 1.0);
    }
}
