//! Semantic Embedding Value Objects
//!
//! Vectors produced by the joint image/text model, always stored with unit
//! L2 norm so that the inner product equals cosine similarity.

use serde::{Deserialize, Serialize};

use crate::constants::{NORM_EPSILON, UNIT_NORM_TOLERANCE};
use crate::error::{Error, Result};

/// Value Object: Unit-Norm Embedding
///
/// Represents an image or query embedding. The only public constructor
/// divides the raw encoder output by its own L2 norm, so every instance has
/// `||v||₂ == 1` within floating-point tolerance.
///
/// ## Business Rules
///
/// - Vector must contain at least one element
/// - A (near-)zero norm is rejected instead of producing NaN/Inf
/// - All components are finite
///
/// ## Example
///
/// ```rust
/// use vss_domain::value_objects::EmbeddingVector;
///
/// let v = EmbeddingVector::normalized(vec![3.0, 4.0], "example").unwrap();
/// assert!((v.as_slice()[0] - 0.6).abs() < 1e-6);
/// assert!(v.is_unit());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbeddingVector(Vec<f32>);

impl EmbeddingVector {
    /// Normalize raw encoder output to unit length
    ///
    /// `subject` names what the vector belongs to (an object key or
    /// `"query"`) and is carried into the error on failure.
    pub fn normalized(raw: Vec<f32>, subject: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::model(format!(
                "encoder returned an empty vector for {subject}"
            )));
        }
        if raw.iter().any(|x| !x.is_finite()) {
            return Err(Error::model(format!(
                "encoder returned non-finite values for {subject}"
            )));
        }

        let norm = l2_norm(&raw);
        if !norm.is_finite() || norm <= NORM_EPSILON {
            return Err(Error::DegenerateVector {
                subject: subject.to_string(),
                norm,
            });
        }

        Ok(Self(raw.into_iter().map(|x| x / norm).collect()))
    }

    /// Borrow the components
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Number of components
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// L2 norm (1.0 up to rounding)
    pub fn norm(&self) -> f32 {
        l2_norm(&self.0)
    }

    /// Whether the norm is within tolerance of 1
    pub fn is_unit(&self) -> bool {
        (self.norm() - 1.0).abs() <= UNIT_NORM_TOLERANCE
    }

    /// Inner product; equals cosine similarity for unit vectors
    ///
    /// Vectors of different dimensionality are compared over the shared
    /// prefix; the ranker rejects mismatched dimensions before calling this.
    pub fn dot(&self, other: &Self) -> f32 {
        self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
    }
}

/// Euclidean length, accumulated in f64 to keep 512-wide sums stable
fn l2_norm(v: &[f32]) -> f32 {
    v.iter()
        .map(|&x| f64::from(x) * f64::from(x))
        .sum::<f64>()
        .sqrt() as f32
}
