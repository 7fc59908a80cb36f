//! # Vector
//!
//! Immutable fixed-dimension numeric vectors over either element width.
//! Every transform returns a new vector; binary operations require both
//! dimension and element width to match.

use nearvec_core::error::{Error, Result};

use crate::hash::compress_hash;
use crate::kernels;

/// Element width of a vector's components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementWidth {
    F32,
    F64,
}

impl ElementWidth {
    /// Width in bits, as fed to the hash compressor.
    pub fn bits(self) -> u8 {
        match self {
            ElementWidth::F32 => 32,
            ElementWidth::F64 => 64,
        }
    }
}

/// An immutable fixed-dimension numeric vector.
///
/// The element width is fixed at construction; a 32-bit vector never
/// compares against a 64-bit one. Equality is componentwise, which is what
/// store removal relies on.
#[derive(Debug, Clone, PartialEq)]
pub enum Vector {
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl Vector {
    pub fn from_f32(components: Vec<f32>) -> Self {
        Vector::F32(components)
    }

    pub fn from_f64(components: Vec<f64>) -> Self {
        Vector::F64(components)
    }

    /// Number of components.
    pub fn dimension(&self) -> usize {
        match self {
            Vector::F32(c) => c.len(),
            Vector::F64(c) => c.len(),
        }
    }

    pub fn width(&self) -> ElementWidth {
        match self {
            Vector::F32(_) => ElementWidth::F32,
            Vector::F64(_) => ElementWidth::F64,
        }
    }

    /// Sum of elementwise products.
    ///
    /// The f32 path accumulates in f32 and widens only at the end, so both
    /// widths keep their native rounding behavior.
    pub fn dot_product(&self, other: &Vector) -> Result<f64> {
        match (self, other) {
            (Vector::F32(a), Vector::F32(b)) => {
                check_dimension(a.len(), b.len())?;
                Ok(kernels::dot_f32(a, b) as f64)
            }
            (Vector::F64(a), Vector::F64(b)) => {
                check_dimension(a.len(), b.len())?;
                Ok(kernels::dot_f64(a, b))
            }
            _ => Err(Error::width_mismatch(self.width().bits(), other.width().bits())),
        }
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        match self {
            Vector::F32(a) => (kernels::dot_f32(a, a) as f64).sqrt(),
            Vector::F64(a) => kernels::dot_f64(a, a).sqrt(),
        }
    }

    /// Unit-normalized form. A zero-magnitude vector is returned unchanged
    /// rather than dividing by zero.
    pub fn normalize(&self) -> Vector {
        match self {
            Vector::F32(a) => {
                let magnitude = (kernels::dot_f32(a, a) as f64).sqrt() as f32;
                if magnitude == 0.0 {
                    return self.clone();
                }
                Vector::F32(a.iter().map(|x| x / magnitude).collect())
            }
            Vector::F64(a) => {
                let magnitude = kernels::dot_f64(a, a).sqrt();
                if magnitude == 0.0 {
                    return self.clone();
                }
                Vector::F64(a.iter().map(|x| x / magnitude).collect())
            }
        }
    }

    /// Elementwise sum.
    pub fn plus(&self, other: &Vector) -> Result<Vector> {
        match (self, other) {
            (Vector::F32(a), Vector::F32(b)) => {
                check_dimension(a.len(), b.len())?;
                Ok(Vector::F32(a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()))
            }
            (Vector::F64(a), Vector::F64(b)) => {
                check_dimension(a.len(), b.len())?;
                Ok(Vector::F64(a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()))
            }
            _ => Err(Error::width_mismatch(self.width().bits(), other.width().bits())),
        }
    }

    /// Elementwise difference.
    pub fn minus(&self, other: &Vector) -> Result<Vector> {
        match (self, other) {
            (Vector::F32(a), Vector::F32(b)) => {
                check_dimension(a.len(), b.len())?;
                Ok(Vector::F32(a.iter().zip(b.iter()).map(|(x, y)| x - y).collect()))
            }
            (Vector::F64(a), Vector::F64(b)) => {
                check_dimension(a.len(), b.len())?;
                Ok(Vector::F64(a.iter().zip(b.iter()).map(|(x, y)| x - y).collect()))
            }
            _ => Err(Error::width_mismatch(self.width().bits(), other.width().bits())),
        }
    }

    /// Elementwise multiplication by a scalar.
    pub fn scale(&self, factor: f64) -> Vector {
        match self {
            Vector::F32(a) => {
                let factor = factor as f32;
                Vector::F32(a.iter().map(|x| x * factor).collect())
            }
            Vector::F64(a) => Vector::F64(a.iter().map(|x| x * factor).collect()),
        }
    }

    /// Mean of squared elementwise differences:
    /// `MSE = 1/I * Sum[ (v1_i - v2_i)^2 ]`
    pub fn mean_squared_error(&self, other: &Vector) -> Result<f64> {
        match (self, other) {
            (Vector::F32(a), Vector::F32(b)) => {
                check_dimension(a.len(), b.len())?;
                Ok(kernels::mse_f32(a, b) as f64)
            }
            (Vector::F64(a), Vector::F64(b)) => {
                check_dimension(a.len(), b.len())?;
                Ok(kernels::mse_f64(a, b))
            }
            _ => Err(Error::width_mismatch(self.width().bits(), other.width().bits())),
        }
    }

    /// Euclidean distance, derived from the mean squared error so the two
    /// stay consistent: `sqrt(mse * dimension)`.
    pub fn distance(&self, other: &Vector) -> Result<f64> {
        let mse = self.mean_squared_error(other)?;
        Ok((mse * self.dimension() as f64).sqrt())
    }

    /// Angle between the two vectors in radians, in `[0, π]`.
    ///
    /// The cosine is clamped before `acos` because rounding can push the dot
    /// of two unit vectors marginally outside `[-1, 1]`.
    pub fn angle_between(&self, other: &Vector) -> Result<f64> {
        let cosine = self.cosine_similarity(other)?;
        Ok(cosine.clamp(-1.0, 1.0).acos())
    }

    /// Dot product of the two unit-normalized forms.
    pub fn cosine_similarity(&self, other: &Vector) -> Result<f64> {
        self.normalize().dot_product(&other.normalize())
    }

    /// Coarse similarity digest: the bitwise OR of every component's raw bit
    /// pattern. 32-bit components accumulate into a u32 that is then
    /// zero-extended.
    ///
    /// Structurally identical vectors always hash alike, but OR-accumulation
    /// drifts toward all-ones as dimension grows, so nearby vectors are only
    /// coarsely clustered.
    pub fn similarity_hash(&self) -> u64 {
        match self {
            Vector::F32(c) => c.iter().fold(0u32, |acc, x| acc | x.to_bits()) as u64,
            Vector::F64(c) => c.iter().fold(0u64, |acc, x| acc | x.to_bits()),
        }
    }

    /// Allocate this vector to one of `2^bits` buckets.
    pub fn bucket(&self, bits: u8) -> Result<u32> {
        // Shortcut - if every vector lands in the same bucket, don't compute
        // the hash at all.
        if bits == 0 {
            return Ok(0);
        }
        compress_hash(bits, self.similarity_hash(), self.width().bits())
    }
}

impl From<Vec<f32>> for Vector {
    fn from(components: Vec<f32>) -> Self {
        Vector::F32(components)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Vector::F64(components)
    }
}

fn check_dimension(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::dimension_mismatch(expected, actual));
    }
    Ok(())
}
