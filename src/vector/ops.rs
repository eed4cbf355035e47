//! Implementations of `std::ops`, equality and approximate equality.
//!
//! All arithmetic is total: mismatched dimensions are padded with the identity element of the
//! operation (0 for addition and subtraction, 1 for the component-wise product) instead of being
//! rejected. Results never carry a basis; the caller re-attaches one explicitly when needed.

use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::VectorError;

use super::Vector;

/// Zips two vectors padded to the longer dimension with `identity`, combining components with
/// `op`.
fn elementwise<F>(lhs: &Vector, rhs: &Vector, identity: f32, op: F) -> Vector
where
    F: Fn(f32, f32) -> f32,
{
    let len = lhs.dim().max(rhs.dim());
    Vector::from_fn(len, |i| {
        op(
            lhs.get(i).unwrap_or(identity),
            rhs.get(i).unwrap_or(identity),
        )
    })
}

impl Index<usize> for Vector {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.elems[index]
    }
}

// Equality pads the shorter operand with zeros and ignores the basis entirely.
impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        let len = self.dim().max(other.dim());
        (0..len).all(|i| self.get(i).unwrap_or(0.0) == other.get(i).unwrap_or(0.0))
    }
}

impl<const N: usize> PartialEq<[f32; N]> for Vector {
    fn eq(&self, other: &[f32; N]) -> bool {
        *self == Vector::from(*other)
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        let len = self.dim().max(other.dim());
        (0..len).all(|i| {
            f32::abs_diff_eq(
                &self.get(i).unwrap_or(0.0),
                &other.get(i).unwrap_or(0.0),
                epsilon,
            )
        })
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        let len = self.dim().max(other.dim());
        (0..len).all(|i| {
            f32::relative_eq(
                &self.get(i).unwrap_or(0.0),
                &other.get(i).unwrap_or(0.0),
                epsilon,
                max_relative,
            )
        })
    }
}

/// Component-wise addition; the shorter operand is padded with zeros.
impl Add for &Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        elementwise(self, rhs, 0.0, |a, b| a + b)
    }
}

/// Component-wise addition; the shorter operand is padded with zeros.
impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        &self + &rhs
    }
}

/// Component-wise subtraction; the shorter operand is padded with zeros.
impl Sub for &Vector {
    type Output = Vector;

    fn sub(self, rhs: &Vector) -> Vector {
        elementwise(self, rhs, 0.0, |a, b| a - b)
    }
}

/// Component-wise subtraction; the shorter operand is padded with zeros.
impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        &self - &rhs
    }
}

/// Component-wise product; the shorter operand is padded with ones.
impl Mul for &Vector {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Vector {
        elementwise(self, rhs, 1.0, |a, b| a * b)
    }
}

/// Component-wise product; the shorter operand is padded with ones.
impl Mul for Vector {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        &self * &rhs
    }
}

/// Vector-scalar multiplication (scaling).
impl Mul<f32> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        Vector::from_fn(self.dim(), |i| self.elems[i] * rhs)
    }
}

/// Vector-scalar multiplication (scaling).
impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        &self * rhs
    }
}

/// Vector-scalar division (scaling).
impl Div<f32> for &Vector {
    type Output = Vector;

    fn div(self, rhs: f32) -> Vector {
        Vector::from_fn(self.dim(), |i| self.elems[i] / rhs)
    }
}

/// Vector-scalar division (scaling).
impl Div<f32> for Vector {
    type Output = Vector;

    fn div(self, rhs: f32) -> Vector {
        &self / rhs
    }
}

/// Component-wise negation.
impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::from_fn(self.dim(), |i| -self.elems[i])
    }
}

/// Component-wise negation.
impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}

impl Vector {
    /// Component-wise division of `self` by `rhs`, iterating over `self`'s components.
    ///
    /// Extra divisor components beyond `self`'s dimension are ignored. Unlike the other
    /// component-wise operations this one is fallible, so it is a method rather than a
    /// [`Div`] impl.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] when the divisor has fewer components than
    /// `self`, and [`VectorError::DivisionByZero`] when a divisor component is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use framevec::*;
    /// let a = vec2(8.0, 9.0);
    /// assert_eq!(a.div_elem(&vec3(2.0, 3.0, 4.0)).unwrap(), vec2(4.0, 3.0));
    /// assert!(a.div_elem(&vec1(2.0)).is_err());
    /// ```
    pub fn div_elem(&self, rhs: &Vector) -> Result<Vector, VectorError> {
        if rhs.dim() < self.dim() {
            return Err(VectorError::DimensionMismatch {
                expected: self.dim(),
                actual: rhs.dim(),
            });
        }
        let mut elems = tinyvec::TinyVec::default();
        for (index, (a, b)) in self.elems.iter().zip(rhs.elems.iter()).enumerate() {
            if *b == 0.0 {
                return Err(VectorError::DivisionByZero { index });
            }
            elems.push(a / b);
        }
        Ok(Vector { elems, basis: None })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{vec1, vec2, vec3, vec4, Basis};

    use super::*;

    #[test]
    fn add_pads_with_zero() {
        assert_eq!(
            vec3(1.0, 2.0, 3.0) + vec4(1.0, 2.0, 3.0, 4.0),
            vec4(2.0, 4.0, 6.0, 4.0)
        );
        assert_eq!(vec2(1.0, 1.0) + Vector::zeros(0), vec2(1.0, 1.0));
    }

    #[test]
    fn sub_pads_with_zero() {
        assert_eq!(vec2(1.0, 2.0) - vec3(0.5, 0.5, 0.5), vec3(0.5, 1.5, -0.5));

        // (a + b) - b leaves a, padded to the longer dimension.
        let a = vec2(3.0, -1.0);
        let b = vec3(10.0, 20.0, 30.0);
        assert_eq!(&(&a + &b) - &b, vec3(3.0, -1.0, 0.0));
    }

    #[test]
    fn mul_pads_with_one() {
        // The component-wise product multiplies *paired* components; absent ones act as 1.
        assert_eq!(vec2(2.0, 3.0) * vec3(4.0, 5.0, 6.0), vec3(8.0, 15.0, 6.0));
        assert_eq!(vec3(4.0, 5.0, 6.0) * vec2(2.0, 3.0), vec3(8.0, 15.0, 6.0));
        assert_eq!(vec2(2.0, 3.0) * vec2(4.0, 5.0), vec2(8.0, 15.0));
    }

    #[test]
    fn scalar_ops() {
        assert_eq!(vec3(1.0, -2.0, 3.0) * 2.0, vec3(2.0, -4.0, 6.0));
        assert_eq!(vec3(2.0, -4.0, 6.0) / 2.0, vec3(1.0, -2.0, 3.0));
        assert_eq!(-vec2(1.0, -2.0), vec2(-1.0, 2.0));

        // (a * s) / s round-trips within floating tolerance.
        let a = vec3(0.3, -7.1, 123.456);
        for s in [3.0, -0.25, 1e6] {
            assert_relative_eq!(&(&a * s) / s, a, max_relative = 1e-5);
        }
    }

    #[test]
    fn div_elem() {
        assert_eq!(
            vec2(8.0, 9.0).div_elem(&vec2(2.0, 3.0)).unwrap(),
            vec2(4.0, 3.0)
        );
        // Extra divisor components are dropped.
        assert_eq!(
            vec2(8.0, 9.0).div_elem(&vec4(2.0, 3.0, 4.0, 5.0)).unwrap(),
            vec2(4.0, 3.0)
        );
        assert_eq!(
            vec3(1.0, 2.0, 3.0).div_elem(&vec1(1.0)),
            Err(VectorError::DimensionMismatch {
                expected: 3,
                actual: 1
            })
        );
        assert_eq!(
            vec2(1.0, 2.0).div_elem(&vec2(1.0, 0.0)),
            Err(VectorError::DivisionByZero { index: 1 })
        );
    }

    #[test]
    fn results_carry_no_basis() {
        let frame = Basis::new(vec2(10.0, 10.0));
        let a = vec2(1.0, 2.0).to_relative(&frame);
        let b = vec2(3.0, 4.0).to_relative(&frame);

        assert!((&a + &b).is_world());
        assert!((&a - &b).is_world());
        assert!((&a * &b).is_world());
        assert!((&a * 2.0).is_world());
        assert!((&a / 2.0).is_world());
        assert!((-&a).is_world());
        assert!(a.div_elem(&b).unwrap().is_world());
    }

    #[test]
    fn array_eq() {
        assert_eq!(vec2(1.0, 2.0), [1.0, 2.0]);
        assert_eq!(vec2(1.0, 2.0), [1.0, 2.0, 0.0]);
    }
}
