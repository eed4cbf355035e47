use std::fmt;

use tinyvec::TinyVec;

use crate::{error::VectorError, frame::Basis};

mod ops;

/// A dynamically-sized column vector of [`f32`] components, optionally expressed relative to a
/// [`Basis`].
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions directly create
///   vectors from provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each component;
///   [`Vector::zeros`] is the all-zero shorthand.
/// - [`Vector::uniform`] is the checked form of [`Vector::splat`] that accepts a signed
///   dimension and rejects negative ones.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each
///   component.
/// - Vectors can be created from arrays, slices and `Vec<f32>` using their [`From`]
///   implementations, or collected from any iterator of `f32`.
///
/// All constructors produce *world* vectors (no basis attached). Use
/// [`to_relative`][Vector::to_relative] to express a vector in a frame.
///
/// # Component Access
///
/// - [`Vector::get`] returns `Some(component)` for indices `0..dim` and `None` past the end.
///   Out-of-range access is *absent*, not an error; this mirrors the permissive lookup the
///   type is modeled after.
/// - The [`Index`][std::ops::Index] impl panics on out-of-range indices, like a slice.
/// - The first four components are also addressable by name: [`x`][Vector::x],
///   [`y`][Vector::y], [`z`][Vector::z], [`w`][Vector::w], with color-style aliases
///   [`r`][Vector::r], [`g`][Vector::g], [`b`][Vector::b], [`a`][Vector::a].
///
/// # Equality
///
/// Two vectors are equal when their components are equal, with the shorter vector padded with
/// zeros: `(1, 2)` equals `(1, 2, 0)`. The basis is ignored entirely; equality compares numeric
/// values, not frames.
#[derive(Clone, Default)]
pub struct Vector {
    pub(crate) elems: TinyVec<[f32; 4]>,
    pub(crate) basis: Option<Basis>,
}

impl Vector {
    /// Creates a vector of dimension `len` with each component set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use framevec::*;
    /// let v = Vector::splat(3, 2.0);
    /// assert_eq!(v, vec3(2.0, 2.0, 2.0));
    /// ```
    pub fn splat(len: usize, value: f32) -> Self {
        let mut elems = TinyVec::default();
        elems.resize(len, value);
        Self { elems, basis: None }
    }

    /// Creates an all-zero vector of dimension `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use framevec::*;
    /// assert_eq!(Vector::zeros(3), vec3(0.0, 0.0, 0.0));
    /// ```
    pub fn zeros(len: usize) -> Self {
        Self::splat(len, 0.0)
    }

    /// Creates a vector of dimension `dim` with each component set to `value`, rejecting
    /// negative dimensions.
    ///
    /// This is the checked counterpart of [`Vector::splat`] for callers whose dimension comes
    /// from a signed or otherwise untrusted source.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidDimension`] when `dim` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// # use framevec::*;
    /// assert_eq!(Vector::uniform(3, 0.0).unwrap(), vec3(0.0, 0.0, 0.0));
    /// assert!(Vector::uniform(-1, 0.0).is_err());
    /// ```
    pub fn uniform(dim: i64, value: f32) -> Result<Self, VectorError> {
        let len = usize::try_from(dim).map_err(|_| VectorError::InvalidDimension(dim))?;
        Ok(Self::splat(len, value))
    }

    /// Creates a vector where each component is initialized by invoking a closure with its
    /// index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use framevec::*;
    /// let v = Vector::from_fn(3, |i| (i + 1) as f32);
    /// assert_eq!(v, vec3(1.0, 2.0, 3.0));
    /// ```
    pub fn from_fn<F>(len: usize, f: F) -> Self
    where
        F: FnMut(usize) -> f32,
    {
        Self {
            elems: (0..len).map(f).collect(),
            basis: None,
        }
    }

    /// Returns the dimension (number of components) of this vector.
    pub fn dim(&self) -> usize {
        self.elems.len()
    }

    /// Returns the component at `index`, or `None` when `index` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use framevec::*;
    /// let v = vec2(1.0, 2.0);
    /// assert_eq!(v.get(1), Some(2.0));
    /// assert_eq!(v.get(5), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<f32> {
        self.elems.get(index).copied()
    }

    /// Returns the components as a slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.elems
    }

    /// First component. Alias of `get(0)`.
    pub fn x(&self) -> Option<f32> {
        self.get(0)
    }

    /// Second component. Alias of `get(1)`.
    pub fn y(&self) -> Option<f32> {
        self.get(1)
    }

    /// Third component. Alias of `get(2)`.
    pub fn z(&self) -> Option<f32> {
        self.get(2)
    }

    /// Fourth component. Alias of `get(3)`.
    pub fn w(&self) -> Option<f32> {
        self.get(3)
    }

    /// First component, color-style. Alias of `get(0)`.
    pub fn r(&self) -> Option<f32> {
        self.get(0)
    }

    /// Second component, color-style. Alias of `get(1)`.
    pub fn g(&self) -> Option<f32> {
        self.get(1)
    }

    /// Third component, color-style. Alias of `get(2)`.
    pub fn b(&self) -> Option<f32> {
        self.get(2)
    }

    /// Fourth component, color-style. Alias of `get(3)`.
    pub fn a(&self) -> Option<f32> {
        self.get(3)
    }

    /// Computes the dot product of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] when the operands differ in dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// # use framevec::*;
    /// let a = vec3(1.0, 3.0, -5.0);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot(&b), Ok(3.0));
    /// assert!(a.dot(&vec2(1.0, 2.0)).is_err());
    /// ```
    pub fn dot(&self, other: &Self) -> Result<f32, VectorError> {
        if self.dim() != other.dim() {
            return Err(VectorError::DimensionMismatch {
                expected: self.dim(),
                actual: other.dim(),
            });
        }
        Ok(self
            .elems
            .iter()
            .zip(other.elems.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both operands; swapping them inverts its direction.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] unless both operands are exactly
    /// 3-dimensional.
    ///
    /// # Examples
    ///
    /// ```
    /// # use framevec::*;
    /// let x = vec3(1.0, 0.0, 0.0);
    /// let y = vec3(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(&y).unwrap(), vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn cross(&self, other: &Self) -> Result<Self, VectorError> {
        let [a1, a2, a3] =
            <[f32; 3]>::try_from(self.as_slice()).map_err(|_| VectorError::DimensionMismatch {
                expected: 3,
                actual: self.dim(),
            })?;
        let [b1, b2, b3] =
            <[f32; 3]>::try_from(other.as_slice()).map_err(|_| VectorError::DimensionMismatch {
                expected: 3,
                actual: other.dim(),
            })?;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        Ok(cross)
    }

    /// Returns the squared length of this vector.
    ///
    /// Equals `dot(v, v)` but works for any dimension without a dimension check.
    pub fn length2(&self) -> f32 {
        self.elems.iter().map(|c| c * c).sum()
    }

    /// Returns the length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use framevec::*;
    /// assert_eq!(vec3(0.0, 3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> f32 {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, yielding a unit vector.
    ///
    /// A zero-length vector normalizes to an all-zero vector of the same dimension rather than
    /// producing NaN components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use framevec::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), vec3(0.0, 0.0, 1.0));
    /// assert_eq!(Vector::zeros(2).normalize(), Vector::zeros(2));
    /// ```
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            Self::zeros(self.dim())
        } else {
            self / len
        }
    }
}

impl From<Vec<f32>> for Vector {
    fn from(value: Vec<f32>) -> Self {
        value.into_iter().collect()
    }
}

impl From<&[f32]> for Vector {
    fn from(value: &[f32]) -> Self {
        value.iter().copied().collect()
    }
}

impl<const N: usize> From<[f32; N]> for Vector {
    fn from(value: [f32; N]) -> Self {
        value.into_iter().collect()
    }
}

impl FromIterator<f32> for Vector {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self {
            elems: iter.into_iter().collect(),
            basis: None,
        }
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Deliberately does not descend into the basis: chains may be cyclic.
        let mut tup = f.debug_tuple(if self.basis.is_some() { "Local" } else { "World" });
        for elem in &self.elems {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Formats as `World Vector < c1 c2 ... cN >`, or `Local Vector < ... >` when a basis is
/// attached.
///
/// # Examples
///
/// ```
/// # use framevec::*;
/// assert_eq!(vec3(1.0, 2.5, -3.0).to_string(), "World Vector < 1 2.5 -3 >");
/// assert_eq!(Vector::zeros(0).to_string(), "World Vector < >");
/// ```
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame = if self.basis.is_some() { "Local" } else { "World" };
        write!(f, "{frame} Vector <")?;
        for elem in &self.elems {
            write!(f, " {elem}")?;
        }
        write!(f, " >")
    }
}

/// Constructs a 1-dimensional [`Vector`] from its single component.
#[inline]
pub fn vec1(x: f32) -> Vector {
    Vector::from([x])
}

/// Constructs a 2-dimensional [`Vector`] from its two components.
#[inline]
pub fn vec2(x: f32, y: f32) -> Vector {
    Vector::from([x, y])
}

/// Constructs a 3-dimensional [`Vector`] from its three components.
#[inline]
pub fn vec3(x: f32, y: f32, z: f32) -> Vector {
    Vector::from([x, y, z])
}

/// Constructs a 4-dimensional [`Vector`] from its four components.
#[inline]
pub fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vector {
    Vector::from([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use crate::{Basis, VectorError};

    use super::*;

    #[test]
    fn access() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.get(0), Some(1.0));
        assert_eq!(v.get(3), Some(4.0));
        assert_eq!(v.get(4), None);
        assert_eq!(v[2], 3.0);

        assert_eq!(v.x(), Some(1.0));
        assert_eq!(v.y(), Some(2.0));
        assert_eq!(v.z(), Some(3.0));
        assert_eq!(v.w(), Some(4.0));
        assert_eq!(v.r(), Some(1.0));
        assert_eq!(v.g(), Some(2.0));
        assert_eq!(v.b(), Some(3.0));
        assert_eq!(v.a(), Some(4.0));

        let short = vec2(1.0, 2.0);
        assert_eq!(short.z(), None);
        assert_eq!(short.a(), None);
    }

    #[test]
    fn construction() {
        assert_eq!(Vector::from([0.0f32; 0]).dim(), 0);
        assert_eq!(Vector::from(vec![1.0, 2.0]), vec2(1.0, 2.0));
        assert_eq!(Vector::from(&[1.0, 2.0][..]), vec2(1.0, 2.0));
        assert_eq!(Vector::splat(2, 7.0), vec2(7.0, 7.0));
        assert_eq!(Vector::uniform(3, 0.0).unwrap(), vec3(0.0, 0.0, 0.0));
        assert_eq!(
            Vector::uniform(-4, 0.0),
            Err(VectorError::InvalidDimension(-4))
        );
        assert_eq!(Vector::uniform(0, 9.0).unwrap().dim(), 0);

        // Large vectors spill out of the inline storage without changing behavior.
        let big = Vector::from_fn(16, |i| i as f32);
        assert_eq!(big.dim(), 16);
        assert_eq!(big.get(15), Some(15.0));
    }

    #[test]
    fn equality() {
        // Missing trailing components compare as zero.
        assert_eq!(vec2(1.0, 2.0), vec3(1.0, 2.0, 0.0));
        assert_ne!(vec2(1.0, 2.0), vec3(1.0, 2.0, 3.0));
        assert_eq!(Vector::zeros(0), Vector::zeros(5));

        // The basis plays no part in equality.
        let frame = Basis::new(vec3(9.0, 9.0, 9.0));
        let local = vec3(1.0, 2.0, 3.0).to_relative(&frame);
        assert_eq!(local, vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(&vec3(4.0, -2.0, -1.0)), Ok(3.0));
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(&vec3(1.0, 3.0, -5.0)), Ok(35.0));
        // Commutative.
        let a = vec2(2.0, -7.0);
        let b = vec2(0.5, 3.0);
        assert_eq!(a.dot(&b), b.dot(&a));

        assert_eq!(
            vec2(1.0, 2.0).dot(&vec3(1.0, 2.0, 3.0)),
            Err(VectorError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn cross() {
        let x = vec3(1.0, 0.0, 0.0);
        let y = vec3(0.0, 1.0, 0.0);
        let z = vec3(0.0, 0.0, 1.0);
        assert_eq!(x.cross(&y).unwrap(), z);
        assert_eq!(y.cross(&x).unwrap(), -&z);

        // Anti-commutative for arbitrary operands.
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(-4.0, 0.5, 2.0);
        assert_eq!(a.cross(&b).unwrap(), -&b.cross(&a).unwrap());

        assert_eq!(
            vec2(1.0, 0.0).cross(&y),
            Err(VectorError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            z.cross(&vec4(0.0, 1.0, 0.0, 0.0)),
            Err(VectorError::DimensionMismatch {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn length() {
        assert_eq!(vec2(3.0, 4.0).length(), 5.0);
        assert_eq!(vec2(3.0, 4.0).length2(), 25.0);
        assert_eq!(Vector::zeros(0).length(), 0.0);

        // length2 agrees with the dot product where the latter is defined.
        let v = vec4(1.0, -2.0, 3.0, -4.0);
        assert_eq!(v.length2(), v.dot(&v).unwrap());
    }

    #[test]
    fn normalize() {
        assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), vec3(0.0, 0.0, 1.0));
        assert_eq!(vec1(-2.0).normalize(), vec1(-1.0));

        // The zero-length guard, for several dimensions.
        for n in 0..5 {
            assert_eq!(Vector::zeros(n).normalize(), Vector::zeros(n));
        }
    }

    #[test]
    fn fmt() {
        assert_eq!(vec3(1.0, 2.5, -3.0).to_string(), "World Vector < 1 2.5 -3 >");
        assert_eq!(Vector::zeros(0).to_string(), "World Vector < >");

        let frame = Basis::new(vec2(1.0, 1.0));
        let local = vec2(5.0, 0.25).to_relative(&frame);
        assert_eq!(local.to_string(), "Local Vector < 5 0.25 >");

        assert_eq!(format!("{:?}", vec2(1.0, 2.0)), "World(1.0, 2.0)");
        assert_eq!(format!("{local:?}"), "Local(5.0, 0.25)");
    }
}
