//! Coordinate frames: the [`Basis`] handle and the world/relative transform algebra.
//!
//! A vector's *world position* is its own components added to the world position of its basis,
//! resolved recursively until a vector without a basis is reached. The operations here come in
//! two flavors:
//!
//! - [`Vector::to_relative`] is a pure *reframing*: it attaches a new basis to the existing
//!   numeric value without touching it. Use it when the components are already correct for the
//!   new frame.
//! - [`Vector::snap_to`] is the actual coordinate transform: it re-expresses the vector's world
//!   position as an offset from the new basis, walking both basis chains.
//!
//! Bases are shared, non-owning handles: many vectors may reference the same [`Basis`], and
//! mutating the vector inside it (via [`Basis::borrow_mut`]) is visible to all of them.

use std::{
    cell::{Ref, RefCell, RefMut},
    fmt,
    rc::Rc,
};

use log::{debug, trace};

use crate::{error::VectorError, vector::Vector};

/// A shared handle to a [`Vector`] used as a coordinate frame.
///
/// Cloning a [`Basis`] clones the *handle*, not the vector inside it; all clones refer to the
/// same frame. A basis chain must not revisit a frame — resolution detects that and fails with
/// [`VectorError::CyclicBasis`] instead of recursing forever.
///
/// # Examples
///
/// ```
/// # use framevec::*;
/// let anchor = Basis::new(vec2(10.0, 0.0));
/// let v = vec2(1.0, 1.0).to_relative(&anchor);
/// assert_eq!(v.to_world().unwrap(), vec2(11.0, 1.0));
/// ```
#[derive(Clone)]
pub struct Basis(Rc<RefCell<Vector>>);

impl Basis {
    /// Creates a new frame from the given vector.
    pub fn new(vector: Vector) -> Self {
        Self(Rc::new(RefCell::new(vector)))
    }

    /// Borrows the vector defining this frame.
    ///
    /// # Panics
    ///
    /// Panics if the vector is currently mutably borrowed, like [`RefCell::borrow`].
    pub fn borrow(&self) -> Ref<'_, Vector> {
        self.0.borrow()
    }

    /// Mutably borrows the vector defining this frame.
    ///
    /// Changes made through the returned guard are visible to every vector sharing this basis.
    ///
    /// # Panics
    ///
    /// Panics if the vector is currently borrowed, like [`RefCell::borrow_mut`].
    pub fn borrow_mut(&self) -> RefMut<'_, Vector> {
        self.0.borrow_mut()
    }

    /// Returns whether two handles refer to the same frame.
    pub fn ptr_eq(&self, other: &Basis) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns the world origin expressed relative to this frame.
    ///
    /// This is the omitted-vector form of [`Vector::snap_to`]: the zero vector of this frame's
    /// dimension, snapped into the frame. Its own world position is the origin again.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::CyclicBasis`] when this frame's basis chain is cyclic.
    ///
    /// # Examples
    ///
    /// ```
    /// # use framevec::*;
    /// let frame = Basis::new(vec2(3.0, -4.0));
    /// let origin = frame.world_origin().unwrap();
    /// assert_eq!(origin, vec2(-3.0, 4.0));
    /// assert_eq!(origin.to_world().unwrap(), vec2(0.0, 0.0));
    /// ```
    pub fn world_origin(&self) -> Result<Vector, VectorError> {
        let dim = self.0.borrow().dim();
        Vector::zeros(dim).snap_to(self)
    }
}

impl From<Vector> for Basis {
    fn from(vector: Vector) -> Self {
        Self::new(vector)
    }
}

impl fmt::Debug for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The frame vector is not printed: the chain behind it may be cyclic.
        write!(f, "Basis({:p})", Rc::as_ptr(&self.0))
    }
}

impl Vector {
    /// Returns the basis this vector is expressed relative to, if any.
    pub fn basis(&self) -> Option<&Basis> {
        self.basis.as_ref()
    }

    /// Returns `true` when this vector carries no basis, i.e. its components are absolute
    /// world coordinates.
    pub fn is_world(&self) -> bool {
        self.basis.is_none()
    }

    /// Resolves this vector to absolute world coordinates.
    ///
    /// A world vector resolves to a clone of itself. A relative vector adds its components to
    /// its basis's resolved world position, walking the whole chain. The result never carries
    /// a basis.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::CyclicBasis`] when the chain revisits a frame.
    ///
    /// # Examples
    ///
    /// ```
    /// # use framevec::*;
    /// let outer = Basis::new(vec2(10.0, 0.0));
    /// let inner = Basis::new(vec2(0.0, 5.0).to_relative(&outer));
    /// let v = vec2(1.0, 1.0).to_relative(&inner);
    /// assert_eq!(v.to_world().unwrap(), vec2(11.0, 6.0));
    /// ```
    pub fn to_world(&self) -> Result<Vector, VectorError> {
        let mut acc = Vector {
            elems: self.elems.clone(),
            basis: None,
        };
        let mut next = self.basis.clone();
        let mut visited: Vec<*const RefCell<Vector>> = Vec::new();
        while let Some(basis) = next {
            let ptr = Rc::as_ptr(&basis.0);
            if visited.contains(&ptr) {
                debug!("basis chain revisits {ptr:p} after {} links", visited.len());
                return Err(VectorError::CyclicBasis);
            }
            visited.push(ptr);

            let link = basis.0.borrow();
            acc = &acc + &*link;
            next = link.basis.clone();
        }
        trace!("resolved a basis chain of {} links", visited.len());
        Ok(acc)
    }

    /// Reinterprets this vector's numeric value as being relative to `basis`.
    ///
    /// The components are copied verbatim; only the frame pointer changes. This is *not* a
    /// coordinate transform — the vector's world position changes unless the new basis happens
    /// to resolve to the origin. Use [`snap_to`][Vector::snap_to] to re-express a vector in a
    /// new frame while preserving its world-space meaning.
    ///
    /// Reframing is cheap (no chain traversal), which is the point: callers that already know
    /// the offset is correct for the new frame skip the recursive work `snap_to` does.
    pub fn to_relative(&self, basis: &Basis) -> Vector {
        Vector {
            elems: self.elems.clone(),
            basis: Some(basis.clone()),
        }
    }

    /// Re-expresses this vector relative to `basis`, preserving its world-space meaning.
    ///
    /// Both this vector and the basis are resolved to world coordinates; the result is their
    /// difference, carrying `basis` as its frame. Resolving the result back with
    /// [`to_world`][Vector::to_world] yields this vector's original world position.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::CyclicBasis`] when either basis chain is cyclic.
    ///
    /// # Examples
    ///
    /// ```
    /// # use framevec::*;
    /// let a = vec3(5.0, 10.0, 15.0);
    /// let b = Basis::new(vec3(-5.0, 3.0, 5.0));
    /// let local = a.snap_to(&b).unwrap();
    /// assert_eq!(local, vec3(10.0, 7.0, 10.0));
    /// assert_eq!(local.to_world().unwrap(), a);
    /// ```
    pub fn snap_to(&self, basis: &Basis) -> Result<Vector, VectorError> {
        let origin = basis.borrow().to_world()?;
        let mut snapped = &self.to_world()? - &origin;
        snapped.basis = Some(basis.clone());
        Ok(snapped)
    }

    /// Replaces this vector's state with absolute world coordinates, in place.
    ///
    /// The components are taken from `value`, or zero-filled at the current dimension when
    /// `value` is `None`. The basis is cleared either way.
    ///
    /// # Examples
    ///
    /// ```
    /// # use framevec::*;
    /// let frame = Basis::new(vec2(1.0, 1.0));
    /// let mut v = vec2(5.0, 5.0).to_relative(&frame);
    /// v.set_world(Some(&vec2(2.0, 3.0)));
    /// assert!(v.is_world());
    /// assert_eq!(v, vec2(2.0, 3.0));
    /// ```
    pub fn set_world(&mut self, value: Option<&Vector>) {
        match value {
            Some(v) => self.elems = v.elems.clone(),
            None => self.elems.iter_mut().for_each(|c| *c = 0.0),
        }
        self.basis = None;
    }

    /// Replaces this vector's components with `value`'s and its frame with `basis`, in place.
    ///
    /// The components are copied verbatim — no transform is performed. When `basis` is `None`,
    /// the vector's existing basis is kept.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::MissingBasis`] when `basis` is `None` and this vector has no
    /// basis of its own.
    pub fn set_relative(
        &mut self,
        value: &Vector,
        basis: Option<&Basis>,
    ) -> Result<(), VectorError> {
        let basis = basis
            .cloned()
            .or_else(|| self.basis.clone())
            .ok_or(VectorError::MissingBasis)?;
        self.elems = value.elems.clone();
        self.basis = Some(basis);
        Ok(())
    }
}
