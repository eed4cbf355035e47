//! Basis-relative vector algebra for games and simulations.
//!
//! # Motivation
//!
//! Game and simulation code frequently wants a vector type that is not pinned to a fixed
//! dimensionality, and that can express positions *relative to* other positions: a turret is
//! mounted somewhere on a ship, a muzzle sits somewhere on the turret, and only rarely does
//! anyone care where the muzzle is in absolute coordinates. Fixed-size graphics math libraries
//! handle the arithmetic well but leave the frame bookkeeping to the caller.
//!
//! This crate provides a single dynamically-sized [`Vector`] type that optionally carries a
//! [`Basis`]: a shared reference to another vector that defines the coordinate frame it is
//! expressed in. Resolving a vector to absolute coordinates walks the basis chain; re-expressing
//! a vector in a different frame is a single [`snap_to`][Vector::snap_to] call.
//!
//! # Goals & Non-Goals
//!
//! - Support vectors of any dimension, including zero, with permissive component-wise
//!   arithmetic that pads mismatched operands instead of rejecting them.
//! - Keep frame resolution explicit: nothing is resolved lazily or cached, and a vector's
//!   numeric components never change behind the caller's back.
//! - Single-threaded by design. A basis chain that is mutated while it is being resolved must
//!   be externally synchronized; this crate does not attempt to make that safe.
//! - No matrices, no quaternions, no SIMD. Rotation and scaling frames are out of scope; a
//!   basis only ever contributes a translation.
//!
//! # Example
//!
//! ```
//! use framevec::{vec3, Basis};
//!
//! // A ship somewhere in the world, with a turret mounted 2 units forward.
//! let ship = Basis::new(vec3(100.0, 0.0, 50.0));
//! let turret = vec3(2.0, 0.0, 0.0).to_relative(&ship);
//!
//! assert_eq!(turret.to_world().unwrap(), vec3(102.0, 0.0, 50.0));
//!
//! // Moving the ship moves everything expressed relative to it.
//! ship.borrow_mut().set_world(Some(&vec3(200.0, 0.0, 50.0)));
//! assert_eq!(turret.to_world().unwrap(), vec3(202.0, 0.0, 50.0));
//! ```

mod error;
mod frame;
mod vector;

pub use error::*;
pub use frame::*;
pub use vector::*;
