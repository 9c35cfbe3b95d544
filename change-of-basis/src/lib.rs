//! Exact change of basis between coordinate frames whose axes are labelled with physical
//! directions (forward/back, right/left, up/down).
//!
//! Converting data from one program's coordinate system to another's (a motion-capture
//! file to a game engine, a sensor to a renderer) is a change of basis by a *signed
//! permutation matrix*: every entry is −1, 0, or +1. Such a change can always be carried
//! out by swapping and negating components, never multiplying, so it introduces no
//! floating-point rounding error at all.
//!
//! The workflow is:
//!
//! 1. Describe both coordinate systems as [`Frame`]s.
//! 2. Compute a [`CaseNumber`] (for matrices, vectors, and quaternions) or an
//!    [`EulerCase`] (for yaw/pitch/roll) from the pair, once.
//! 3. Apply it to as many values as needed.
//!
//! ```
//! use change_of_basis::{AxisDirection::*, CaseNumber, Frame, Matrix3};
//! use euclid::default::Vector3D;
//!
//! let sensor = Frame::new(Right, Forward, Up);
//! let case = CaseNumber::from_frames(sensor, Frame::UNREAL_3);
//!
//! assert_eq!(case.transform_vector(Vector3D::new(1.0, 2.0, 3.0)), Vector3D::new(2.0, 1.0, 3.0));
//! assert_eq!(case.to_matrix::<i32>(), Matrix3::from_rows([[0, 1, 0], [1, 0, 0], [0, 0, 1]]));
//! ```

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(any(test, feature = "arbitrary")),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;

mod axis;
pub use axis::*;
mod case;
pub use case::*;
mod convention;
pub use convention::*;
mod direction;
pub use direction::*;
pub mod euler;
pub use euler::{EulerAngles, EulerCase};
mod frame;
pub use frame::*;
mod matrix;
pub use matrix::*;
mod permutation;
pub use permutation::*;
#[cfg(feature = "serde")]
mod serde_impls;

/// Tools for testing code that uses this library. Not part of the stable API.
#[doc(hidden)]
pub mod util;

// reexport for convenience of our tests and of callers who want the exact versions we use
#[doc(hidden)]
pub use euclid;
