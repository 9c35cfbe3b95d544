//! Helpers for tests, both of this crate and of its users.

#[cfg(any(feature = "std", test))]
mod pair_sweep;
#[cfg(any(feature = "std", test))]
pub use pair_sweep::{for_each_frame_pair, for_each_pair};
