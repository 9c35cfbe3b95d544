//! Coordinate frames described by where their axes point.
//! This module is private but reexported by its parent.

use core::fmt;

use crate::{Axis, AxisDirection};

/// A coordinate frame, described by the physical direction in which each of its
/// X, Y, and Z axes point.
///
/// For instance, if a character looks along the positive X axis, Y is to their right,
/// and Z is up, then the frame is `Frame::new(Forward, Right, Up)`.
///
/// A frame always uses each [`Axis`] exactly once; this is checked on construction,
/// so every [`Frame`] value is well-formed. There are exactly 48 frames, listed in
/// [`Frame::ALL`].
///
/// Frames for some commonly encountered programs and devices are provided as
/// associated constants (such as [`Frame::OPENGL`]) and by [`Convention`](crate::Convention).
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Frame {
    basis: [AxisDirection; 3],
}

impl Frame {
    /// All 48 well-formed frames.
    ///
    /// They are ordered by the six orderings of forward, right, and up, and within each
    /// ordering by which axes are negated, the Z axis varying fastest.
    pub const ALL: [Self; 48] = {
        use AxisDirection::*;
        const ORDERINGS: [[AxisDirection; 3]; 6] = [
            [Forward, Right, Up],
            [Forward, Up, Right],
            [Right, Forward, Up],
            [Right, Up, Forward],
            [Up, Forward, Right],
            [Up, Right, Forward],
        ];
        const fn flip_if(direction: AxisDirection, flip: bool) -> AxisDirection {
            if flip { direction.opposite() } else { direction }
        }

        let mut all = [Frame {
            basis: [Forward, Right, Up],
        }; 48];
        let mut ordering = 0;
        while ordering < 6 {
            let [x, y, z] = ORDERINGS[ordering];
            let mut signs = 0;
            while signs < 8 {
                all[ordering * 8 + signs] = Frame {
                    basis: [
                        flip_if(x, signs & 0b100 != 0),
                        flip_if(y, signs & 0b010 != 0),
                        flip_if(z, signs & 0b001 != 0),
                    ],
                };
                signs += 1;
            }
            ordering += 1;
        }
        all
    };

    /// Constructs a frame whose X, Y, and Z axes point in the given directions.
    ///
    /// Panics if two of the directions lie on the same axis. When used to define a
    /// `const`, that check happens at compile time. Use [`Frame::try_new()`] to handle
    /// invalid input instead.
    ///
    /// ```
    /// use change_of_basis::{AxisDirection::*, Frame};
    ///
    /// const MOCAP: Frame = Frame::new(Left, Up, Forward);
    /// assert_eq!(MOCAP.y(), Up);
    /// ```
    #[inline]
    #[track_caller]
    pub const fn new(x: AxisDirection, y: AxisDirection, z: AxisDirection) -> Self {
        match Self::try_new(x, y, z) {
            Ok(frame) => frame,
            Err(_) => panic!("Frame::new: the three directions must lie on three different axes"),
        }
    }

    /// Constructs a frame whose X, Y, and Z axes point in the given directions,
    /// or returns an error if two of the directions lie on the same axis.
    ///
    /// ```
    /// use change_of_basis::{AxisDirection::*, Frame};
    ///
    /// assert!(Frame::try_new(Forward, Right, Up).is_ok());
    /// assert!(Frame::try_new(Forward, Back, Up).is_err());
    /// ```
    #[inline]
    pub const fn try_new(
        x: AxisDirection,
        y: AxisDirection,
        z: AxisDirection,
    ) -> Result<Self, FrameError> {
        if x.matches(y) {
            Err(FrameError {
                first: x,
                second: y,
            })
        } else if x.matches(z) {
            Err(FrameError {
                first: x,
                second: z,
            })
        } else if y.matches(z) {
            Err(FrameError {
                first: y,
                second: z,
            })
        } else {
            Ok(Self { basis: [x, y, z] })
        }
    }

    /// Returns the directions of the X, Y, and Z axes.
    #[inline]
    pub const fn basis(self) -> [AxisDirection; 3] {
        self.basis
    }

    /// Returns the direction of the X axis.
    #[inline]
    pub const fn x(self) -> AxisDirection {
        self.basis[0]
    }

    /// Returns the direction of the Y axis.
    #[inline]
    pub const fn y(self) -> AxisDirection {
        self.basis[1]
    }

    /// Returns the direction of the Z axis.
    #[inline]
    pub const fn z(self) -> AxisDirection {
        self.basis[2]
    }

    /// Returns which of this frame's axes (0 for X, 1 for Y, 2 for Z) lies on the given
    /// physical axis.
    ///
    /// ```
    /// use change_of_basis::{Axis, Frame};
    ///
    /// assert_eq!(Frame::OPENGL.slot_of(Axis::Vertical), 1);
    /// ```
    #[inline]
    pub const fn slot_of(self, axis: Axis) -> usize {
        if self.basis[0].axis() as u8 == axis as u8 {
            0
        } else if self.basis[1].axis() as u8 == axis as u8 {
            1
        } else {
            // A well-formed frame uses every axis, so this must be the one.
            2
        }
    }

    /// Returns the direction, among this frame's three axes, which lies on the given
    /// physical axis.
    #[inline]
    pub const fn direction_on(self, axis: Axis) -> AxisDirection {
        self.basis[self.slot_of(axis)]
    }

    /// Returns the frame with the same axis ordering as this one but where every axis
    /// points in the positive direction ([`Forward`](AxisDirection::Forward),
    /// [`Right`](AxisDirection::Right), or [`Up`](AxisDirection::Up)).
    #[inline]
    #[must_use]
    pub const fn normalized(self) -> Self {
        let [x, y, z] = self.basis;
        Self {
            basis: [x.unsigned(), y.unsigned(), z.unsigned()],
        }
    }

    /// Returns whether this frame is right-handed or left-handed.
    ///
    /// Physical space is taken to be right-handed when listed as
    /// (forward, left, up); see [`AxisDirection::cross()`].
    ///
    /// ```
    /// use change_of_basis::{Frame, Handedness};
    ///
    /// assert_eq!(Frame::OPENGL.handedness(), Handedness::Right);
    /// assert_eq!(Frame::UNREAL_3.handedness(), Handedness::Left);
    /// ```
    #[inline]
    pub const fn handedness(self) -> Handedness {
        let [x, y, z] = self.basis;
        match x.cross(y) {
            Some(cross) if cross as u8 == z as u8 => Handedness::Right,
            _ => Handedness::Left,
        }
    }
}

impl fmt::Debug for Frame {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.basis;
        write!(f, "Frame({x:?}, {y:?}, {z:?})")
    }
}

/// Formats as `(X direction, Y direction, Z direction)`.
impl fmt::Display for Frame {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.basis;
        write!(f, "({x}, {y}, {z})")
    }
}

impl TryFrom<[AxisDirection; 3]> for Frame {
    type Error = FrameError;

    #[inline]
    fn try_from([x, y, z]: [AxisDirection; 3]) -> Result<Self, Self::Error> {
        Self::try_new(x, y, z)
    }
}

impl From<Frame> for [AxisDirection; 3] {
    #[inline]
    fn from(frame: Frame) -> Self {
        frame.basis
    }
}

#[cfg(feature = "arbitrary")]
#[mutants::skip]
impl<'a> arbitrary::Arbitrary<'a> for Frame {
    #[allow(clippy::missing_inline_in_public_items)]
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(*u.choose(&Self::ALL)?)
    }
}

/// Whether a [`Frame`] is right-handed or left-handed.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
pub enum Handedness {
    /// X × Y = Z in right-handed physical space.
    Right,
    /// X × Y = −Z in right-handed physical space.
    Left,
}

impl Handedness {
    /// Returns the other handedness.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

/// Error when a [`Frame`] is constructed from directions which do not use each axis
/// exactly once.
#[derive(Clone, Copy, Debug, displaydoc::Display, Eq, Hash, PartialEq)]
#[displaydoc("{first} and {second} lie on the same axis; a frame must use each axis exactly once")]
pub struct FrameError {
    first: AxisDirection,
    second: AxisDirection,
}

impl FrameError {
    /// Returns the two directions which were found to lie on the same axis.
    #[inline]
    pub const fn colliding_directions(&self) -> [AxisDirection; 2] {
        [self.first, self.second]
    }
}

impl core::error::Error for FrameError {}
