//! Physical directions that the axes of a [`Frame`](crate::Frame) may point in.
//! This module is private but reexported by its parent.

use core::{fmt, ops, str::FromStr};

use crate::Axis;

/// One of the six directions an axis of a coordinate frame may point in, described
/// relative to a viewer or character rather than to any particular coordinate system.
///
/// The discriminants are chosen so that a direction and its opposite share their low two
/// bits (which identify the [`Axis`]) and differ only in bit 2 (the sign):
///
/// | direction | value | axis (`value & 3`) | negative (`value >= 4`) |
/// |-----------|-------|--------------------|-------------------------|
/// | Forward   | 0     | 0                  | no                      |
/// | Right     | 1     | 1                  | no                      |
/// | Up        | 2     | 2                  | no                      |
/// | Back      | 4     | 0                  | yes                     |
/// | Left      | 5     | 1                  | yes                     |
/// | Down      | 6     | 2                  | yes                     |
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AxisDirection {
    /// The direction the viewer faces.
    Forward = 0,
    /// The viewer's right.
    Right = 1,
    /// Opposite to gravity.
    Up = 2,
    /// Opposite to [`Forward`](Self::Forward).
    Back = 4,
    /// Opposite to [`Right`](Self::Right).
    Left = 5,
    /// Opposite to [`Up`](Self::Up).
    Down = 6,
}

impl AxisDirection {
    /// All the values of [`AxisDirection`], positive directions first.
    pub const ALL: [AxisDirection; 6] = [
        AxisDirection::Forward,
        AxisDirection::Right,
        AxisDirection::Up,
        AxisDirection::Back,
        AxisDirection::Left,
        AxisDirection::Down,
    ];

    /// Inverse function of `direction as u8`, converting the number to [`AxisDirection`].
    #[inline]
    pub const fn from_discriminant(d: u8) -> Option<Self> {
        match d {
            0 => Some(Self::Forward),
            1 => Some(Self::Right),
            2 => Some(Self::Up),
            4 => Some(Self::Back),
            5 => Some(Self::Left),
            6 => Some(Self::Down),
            _ => None,
        }
    }

    /// Returns which axis this direction lies on.
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Forward | Self::Back => Axis::Longitudinal,
            Self::Right | Self::Left => Axis::Lateral,
            Self::Up | Self::Down => Axis::Vertical,
        }
    }

    /// Returns whether this is one of [`Back`](Self::Back), [`Left`](Self::Left), or
    /// [`Down`](Self::Down).
    ///
    /// ```
    /// use change_of_basis::AxisDirection;
    ///
    /// assert_eq!(AxisDirection::Left.is_negative(), true);
    /// assert_eq!(AxisDirection::Right.is_negative(), false);
    /// ```
    #[inline]
    pub const fn is_negative(self) -> bool {
        (self as u8) & 0b100 != 0
    }

    /// Returns whether this is one of [`Forward`](Self::Forward), [`Right`](Self::Right),
    /// or [`Up`](Self::Up).
    #[inline]
    pub const fn is_positive(self) -> bool {
        !self.is_negative()
    }

    /// Returns the opposite direction (maps [`Up`](Self::Up) to [`Down`](Self::Down) and
    /// so on).
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Back,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Back => Self::Forward,
            Self::Left => Self::Right,
            Self::Down => Self::Up,
        }
    }

    /// Returns the positive direction on the same axis as `self`.
    #[inline]
    #[must_use]
    pub const fn unsigned(self) -> Self {
        self.axis().positive_direction()
    }

    /// Returns whether `self` and `other` lie on the same axis, i.e. are equal or opposite.
    ///
    /// This is the same as [`match_direction()`].
    #[inline]
    pub const fn matches(self, other: Self) -> bool {
        (self as u8) & 0b11 == (other as u8) & 0b11
    }

    /// Returns `1` for positive directions and `-1` for negative ones.
    #[inline]
    pub fn signum<S>(self) -> S
    where
        S: num_traits::One + ops::Neg<Output = S>,
    {
        if self.is_negative() { -S::one() } else { S::one() }
    }

    /// Returns the direction of the cross product of these two directions, in physical
    /// space where <code>Forward × Left = Up</code> (that is, physical space is
    /// considered right-handed when listed as forward, left, up).
    ///
    /// Returns [`None`] if the directions are parallel.
    ///
    /// ```
    /// use change_of_basis::AxisDirection::*;
    ///
    /// assert_eq!(Forward.cross(Left), Some(Up));
    /// assert_eq!(Forward.cross(Right), Some(Down));
    /// assert_eq!(Up.cross(Down), None);
    /// ```
    #[must_use]
    #[allow(clippy::missing_inline_in_public_items)]
    pub const fn cross(self, other: Self) -> Option<Self> {
        if self.matches(other) {
            return None;
        }
        // Work in (forward, left, up) coordinates, which are the right-handed ones.
        let (i, si) = self.flu_component();
        let (j, sj) = other.flu_component();
        let k = 3 - i - j;
        let cyclic = (i + 1) % 3 == j;
        let positive = (si == sj) == cyclic;
        let result = match k {
            0 => Self::Forward,
            1 => Self::Left,
            _ => Self::Up,
        };
        Some(if positive { result } else { result.opposite() })
    }

    /// Index and sign of the nonzero component of this direction's unit vector in
    /// (forward, left, up) coordinates. `true` means positive.
    const fn flu_component(self) -> (u8, bool) {
        match self {
            Self::Forward => (0, true),
            Self::Back => (0, false),
            Self::Left => (1, true),
            Self::Right => (1, false),
            Self::Up => (2, true),
            Self::Down => (2, false),
        }
    }

    /// Returns the name of this direction, in the same format as [`fmt::Display`].
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "Forward",
            Self::Right => "Right",
            Self::Up => "Up",
            Self::Back => "Back",
            Self::Left => "Left",
            Self::Down => "Down",
        }
    }
}

/// Returns true iff `d1` and `d2` lie on the same unsigned axis (are equal or opposite).
///
/// ```
/// use change_of_basis::{match_direction, AxisDirection::*};
///
/// assert!(match_direction(Up, Up));
/// assert!(match_direction(Up, Down));
/// assert!(!match_direction(Up, Forward));
/// ```
#[inline]
pub const fn match_direction(d1: AxisDirection, d2: AxisDirection) -> bool {
    d1.matches(d2)
}

impl ops::Neg for AxisDirection {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

impl From<AxisDirection> for u8 {
    #[inline]
    fn from(value: AxisDirection) -> Self {
        value as u8
    }
}

impl fmt::Display for AxisDirection {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses the [`fmt::Display`] form of a direction, ignoring ASCII case.
impl FromStr for AxisDirection {
    type Err = ParseDirectionError;

    #[allow(clippy::missing_inline_in_public_items)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(ParseDirectionError(()))
    }
}

/// Error from parsing an [`AxisDirection`] from a string that is not one of the six
/// direction names.
#[derive(Clone, Copy, Debug, displaydoc::Display, Eq, Hash, PartialEq)]
#[displaydoc("expected one of Forward, Right, Up, Back, Left, Down")]
pub struct ParseDirectionError(());

impl core::error::Error for ParseDirectionError {}
