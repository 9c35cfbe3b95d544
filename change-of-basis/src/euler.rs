//! Change of basis for yaw, pitch, and roll angles.
//!
//! The rotation order is yaw about the up/down axis, then pitch about the right/left
//! axis, then roll about the forward/back axis. Which physical axis each angle refers
//! to does not depend on the frame, so a change of basis can only change the signs of
//! the angles; which signs change is described by an [`EulerCase`].
//!
//! ```
//! use change_of_basis::{EulerAngles, EulerCase, Frame};
//!
//! let case = EulerCase::from_frames(Frame::KINECT, Frame::OPENGL);
//! assert_eq!(
//!     case.transform(EulerAngles::new(10.0, 20.0, 30.0)),
//!     EulerAngles::new(10.0, -20.0, -30.0),
//! );
//! ```

use core::fmt;
use core::ops::{Mul, Neg};

use crate::{Axis, CaseNumber, CaseOutOfRange, Frame};

#[cfg(doc)]
use crate::AxisDirection;

/// Angles of rotation about the up/down (yaw), right/left (pitch), and forward/back
/// (roll) axes.
///
/// The angles may be in any unit; changes of basis only negate them.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::exhaustive_structs)]
pub struct EulerAngles<T> {
    /// Rotation about the up/down axis.
    pub yaw: T,
    /// Rotation about the right/left axis.
    pub pitch: T,
    /// Rotation about the forward/back axis.
    pub roll: T,
}

impl<T> EulerAngles<T> {
    /// Constructs [`EulerAngles`] from its components.
    #[inline]
    pub const fn new(yaw: T, pitch: T, roll: T) -> Self {
        Self { yaw, pitch, roll }
    }
}

impl<T: Copy + Neg<Output = T>> EulerAngles<T> {
    /// Converts these angles, expressed relative to the `from` frame, to the `to` frame.
    ///
    /// This computes the [`EulerCase`] on every call; if many angles are to be
    /// converted between the same frames, compute it once with
    /// [`EulerCase::from_frames()`] and use [`EulerCase::transform()`] instead.
    #[inline]
    #[must_use]
    pub fn change_basis(self, from: Frame, to: Frame) -> Self {
        EulerCase::from_frames(from, to).transform(self)
    }
}

impl<T> From<[T; 3]> for EulerAngles<T> {
    /// Takes `[yaw, pitch, roll]`.
    #[inline]
    fn from([yaw, pitch, roll]: [T; 3]) -> Self {
        Self { yaw, pitch, roll }
    }
}

impl<T> From<EulerAngles<T>> for [T; 3] {
    /// Returns `[yaw, pitch, roll]`.
    #[inline]
    fn from(value: EulerAngles<T>) -> Self {
        [value.yaw, value.pitch, value.roll]
    }
}

/// Which of yaw, pitch, and roll are negated by a change of basis between two frames.
///
/// Its numeric value is a 3-bit mask: bit 2 negates yaw, bit 1 negates pitch, and
/// bit 0 negates roll.
///
/// `EulerCase`s combine by [`Mul`]; since each is its own inverse, the order does not
/// matter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EulerCase(u8);

impl EulerCase {
    /// Changes no signs.
    pub const IDENTITY: Self = Self(0);

    /// Negates all three angles. This is the effect of a swap of two axes.
    pub const NEGATE_ALL: Self = Self(0b111);

    /// All 8 Euler cases, in numeric order.
    pub const ALL: [Self; 8] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    /// Returns the Euler case with the given numeric value, or [`None`] if it is not
    /// less than 8.
    #[inline]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 8 { Some(Self(index)) } else { None }
    }

    /// Returns the numeric value of this case, in `0..8`.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Whether the yaw angle is negated.
    #[inline]
    pub const fn flips_yaw(self) -> bool {
        self.0 & 0b100 != 0
    }

    /// Whether the pitch angle is negated.
    #[inline]
    pub const fn flips_pitch(self) -> bool {
        self.0 & 0b010 != 0
    }

    /// Whether the roll angle is negated.
    #[inline]
    pub const fn flips_roll(self) -> bool {
        self.0 & 0b001 != 0
    }

    /// Computes which angles change sign when converting Euler angles expressed relative
    /// to the `from` frame to the `to` frame.
    ///
    /// ```
    /// use change_of_basis::{AxisDirection::*, EulerCase, Frame};
    ///
    /// // Swapping two axes reverses handedness, so every angle changes sign.
    /// let case = EulerCase::from_frames(Frame::new(Right, Forward, Up), Frame::UNREAL_3);
    /// assert_eq!(case, EulerCase::NEGATE_ALL);
    /// ```
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn from_frames(from: Frame, to: Frame) -> Self {
        let mut case = rotation_order_signs(from) * rotation_order_signs(to);

        // What remains is a permutation between frames which only use Forward, Right,
        // and Up. That has no effect unless it is a reflection.
        let permutation = CaseNumber::from_frames(from.normalized(), to.normalized()).permutation();
        if permutation.is_odd() {
            case = case * Self::NEGATE_ALL;
        }

        log::trace!("Euler case from {from} to {to} is {case}");
        case
    }

    /// Applies this case to a set of angles, negating some of them.
    #[inline]
    pub fn transform<T>(self, angles: EulerAngles<T>) -> EulerAngles<T>
    where
        T: Neg<Output = T>,
    {
        let EulerAngles { yaw, pitch, roll } = angles;
        EulerAngles {
            yaw: if self.flips_yaw() { -yaw } else { yaw },
            pitch: if self.flips_pitch() { -pitch } else { pitch },
            roll: if self.flips_roll() { -roll } else { roll },
        }
    }
}

/// Returns the sign changes needed to express yaw, pitch, and roll relative to `frame`
/// instead of relative to the frame with the same axis ordering that uses only
/// [`Forward`](AxisDirection::Forward), [`Right`](AxisDirection::Right), and
/// [`Up`](AxisDirection::Up).
///
/// Reversing the axis of one angle negates the *other two* angles:
///
/// * If the vertical axis points down, pitch and roll change sign.
/// * If the lateral axis points left, yaw and roll change sign.
/// * If the longitudinal axis points back, yaw and pitch change sign.
///
/// ```
/// use change_of_basis::{AxisDirection::*, EulerCase, Frame};
/// use change_of_basis::euler::rotation_order_signs;
///
/// let case = rotation_order_signs(Frame::new(Down, Right, Forward));
/// assert!(!case.flips_yaw() && case.flips_pitch() && case.flips_roll());
/// ```
#[allow(clippy::missing_inline_in_public_items)]
pub fn rotation_order_signs(frame: Frame) -> EulerCase {
    const UP: EulerCase = EulerCase(0b011);
    const RIGHT: EulerCase = EulerCase(0b101);
    const FORWARD: EulerCase = EulerCase(0b110);

    let mut case = EulerCase::IDENTITY;
    for (axis, flip) in [
        (Axis::Vertical, UP),
        (Axis::Lateral, RIGHT),
        (Axis::Longitudinal, FORWARD),
    ] {
        if frame.direction_on(axis).is_negative() {
            case = case * flip;
        }
    }
    case
}

impl Default for EulerCase {
    /// Returns [`EulerCase::IDENTITY`].
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Self> for EulerCase {
    type Output = Self;

    /// Concatenation: the result negates each angle that exactly one of the operands
    /// negates.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

/// Formats as three characters, `+` or `-` for each of yaw, pitch, and roll.
impl fmt::Display for EulerCase {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = |flip: bool| if flip { '-' } else { '+' };
        write!(
            f,
            "{}{}{}",
            sign(self.flips_yaw()),
            sign(self.flips_pitch()),
            sign(self.flips_roll())
        )
    }
}

impl From<EulerCase> for u8 {
    #[inline]
    fn from(value: EulerCase) -> Self {
        value.0
    }
}

impl TryFrom<u8> for EulerCase {
    type Error = CaseOutOfRange;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(CaseOutOfRange { value, limit: 8 })
    }
}

#[cfg(feature = "arbitrary")]
#[mutants::skip]
impl<'a> arbitrary::Arbitrary<'a> for EulerCase {
    #[allow(clippy::missing_inline_in_public_items)]
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(*u.choose(&Self::ALL)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::for_each_frame_pair;
    use crate::AxisDirection::*;
    use pretty_assertions::assert_eq;
    use std::string::ToString as _;

    #[test]
    fn all_and_new() {
        for (i, case) in EulerCase::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(case.index()), i);
            assert_eq!(EulerCase::new(case.index()), Some(case));
            assert_eq!(EulerCase::try_from(case.index()), Ok(case));
        }
        assert_eq!(EulerCase::new(8), None);
        assert_eq!(
            EulerCase::try_from(9).unwrap_err().to_string(),
            "case number 9 is out of range; must be less than 8"
        );
        assert_eq!(EulerCase::default(), EulerCase::IDENTITY);
    }

    #[test]
    fn transform_bits() {
        let angles = EulerAngles::new(1, 2, 3);
        assert_eq!(EulerCase(0b100).transform(angles), EulerAngles::new(-1, 2, 3));
        assert_eq!(EulerCase(0b010).transform(angles), EulerAngles::new(1, -2, 3));
        assert_eq!(EulerCase(0b001).transform(angles), EulerAngles::new(1, 2, -3));
        assert_eq!(EulerCase::NEGATE_ALL.transform(angles), EulerAngles::new(-1, -2, -3));
    }

    #[test]
    fn swap_is_negation() {
        let case = EulerCase::from_frames(Frame::new(Right, Forward, Up), Frame::new(Forward, Right, Up));
        assert_eq!(case, EulerCase::NEGATE_ALL);
        let angles = EulerAngles::new(23f64.to_radians(), 33f64.to_radians(), 80f64.to_radians());
        let out = case.transform(angles);
        assert_eq!(<[f64; 3]>::from(out), <[f64; 3]>::from(angles).map(|a| -a));
    }

    #[test]
    fn kinect_to_opengl() {
        let case = EulerCase::from_frames(Frame::KINECT, Frame::OPENGL);
        assert!(!case.flips_yaw());
        assert!(case.flips_pitch());
        assert!(case.flips_roll());
        assert_eq!(
            EulerAngles::new(0.5, -0.25, 2.0).change_basis(Frame::KINECT, Frame::OPENGL),
            EulerAngles::new(0.5, 0.25, -2.0)
        );
    }

    #[test]
    fn same_frame_is_identity() {
        for frame in Frame::ALL {
            assert_eq!(EulerCase::from_frames(frame, frame), EulerCase::IDENTITY, "{frame}");
        }
    }

    #[test]
    fn symmetric_and_composable() {
        for_each_frame_pair(|a, b| {
            let ab = EulerCase::from_frames(a, b);
            assert_eq!(ab, EulerCase::from_frames(b, a));
            for c in Frame::ALL {
                assert_eq!(
                    EulerCase::from_frames(b, c) * ab,
                    EulerCase::from_frames(a, c),
                    "via {b} to {c}"
                );
            }
        });
    }

    /// Relabelling the axes of a frame without changing their directions never
    /// changes the angles, unless the relabelling is a reflection.
    #[test]
    fn positive_frames() {
        for from in Frame::ALL.into_iter().filter(|f| *f == f.normalized()) {
            for to in Frame::ALL.into_iter().filter(|f| *f == f.normalized()) {
                let expected = if CaseNumber::from_frames(from, to).is_reflection() {
                    EulerCase::NEGATE_ALL
                } else {
                    EulerCase::IDENTITY
                };
                assert_eq!(EulerCase::from_frames(from, to), expected, "{from} -> {to}");
            }
        }
    }

    #[rstest::rstest]
    #[case(Frame::new(Up, Right, Forward), "+++")]
    #[case(Frame::new(Forward, Right, Up), "+++")]
    #[case(Frame::new(Down, Right, Forward), "+--")]
    #[case(Frame::new(Up, Left, Forward), "-+-")]
    #[case(Frame::new(Right, Up, Back), "--+")]
    #[case(Frame::new(Left, Down, Back), "+++")]
    #[case(Frame::new(Back, Left, Up), "+--")]
    fn rotation_order_signs_cases(#[case] frame: Frame, #[case] expected: &str) {
        assert_eq!(rotation_order_signs(frame).to_string(), expected);
    }

    /// Checks [`rotation_order_signs`] against the procedure of locating Up, then
    /// Right among the remaining axes, then checking the last axis for Forward.
    #[test]
    fn rotation_order_signs_by_search() {
        for frame in Frame::ALL {
            let basis = frame.basis();
            let mut flips = [false; 3];
            let mut remaining = [true; 3];
            let up = (0..3).find(|&i| basis[i].matches(Up)).unwrap();
            remaining[up] = false;
            if basis[up] != Up {
                flips[1] ^= true;
                flips[2] ^= true;
            }
            let right = (0..3).find(|&i| remaining[i] && basis[i].matches(Right)).unwrap();
            remaining[right] = false;
            if basis[right] != Right {
                flips[0] ^= true;
                flips[2] ^= true;
            }
            let last = (0..3).find(|&i| remaining[i]).unwrap();
            if basis[last] != Forward {
                flips[0] ^= true;
                flips[1] ^= true;
            }

            let case = rotation_order_signs(frame);
            assert_eq!(
                [case.flips_yaw(), case.flips_pitch(), case.flips_roll()],
                flips,
                "{frame}"
            );
        }
    }

    #[test]
    fn array_conversion() {
        let angles = EulerAngles::from([1, 2, 3]);
        assert_eq!(angles, EulerAngles { yaw: 1, pitch: 2, roll: 3 });
        assert_eq!(<[i32; 3]>::from(angles), [1, 2, 3]);
    }
}
