use core::fmt;

use crate::AxisDirection;

/// Enumeration of the three physical axes, without regard to direction along them.
///
/// This is what an [`AxisDirection`] is "modulo sign": [`AxisDirection::Forward`] and
/// [`AxisDirection::Back`] both lie on [`Axis::Longitudinal`], and so on.
/// The discriminant of each axis equals the discriminant of its positive direction.
///
/// Can be used to infallibly index 3-component arrays.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Axis {
    /// The forward/back axis.
    Longitudinal = 0,
    /// The right/left axis.
    Lateral = 1,
    /// The up/down axis.
    Vertical = 2,
}

impl Axis {
    /// All three axes in the standard order.
    pub const ALL: [Self; 3] = [Self::Longitudinal, Self::Lateral, Self::Vertical];

    /// Returns the direction which is the positive direction along this axis
    /// ([`Forward`](AxisDirection::Forward), [`Right`](AxisDirection::Right), or
    /// [`Up`](AxisDirection::Up)).
    #[inline]
    pub const fn positive_direction(self) -> AxisDirection {
        match self {
            Axis::Longitudinal => AxisDirection::Forward,
            Axis::Lateral => AxisDirection::Right,
            Axis::Vertical => AxisDirection::Up,
        }
    }

    /// Returns the direction which is the negative direction along this axis
    /// ([`Back`](AxisDirection::Back), [`Left`](AxisDirection::Left), or
    /// [`Down`](AxisDirection::Down)).
    #[inline]
    pub const fn negative_direction(self) -> AxisDirection {
        match self {
            Axis::Longitudinal => AxisDirection::Back,
            Axis::Lateral => AxisDirection::Left,
            Axis::Vertical => AxisDirection::Down,
        }
    }

    /// Convert the axis to a number for indexing 3-element arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Axis {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Longitudinal => "forward/back",
            Axis::Lateral => "right/left",
            Axis::Vertical => "up/down",
        })
    }
}

impl From<Axis> for u8 {
    #[inline]
    fn from(value: Axis) -> Self {
        value as u8
    }
}
impl From<Axis> for usize {
    #[inline]
    fn from(value: Axis) -> Self {
        value as usize
    }
}

mod impl_index_axis {
    use super::Axis;
    use core::ops;

    impl<T> ops::Index<Axis> for [T; 3] {
        type Output = T;

        #[inline]
        fn index(&self, index: Axis) -> &Self::Output {
            &self[index as usize]
        }
    }
    impl<T> ops::IndexMut<Axis> for [T; 3] {
        #[inline]
        fn index_mut(&mut self, index: Axis) -> &mut Self::Output {
            &mut self[index as usize]
        }
    }
}
