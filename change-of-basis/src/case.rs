//! Classification of a pair of frames into one of 48 signed permutations, and
//! application of that permutation to matrices, vectors, and quaternions.
//! This module is private but reexported by its parent.

use core::fmt;
use core::ops::{Mul, Neg};

use euclid::{Rotation3D, Vector3D};
use num_traits::{One, Zero};

use crate::{AxisDirection, Frame, Matrix3, Permutation};

/// Identifies one of the 48 *signed permutation matrices*: the changes of basis which
/// can occur between two [`Frame`]s.
///
/// A case number is computed once from a pair of frames with
/// [`CaseNumber::from_frames()`] and can then be applied any number of times, to any
/// of several representations of geometric quantities. Applying it never performs
/// any arithmetic other than negation, so it introduces no rounding error.
///
/// The matrix `P` which a case number stands for factors as a [`Permutation`] applied
/// after negating some of the input components. Its numeric value is
/// `permutation.index() * 8 + sign_mask`, where bit 2 of the sign mask negates input
/// component X, bit 1 negates Y, and bit 0 negates Z.
///
/// ```
/// use change_of_basis::{AxisDirection::*, CaseNumber, Frame, Permutation};
///
/// let kinect = Frame::new(Right, Up, Back);
/// let case = CaseNumber::from_frames(kinect, Frame::OPENGL);
///
/// assert_eq!(case.index(), 5);
/// assert_eq!(case.permutation(), Permutation::Xyz);
/// assert_eq!(case.transform_components([1.0, 2.0, 3.0]), [-1.0, 2.0, -3.0]);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CaseNumber(u8);

impl CaseNumber {
    /// The change of basis which changes nothing; the case number of any frame to
    /// itself.
    pub const IDENTITY: Self = Self(0);

    /// All 48 case numbers, in numeric order.
    pub const ALL: [Self; 48] = {
        let mut all = [Self::IDENTITY; 48];
        let mut i = 0;
        while i < 48 {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Returns the case number with the given numeric value, or [`None`] if it is not
    /// less than 48.
    #[inline]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 48 { Some(Self(index)) } else { None }
    }

    /// Constructs a case number from its permutation and its sign mask.
    ///
    /// Returns [`None`] if `sign_mask` is not less than 8.
    #[inline]
    pub const fn from_parts(permutation: Permutation, sign_mask: u8) -> Option<Self> {
        if sign_mask < 8 {
            Some(Self(permutation.index() * 8 + sign_mask))
        } else {
            None
        }
    }

    /// Returns the numeric value of this case number, in `0..48`.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the permutation part of this change of basis.
    #[inline]
    pub const fn permutation(self) -> Permutation {
        match Permutation::from_index(self.0 >> 3) {
            Some(p) => p,
            None => unreachable!(),
        }
    }

    /// Returns which input components this change of basis negates, as a 3-bit mask
    /// (bit 2 for X, bit 1 for Y, bit 0 for Z).
    #[inline]
    pub const fn sign_mask(self) -> u8 {
        self.0 & 0b111
    }

    /// Whether input component `component` (0, 1, or 2) is negated.
    #[inline(always)]
    const fn negates(self, component: usize) -> bool {
        self.0 & (0b100 >> component) != 0
    }

    /// Computes the case number which converts quantities expressed in the `from` frame
    /// to the `to` frame.
    ///
    /// ```
    /// use change_of_basis::{AxisDirection::*, CaseNumber, Frame, Matrix3};
    ///
    /// let case = CaseNumber::from_frames(Frame::new(Right, Forward, Up), Frame::UNREAL_3);
    /// assert_eq!(case.index(), 16);
    /// assert_eq!(
    ///     case.to_matrix::<i8>().to_rows(),
    ///     [[0, 1, 0], [1, 0, 0], [0, 0, 1]],
    /// );
    /// ```
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn from_frames(from: Frame, to: Frame) -> Self {
        let from_basis = from.basis();
        let to_basis = to.basis();

        // Each axis of `to` takes its value from the axis of `from` on the same physical
        // axis; the frames are well-formed, so there is exactly one.
        let source = to_basis.map(|d| from.slot_of(d.axis()));
        let Some(permutation) = Permutation::from_source(source) else {
            unreachable!("frames {from} and {to} do not share all three axes")
        };

        let mut sign_mask = 0;
        for (k, d) in from_basis.into_iter().enumerate() {
            if to.direction_on(d.axis()) != d {
                sign_mask |= 0b100 >> k;
            }
        }

        let case = Self(permutation.index() * 8 + sign_mask);
        log::trace!("case number from {from} to {to} is {case}");
        case
    }

    /// Returns the frame obtained by applying this change of basis to `from`; that is,
    /// if `self == CaseNumber::from_frames(from, to)`, returns `to`.
    ///
    /// ```
    /// use change_of_basis::{CaseNumber, Frame};
    ///
    /// let case = CaseNumber::from_frames(Frame::BVH_BLENDER, Frame::ROS);
    /// assert_eq!(case.transform_frame(Frame::BVH_BLENDER), Frame::ROS);
    /// ```
    #[inline]
    #[must_use]
    pub fn transform_frame(self, from: Frame) -> Frame {
        let [x, y, z] = self.transform_components_with(from.basis(), AxisDirection::opposite);
        // A signed permutation of a well-formed frame is always well-formed.
        Frame::new(x, y, z)
    }

    /// Returns the basis-change matrix `P` which this case number stands for.
    ///
    /// Every element is −1, 0, or 1. Row `i` has its nonzero element in the column of the
    /// input component that output component `i` is taken from.
    ///
    /// This is not needed to perform changes of basis; it is for display and checking.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn to_matrix<T>(self) -> Matrix3<T>
    where
        T: Copy + Zero + One + Neg<Output = T>,
    {
        let mut rows = [[T::zero(); 3]; 3];
        for (row, k) in rows.iter_mut().zip(self.permutation().source()) {
            row[k] = signed(self.negates(k), T::one());
        }
        Matrix3::from_rows(rows)
    }

    /// Transforms a matrix expressed in the `from` frame into the equivalent matrix
    /// in the `to` frame: computes `P · matrix · Pᵀ`, exactly, by rearranging and
    /// negating elements of `matrix`.
    ///
    /// ```
    /// use change_of_basis::{AxisDirection::*, CaseNumber, Frame, Matrix3};
    ///
    /// let case = CaseNumber::from_frames(Frame::new(Right, Forward, Up), Frame::UNREAL_3);
    /// let m = Matrix3::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// assert_eq!(case.transform_matrix(m).to_rows(), [[5, 4, 6], [2, 1, 3], [8, 7, 9]]);
    /// ```
    #[inline]
    pub fn transform_matrix<T>(self, matrix: Matrix3<T>) -> Matrix3<T>
    where
        T: Copy + Neg<Output = T>,
    {
        let source = self.permutation().source();
        let columns = matrix.into_columns();
        // Element (i, j) of the result is element (source[i], source[j]) of the input,
        // negated if exactly one of those input components is negated.
        let column = |j: usize| {
            let sj = source[j];
            source.map(|si| signed(self.negates(si) != self.negates(sj), columns[sj][si]))
        };
        Matrix3::from_columns(column(0), column(1), column(2))
    }

    /// Transforms the three components of a vector: computes `P · v`.
    #[inline]
    pub fn transform_components<T>(self, v: [T; 3]) -> [T; 3]
    where
        T: Copy + Neg<Output = T>,
    {
        self.transform_components_with(v, |c| -c)
    }

    /// Transforms a vector expressed in the `from` frame into the `to` frame: computes
    /// `P · v`.
    #[inline]
    pub fn transform_vector<T, U>(self, vector: Vector3D<T, U>) -> Vector3D<T, U>
    where
        T: Copy + Neg<Output = T>,
    {
        let [x, y, z] = self.transform_components(vector.to_array());
        Vector3D::new(x, y, z)
    }

    /// Transforms a rotation quaternion expressed in the `from` frame into the `to`
    /// frame. The result represents the rotation `P · R · Pᵀ`, where `R` is the rotation
    /// the input represents.
    ///
    /// The real (scalar) part is unchanged.
    #[inline]
    pub fn transform_quaternion<T, Src, Dst>(
        self,
        quaternion: Rotation3D<T, Src, Dst>,
    ) -> Rotation3D<T, Src, Dst>
    where
        T: Copy + Neg<Output = T>,
    {
        let [i, j, k] = self.transform_quaternion_xyz([quaternion.i, quaternion.j, quaternion.k]);
        Rotation3D::quaternion(i, j, k, quaternion.r)
    }

    /// Transforms the imaginary (vector) part of a rotation quaternion; see
    /// [`CaseNumber::transform_quaternion()`]. The real part is not needed since it is
    /// unchanged.
    ///
    /// This is the same as [`CaseNumber::transform_components()`] except that when
    /// `P` is a reflection, all components are additionally negated: the axis of
    /// rotation is a pseudovector.
    #[inline]
    pub fn transform_quaternion_xyz<T>(self, xyz: [T; 3]) -> [T; 3]
    where
        T: Copy + Neg<Output = T>,
    {
        let v = self.transform_components(xyz);
        if self.is_reflection() { v.map(|c| -c) } else { v }
    }

    fn transform_components_with<T: Copy>(self, v: [T; 3], negate: impl Fn(T) -> T) -> [T; 3] {
        self.permutation().source().map(|k| {
            if self.negates(k) {
                negate(v[k])
            } else {
                v[k]
            }
        })
    }

    /// Returns whether this change of basis reverses handedness (has determinant −1).
    ///
    /// This is the case exactly when the two frames it was computed from have different
    /// [`Handedness`](crate::Handedness).
    #[inline]
    pub const fn is_reflection(self) -> bool {
        self.permutation().is_odd() != (self.sign_mask().count_ones() % 2 == 1)
    }

    /// Returns the change of basis which undoes this one: if
    /// `self == CaseNumber::from_frames(a, b)`, returns `CaseNumber::from_frames(b, a)`.
    #[allow(clippy::missing_inline_in_public_items)]
    #[must_use]
    pub fn inverse(self) -> Self {
        let permutation = self.permutation();
        let mut sign_mask = 0;
        for (i, k) in permutation.source().into_iter().enumerate() {
            if self.negates(k) {
                sign_mask |= 0b100 >> i;
            }
        }
        Self(permutation.inverse().index() * 8 + sign_mask)
    }
}

#[inline(always)]
fn signed<T: Neg<Output = T>>(negate: bool, value: T) -> T {
    if negate { -value } else { value }
}

impl Default for CaseNumber {
    /// Returns [`CaseNumber::IDENTITY`].
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl One for CaseNumber {
    /// Returns [`CaseNumber::IDENTITY`].
    #[inline]
    fn one() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Self> for CaseNumber {
    type Output = Self;

    /// Multiplication is concatenation: `self * rhs` is equivalent to applying `rhs`
    /// and then applying `self`.
    ///
    /// ```
    /// use change_of_basis::{CaseNumber, Frame};
    ///
    /// let a_to_b = CaseNumber::from_frames(Frame::KINECT, Frame::UNREAL_3);
    /// let b_to_c = CaseNumber::from_frames(Frame::UNREAL_3, Frame::BVH_BLENDER);
    /// assert_eq!(b_to_c * a_to_b, CaseNumber::from_frames(Frame::KINECT, Frame::BVH_BLENDER));
    /// ```
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let second = self.permutation().source();
        let permutation = rhs.permutation().then(self.permutation());
        let mut sign_mask = 0;
        for (j, k) in permutation.source().into_iter().enumerate() {
            if self.negates(second[j]) != rhs.negates(k) {
                sign_mask |= 0b100 >> k;
            }
        }
        Self(permutation.index() * 8 + sign_mask)
    }
}

impl fmt::Display for CaseNumber {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<CaseNumber> for u8 {
    #[inline]
    fn from(value: CaseNumber) -> Self {
        value.0
    }
}

impl TryFrom<u8> for CaseNumber {
    type Error = CaseOutOfRange;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(CaseOutOfRange { value, limit: 48 })
    }
}

#[cfg(feature = "arbitrary")]
#[mutants::skip]
impl<'a> arbitrary::Arbitrary<'a> for CaseNumber {
    #[allow(clippy::missing_inline_in_public_items)]
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(*u.choose(&Self::ALL)?)
    }
}

/// Error when converting an integer to a [`CaseNumber`] or
/// [`EulerCase`](crate::EulerCase) which is out of range.
#[derive(Clone, Copy, Debug, displaydoc::Display, Eq, Hash, PartialEq)]
#[displaydoc("case number {value} is out of range; must be less than {limit}")]
pub struct CaseOutOfRange {
    pub(crate) value: u8,
    pub(crate) limit: u8,
}

impl core::error::Error for CaseOutOfRange {}
