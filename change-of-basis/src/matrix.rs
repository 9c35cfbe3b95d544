//! This module is private but reexported by its parent.

use core::ops;

use num_traits::{One, Zero};

/// A 3×3 matrix, stored as columns.
///
/// Each column is the image of the corresponding basis vector: when the matrix is
/// applied to a column vector `v`, the result is `v[0] * x + v[1] * y + v[2] * z`.
/// This is the layout expected by [`CaseNumber::transform_matrix()`](crate::CaseNumber::transform_matrix).
///
/// This type exists only to carry values in and out of change-of-basis operations; it
/// performs no arithmetic beyond what those need. Use a math library for anything
/// else (with the `nalgebra` feature, this type converts to and from
/// [`nalgebra::Matrix3`]).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::exhaustive_structs)]
pub struct Matrix3<T> {
    /// First column: the image of the X basis vector.
    pub x: [T; 3],
    /// Second column: the image of the Y basis vector.
    pub y: [T; 3],
    /// Third column: the image of the Z basis vector.
    pub z: [T; 3],
}

impl<T> Matrix3<T> {
    /// Constructs a matrix from its three columns.
    #[inline]
    pub const fn from_columns(x: [T; 3], y: [T; 3], z: [T; 3]) -> Self {
        Self { x, y, z }
    }

    /// Returns the three columns of this matrix.
    #[inline]
    pub fn into_columns(self) -> [[T; 3]; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns a matrix of the same shape with `f` applied to every element.
    #[inline]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Matrix3<U> {
        Matrix3 {
            x: self.x.map(&mut f),
            y: self.y.map(&mut f),
            z: self.z.map(&mut f),
        }
    }
}

impl<T: Copy> Matrix3<T> {
    /// Constructs a matrix from its rows, in the order they would be written on paper.
    ///
    /// ```
    /// use change_of_basis::Matrix3;
    ///
    /// let m = Matrix3::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    /// assert_eq!(m.x, [1, 4, 7]);
    /// assert_eq!(m.entry(0, 2), 3);
    /// ```
    #[inline]
    pub fn from_rows(rows: [[T; 3]; 3]) -> Self {
        let [r0, r1, r2] = rows;
        Self {
            x: [r0[0], r1[0], r2[0]],
            y: [r0[1], r1[1], r2[1]],
            z: [r0[2], r1[2], r2[2]],
        }
    }

    /// Returns the rows of this matrix; inverse of [`Matrix3::from_rows()`].
    #[inline]
    pub fn to_rows(self) -> [[T; 3]; 3] {
        [self.row(0), self.row(1), self.row(2)]
    }

    /// Returns the given row, counting from 0.
    ///
    /// Panics if `row >= 3`.
    #[inline]
    #[track_caller]
    pub fn row(self, row: usize) -> [T; 3] {
        [self.x[row], self.y[row], self.z[row]]
    }

    /// Returns the element at the given row and column, counting from 0.
    ///
    /// Panics if either index is out of range.
    #[inline]
    #[track_caller]
    pub fn entry(self, row: usize, column: usize) -> T {
        self[column][row]
    }

    /// Swaps rows and columns.
    #[inline]
    #[must_use]
    pub fn transpose(self) -> Self {
        let [x, y, z] = self.to_rows();
        Self { x, y, z }
    }
}

impl<T: Zero + One> Matrix3<T> {
    /// Returns the identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self {
            x: [T::one(), T::zero(), T::zero()],
            y: [T::zero(), T::one(), T::zero()],
            z: [T::zero(), T::zero(), T::one()],
        }
    }
}

/// Indexes columns.
impl<T> ops::Index<usize> for Matrix3<T> {
    type Output = [T; 3];

    #[inline]
    #[track_caller]
    fn index(&self, column: usize) -> &[T; 3] {
        match column {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Matrix3 column index {column} out of range"),
        }
    }
}

impl<T> From<Matrix3<T>> for [[T; 3]; 3] {
    /// Returns the columns.
    #[inline]
    fn from(value: Matrix3<T>) -> Self {
        value.into_columns()
    }
}

#[cfg(feature = "nalgebra")]
mod impl_nalgebra {
    use super::Matrix3;

    impl<T: nalgebra::Scalar + Copy> From<Matrix3<T>> for nalgebra::Matrix3<T> {
        #[inline]
        fn from(value: Matrix3<T>) -> Self {
            let Matrix3 { x, y, z } = value;
            #[rustfmt::skip]
            let m = nalgebra::Matrix3::new(
                x[0], y[0], z[0],
                x[1], y[1], z[1],
                x[2], y[2], z[2],
            );
            m
        }
    }

    impl<T: nalgebra::Scalar + Copy> From<nalgebra::Matrix3<T>> for Matrix3<T> {
        #[inline]
        fn from(value: nalgebra::Matrix3<T>) -> Self {
            let column = |c: usize| [value[(0, c)], value[(1, c)], value[(2, c)]];
            Matrix3::from_columns(column(0), column(1), column(2))
        }
    }
}
