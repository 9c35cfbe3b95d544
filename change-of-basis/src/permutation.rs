//! The six permutations of three axes.
//! This module is private but reexported by its parent.

/// One of the six ways to permute three components.
///
/// Each variant is named by where its output components come from: applying
/// [`Permutation::Zxy`] to `[x, y, z]` produces `[z, x, y]`.
///
/// The discriminants are the permutation indices which make up the high part of a
/// [`CaseNumber`](crate::CaseNumber).
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Permutation {
    /// No change.
    Xyz = 0,
    /// Swaps Y and Z.
    Xzy = 1,
    /// Swaps X and Y.
    Yxz = 2,
    /// Rotates components one position towards the end.
    Zxy = 3,
    /// Rotates components one position towards the start.
    Yzx = 4,
    /// Swaps X and Z.
    Zyx = 5,
}

impl Permutation {
    /// All six permutations, in the order of their indices.
    pub const ALL: [Self; 6] = [
        Self::Xyz,
        Self::Xzy,
        Self::Yxz,
        Self::Zxy,
        Self::Yzx,
        Self::Zyx,
    ];

    /// The permutation which changes nothing.
    pub const IDENTITY: Self = Self::Xyz;

    /// Inverse function of `permutation as u8`, converting the number to [`Permutation`].
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Xyz),
            1 => Some(Self::Xzy),
            2 => Some(Self::Yxz),
            3 => Some(Self::Zxy),
            4 => Some(Self::Yzx),
            5 => Some(Self::Zyx),
            _ => None,
        }
    }

    /// Returns the index of this permutation, in `0..6`.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns, for each output component, the index of the input component it is
    /// taken from.
    ///
    /// ```
    /// use change_of_basis::Permutation;
    ///
    /// assert_eq!(Permutation::Zxy.source(), [2, 0, 1]);
    /// ```
    #[inline]
    pub const fn source(self) -> [usize; 3] {
        match self {
            Self::Xyz => [0, 1, 2],
            Self::Xzy => [0, 2, 1],
            Self::Yxz => [1, 0, 2],
            Self::Zxy => [2, 0, 1],
            Self::Yzx => [1, 2, 0],
            Self::Zyx => [2, 1, 0],
        }
    }

    /// Inverse of [`Permutation::source()`].
    ///
    /// Returns [`None`] if `source` is not a permutation of `[0, 1, 2]`.
    #[inline]
    pub const fn from_source(source: [usize; 3]) -> Option<Self> {
        match source {
            [0, 1, 2] => Some(Self::Xyz),
            [0, 2, 1] => Some(Self::Xzy),
            [1, 0, 2] => Some(Self::Yxz),
            [2, 0, 1] => Some(Self::Zxy),
            [1, 2, 0] => Some(Self::Yzx),
            [2, 1, 0] => Some(Self::Zyx),
            _ => None,
        }
    }

    /// Returns whether this permutation is odd, i.e. is a single swap of two
    /// components. Odd permutations of a coordinate frame reverse its handedness.
    #[inline]
    pub const fn is_odd(self) -> bool {
        matches!(self, Self::Xzy | Self::Yxz | Self::Zyx)
    }

    /// Returns the permutation which undoes this one.
    #[inline]
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Zxy => Self::Yzx,
            Self::Yzx => Self::Zxy,
            // All the others are their own inverses.
            other => other,
        }
    }

    /// Applies this permutation to three values.
    ///
    /// ```
    /// use change_of_basis::Permutation;
    ///
    /// assert_eq!(Permutation::Zxy.apply(['x', 'y', 'z']), ['z', 'x', 'y']);
    /// ```
    #[inline]
    pub fn apply<T: Copy>(self, values: [T; 3]) -> [T; 3] {
        self.source().map(|i| values[i])
    }

    /// Returns the permutation equivalent to applying `self` and then `next`.
    #[inline]
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        let first = self.source();
        match Self::from_source(next.source().map(|i| first[i])) {
            Some(p) => p,
            None => unreachable!("composition of permutations is a permutation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exhaust::Exhaust as _;
    use pretty_assertions::assert_eq;
    use std::vec::Vec;

    #[test]
    fn all_is_exhaustive() {
        assert_eq!(
            Permutation::exhaust().collect::<Vec<_>>(),
            Permutation::ALL.to_vec()
        );
        for (i, p) in Permutation::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(p.index()), i);
            assert_eq!(Permutation::from_index(p.index()), Some(p));
        }
        assert_eq!(Permutation::from_index(6), None);
    }

    #[test]
    fn source_round_trip() {
        for p in Permutation::ALL {
            let mut sorted = p.source();
            sorted.sort_unstable();
            assert_eq!(sorted, [0, 1, 2], "{p:?}");
            assert_eq!(Permutation::from_source(p.source()), Some(p));
        }
        assert_eq!(Permutation::from_source([0, 0, 1]), None);
    }

    /// Parity computed by counting inversions.
    #[test]
    fn parity() {
        for p in Permutation::ALL {
            let s = p.source();
            let inversions = (0..3)
                .flat_map(|i| (i + 1..3).map(move |j| (i, j)))
                .filter(|&(i, j)| s[i] > s[j])
                .count();
            assert_eq!(p.is_odd(), inversions % 2 == 1, "{p:?}");
        }
    }

    #[test]
    fn inverse_and_then() {
        for p in Permutation::ALL {
            assert_eq!(p.then(p.inverse()), Permutation::IDENTITY, "{p:?}");
            assert_eq!(p.inverse().then(p), Permutation::IDENTITY, "{p:?}");
            assert_eq!(p.inverse().apply(p.apply([1, 2, 3])), [1, 2, 3]);
            for q in Permutation::ALL {
                assert_eq!(
                    q.apply(p.apply(['x', 'y', 'z'])),
                    p.then(q).apply(['x', 'y', 'z']),
                    "{p:?} then {q:?}"
                );
                assert_eq!(p.then(q).is_odd(), p.is_odd() != q.is_odd());
            }
        }
    }

    #[test]
    fn names_match_behavior() {
        assert_eq!(Permutation::Xzy.apply(['x', 'y', 'z']), ['x', 'z', 'y']);
        assert_eq!(Permutation::Yxz.apply(['x', 'y', 'z']), ['y', 'x', 'z']);
        assert_eq!(Permutation::Yzx.apply(['x', 'y', 'z']), ['y', 'z', 'x']);
        assert_eq!(Permutation::Zyx.apply(['x', 'y', 'z']), ['z', 'y', 'x']);
    }
}
