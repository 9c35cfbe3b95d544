//! Frames used by commonly encountered programs, file formats, and devices.
//! This module is private but reexported by its parent.

use core::{fmt, str::FromStr};

use crate::AxisDirection::*;
use crate::Frame;

impl Frame {
    /// Unreal Engine 3: X forward, Y right, Z up.
    pub const UNREAL_3: Self = Self::new(Forward, Right, Up);
    /// OpenGL eye space as seen by a character facing +Z: X left, Y up, Z forward.
    pub const OPENGL: Self = Self::new(Left, Up, Forward);
    /// Oculus Rift head tracking: X right, Y up, Z back.
    pub const OCULUS: Self = Self::new(Right, Up, Back);
    /// BVH motion capture files: X left, Y up, Z forward.
    pub const BVH: Self = Self::new(Left, Up, Forward);
    /// BVH motion capture files after import into Blender: X left, Y forward, Z up.
    pub const BVH_BLENDER: Self = Self::new(Left, Forward, Up);
    /// Microsoft Kinect skeleton space: X right, Y up, Z back.
    pub const KINECT: Self = Self::new(Right, Up, Back);
    /// PrioVR motion capture suit: X right, Y up, Z forward.
    pub const PRIOVR: Self = Self::new(Right, Up, Forward);
    /// Unity: X right, Y up, Z forward.
    pub const UNITY: Self = Self::new(Right, Up, Forward);
    /// ROS body frames (REP 103): X forward, Y left, Z up.
    pub const ROS: Self = Self::new(Forward, Left, Up);
}

/// Names for the coordinate frames of commonly encountered programs, file formats,
/// and devices.
///
/// This is a read-only table from names to [`Frame`]s, for use where frames are
/// chosen by configuration or user input:
///
/// ```
/// use change_of_basis::{Convention, Frame};
///
/// let convention: Convention = "bvh-blender".parse().unwrap();
/// assert_eq!(convention.frame(), Frame::BVH_BLENDER);
/// assert_eq!(convention.to_string(), "BVH (Blender)");
/// ```
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Convention {
    /// [`Frame::UNREAL_3`]
    Unreal3,
    /// [`Frame::OPENGL`]
    OpenGl,
    /// [`Frame::OCULUS`]
    Oculus,
    /// [`Frame::BVH`]
    Bvh,
    /// [`Frame::BVH_BLENDER`]
    BvhBlender,
    /// [`Frame::KINECT`]
    Kinect,
    /// [`Frame::PRIOVR`]
    PrioVr,
    /// [`Frame::UNITY`]
    Unity,
    /// [`Frame::ROS`]
    Ros,
}

impl Convention {
    /// All conventions.
    pub const ALL: [Self; 9] = [
        Self::Unreal3,
        Self::OpenGl,
        Self::Oculus,
        Self::Bvh,
        Self::BvhBlender,
        Self::Kinect,
        Self::PrioVr,
        Self::Unity,
        Self::Ros,
    ];

    /// Returns the frame this convention uses.
    #[inline]
    pub const fn frame(self) -> Frame {
        match self {
            Self::Unreal3 => Frame::UNREAL_3,
            Self::OpenGl => Frame::OPENGL,
            Self::Oculus => Frame::OCULUS,
            Self::Bvh => Frame::BVH,
            Self::BvhBlender => Frame::BVH_BLENDER,
            Self::Kinect => Frame::KINECT,
            Self::PrioVr => Frame::PRIOVR,
            Self::Unity => Frame::UNITY,
            Self::Ros => Frame::ROS,
        }
    }

    /// Returns the human-readable name of this convention, which is also its
    /// [`fmt::Display`] form.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unreal3 => "Unreal 3",
            Self::OpenGl => "OpenGL",
            Self::Oculus => "Oculus",
            Self::Bvh => "BVH",
            Self::BvhBlender => "BVH (Blender)",
            Self::Kinect => "Kinect",
            Self::PrioVr => "PrioVR",
            Self::Unity => "Unity",
            Self::Ros => "ROS",
        }
    }
}

impl From<Convention> for Frame {
    #[inline]
    fn from(value: Convention) -> Self {
        value.frame()
    }
}

impl fmt::Display for Convention {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a convention name, ignoring ASCII case, spaces, hyphens, underscores, and
/// parentheses; so `"Unreal 3"`, `"unreal3"`, and `"UNREAL_3"` are all accepted.
impl FromStr for Convention {
    type Err = ParseConventionError;

    #[allow(clippy::missing_inline_in_public_items)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn significant(s: &str) -> impl Iterator<Item = char> + '_ {
            s.chars()
                .filter(|c| !matches!(c, ' ' | '-' | '_' | '(' | ')'))
                .map(|c| c.to_ascii_lowercase())
        }

        Self::ALL
            .into_iter()
            .find(|convention| significant(convention.name()).eq(significant(s)))
            .ok_or(ParseConventionError(()))
    }
}

/// Error from parsing a [`Convention`] from a string that is not one of the known
/// names.
#[derive(Clone, Copy, Debug, displaydoc::Display, Eq, Hash, PartialEq)]
#[displaydoc("not a known coordinate frame convention name")]
pub struct ParseConventionError(());

impl core::error::Error for ParseConventionError {}
