// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Skeleton model: named joints and the fixed bone topology connecting them.
//!
//! The joint set is a closed enum, so lookups cannot fail and no joint can be
//! added or removed after initialization. Only positions mutate.

use std::fmt;

/// Joint identifiers for the stick figure.
///
/// The variant order is the scan order used by [`Skeleton::hit_test`]: the
/// first joint within the hit radius wins, not the nearest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointName {
    /// Top of the figure, drawn with the large head disc.
    Head,
    /// Junction between head, shoulders, and chest.
    Neck,
    /// Left shoulder.
    LeftShoulder,
    /// Right shoulder.
    RightShoulder,
    /// Left elbow (end of the left arm).
    LeftElbow,
    /// Right elbow (end of the right arm).
    RightElbow,
    /// Midpoint of the torso.
    Chest,
    /// Bottom of the torso.
    Waist,
    /// Left knee.
    LeftKnee,
    /// Right knee.
    RightKnee,
    /// Left foot.
    LeftFoot,
    /// Right foot.
    RightFoot,
}

impl JointName {
    /// All joints in scan order.
    pub const ALL: [JointName; 12] = [
        Self::Head,
        Self::Neck,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::Chest,
        Self::Waist,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftFoot,
        Self::RightFoot,
    ];

    /// Returns the string representation of the joint.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Neck => "neck",
            Self::LeftShoulder => "leftShoulder",
            Self::RightShoulder => "rightShoulder",
            Self::LeftElbow => "leftElbow",
            Self::RightElbow => "rightElbow",
            Self::Chest => "chest",
            Self::Waist => "waist",
            Self::LeftKnee => "leftKnee",
            Self::RightKnee => "rightKnee",
            Self::LeftFoot => "leftFoot",
            Self::RightFoot => "rightFoot",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for JointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bone topology: ordered joint pairs, constant for the lifetime of the program.
pub const BONES: [(JointName, JointName); 11] = [
    (JointName::Head, JointName::Neck),
    (JointName::Neck, JointName::LeftShoulder),
    (JointName::Neck, JointName::RightShoulder),
    (JointName::LeftShoulder, JointName::LeftElbow),
    (JointName::RightShoulder, JointName::RightElbow),
    (JointName::Neck, JointName::Chest),
    (JointName::Chest, JointName::Waist),
    (JointName::Waist, JointName::LeftKnee),
    (JointName::Waist, JointName::RightKnee),
    (JointName::LeftKnee, JointName::LeftFoot),
    (JointName::RightKnee, JointName::RightFoot),
];

/// Default joint positions for a 300x420 surface, indexed by [`JointName::ALL`] order.
const DEFAULT_POSITIONS: [(f32, f32); 12] = [
    (150.0, 40.0),  // head
    (150.0, 80.0),  // neck
    (110.0, 120.0), // leftShoulder
    (190.0, 120.0), // rightShoulder
    (80.0, 180.0),  // leftElbow
    (210.0, 180.0), // rightElbow
    (150.0, 180.0), // chest
    (150.0, 240.0), // waist
    (110.0, 320.0), // leftKnee
    (190.0, 320.0), // rightKnee
    (110.0, 380.0), // leftFoot
    (190.0, 380.0), // rightFoot
];

/// The stick figure: a fixed set of joints with mutable positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    positions: [(f32, f32); 12],
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::new()
    }
}

impl Skeleton {
    /// Create a skeleton in the default pose.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: DEFAULT_POSITIONS,
        }
    }

    /// Current position of a joint.
    #[must_use]
    pub const fn position(&self, name: JointName) -> (f32, f32) {
        self.positions[name.index()]
    }

    /// Overwrite a joint's position.
    ///
    /// Coordinates are not validated: any finite value is accepted, including
    /// positions outside the drawing surface.
    pub const fn set_position(&mut self, name: JointName, x: f32, y: f32) {
        self.positions[name.index()] = (x, y);
    }

    /// Iterate over all joints and their positions in scan order.
    pub fn joints(&self) -> impl Iterator<Item = (JointName, (f32, f32))> + '_ {
        JointName::ALL.into_iter().map(|name| (name, self.position(name)))
    }

    /// Iterate over the endpoint positions of every bone.
    pub fn bones(&self) -> impl Iterator<Item = ((f32, f32), (f32, f32))> + '_ {
        BONES
            .into_iter()
            .map(|(a, b)| (self.position(a), self.position(b)))
    }

    /// Find the joint under the pointer, if any.
    ///
    /// Scans joints in [`JointName::ALL`] order and returns the first one whose
    /// center lies within `radius` (Euclidean distance) of the point. The
    /// first-match tie-break is intentional and matches the original behavior
    /// for overlapping joints.
    #[must_use]
    pub fn hit_test(&self, x: f32, y: f32, radius: f32) -> Option<JointName> {
        JointName::ALL.into_iter().find(|&name| {
            let (jx, jy) = self.position(name);
            (x - jx).hypot(y - jy) <= radius
        })
    }
}
