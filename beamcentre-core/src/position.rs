//! Detector positions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical detector banks with independent start positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DetectorBank {
    /// Low-angle (main) detector bank.
    Lab,
    /// High-angle detector bank.
    Hab,
}

/// A position on the two detector axes.
///
/// Either coordinate may be unset, in which case the centre finder picks its
/// own starting point for that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CentrePosition {
    /// Coordinate on the first (horizontal) axis.
    pub pos1: Option<f64>,
    /// Coordinate on the second (vertical) axis.
    pub pos2: Option<f64>,
}

impl CentrePosition {
    /// Creates a fully specified position.
    #[must_use]
    pub fn new(pos1: f64, pos2: f64) -> Self {
        Self {
            pos1: Some(pos1),
            pos2: Some(pos2),
        }
    }

    /// Creates a position with both coordinates unset.
    #[must_use]
    pub fn unset() -> Self {
        Self::default()
    }

    /// Returns true if both coordinates are set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.pos1.is_some() && self.pos2.is_some()
    }

    /// Multiplies each set coordinate by its axis scale.
    #[must_use]
    pub fn scaled(self, scale_1: f64, scale_2: f64) -> Self {
        Self {
            pos1: self.pos1.map(|value| value * scale_1),
            pos2: self.pos2.map(|value| value * scale_2),
        }
    }
}
