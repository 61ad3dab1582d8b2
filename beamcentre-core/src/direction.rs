//! Search direction and method selection.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axes the centre finder is allowed to move along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FindDirection {
    /// Search both detector axes.
    All,
    /// Search the vertical axis only.
    UpDown,
    /// Search the horizontal axis only.
    LeftRight,
}

impl FindDirection {
    /// Resolves the search mode from the two axis flags.
    ///
    /// Returns `None` when neither axis is selected, in which case no search
    /// should be run at all.
    #[must_use]
    pub fn resolve(up_down: bool, left_right: bool) -> Option<Self> {
        match (up_down, left_right) {
            (true, true) => Some(FindDirection::All),
            (true, false) => Some(FindDirection::UpDown),
            (false, true) => Some(FindDirection::LeftRight),
            (false, false) => None,
        }
    }
}

/// Algorithm the centre finder should run for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchMethod {
    /// Coarse centre-of-mass estimate.
    CentreOfMass,
    /// Refined iterative search driven by repeated reductions.
    Reduction,
}

impl SearchMethod {
    /// Value of the finder's `reduction_method` flag.
    #[inline]
    #[must_use]
    pub fn uses_reduction(self) -> bool {
        matches!(self, SearchMethod::Reduction)
    }
}
