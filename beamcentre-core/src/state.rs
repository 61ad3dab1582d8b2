//! Reduction state handed to the centre finder.

use crate::instrument::Instrument;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Momentum-transfer conversion settings of a reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConvertToQState {
    /// Lower q bound (1/Angstrom).
    pub q_min: f64,
    /// Upper q bound (1/Angstrom).
    pub q_max: f64,
}

impl Default for ConvertToQState {
    fn default() -> Self {
        Self {
            q_min: 0.001,
            q_max: 0.2,
        }
    }
}

/// Reduction state owned by the caller.
///
/// The beam centre model only writes the q bounds; everything else is read
/// by the centre finder.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReductionState {
    /// Instrument the state was built for.
    pub instrument: Option<Instrument>,
    /// Conversion-to-q settings.
    pub convert_to_q: ConvertToQState,
}

impl ReductionState {
    /// Creates a state for the given instrument with default q settings.
    #[must_use]
    pub fn new(instrument: Option<Instrument>) -> Self {
        Self {
            instrument,
            convert_to_q: ConvertToQState::default(),
        }
    }
}
