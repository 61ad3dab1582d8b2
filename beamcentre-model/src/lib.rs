//! beamcentre-model: Beam centre search model for SANS reduction.
//!
//! [`BeamCentreModel`] holds the search configuration a reduction front end
//! edits (radii, tolerance, axis flags, start positions, scaling, q range)
//! and runs one or two passes of an injected centre finder:
//! - **Single pass** - refined reduction search from the configured start
//! - **COM + refinement** - coarse centre-of-mass pass seeding the refined search
//!
#![warn(missing_docs)]

mod error;
mod model;
mod settings;

pub use error::{Error, Result, SearchPass};
pub use model::{BeamCentreModel, LOG_TARGET};
pub use settings::CentreSearchSettings;

// Re-export the core vocabulary used by the model's API
pub use beamcentre_core::{
    CentreFinder, CentrePosition, CentreSearchRequest, ConvertToQState, DetectorBank,
    FindDirection, FinderError, FinderFactory, FinderResult, Instrument, ReductionState,
    SearchMethod,
};
