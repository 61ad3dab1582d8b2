//! Model error types.

use std::fmt;

use beamcentre_core::{CentreSearchRequest, FinderError};
use thiserror::Error;

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which centre-finder invocation of a search was running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPass {
    /// Centre-of-mass pass seeding the refinement.
    CentreOfMass,
    /// Refined pass following a centre-of-mass pass.
    Refinement,
    /// The only pass of a search without centre-of-mass seeding.
    Single,
}

impl fmt::Display for SearchPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchPass::CentreOfMass => "centre-of-mass",
            SearchPass::Refinement => "refinement",
            SearchPass::Single => "single",
        })
    }
}

/// Model error types.
#[derive(Error, Debug)]
pub enum Error {
    /// The external centre finder failed. The request it was given is kept
    /// alongside its error.
    #[error(
        "centre finder failed in {pass} pass (start {:?}, direction {:?}): {source}",
        .request.start,
        .request.find_direction
    )]
    CentreFinder {
        /// Pass that failed.
        pass: SearchPass,
        /// Arguments of the failing invocation.
        request: Box<CentreSearchRequest>,
        /// Error reported by the finder.
        #[source]
        source: FinderError,
    },
}
