//! The centre-finder capability.
//!
//! The numerical search itself lives outside this workspace. The model only
//! needs something that can take a start position and search settings and
//! hand back a centre, and a factory that produces such a finder per search.

use crate::direction::{FindDirection, SearchMethod};
use crate::position::CentrePosition;
use crate::state::ReductionState;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque error returned by a centre finder.
pub type FinderError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type returned by a centre finder.
pub type FinderResult = std::result::Result<CentrePosition, FinderError>;

/// Arguments of a single centre-finder invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CentreSearchRequest {
    /// Inner radius of the search annulus.
    pub r_min: f64,
    /// Outer radius of the search annulus.
    pub r_max: f64,
    /// Iteration bound for the finder's convergence loop.
    pub max_iterations: u32,
    /// Start position (`x_start`, `y_start`).
    pub start: CentrePosition,
    /// Convergence threshold.
    pub tolerance: f64,
    /// Axes the finder may move along.
    pub find_direction: FindDirection,
    /// Coarse centre-of-mass or refined reduction search.
    pub method: SearchMethod,
    /// Whether the finder should emit its diagnostic output.
    pub verbose: bool,
}

/// Trait for centre-finding kernels.
pub trait CentreFinder {
    /// Searches for the beam centre described by `request`.
    fn find(&mut self, state: &ReductionState, request: &CentreSearchRequest) -> FinderResult;
}

impl<F> CentreFinder for F
where
    F: FnMut(&ReductionState, &CentreSearchRequest) -> FinderResult,
{
    fn find(&mut self, state: &ReductionState, request: &CentreSearchRequest) -> FinderResult {
        self(state, request)
    }
}

/// Produces a fresh centre finder for each search.
pub trait FinderFactory {
    /// Finder type produced by this factory.
    type Finder: CentreFinder;

    /// Creates a finder.
    fn create(&self) -> Self::Finder;
}

impl<F, C> FinderFactory for F
where
    F: Fn() -> C,
    C: CentreFinder,
{
    type Finder = C;

    fn create(&self) -> C {
        self()
    }
}
