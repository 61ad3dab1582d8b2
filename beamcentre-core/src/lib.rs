//! beamcentre-core: Core types for SANS beam centre searches.
//!
//! This crate provides the shared vocabulary between the beam centre model
//! and the external centre-finding kernel: instruments and their default
//! overrides, search directions, detector positions, the reduction state
//! handed to the kernel, and the `CentreFinder` capability itself.
//!

pub mod direction;
pub mod error;
pub mod finder;
pub mod instrument;
pub mod position;
pub mod state;

pub use direction::{FindDirection, SearchMethod};
pub use error::{Error, Result};
pub use finder::{CentreFinder, CentreSearchRequest, FinderError, FinderFactory, FinderResult};
pub use instrument::{Instrument, InstrumentOverrides};
pub use position::{CentrePosition, DetectorBank};
pub use state::{ConvertToQState, ReductionState};
