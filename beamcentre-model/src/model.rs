//! The beam centre model.

use std::fmt;

use beamcentre_core::{
    CentreFinder, CentrePosition, CentreSearchRequest, DetectorBank, FindDirection, FinderFactory,
    Instrument, ReductionState, SearchMethod,
};
use log::{debug, info};

use crate::error::{Error, Result, SearchPass};
use crate::settings::CentreSearchSettings;

/// Log target used for the model's records.
pub const LOG_TARGET: &str = "CentreFinder";

/// Search configuration plus the factory for the external centre finder.
///
/// One model belongs to one reduction session. Two models compare equal when
/// their settings are equal; the factory is not compared.
pub struct BeamCentreModel<F> {
    settings: CentreSearchSettings,
    finder_factory: F,
}

impl<F> BeamCentreModel<F> {
    /// Creates a model with the generic defaults.
    pub fn new(finder_factory: F) -> Self {
        Self::for_instrument(finder_factory, None)
    }

    /// Creates a model with the defaults of the given instrument.
    pub fn for_instrument(finder_factory: F, instrument: Option<Instrument>) -> Self {
        Self {
            settings: CentreSearchSettings::for_instrument(instrument),
            finder_factory,
        }
    }

    /// Current settings.
    pub fn settings(&self) -> &CentreSearchSettings {
        &self.settings
    }

    /// Mutable access for the controlling front end.
    pub fn settings_mut(&mut self) -> &mut CentreSearchSettings {
        &mut self.settings
    }

    /// Replaces all settings.
    pub fn set_settings(&mut self, settings: CentreSearchSettings) {
        self.settings = settings;
    }

    /// The injected finder factory.
    pub fn finder_factory(&self) -> &F {
        &self.finder_factory
    }

    /// Resets every setting to the defaults of the given instrument.
    ///
    /// Unspecified instruments, and instruments without a profile, get the
    /// generic defaults.
    pub fn reset_to_defaults_for_instrument(&mut self, instrument: Option<Instrument>) {
        self.settings.reset_to_defaults_for_instrument(instrument);
    }

    /// Resets only the axis scales for the given instrument.
    pub fn set_scaling(&mut self, instrument: Option<Instrument>) {
        self.settings.set_scaling(instrument);
    }

    /// Search mode derived from the axis flags.
    pub fn find_direction(&self) -> Option<FindDirection> {
        self.settings.find_direction()
    }

    /// Configured start position of a detector bank.
    pub fn start_position(&self, bank: DetectorBank) -> CentrePosition {
        self.settings.start_position(bank)
    }

    /// Converts a found centre to display units.
    pub fn to_display_units(&self, position: CentrePosition) -> CentrePosition {
        self.settings.to_display_units(position)
    }
}

impl<F: FinderFactory> BeamCentreModel<F> {
    /// Runs the beam centre search.
    ///
    /// The configured q range is written into `state` before the finder runs.
    /// With no search axis selected the LAB start position is returned as-is
    /// and no finder is created.
    ///
    /// # Errors
    /// Returns [`Error::CentreFinder`] if a finder invocation fails. The
    /// remaining passes are not run.
    pub fn find_beam_centre(&self, state: &mut ReductionState) -> Result<CentrePosition> {
        let settings = &self.settings;
        let lab_start = settings.start_position(DetectorBank::Lab);

        let Some(find_direction) = settings.find_direction() else {
            info!(target: LOG_TARGET, "Have chosen no find direction exiting early");
            return Ok(lab_start);
        };

        settings.apply_q_bounds(&mut state.convert_to_q);

        let mut finder = self.finder_factory.create();
        if settings.com {
            let coarse = run_pass(
                &mut finder,
                state,
                SearchPass::CentreOfMass,
                settings.request(
                    lab_start,
                    find_direction,
                    SearchMethod::CentreOfMass,
                    false,
                ),
            )?;
            run_pass(
                &mut finder,
                state,
                SearchPass::Refinement,
                settings.request(
                    coarse,
                    find_direction,
                    SearchMethod::Reduction,
                    settings.verbose,
                ),
            )
        } else {
            run_pass(
                &mut finder,
                state,
                SearchPass::Single,
                settings.request(
                    lab_start,
                    find_direction,
                    SearchMethod::Reduction,
                    settings.verbose,
                ),
            )
        }
    }
}

fn run_pass<C: CentreFinder>(
    finder: &mut C,
    state: &ReductionState,
    pass: SearchPass,
    request: CentreSearchRequest,
) -> Result<CentrePosition> {
    debug!(
        target: LOG_TARGET,
        "{pass} pass: start {:?}, direction {:?}",
        request.start,
        request.find_direction
    );
    let centre = finder
        .find(state, &request)
        .map_err(|source| Error::CentreFinder {
            pass,
            request: Box::new(request),
            source,
        })?;
    debug!(target: LOG_TARGET, "{pass} pass: centre {centre:?}");
    Ok(centre)
}

impl<F> PartialEq for BeamCentreModel<F> {
    fn eq(&self, other: &Self) -> bool {
        self.settings == other.settings
    }
}

impl<F> fmt::Debug for BeamCentreModel<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeamCentreModel")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
