//! Beam centre search settings and instrument defaults.

use beamcentre_core::{
    CentrePosition, CentreSearchRequest, ConvertToQState, DetectorBank, FindDirection, Instrument,
    InstrumentOverrides, SearchMethod,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration edited by the reduction front end and consumed by a search.
///
/// Start positions use `None` for "unset"; the finder then chooses its own
/// start on that axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CentreSearchSettings {
    /// Iteration bound passed to the finder.
    pub max_iterations: u32,
    /// Inner radius of the search annulus.
    pub r_min: f64,
    /// Outer radius of the search annulus.
    pub r_max: f64,
    /// Search along the horizontal axis.
    pub left_right: bool,
    /// Search along the vertical axis.
    pub up_down: bool,
    /// Convergence threshold passed to the finder.
    pub tolerance: f64,
    /// LAB start position, first axis.
    pub lab_pos_1: Option<f64>,
    /// LAB start position, second axis.
    pub lab_pos_2: Option<f64>,
    /// HAB start position, first axis.
    pub hab_pos_1: Option<f64>,
    /// HAB start position, second axis.
    pub hab_pos_2: Option<f64>,
    /// Display scale of the first axis.
    pub scale_1: f64,
    /// Display scale of the second axis.
    pub scale_2: f64,
    /// Run a centre-of-mass pass before the refined search.
    pub com: bool,
    /// Forward the finder's diagnostic output.
    pub verbose: bool,
    /// Lower q bound written into the reduction state. Zero leaves it alone.
    pub q_min: f64,
    /// Upper q bound written into the reduction state. Zero leaves it alone.
    pub q_max: f64,
}

impl Default for CentreSearchSettings {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            r_min: 60.0,
            r_max: 280.0,
            left_right: true,
            up_down: true,
            tolerance: 0.000_125,
            lab_pos_1: None,
            lab_pos_2: None,
            hab_pos_1: None,
            hab_pos_2: None,
            scale_1: Self::DEFAULT_SCALE,
            scale_2: Self::DEFAULT_SCALE,
            com: false,
            verbose: false,
            q_min: 0.01,
            q_max: 0.1,
        }
    }
}

impl CentreSearchSettings {
    /// Generic per-axis display scale (metres to millimetres).
    pub const DEFAULT_SCALE: f64 = 1000.0;

    /// Creates settings with the generic defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates settings with the defaults of the given instrument.
    #[must_use]
    pub fn for_instrument(instrument: Option<Instrument>) -> Self {
        let mut settings = Self::default();
        settings.apply_overrides(Instrument::overrides_for(instrument));
        settings
    }

    /// Resets every field to the defaults of the given instrument.
    pub fn reset_to_defaults_for_instrument(&mut self, instrument: Option<Instrument>) {
        *self = Self::for_instrument(instrument);
    }

    /// Resets only the axis scales for the given instrument.
    pub fn set_scaling(&mut self, instrument: Option<Instrument>) {
        self.scale_1 = Self::DEFAULT_SCALE;
        self.scale_2 = Self::DEFAULT_SCALE;
        if let Some(scale_1) = Instrument::overrides_for(instrument).scale_1 {
            self.scale_1 = scale_1;
        }
    }

    fn apply_overrides(&mut self, overrides: InstrumentOverrides) {
        if let Some(r_max) = overrides.r_max {
            self.r_max = r_max;
        }
        if let Some(scale_1) = overrides.scale_1 {
            self.scale_1 = scale_1;
        }
    }

    /// Search mode derived from the axis flags, `None` if no axis is selected.
    #[must_use]
    pub fn find_direction(&self) -> Option<FindDirection> {
        FindDirection::resolve(self.up_down, self.left_right)
    }

    /// Configured start position of a detector bank.
    #[must_use]
    pub fn start_position(&self, bank: DetectorBank) -> CentrePosition {
        match bank {
            DetectorBank::Lab => CentrePosition {
                pos1: self.lab_pos_1,
                pos2: self.lab_pos_2,
            },
            DetectorBank::Hab => CentrePosition {
                pos1: self.hab_pos_1,
                pos2: self.hab_pos_2,
            },
        }
    }

    /// Converts a position to display units using the axis scales.
    #[must_use]
    pub fn to_display_units(&self, position: CentrePosition) -> CentrePosition {
        position.scaled(self.scale_1, self.scale_2)
    }

    /// Writes the configured q bounds into a reduction's conversion settings.
    ///
    /// A bound of exactly zero counts as unset and is skipped, so a real lower
    /// bound of 0 cannot be requested through these settings.
    pub fn apply_q_bounds(&self, convert_to_q: &mut ConvertToQState) {
        if self.q_min != 0.0 {
            convert_to_q.q_min = self.q_min;
        }
        if self.q_max != 0.0 {
            convert_to_q.q_max = self.q_max;
        }
    }

    /// Builds the finder arguments for one pass.
    #[must_use]
    pub fn request(
        &self,
        start: CentrePosition,
        find_direction: FindDirection,
        method: SearchMethod,
        verbose: bool,
    ) -> CentreSearchRequest {
        CentreSearchRequest {
            r_min: self.r_min,
            r_max: self.r_max,
            max_iterations: self.max_iterations,
            start,
            tolerance: self.tolerance,
            find_direction,
            method,
            verbose,
        }
    }

    /// Sets the iteration bound.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the inner and outer search radii.
    #[must_use]
    pub fn with_radii(mut self, r_min: f64, r_max: f64) -> Self {
        self.r_min = r_min;
        self.r_max = r_max;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Selects the axes to search.
    #[must_use]
    pub fn with_directions(mut self, up_down: bool, left_right: bool) -> Self {
        self.up_down = up_down;
        self.left_right = left_right;
        self
    }

    /// Sets the LAB start position.
    #[must_use]
    pub fn with_lab_position(mut self, pos1: f64, pos2: f64) -> Self {
        self.lab_pos_1 = Some(pos1);
        self.lab_pos_2 = Some(pos2);
        self
    }

    /// Sets the HAB start position.
    #[must_use]
    pub fn with_hab_position(mut self, pos1: f64, pos2: f64) -> Self {
        self.hab_pos_1 = Some(pos1);
        self.hab_pos_2 = Some(pos2);
        self
    }

    /// Enables or disables the centre-of-mass pre-pass.
    #[must_use]
    pub fn with_com(mut self, com: bool) -> Self {
        self.com = com;
        self
    }

    /// Enables or disables the finder's diagnostic output.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the q range written into the reduction state.
    #[must_use]
    pub fn with_q_range(mut self, q_min: f64, q_max: f64) -> Self {
        self.q_min = q_min;
        self.q_max = q_max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_generic_defaults() {
        let settings = CentreSearchSettings::new();

        assert_eq!(settings.max_iterations, 10);
        assert_relative_eq!(settings.r_min, 60.0);
        assert_relative_eq!(settings.r_max, 280.0);
        assert!(settings.left_right);
        assert!(settings.up_down);
        assert_relative_eq!(settings.tolerance, 0.000_125);
        assert_eq!(settings.start_position(DetectorBank::Lab), CentrePosition::unset());
        assert_eq!(settings.start_position(DetectorBank::Hab), CentrePosition::unset());
        assert_relative_eq!(settings.scale_1, 1000.0);
        assert_relative_eq!(settings.scale_2, 1000.0);
        assert!(!settings.com);
        assert!(!settings.verbose);
        assert_relative_eq!(settings.q_min, 0.01);
        assert_relative_eq!(settings.q_max, 0.1);
    }

    #[test]
    fn test_instrument_defaults() {
        let loq = CentreSearchSettings::for_instrument(Some(Instrument::Loq));
        assert_eq!(loq, CentreSearchSettings::new().with_radii(60.0, 200.0));

        let mut larmor = CentreSearchSettings::new();
        larmor.scale_1 = 1.0;
        assert_eq!(
            CentreSearchSettings::for_instrument(Some(Instrument::Larmor)),
            larmor
        );

        for instrument in [None, Some(Instrument::Sans2d), Some(Instrument::Zoom)] {
            assert_eq!(
                CentreSearchSettings::for_instrument(instrument),
                CentreSearchSettings::new()
            );
        }
    }

    #[test]
    fn test_reset_discards_edits() {
        let mut settings = CentreSearchSettings::new()
            .with_lab_position(0.1, 0.2)
            .with_com(true)
            .with_max_iterations(3);

        settings.reset_to_defaults_for_instrument(Some(Instrument::Loq));

        assert_eq!(settings, CentreSearchSettings::for_instrument(Some(Instrument::Loq)));
    }

    #[test]
    fn test_set_scaling_touches_only_scales() {
        let mut settings = CentreSearchSettings::for_instrument(Some(Instrument::Loq))
            .with_lab_position(0.1, 0.2)
            .with_q_range(0.02, 0.15);
        let before = settings.clone();

        settings.set_scaling(Some(Instrument::Larmor));
        assert_relative_eq!(settings.scale_1, 1.0);
        assert_relative_eq!(settings.scale_2, 1000.0);

        settings.scale_1 = before.scale_1;
        assert_eq!(settings, before);

        settings.scale_2 = 5.0;
        settings.set_scaling(None);
        assert_eq!(settings, before);
    }

    #[test]
    fn test_q_bounds_skip_zero() {
        let mut convert_to_q = ConvertToQState {
            q_min: 0.5,
            q_max: 0.6,
        };

        CentreSearchSettings::new()
            .with_q_range(0.0, 0.0)
            .apply_q_bounds(&mut convert_to_q);
        assert_relative_eq!(convert_to_q.q_min, 0.5);
        assert_relative_eq!(convert_to_q.q_max, 0.6);

        CentreSearchSettings::new()
            .with_q_range(0.0, 0.25)
            .apply_q_bounds(&mut convert_to_q);
        assert_relative_eq!(convert_to_q.q_min, 0.5);
        assert_relative_eq!(convert_to_q.q_max, 0.25);
    }

    #[test]
    fn test_request_carries_settings() {
        let settings = CentreSearchSettings::new()
            .with_radii(40.0, 250.0)
            .with_max_iterations(7)
            .with_tolerance(0.001);
        let start = CentrePosition::new(0.01, 0.02);

        let request = settings.request(start, FindDirection::UpDown, SearchMethod::Reduction, true);

        assert_relative_eq!(request.r_min, 40.0);
        assert_relative_eq!(request.r_max, 250.0);
        assert_eq!(request.max_iterations, 7);
        assert_relative_eq!(request.tolerance, 0.001);
        assert_eq!(request.start, start);
        assert_eq!(request.find_direction, FindDirection::UpDown);
        assert_eq!(request.method, SearchMethod::Reduction);
        assert!(request.verbose);
    }
}
