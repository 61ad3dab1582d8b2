#![allow(clippy::float_cmp, clippy::unreadable_literal)]
use beamcentre_model::{
    BeamCentreModel, CentreSearchRequest, CentreSearchSettings, DetectorBank, FinderResult,
    Instrument, ReductionState,
};

fn identity(_: &ReductionState, request: &CentreSearchRequest) -> FinderResult {
    Ok(request.start)
}

type IdentityFn = fn(&ReductionState, &CentreSearchRequest) -> FinderResult;

fn identity_factory() -> IdentityFn {
    identity
}

fn model() -> BeamCentreModel<fn() -> IdentityFn> {
    BeamCentreModel::new(identity_factory as fn() -> IdentityFn)
}

#[test]
fn test_reset_without_instrument_gives_generic_defaults() {
    let mut model = model();
    model.settings_mut().r_min = 10.0;
    model.settings_mut().com = true;

    model.reset_to_defaults_for_instrument(None);

    let settings = model.settings();
    assert_eq!(settings.max_iterations, 10);
    assert_eq!(settings.r_min, 60.0);
    assert_eq!(settings.r_max, 280.0);
    assert_eq!(settings.tolerance, 0.000125);
    assert!(settings.up_down && settings.left_right);
    assert!(!settings.com && !settings.verbose);
    assert_eq!(settings.scale_1, 1000.0);
    assert_eq!(settings.scale_2, 1000.0);
    assert_eq!(settings.q_min, 0.01);
    assert_eq!(settings.q_max, 0.1);
    assert!(!model.start_position(DetectorBank::Lab).is_set());
    assert!(!model.start_position(DetectorBank::Hab).is_set());
}

#[test]
fn test_loq_overrides_only_outer_radius() {
    let mut model = model();
    model.reset_to_defaults_for_instrument(Some(Instrument::Loq));

    let mut expected = CentreSearchSettings::new();
    expected.r_max = 200.0;
    assert_eq!(model.settings(), &expected);
}

#[test]
fn test_larmor_overrides_only_first_scale() {
    let model = BeamCentreModel::for_instrument(
        identity_factory as fn() -> IdentityFn,
        Some(Instrument::Larmor),
    );

    let mut expected = CentreSearchSettings::new();
    expected.scale_1 = 1.0;
    assert_eq!(model.settings(), &expected);
}

#[test]
fn test_set_scaling_leaves_other_fields() {
    let mut model = model();
    model.set_settings(
        CentreSearchSettings::new()
            .with_radii(30.0, 150.0)
            .with_lab_position(0.1, 0.2)
            .with_hab_position(0.3, 0.4)
            .with_com(true),
    );
    let before = model.settings().clone();

    model.set_scaling(Some(Instrument::Larmor));

    assert_eq!(model.settings().scale_1, 1.0);
    assert_eq!(model.settings().scale_2, 1000.0);
    let mut restored = model.settings().clone();
    restored.scale_1 = before.scale_1;
    assert_eq!(restored, before);

    model.set_scaling(Some(Instrument::Loq));
    assert_eq!(model.settings(), &before);
}

#[test]
fn test_any_field_change_breaks_equality() {
    let base = model();
    let edits: [fn(&mut CentreSearchSettings); 16] = [
        |s| s.max_iterations = 11,
        |s| s.r_min = 61.0,
        |s| s.r_max = 281.0,
        |s| s.left_right = false,
        |s| s.up_down = false,
        |s| s.tolerance = 0.001,
        |s| s.lab_pos_1 = Some(0.0),
        |s| s.lab_pos_2 = Some(0.0),
        |s| s.hab_pos_1 = Some(0.0),
        |s| s.hab_pos_2 = Some(0.0),
        |s| s.scale_1 = 1.0,
        |s| s.scale_2 = 1.0,
        |s| s.com = true,
        |s| s.verbose = true,
        |s| s.q_min = 0.02,
        |s| s.q_max = 0.2,
    ];

    assert_eq!(base, model());
    for edit in edits {
        let mut other = model();
        edit(other.settings_mut());
        assert_ne!(base, other);
    }
}

#[test]
fn test_hab_position_is_independent() {
    let mut model = model();
    model.settings_mut().hab_pos_1 = Some(0.3);
    model.settings_mut().hab_pos_2 = Some(0.4);

    let hab = model.start_position(DetectorBank::Hab);
    assert_eq!(hab.pos1, Some(0.3));
    assert_eq!(hab.pos2, Some(0.4));
    assert!(!model.start_position(DetectorBank::Lab).is_set());

    let centre = model.find_beam_centre(&mut ReductionState::default()).unwrap();
    assert!(!centre.is_set());
}
