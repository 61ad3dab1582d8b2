//! Dry-run searches: an echo finder that records what it was asked to do.

use std::cell::RefCell;
use std::rc::Rc;

use beamcentre_core::{
    CentreFinder, CentrePosition, CentreSearchRequest, FindDirection, FinderFactory, FinderResult,
    ReductionState,
};
use beamcentre_model::{BeamCentreModel, CentreSearchSettings};
use serde::Serialize;

/// Finder that returns its start position unchanged.
pub struct EchoFinder {
    requests: Rc<RefCell<Vec<CentreSearchRequest>>>,
}

impl CentreFinder for EchoFinder {
    fn find(&mut self, _: &ReductionState, request: &CentreSearchRequest) -> FinderResult {
        self.requests.borrow_mut().push(*request);
        Ok(request.start)
    }
}

/// Hands out echo finders sharing one request log.
#[derive(Default)]
pub struct DryRunFactory {
    requests: Rc<RefCell<Vec<CentreSearchRequest>>>,
}

impl DryRunFactory {
    /// Requests recorded so far, in invocation order.
    pub fn requests(&self) -> Vec<CentreSearchRequest> {
        self.requests.borrow().clone()
    }
}

impl FinderFactory for DryRunFactory {
    type Finder = EchoFinder;

    fn create(&self) -> EchoFinder {
        EchoFinder {
            requests: Rc::clone(&self.requests),
        }
    }
}

/// Outcome of a dry-run search.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub settings: CentreSearchSettings,
    pub find_direction: Option<FindDirection>,
    pub requests: Vec<CentreSearchRequest>,
    pub centre: CentrePosition,
    pub display_centre: CentrePosition,
    pub state: ReductionState,
}

/// Runs a search with echo finders and reports every finder invocation.
pub fn plan(
    settings: CentreSearchSettings,
    mut state: ReductionState,
) -> beamcentre_model::Result<PlanReport> {
    let mut model = BeamCentreModel::new(DryRunFactory::default());
    model.set_settings(settings);

    let centre = model.find_beam_centre(&mut state)?;

    Ok(PlanReport {
        settings: model.settings().clone(),
        find_direction: model.find_direction(),
        requests: model.finder_factory().requests(),
        centre,
        display_centre: model.to_display_units(centre),
        state,
    })
}
