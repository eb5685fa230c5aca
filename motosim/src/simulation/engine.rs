//! Single owner of a ride's state
//!
//! `Simulator` holds the scenario, the live `MotionState` advanced by the
//! interactive clock, its recorded history, and the two dense series
//! (chart and reference). The dense series only depend on the scenario, so
//! they are computed once per `configure` instead of on every tick.

use std::collections::BTreeSet;

use log::{debug, info};

use crate::analysis::quadrature::{estimate_integral, CurveSelector, IntegralReport, RiemannMethod, SampledCurve};
use crate::analysis::view::{partition_cells, PartitionCell};
use crate::configuration::config::ScenarioConfig;
use crate::error::Result;
use crate::simulation::events::EventId;
use crate::simulation::fuel::FuelSummary;
use crate::simulation::integrator::{interactive_step, sample_dense, CHART_RESOLUTION, REFERENCE_RESOLUTION};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{MotionState, Sample, SampleSeries};

/// Change of an event's activity between two consecutive ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTransition {
    Entered(EventId),
    Exited(EventId),
}

#[derive(Debug)]
pub struct Simulator {
    scenario: Scenario,
    state: MotionState,
    history: SampleSeries,
    active: BTreeSet<EventId>,       // active set of the previous tick
    transitions: Vec<EventTransition>, // changes produced by the last tick
    chart: SampleSeries,               // dense series at CHART_RESOLUTION
    reference: SampleSeries,           // dense series at REFERENCE_RESOLUTION
}

impl Simulator {
    pub fn new(scenario: Scenario) -> Self {
        let mut sim = Self {
            state: MotionState::initial(scenario.parameters.v0),
            scenario,
            history: SampleSeries::new(),
            active: BTreeSet::new(),
            transitions: Vec::new(),
            chart: SampleSeries::new(),
            reference: SampleSeries::new(),
        };
        sim.refresh_dense();
        sim
    }

    /// Build a simulator straight from a scenario configuration
    pub fn from_config(cfg: ScenarioConfig) -> Self {
        Self::new(Scenario::build_scenario(cfg))
    }

    /// Replace the scenario and start over from the initial conditions
    pub fn configure(&mut self, cfg: ScenarioConfig) {
        self.scenario = Scenario::build_scenario(cfg);
        info!(
            "configured ride: v0 = {} m/s, T = {} s, {} event(s)",
            self.scenario.parameters.v0,
            self.scenario.parameters.t_end,
            self.scenario.events.len()
        );
        self.refresh_dense();
        self.reset();
    }

    /// Back to `t = 0` with the same scenario; the recorded history is discarded
    pub fn reset(&mut self) {
        self.state = MotionState::initial(self.scenario.parameters.v0);
        self.history.clear();
        self.active.clear();
        self.transitions.clear();
    }

    /// Advance the live ride by `dt` of clock time (clamped to the max step).
    /// Once the end time is reached the state freezes and this keeps
    /// returning the final sample.
    pub fn step(&mut self, dt: f64) -> Sample {
        self.transitions.clear();

        let Some(sample) = interactive_step(
            &mut self.state,
            &self.scenario.forces,
            &self.scenario.parameters,
            dt,
        ) else {
            return self.current();
        };
        self.history.push(sample);

        let now = self.scenario.active_events(sample.t);
        for id in now.difference(&self.active) {
            info!("t = {:.2} s: {}", sample.t, id.kind.notice());
            self.transitions.push(EventTransition::Entered(*id));
        }
        for id in self.active.difference(&now) {
            debug!("t = {:.2} s: left {} #{}", sample.t, id.kind.label(), id.index);
            self.transitions.push(EventTransition::Exited(*id));
        }
        self.active = now;

        sample
    }

    /// Current sample; before the first tick this is the initial state
    pub fn current(&self) -> Sample {
        self.history
            .last()
            .unwrap_or_else(|| self.state.sample(self.scenario.total_acceleration(self.state.t)))
    }

    /// Whether the ride reached its end time
    pub fn is_finished(&self) -> bool {
        !(self.state.t < self.scenario.parameters.t_end)
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Samples recorded by the interactive clock so far
    pub fn history(&self) -> &SampleSeries {
        &self.history
    }

    /// Transitions produced by the most recent `step`
    pub fn transitions(&self) -> &[EventTransition] {
        &self.transitions
    }

    /// Events active at the last tick
    pub fn active_events(&self) -> &BTreeSet<EventId> {
        &self.active
    }

    /// Dense replay of the ride at `resolution` steps
    pub fn sample_dense(&self, resolution: usize) -> SampleSeries {
        sample_dense(&self.scenario.forces, &self.scenario.parameters, resolution)
    }

    /// Cached dense series used for charts
    pub fn chart_series(&self) -> &SampleSeries {
        &self.chart
    }

    /// Cached dense series used for the reference integral
    pub fn reference_series(&self) -> &SampleSeries {
        &self.reference
    }

    /// Compare Riemann and trapezoidal estimates of `curve` against the reference
    pub fn estimate_integral(&self, curve: CurveSelector, n: usize, method: RiemannMethod) -> Result<IntegralReport> {
        estimate_integral(&self.chart, &self.reference, curve, n, method)
    }

    /// Estimate with the settings stored in the scenario
    pub fn default_report(&self) -> Result<IntegralReport> {
        let s = &self.scenario.integral;
        self.estimate_integral(s.curve, s.rectangles, s.method)
    }

    /// Time window shown by the integral chart at the configured zoom
    pub fn visible_window(&self) -> (f64, f64) {
        self.scenario.integral.view.visible_range(self.scenario.parameters.t_end)
    }

    /// Partition cells of `curve` that fall inside [`Self::visible_window`]
    pub fn visible_cells(&self, curve: CurveSelector, n: usize, method: RiemannMethod) -> Result<Vec<PartitionCell>> {
        let sampled = SampledCurve::from_series(&self.chart, curve)?;
        Ok(partition_cells(&sampled, n, method, self.visible_window()))
    }

    /// Fuel burnt so far and what it cost
    pub fn fuel_summary(&self) -> FuelSummary {
        FuelSummary::new(self.state.fuel, self.scenario.parameters.fuel_price)
    }

    fn refresh_dense(&mut self) {
        self.chart = self.sample_dense(CHART_RESOLUTION);
        self.reference = self.sample_dense(REFERENCE_RESOLUTION);
        debug!(
            "dense samples refreshed: {} chart points, {} reference points",
            self.chart.len(),
            self.reference.len()
        );
    }
}
