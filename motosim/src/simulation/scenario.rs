//! Build fully-initialized ride scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! the engine works on:
//! - numerical parameters (`Parameters`)
//! - the base polynomial and the enabled route events
//! - the active acceleration set (`AccelSet`) summing all of them
//! - the integral view settings (rectangles, method, curve, zoom)

use std::collections::BTreeSet;

use log::warn;

use crate::analysis::quadrature::{CurveSelector, RiemannMethod};
use crate::analysis::view::ViewWindow;
use crate::configuration::config::{EventConfig, ScenarioConfig, DEFAULT_EVENT_DURATION};
use crate::simulation::events::{EventId, RouteEvent};
use crate::simulation::forces::{AccelSet, BasePolynomial};
use crate::simulation::params::Parameters;

/// Settings of the integral comparison, as chosen by the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegralSettings {
    pub rectangles: usize,
    pub method: RiemannMethod,
    pub curve: CurveSelector,
    pub view: ViewWindow,
}

impl Default for IntegralSettings {
    fn default() -> Self {
        Self {
            rectangles: 14,
            method: RiemannMethod::Left,
            curve: CurveSelector::Velocity,
            view: ViewWindow::default(),
        }
    }
}

/// Fully-initialized ride: immutable for the duration of a run
#[derive(Debug)]
pub struct Scenario {
    pub parameters: Parameters,
    pub base: BasePolynomial,
    pub events: Vec<RouteEvent>,
    pub forces: AccelSet,
    pub integral: IntegralSettings,
}

impl Scenario {
    /// Sanitize `cfg` and map it into runtime types
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let cfg = cfg.sanitize();

        let m_cfg = &cfg.motion;
        let parameters = Parameters::new(m_cfg.v0, m_cfg.duration, cfg.fuel.base_consumption, cfg.fuel.price);
        let base = BasePolynomial {
            a0: m_cfg.a0,
            a1: m_cfg.a1,
            a2: m_cfg.a2,
        };

        // Events: disabled entries are dropped, order is kept
        let events: Vec<RouteEvent> = cfg
            .events
            .iter()
            .filter(|ec| ec.enabled)
            .map(|ec: &EventConfig| RouteEvent::new(ec.kind, ec.start, ec.magnitude, ec.duration))
            .collect();

        let i_cfg = &cfg.integral;
        let integral = IntegralSettings {
            // sanitize guarantees >= 1
            rectangles: usize::try_from(i_cfg.rectangles).unwrap_or(1),
            method: i_cfg.method,
            curve: i_cfg.curve,
            view: ViewWindow::new(i_cfg.zoom),
        };

        Self::from_parts(parameters, base, events, integral)
    }

    /// Assemble a scenario from runtime values directly.
    /// Events with an unusable duration get `DEFAULT_EVENT_DURATION`.
    pub fn from_parts(
        parameters: Parameters,
        base: BasePolynomial,
        mut events: Vec<RouteEvent>,
        integral: IntegralSettings,
    ) -> Self {
        for (i, ev) in events.iter_mut().enumerate() {
            if !ev.has_valid_duration() {
                warn!(
                    "event #{i} ({:?}) has duration {}, using {}",
                    ev.kind, ev.duration, DEFAULT_EVENT_DURATION
                );
                ev.duration = DEFAULT_EVENT_DURATION;
            }
        }

        // Forces: base polynomial first, then every event in order
        let forces = events.iter().fold(AccelSet::new().with(base), |set, ev| set.with(*ev));

        Self {
            parameters,
            base,
            events,
            forces,
            integral,
        }
    }

    /// Total acceleration at `t`
    pub fn total_acceleration(&self, t: f64) -> f64 {
        self.forces.total(t)
    }

    /// Events whose activity window contains `t`
    pub fn active_events(&self, t: f64) -> BTreeSet<EventId> {
        self.events
            .iter()
            .enumerate()
            .filter(|(_, ev)| ev.is_active(t))
            .map(|(index, ev)| EventId { index, kind: ev.kind })
            .collect()
    }
}
