//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! ride scenario. A scenario consists of:
//!
//! - [`MotionConfig`]   – initial velocity, base acceleration polynomial, duration
//! - [`FuelConfig`]     – base consumption rate and fuel price
//! - [`EventConfig`]    – one entry per route event (bump, urban zone, ...)
//! - [`IntegralConfig`] – rectangle count, method, curve and zoom of the integral view
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! Every section and field is optional and falls back to the simulator's
//! defaults, so an empty document is a valid scenario.
//!
//! # YAML format
//!
//! ```yaml
//! motion:
//!   v0: 0.0                 # initial velocity (m/s)
//!   a0: 2.0                 # base acceleration a0 + a1 t + a2 t^2 (m/s^2)
//!   a1: 0.0
//!   a2: 0.0
//!   duration: 15.0          # total simulated time (s)
//!
//! fuel:
//!   base_consumption: 4.5   # L/100km at the optimal speed
//!   price: 1.5              # price per liter
//!
//! events:
//!   - kind: traffic_light   # bump | urban_zone | traffic_light | curve | turbo_boost
//!     start: 5.0
//!     magnitude: -3.0
//!     duration: 2.0
//!
//! integral:
//!   rectangles: 14
//!   method: midpoint        # left | right | midpoint | trapezoidal
//!   curve: velocity         # velocity | acceleration | position
//!   zoom: 1.0
//! ```
//!
//! The engine maps this configuration into its runtime [`Scenario`](crate::Scenario)
//! after [`ScenarioConfig::sanitize`] has replaced unusable values.

use std::fs;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::analysis::quadrature::{CurveSelector, RiemannMethod};
use crate::analysis::view::{MAX_ZOOM, MIN_ZOOM};
use crate::error::Result;
use crate::simulation::events::EventKind;

pub const DEFAULT_DURATION: f64 = 15.0;
pub const DEFAULT_BASE_CONSUMPTION: f64 = 4.5;
pub const DEFAULT_FUEL_PRICE: f64 = 1.5;
pub const DEFAULT_EVENT_DURATION: f64 = 1.0;
pub const DEFAULT_RECTANGLES: i64 = 14;

/// Initial conditions and the base acceleration polynomial
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    pub v0: f64,       // initial velocity (m/s)
    pub a0: f64,       // constant term of the base acceleration
    pub a1: f64,       // linear term
    pub a2: f64,       // quadratic term
    pub duration: f64, // total simulated time T (s)
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            v0: 0.0,
            a0: 0.0,
            a1: 0.0,
            a2: 0.0,
            duration: DEFAULT_DURATION,
        }
    }
}

/// Fuel model inputs
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FuelConfig {
    pub base_consumption: f64, // cBase, L/100km at the optimal speed
    pub price: f64,            // price per liter
}

impl Default for FuelConfig {
    fn default() -> Self {
        Self {
            base_consumption: DEFAULT_BASE_CONSUMPTION,
            price: DEFAULT_FUEL_PRICE,
        }
    }
}

/// A single route event as written in the scenario file
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EventConfig {
    pub kind: EventKind, // unrecognized tags become `EventKind::Unknown`
    pub start: f64,      // window start t0 (s)
    pub magnitude: f64,  // peak contribution (m/s^2), signed
    pub duration: f64,   // window width (s), must be > 0
    pub enabled: bool,   // disabled events are skipped when building the scenario
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            kind: EventKind::Unknown,
            start: 0.0,
            magnitude: 0.0,
            duration: DEFAULT_EVENT_DURATION,
            enabled: true,
        }
    }
}

/// Settings of the integral comparison view
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct IntegralConfig {
    pub rectangles: i64,        // partition count n
    pub method: RiemannMethod,  // method shown in the "Riemann" row
    pub curve: CurveSelector,   // which series is integrated
    pub zoom: f64,              // horizontal zoom of the chart
}

impl Default for IntegralConfig {
    fn default() -> Self {
        Self {
            rectangles: DEFAULT_RECTANGLES,
            method: RiemannMethod::Left,
            curve: CurveSelector::Velocity,
            zoom: 1.0,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub motion: MotionConfig,     // initial conditions and base acceleration
    pub fuel: FuelConfig,         // consumption model inputs
    pub events: Vec<EventConfig>, // route events, in file order
    pub integral: IntegralConfig, // integral comparison settings
}

impl ScenarioConfig {
    /// Parse a scenario from a YAML document
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(text)?;
        Ok(cfg)
    }

    /// Read and parse a scenario file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Replace values the simulator cannot run with by their defaults.
    ///
    /// Each correction is logged. NaN compares false against every bound and
    /// is therefore kept; it propagates through the results unchanged.
    pub fn sanitize(mut self) -> Self {
        if self.motion.duration <= 0.0 {
            warn!("duration {} is not positive, using {}", self.motion.duration, DEFAULT_DURATION);
            self.motion.duration = DEFAULT_DURATION;
        }
        if self.fuel.base_consumption <= 0.0 {
            warn!(
                "base consumption {} is not positive, using {}",
                self.fuel.base_consumption, DEFAULT_BASE_CONSUMPTION
            );
            self.fuel.base_consumption = DEFAULT_BASE_CONSUMPTION;
        }
        if self.fuel.price < 0.0 {
            warn!("fuel price {} is negative, using {}", self.fuel.price, DEFAULT_FUEL_PRICE);
            self.fuel.price = DEFAULT_FUEL_PRICE;
        }
        for (i, ev) in self.events.iter_mut().enumerate() {
            if ev.duration <= 0.0 {
                warn!(
                    "event #{i} ({:?}) has duration {}, using {}",
                    ev.kind, ev.duration, DEFAULT_EVENT_DURATION
                );
                ev.duration = DEFAULT_EVENT_DURATION;
            }
            if ev.kind == EventKind::Unknown {
                warn!("event #{i} has an unrecognized kind and will contribute nothing");
            }
        }
        if self.integral.rectangles < 1 {
            warn!("rectangle count {} is below 1, using 1", self.integral.rectangles);
            self.integral.rectangles = 1;
        }
        let zoom = self.integral.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if zoom != self.integral.zoom {
            warn!("zoom {} outside [{MIN_ZOOM}, {MAX_ZOOM}], using {zoom}", self.integral.zoom);
            self.integral.zoom = zoom;
        }
        self
    }
}
