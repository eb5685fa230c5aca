//! Route events and their perturbation of the acceleration
//!
//! Every event is a localized pulse added to the base acceleration. The
//! event identity (bump, urban zone, ...) selects one of four pulse shapes:
//!
//! - `Gaussian` – `m * exp(-(t - t0)^2 / (2 sigma^2))`, `sigma = duration / 2.5`, never hard-zero
//! - `Ramp`     – `m * sin(pi p)` on `[t0, t0 + duration]`, zero outside
//! - `Sine`     – `m * sin^2(pi p)` on the same window
//! - `Boost`    – same formula as `Ramp`, used for positive pulses
//!
//! where `p = (t - t0) / duration` runs from 0 to 1 across the window.

use std::f64::consts::PI;

use serde::Deserialize;

use super::forces::Acceleration;
use crate::configuration::config::DEFAULT_EVENT_DURATION;

/// Identity of a route event
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Bump,
    UrbanZone,
    TrafficLight,
    Curve,
    TurboBoost,
    /// Any tag the loader does not recognize; contributes nothing
    #[serde(other)]
    Unknown,
}

/// Pulse shape used to evaluate an event's contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventShape {
    Gaussian,
    Ramp,
    Sine,
    Boost,
}

impl EventKind {
    /// Shape of the pulse, `None` for unknown kinds
    pub fn shape(self) -> Option<EventShape> {
        match self {
            EventKind::Bump => Some(EventShape::Gaussian),
            EventKind::UrbanZone | EventKind::TrafficLight => Some(EventShape::Ramp),
            EventKind::Curve => Some(EventShape::Sine),
            EventKind::TurboBoost => Some(EventShape::Boost),
            EventKind::Unknown => None,
        }
    }

    /// Short uppercase tag, used for chart bands
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Bump => "BUMP",
            EventKind::UrbanZone => "URBAN",
            EventKind::TrafficLight => "LIGHT",
            EventKind::Curve => "CURVE",
            EventKind::TurboBoost => "TURBO",
            EventKind::Unknown => "UNKNOWN",
        }
    }

    /// Banner text shown when the rider enters the event
    pub fn notice(self) -> &'static str {
        match self {
            EventKind::Bump => "BUMP - suspension hit",
            EventKind::UrbanZone => "URBAN ZONE - slowing down",
            EventKind::TrafficLight => "RED LIGHT - braking",
            EventKind::Curve => "SHARP CURVE - leaning in",
            EventKind::TurboBoost => "OPEN ROAD - turbo!",
            EventKind::Unknown => "unknown event",
        }
    }
}

/// A localized perturbation of the acceleration, immutable for a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteEvent {
    pub kind: EventKind,
    pub start: f64,     // window start t0 (s)
    pub magnitude: f64, // peak contribution (m/s^2)
    pub duration: f64,  // window width (s), > 0 when built through `new`
}

/// Identifies an event within a scenario: its position in the event list
/// plus its kind, so two events of the same kind stay distinct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId {
    pub index: usize,
    pub kind: EventKind,
}

impl RouteEvent {
    /// A non-positive (or NaN) duration is replaced by `DEFAULT_EVENT_DURATION`
    pub fn new(kind: EventKind, start: f64, magnitude: f64, duration: f64) -> Self {
        Self {
            kind,
            start,
            magnitude,
            duration: if duration > 0.0 { duration } else { DEFAULT_EVENT_DURATION },
        }
    }

    /// Whether the window width is strictly positive
    pub fn has_valid_duration(&self) -> bool {
        self.duration > 0.0
    }

    /// End of the activity window
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Activity window `[t0, t0 + duration]`
    pub fn window(&self) -> (f64, f64) {
        (self.start, self.end())
    }

    /// Whether `t` lies inside the activity window (both ends included).
    /// Applies to every kind, bumps included, even though the gaussian tail
    /// reaches past the window.
    pub fn is_active(&self, t: f64) -> bool {
        let (t0, t1) = self.window();
        t >= t0 && t <= t1
    }

    /// Contribution of this event to the acceleration at time `t`
    pub fn contribution(&self, t: f64) -> f64 {
        match self.kind.shape() {
            None => 0.0,
            Some(EventShape::Gaussian) => {
                let sigma = self.duration / 2.5;
                let dt = t - self.start;
                self.magnitude * (-(dt * dt) / (2.0 * sigma * sigma)).exp()
            }
            Some(EventShape::Ramp | EventShape::Boost) => self.magnitude * self.half_sine(t),
            Some(EventShape::Sine) => {
                let s = self.half_sine(t);
                self.magnitude * s * s
            }
        }
    }

    /// `sin(pi p)` inside the window, 0 outside.
    /// sin(pi) is not exactly zero in floating point, so both ends are pinned.
    fn half_sine(&self, t: f64) -> f64 {
        let (t0, t1) = self.window();
        if !self.is_active(t) || t == t0 || t == t1 {
            return 0.0;
        }
        let p = (t - self.start) / self.duration;
        (PI * p).sin()
    }
}

impl Acceleration for RouteEvent {
    fn acceleration(&self, t: f64) -> f64 {
        self.contribution(t)
    }
}
