//! Core state types for the ride simulation.
//!
//! - `MotionState` – the single mutable record advanced by the integrator
//! - `Sample`      – one published snapshot `(t, v, x, a, fuel)`
//! - `SampleSeries`– an ordered history of samples, stored column-wise so
//!   the integral estimator can read one quantity as a slice

use crate::analysis::quadrature::CurveSelector;

/// Floor at zero that keeps NaN visible instead of turning it into 0
pub(crate) fn floor_zero(v: f64) -> f64 {
    if v < 0.0 { 0.0 } else { v }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub t: f64,    // time (s)
    pub v: f64,    // velocity (m/s), >= 0
    pub x: f64,    // position (m)
    pub fuel: f64, // cumulative fuel (L)
}

impl MotionState {
    /// State at `t = 0` with velocity `v0` (negative values floored)
    pub fn initial(v0: f64) -> Self {
        Self {
            t: 0.0,
            v: floor_zero(v0),
            x: 0.0,
            fuel: 0.0,
        }
    }

    /// Snapshot of this state with the acceleration that produced it
    pub fn sample(&self, a: f64) -> Sample {
        Sample {
            t: self.t,
            v: self.v,
            x: self.x,
            a,
            fuel: self.fuel,
        }
    }
}

/// One point of a simulated history
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t: f64,    // time (s)
    pub v: f64,    // velocity (m/s)
    pub x: f64,    // position (m)
    pub a: f64,    // total acceleration at t (m/s^2)
    pub fuel: f64, // cumulative fuel (L)
}

/// Ordered samples, strictly increasing in `t`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    pub t: Vec<f64>,
    pub v: Vec<f64>,
    pub x: Vec<f64>,
    pub a: Vec<f64>,
    pub fuel: Vec<f64>,
}

impl SampleSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            t: Vec::with_capacity(n),
            v: Vec::with_capacity(n),
            x: Vec::with_capacity(n),
            a: Vec::with_capacity(n),
            fuel: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, s: Sample) {
        self.t.push(s.t);
        self.v.push(s.v);
        self.x.push(s.x);
        self.a.push(s.a);
        self.fuel.push(s.fuel);
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn clear(&mut self) {
        self.t.clear();
        self.v.clear();
        self.x.clear();
        self.a.clear();
        self.fuel.clear();
    }

    pub fn get(&self, i: usize) -> Option<Sample> {
        Some(Sample {
            t: *self.t.get(i)?,
            v: self.v[i],
            x: self.x[i],
            a: self.a[i],
            fuel: self.fuel[i],
        })
    }

    pub fn last(&self) -> Option<Sample> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Column holding the quantity selected by `curve`
    pub fn values(&self, curve: CurveSelector) -> &[f64] {
        match curve {
            CurveSelector::Velocity => &self.v,
            CurveSelector::Acceleration => &self.a,
            CurveSelector::Position => &self.x,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}
