//! Riemann and trapezoidal estimates of a sampled curve
//!
//! The estimator reads a dense sample of one quantity (velocity,
//! acceleration or position), partitions `[0, T]` into `n` equal cells and
//! evaluates the curve by linear interpolation at the points each method
//! asks for. The reference value comes from a finer dense sample summed
//! directly, independent of `n`.

use std::fmt;

use serde::Deserialize;

use crate::error::{Result, SimError};
use crate::simulation::states::SampleSeries;

/// Evaluation point of a Riemann sum
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiemannMethod {
    Left,
    Right,
    Midpoint,
    Trapezoidal,
}

impl RiemannMethod {
    pub const ALL: [RiemannMethod; 4] = [
        RiemannMethod::Left,
        RiemannMethod::Right,
        RiemannMethod::Midpoint,
        RiemannMethod::Trapezoidal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RiemannMethod::Left => "left",
            RiemannMethod::Right => "right",
            RiemannMethod::Midpoint => "midpoint",
            RiemannMethod::Trapezoidal => "trapezoidal",
        }
    }
}

impl std::str::FromStr for RiemannMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        RiemannMethod::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown method '{s}', expected left|right|midpoint|trapezoidal"))
    }
}

/// Which quantity of the ride is integrated over time
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CurveSelector {
    Velocity,     // integral is the distance travelled
    Acceleration, // integral is the change of velocity
    Position,     // integral of x(t) dt
}

impl CurveSelector {
    pub const ALL: [CurveSelector; 3] = [
        CurveSelector::Velocity,
        CurveSelector::Acceleration,
        CurveSelector::Position,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CurveSelector::Velocity => "velocity",
            CurveSelector::Acceleration => "acceleration",
            CurveSelector::Position => "position",
        }
    }

    /// Unit of the integral
    pub fn unit(self) -> &'static str {
        match self {
            CurveSelector::Velocity => "m",
            CurveSelector::Acceleration => "m/s",
            CurveSelector::Position => "m²",
        }
    }

    /// Physical meaning of the area under the curve
    pub fn meaning(self) -> &'static str {
        match self {
            CurveSelector::Velocity => "∫v(t)dt = distance travelled",
            CurveSelector::Acceleration => "∫a(t)dt = change of velocity",
            CurveSelector::Position => "∫x(t)dt = accumulated position",
        }
    }
}

impl std::str::FromStr for CurveSelector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v" | "velocity" => Ok(CurveSelector::Velocity),
            "a" | "acceleration" => Ok(CurveSelector::Acceleration),
            "x" | "position" => Ok(CurveSelector::Position),
            _ => Err(format!("unknown curve '{s}', expected velocity|acceleration|position")),
        }
    }
}

/// Linear interpolation of `(ts, ys)` at `t`.
///
/// `ts` must be increasing. Outside `[ts[0], ts[last]]` the nearest boundary
/// value is returned. `None` for empty input.
pub fn interpolate(ts: &[f64], ys: &[f64], t: f64) -> Option<f64> {
    let last = ts.len().min(ys.len()).checked_sub(1)?;
    if t <= ts[0] {
        return Some(ys[0]);
    }
    if t >= ts[last] {
        return Some(ys[last]);
    }

    // binary search for the bracketing pair ts[lo] <= t < ts[hi]
    let (mut lo, mut hi) = (0, last);
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if ts[mid] <= t {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let w = (t - ts[lo]) / (ts[hi] - ts[lo]);
    Some(ys[lo] * (1.0 - w) + ys[hi] * w)
}

/// A sampled curve over `[0, T]` ready to be integrated.
/// Always holds at least 2 points.
#[derive(Debug, Clone, Copy)]
pub struct SampledCurve<'a> {
    ts: &'a [f64],
    ys: &'a [f64],
}

impl<'a> SampledCurve<'a> {
    /// Curve from raw columns, `InsufficientData` below 2 points.
    /// Extra entries of the longer column are ignored.
    pub fn new(ts: &'a [f64], ys: &'a [f64]) -> Result<Self> {
        let points = ts.len().min(ys.len());
        if points < 2 {
            return Err(SimError::InsufficientData { points });
        }
        Ok(Self {
            ts: &ts[..points],
            ys: &ys[..points],
        })
    }

    /// Curve of one quantity of a dense series, `InsufficientData` below 2 points
    pub fn from_series(series: &'a SampleSeries, curve: CurveSelector) -> Result<Self> {
        Self::new(&series.t, series.values(curve))
    }

    pub fn ts(&self) -> &'a [f64] {
        self.ts
    }

    pub fn ys(&self) -> &'a [f64] {
        self.ys
    }

    /// Interval covered by the samples
    pub fn span(&self) -> (f64, f64) {
        (self.ts[0], self.ts[self.ts.len() - 1])
    }

    pub fn at(&self, t: f64) -> f64 {
        // non-empty by construction
        interpolate(self.ts, self.ys, t).unwrap_or(f64::NAN)
    }

    /// Riemann estimate with `n` cells. `Trapezoidal` delegates to [`Self::trapezoidal`]
    pub fn riemann(&self, n: usize, method: RiemannMethod) -> f64 {
        if method == RiemannMethod::Trapezoidal {
            return self.trapezoidal(n);
        }
        self.cells(n)
            .map(|(t0, t1)| {
                let t_eval = match method {
                    RiemannMethod::Left => t0,
                    RiemannMethod::Right => t1,
                    _ => 0.5 * (t0 + t1),
                };
                self.at(t_eval) * (t1 - t0)
            })
            .sum()
    }

    /// Composite trapezoidal estimate with `n` cells
    pub fn trapezoidal(&self, n: usize) -> f64 {
        self.cells(n)
            .map(|(t0, t1)| 0.5 * (self.at(t0) + self.at(t1)) * (t1 - t0))
            .sum()
    }

    /// The `n` equal cells of the span; `n` is clamped to at least 1
    pub fn cells(&self, n: usize) -> impl Iterator<Item = (f64, f64)> {
        let n = n.max(1);
        let (start, end) = self.span();
        let dt = (end - start) / n as f64;
        (0..n).map(move |i| (start + i as f64 * dt, start + (i + 1) as f64 * dt))
    }
}

/// Reference integral of `curve` from a fine dense series: `sum y_i dt` over
/// the first `N` samples, the same accumulation the integrator performs
pub fn reference_integral(series: &SampleSeries, curve: CurveSelector) -> Result<f64> {
    let points = series.len();
    if points < 2 {
        return Err(SimError::InsufficientData { points });
    }
    let steps = points - 1;
    let dt = (series.t[steps] - series.t[0]) / steps as f64;
    Ok(series.values(curve)[..steps].iter().map(|y| y * dt).sum())
}

/// Exact value, two estimates and their errors for one curve and partition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegralReport {
    pub curve: CurveSelector,
    pub method: RiemannMethod,
    pub n: usize,
    pub exact: f64,
    pub riemann: f64,
    pub trapezoidal: f64,
    pub error_riemann: f64,
    pub error_trapezoidal: f64,
}

/// Compare the estimates of `curve` over the chart series against the
/// reference integral of the fine series. `n` is clamped to at least 1.
pub fn estimate_integral(
    chart: &SampleSeries,
    reference: &SampleSeries,
    curve: CurveSelector,
    n: usize,
    method: RiemannMethod,
) -> Result<IntegralReport> {
    let n = n.max(1);
    let sampled = SampledCurve::from_series(chart, curve)?;
    let exact = reference_integral(reference, curve)?;

    let trapezoidal = sampled.trapezoidal(n);
    let riemann = if method == RiemannMethod::Trapezoidal {
        trapezoidal
    } else {
        sampled.riemann(n, method)
    };

    Ok(IntegralReport {
        curve,
        method,
        n,
        exact,
        riemann,
        trapezoidal,
        error_riemann: (exact - riemann).abs(),
        error_trapezoidal: (exact - trapezoidal).abs(),
    })
}

impl fmt::Display for IntegralReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let u = self.curve.unit();
        let n = self.n;
        writeln!(f, "{}", self.curve.meaning())?;
        writeln!(f, "{:<24}{:>14.3} {u}", "Exact", self.exact)?;
        writeln!(f, "{:<24}{:>14.3} {u}", format!("Riemann {} (n={n})", self.method.name()), self.riemann)?;
        writeln!(f, "{:<24}{:>14.3} {u}", format!("Trapezoid (n={n})"), self.trapezoidal)?;
        writeln!(f, "{:<24}{:>14.4} {u}", "Error Riemann", self.error_riemann)?;
        write!(f, "{:<24}{:>14.4} {u}", "Error Trapezoid", self.error_trapezoidal)
    }
}
