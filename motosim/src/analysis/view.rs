//! Geometry of the integral comparison chart
//!
//! Nothing here draws. These helpers turn the zoom level, the dense
//! series and the partition into plain numbers a renderer can use:
//! the visible time window, a padded value range that never collapses,
//! and the rectangles/trapezoids of the current partition.

use super::quadrature::{RiemannMethod, SampledCurve};

pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 8.0;

/// Narrowest time window worth showing (s); anything narrower falls back to `[0, T]`
pub const MIN_VISIBLE_SPAN: f64 = 0.1;

/// Horizontal zoom centered on the middle of the ride
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    zoom: f64,
}

impl Default for ViewWindow {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

impl ViewWindow {
    pub fn new(zoom: f64) -> Self {
        Self {
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Multiply the zoom by `factor`, staying inside `[MIN_ZOOM, MAX_ZOOM]`
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn reset(&mut self) {
        self.zoom = 1.0;
    }

    /// Visible `[t_min, t_max]` for a ride of length `t_end`
    pub fn visible_range(&self, t_end: f64) -> (f64, f64) {
        let visible = t_end / self.zoom;
        let center = t_end / 2.0;
        let t_min = (center - visible / 2.0).max(0.0);
        let t_max = (center + visible / 2.0).min(t_end);
        if t_max - t_min < MIN_VISIBLE_SPAN {
            return (0.0, t_end);
        }
        (t_min, t_max)
    }
}

/// Value range of a series with symmetric padding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// `[min - pad, max + pad]` with `pad = span * pad_fraction`.
    /// A flat series uses a span of 1 so the range never has zero width.
    /// `None` when `values` is empty.
    pub fn padded(values: &[f64], pad_fraction: f64) -> Option<Self> {
        let (first, rest) = values.split_first()?;
        let (lo, hi) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), &y| (lo.min(y), hi.max(y)));
        let span = if hi - lo == 0.0 { 1.0 } else { hi - lo };
        let pad = span * pad_fraction;
        Some(Self {
            min: lo - pad,
            max: hi + pad,
        })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether the zero line falls strictly inside the range
    pub fn contains_zero(&self) -> bool {
        self.min < 0.0 && self.max > 0.0
    }
}

/// One cell of the partition as the chart shows it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionCell {
    pub t0: f64,
    pub t1: f64,
    pub left: f64,   // curve value at t0
    pub right: f64,  // curve value at t1
    pub height: f64, // rectangle height for the chosen method
}

impl PartitionCell {
    pub fn rectangle_area(&self) -> f64 {
        self.height * (self.t1 - self.t0)
    }

    pub fn trapezoid_area(&self) -> f64 {
        0.5 * (self.left + self.right) * (self.t1 - self.t0)
    }
}

/// Cells of an `n`-partition intersecting `[t_min, t_max]`.
/// For `Trapezoidal` the height is the mean of both ends.
pub fn partition_cells(
    curve: &SampledCurve<'_>,
    n: usize,
    method: RiemannMethod,
    (t_min, t_max): (f64, f64),
) -> Vec<PartitionCell> {
    curve
        .cells(n)
        .filter(|&(t0, t1)| t1 >= t_min && t0 <= t_max)
        .map(|(t0, t1)| {
            let left = curve.at(t0);
            let right = curve.at(t1);
            let height = match method {
                RiemannMethod::Left => left,
                RiemannMethod::Right => right,
                RiemannMethod::Midpoint => curve.at(0.5 * (t0 + t1)),
                RiemannMethod::Trapezoidal => 0.5 * (left + right),
            };
            PartitionCell {
                t0,
                t1,
                left,
                right,
                height,
            }
        })
        .collect()
}
