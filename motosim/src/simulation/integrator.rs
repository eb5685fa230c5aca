//! Fixed-step time integration of the ride
//!
//! One step law, two drivers:
//! - `interactive_step` advances the live state by a clock-driven, clamped `dt`
//! - `sample_dense` replays the whole ride on a uniform grid of `N` steps
//!
//! The step law is semi-implicit Euler: velocity first, then position from
//! the *updated* velocity. The reference integral is computed from the same
//! law, so changing the order here changes the "exact" baseline too.

use super::forces::AccelSet;
use super::fuel::instantaneous_rate;
use super::params::Parameters;
use super::states::{floor_zero, MotionState, Sample, SampleSeries};

/// Largest simulated time one interactive tick may advance (s)
pub const MAX_STEP: f64 = 0.05;

/// Dense resolution for charts
pub const CHART_RESOLUTION: usize = 600;

/// Dense resolution for the reference integral
pub const REFERENCE_RESOLUTION: usize = 2000;

/// Apply one step of the law with acceleration `a` over `dt`.
/// Updates `v`, `x` and `fuel`; the caller owns the clock.
pub fn semi_implicit_euler(state: &mut MotionState, a: f64, dt: f64, c_base: f64) {
    // v_n+1 = max(v_n + a dt, 0), no reverse travel
    state.v = floor_zero(state.v + a * dt);

    // x_n+1 = x_n + v_n+1 dt
    state.x += state.v * dt;

    // fuel_n+1 = fuel_n + rate(v_n+1) dt
    state.fuel += instantaneous_rate(state.v, c_base) * dt;
}

/// Advance the live state by one tick of at most `params.max_step`.
///
/// The step is shortened so the run ends exactly at `params.t_end`. The
/// acceleration is evaluated at the end of the tick. Returns the new sample,
/// or `None` when nothing moved (run finished, `t_end <= 0`, or `dt <= 0`).
pub fn interactive_step(
    state: &mut MotionState,
    forces: &AccelSet,
    params: &Parameters,
    requested_dt: f64,
) -> Option<Sample> {
    if !(state.t < params.t_end) {
        return None;
    }
    let dt = requested_dt.min(params.max_step);
    if !(dt > 0.0) {
        return None;
    }

    // clamp the clock so the last tick lands on t_end
    let t_next = (state.t + dt).min(params.t_end);
    let dt = t_next - state.t;

    let a = forces.total(t_next);
    semi_implicit_euler(state, a, dt, params.c_base);
    state.t = t_next;

    Some(state.sample(a))
}

/// Replay the ride on a uniform grid of `resolution` steps over `[0, t_end]`.
///
/// Returns `resolution + 1` samples; sample `i` holds the state at
/// `t_i = t_end * i / resolution` together with `a(t_i)`, which drives the
/// step from `t_i` to `t_i+1`. Empty when `t_end <= 0` or `resolution == 0`.
pub fn sample_dense(forces: &AccelSet, params: &Parameters, resolution: usize) -> SampleSeries {
    let t_end = params.t_end;
    if !(t_end > 0.0) || resolution == 0 {
        return SampleSeries::new();
    }

    let dt = t_end / resolution as f64;
    let mut series = SampleSeries::with_capacity(resolution + 1);
    let mut state = MotionState::initial(params.v0);

    for i in 0..=resolution {
        state.t = t_end * i as f64 / resolution as f64;
        let a = forces.total(state.t);
        series.push(state.sample(a));
        if i < resolution {
            semi_implicit_euler(&mut state, a, dt, params.c_base);
        }
    }
    series
}

/// Closed-form uniformly accelerated motion at time `t`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MruvPreview {
    pub v: f64, // v0 + a t
    pub x: f64, // v0 t + a t^2 / 2
}

/// Closed-form MRUV values at `t`, without the zero-velocity floor
pub fn mruv_preview(v0: f64, a: f64, t: f64) -> MruvPreview {
    MruvPreview {
        v: v0 + a * t,
        x: v0 * t + 0.5 * a * t * t,
    }
}
