//! Numerical and physical parameters for a ride
//!
//! `Parameters` holds the runtime settings the integrator needs:
//! - initial velocity and total duration,
//! - base fuel consumption and fuel price,
//! - the largest simulated time one interactive tick may advance

use super::integrator::MAX_STEP;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub v0: f64,         // initial velocity (m/s)
    pub t_end: f64,      // total simulated time T (s)
    pub c_base: f64,     // base consumption (L/100km)
    pub fuel_price: f64, // price per liter
    pub max_step: f64,   // clamp for interactive steps (s)
}

impl Parameters {
    pub fn new(v0: f64, t_end: f64, c_base: f64, fuel_price: f64) -> Self {
        Self {
            v0,
            t_end,
            c_base,
            fuel_price,
            max_step: MAX_STEP,
        }
    }
}
