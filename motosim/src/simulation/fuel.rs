//! U-shaped fuel consumption model
//!
//! Specific consumption (L/100km) is lowest at `V_OPT` and grows
//! quadratically on both sides. The absolute burn rate multiplies it by the
//! speed and scales by 1/100000 to turn L/100km into liters per second of
//! simulated time.

/// Optimal cruising speed, 60 km/h in m/s
pub const V_OPT: f64 = 60.0 / 3.6;

/// Steepness of the U curve
pub const ALFA: f64 = 2.5;

/// Specific consumption in L/100km at speed `v`
pub fn specific_consumption(v: f64, c_base: f64) -> f64 {
    let rel = (v.abs() - V_OPT) / V_OPT;
    c_base * (1.0 + ALFA * rel * rel)
}

/// Instantaneous burn rate (L/s) at speed `v`, never negative
pub fn instantaneous_rate(v: f64, c_base: f64) -> f64 {
    let factor = specific_consumption(v, c_base);
    (factor * v.abs() / 100_000.0).max(0.0)
}

/// Cost of `liters` of fuel
pub fn fuel_cost(liters: f64, price: f64) -> f64 {
    liters * price
}

/// Samples `(v, specific consumption)` of the U curve over `[0, v_max]`,
/// `points + 1` pairs
pub fn u_curve(c_base: f64, v_max: f64, points: usize) -> Vec<(f64, f64)> {
    if points == 0 {
        return Vec::new();
    }
    (0..=points)
        .map(|i| {
            let v = v_max * i as f64 / points as f64;
            (v, specific_consumption(v, c_base))
        })
        .collect()
}

/// Fuel totals of a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelSummary {
    pub total_liters: f64,
    pub cost: f64,
    pub optimal_speed_kmh: f64,
}

impl FuelSummary {
    pub fn new(total_liters: f64, price: f64) -> Self {
        Self {
            total_liters,
            cost: fuel_cost(total_liters, price),
            optimal_speed_kmh: V_OPT * 3.6,
        }
    }
}

impl std::fmt::Display for FuelSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total: {:.5} L", self.total_liters)?;
        writeln!(f, "Cost:  {:.4}", self.cost)?;
        write!(f, "v_opt: {:.0} km/h", self.optimal_speed_kmh)
    }
}
