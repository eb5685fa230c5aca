use std::time::Instant;

use crate::analysis::quadrature::{estimate_integral, CurveSelector, RiemannMethod};
use crate::simulation::events::{EventKind, RouteEvent};
use crate::simulation::forces::BasePolynomial;
use crate::simulation::integrator::{sample_dense, CHART_RESOLUTION, REFERENCE_RESOLUTION};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::{IntegralSettings, Scenario};

/// Helper to build a busy ride with every kind of event
fn make_scenario() -> Scenario {
    let events = vec![
        RouteEvent::new(EventKind::Bump, 2.0, -4.0, 1.0),
        RouteEvent::new(EventKind::UrbanZone, 3.0, -2.0, 3.0),
        RouteEvent::new(EventKind::TrafficLight, 6.5, -3.0, 2.0),
        RouteEvent::new(EventKind::Curve, 9.0, -2.5, 1.5),
        RouteEvent::new(EventKind::TurboBoost, 11.0, 5.0, 2.5),
    ];
    Scenario::from_parts(
        Parameters::new(5.0, 15.0, 4.5, 1.5),
        BasePolynomial::constant(1.5),
        events,
        IntegralSettings::default(),
    )
}

/// Time dense sampling for growing resolutions
/// Paste output directly into a spreadsheet to graph
pub fn bench_dense_sampling() {
    let scenario = make_scenario();
    let repeats = 20;

    println!("resolution,ms");

    let mut resolutions = vec![CHART_RESOLUTION, REFERENCE_RESOLUTION];
    resolutions.extend([5_000, 10_000, 50_000, 100_000]);

    for resolution in resolutions {
        // Warm-up
        let _ = sample_dense(&scenario.forces, &scenario.parameters, resolution);

        let t0 = Instant::now();
        for _ in 0..repeats {
            let series = sample_dense(&scenario.forces, &scenario.parameters, resolution);
            std::hint::black_box(series);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / repeats as f64;

        println!("{},{:.6}", resolution, ms);
    }
}

/// Time the estimator and show how the errors shrink with `n`
pub fn bench_estimator() {
    let scenario = make_scenario();
    let chart = sample_dense(&scenario.forces, &scenario.parameters, CHART_RESOLUTION);
    let reference = sample_dense(&scenario.forces, &scenario.parameters, REFERENCE_RESOLUTION);

    println!("n,ms,error_midpoint,error_trapezoidal");

    for n in [1, 4, 14, 50, 200, 1000, 5000] {
        let t0 = Instant::now();
        let report = estimate_integral(&chart, &reference, CurveSelector::Velocity, n, RiemannMethod::Midpoint);
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        match report {
            Ok(r) => println!("{},{:.6},{:.6},{:.6}", n, ms, r.error_riemann, r.error_trapezoidal),
            Err(e) => println!("{},{:.6},{},", n, ms, e),
        }
    }
}
