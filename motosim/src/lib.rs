pub mod simulation;
pub mod configuration;
pub mod analysis;
pub mod benchmark;
pub mod error;

pub use simulation::states::{MotionState, Sample, SampleSeries};
pub use simulation::events::{EventId, EventKind, EventShape, RouteEvent};
pub use simulation::forces::{Acceleration, AccelSet, BasePolynomial};
pub use simulation::fuel::{fuel_cost, instantaneous_rate, specific_consumption, u_curve, FuelSummary, ALFA, V_OPT};
pub use simulation::integrator::{interactive_step, mruv_preview, sample_dense, semi_implicit_euler, MruvPreview};
pub use simulation::integrator::{CHART_RESOLUTION, MAX_STEP, REFERENCE_RESOLUTION};
pub use simulation::params::Parameters;
pub use simulation::scenario::{IntegralSettings, Scenario};
pub use simulation::engine::{EventTransition, Simulator};

pub use configuration::config::{EventConfig, FuelConfig, IntegralConfig, MotionConfig, ScenarioConfig};

pub use analysis::quadrature::{estimate_integral, interpolate, reference_integral};
pub use analysis::quadrature::{CurveSelector, IntegralReport, RiemannMethod, SampledCurve};
pub use analysis::view::{partition_cells, PartitionCell, ValueRange, ViewWindow};

pub use benchmark::benchmark::{bench_dense_sampling, bench_estimator};

pub use error::SimError;
