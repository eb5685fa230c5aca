use motosim::{bench_dense_sampling, bench_estimator};
use motosim::{mruv_preview, CurveSelector, RiemannMethod, ScenarioConfig, Simulator};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside the `scenarios` directory
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Frames per second of the driving clock
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Override the rectangle count of the scenario
    #[arg(short)]
    n: Option<usize>,

    /// Override the method (left, right, midpoint, trapezoidal)
    #[arg(long)]
    method: Option<RiemannMethod>,

    /// Override the integrated curve (velocity, acceleration, position)
    #[arg(long)]
    curve: Option<CurveSelector>,

    /// Run the benchmarks instead of a ride
    #[arg(long)]
    bench: bool,

    #[arg(short, long)]
    verbose: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("loading scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;

    if args.bench {
        bench_dense_sampling();
        bench_estimator();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut sim = Simulator::from_config(scenario_cfg);

    let params = &sim.scenario().parameters;
    let preview = mruv_preview(params.v0, sim.scenario().base.a0, params.t_end);
    info!(
        "MRUV without events: v({:.1} s) = {:.2} m/s, x = {:.2} m",
        params.t_end, preview.v, preview.x
    );

    // Drive the ride with a fixed-rate clock until it freezes at T
    let dt = 1.0 / args.fps;
    while !sim.is_finished() {
        sim.step(dt);
    }

    let last = sim.current();
    println!("t:    {:.2} s", last.t);
    println!("v(t): {:.2} m/s", last.v);
    println!("a(t): {:.2} m/s²", last.a);
    println!("x(t): {:.2} m", last.x);
    println!("{}", sim.fuel_summary());
    println!();

    let settings = sim.scenario().integral;
    let curve = args.curve.unwrap_or(settings.curve);
    let n = args.n.unwrap_or(settings.rectangles);
    let method = args.method.unwrap_or(settings.method);

    let report = sim.estimate_integral(curve, n, method)?;
    println!("{report}");

    let (t_min, t_max) = sim.visible_window();
    let cells = sim.visible_cells(curve, n, method)?;
    println!();
    println!(
        "view x{:.2}: [{:.2}, {:.2}] s, {} of {} cell(s) visible",
        settings.view.zoom(),
        t_min,
        t_max,
        cells.len(),
        n.max(1)
    );

    Ok(())
}
