use springsim::{integrate, is_at_rest, line_plot_script, run_gnuplot, write_dat};
use springsim::{Method, Scenario, ScenarioConfig, Trajectory};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file (YAML)
    #[arg(short, default_value = "scenarios/stopper.yaml")]
    file_name: PathBuf,

    /// Directory for .dat files and gnuplot scripts
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// Invoke gnuplot on the generated scripts
    #[arg(long)]
    gnuplot: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(path: &Path) -> Result<ScenarioConfig> {
    let file =
        File::open(path).with_context(|| format!("opening scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", path.display()))?;

    Ok(scenario_cfg)
}

/// Legend label for a method
fn label(method: Method) -> &'static str {
    match method {
        Method::Euler => "Euler",
        Method::Heun => "Heun",
        Method::Rk4 => "RK4",
    }
}

/// Run one method, persist its trajectory, and return it for further use
///
/// A failed run is reported and skipped; it must not take the remaining
/// runs down with it
fn run_and_write(method: Method, scenario: &Scenario, out_dir: &Path) -> Option<Trajectory> {
    let started = Instant::now();
    let traj = match integrate(method, &scenario.parameters) {
        Ok(traj) => traj,
        Err(e) => {
            error!(method = method.name(), %e, "run failed");
            return None;
        }
    };
    let elapsed_s = started.elapsed().as_secs_f64();

    let file = out_dir.join(format!("{}.dat", method.name()));
    if let Err(e) = write_dat(&file, &traj) {
        error!(method = method.name(), %e, "writing trajectory failed");
        return None;
    }

    info!(
        method = method.name(),
        steps = traj.len() - 1,
        elapsed_s,
        "run complete"
    );
    Some(traj)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output directory {}", args.out_dir.display()))?;

    // One run per configured method; .dat files land in the output directory
    let mut series: Vec<(String, String)> = Vec::new();
    let mut rk4_traj: Option<Trajectory> = None;
    for &method in &scenario.engine.methods {
        if let Some(traj) = run_and_write(method, &scenario, &args.out_dir) {
            series.push((format!("{}.dat", method.name()), label(method).to_string()));
            if method == Method::Rk4 {
                rk4_traj = Some(traj);
            }
        }
    }

    // Comparison scripts over the successful runs
    let mut scripts: Vec<&str> = Vec::new();
    if !series.is_empty() {
        fs::write(
            args.out_dir.join("plot.gnuplot"),
            line_plot_script(
                "comparison_methods.png",
                "Numerical method comparison",
                "Time (s)",
                "Position (m)",
                "1:2",
                &series,
            ),
        )?;
        fs::write(
            args.out_dir.join("phase.gnuplot"),
            line_plot_script(
                "phase_diagram.png",
                "Phase diagram: velocity vs position",
                "Position (m)",
                "Velocity (m/s)",
                "2:3",
                &series,
            ),
        )?;
        fs::write(
            args.out_dir.join("velocity_plot.gnuplot"),
            line_plot_script(
                "velocity_over_time.png",
                "Velocity vs time",
                "Time (s)",
                "Velocity (m/s)",
                "1:3",
                &series,
            ),
        )?;
        scripts.extend(["plot.gnuplot", "phase.gnuplot", "velocity_plot.gnuplot"]);
    }

    // Exploration: re-run Euler with each damping value from the sweep
    let mut sweep_series: Vec<(String, String)> = Vec::new();
    for &b in &scenario.engine.b_sweep {
        let mut params = scenario.parameters.clone();
        params.b = b;

        match integrate(Method::Euler, &params) {
            Ok(traj) => {
                let file_name = format!("euler_b{b}.dat");
                write_dat(&args.out_dir.join(&file_name), &traj)?;
                info!(b, steps = traj.len() - 1, "sweep run complete");
                sweep_series.push((file_name, format!("b = {b}")));
            }
            Err(e) => {
                error!(b, %e, "sweep run failed");
            }
        }
    }
    if !sweep_series.is_empty() {
        fs::write(
            args.out_dir.join("plot_varied_b.gnuplot"),
            line_plot_script(
                "comparison_b_values.png",
                "Comparison across damping values",
                "Time (s)",
                "Position (m)",
                "1:2",
                &sweep_series,
            ),
        )?;
        scripts.push("plot_varied_b.gnuplot");
    }

    if args.gnuplot {
        for &script in &scripts {
            match run_gnuplot(&args.out_dir, script) {
                Ok(status) if status.success() => info!(script, "gnuplot rendered"),
                Ok(status) => warn!(script, %status, "gnuplot exited with failure"),
                Err(e) => warn!(script, %e, "could not invoke gnuplot"),
            }
        }
    }

    // Rest classification from the most precise method
    match rk4_traj {
        Some(ref traj) if is_at_rest(traj) => info!("system settled to rest"),
        Some(_) => info!("system did not reach rest within the simulated horizon"),
        None => {}
    }

    Ok(())
}
