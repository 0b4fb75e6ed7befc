//! Gnuplot script generation and invocation
//!
//! Builds the comparison, phase-diagram, velocity, and varied-damping
//! scripts, each rendering a PNG from the `.dat` files written alongside
//! them. gnuplot itself is an external collaborator: scripts reference the
//! `.dat` files by bare name and are run with the output directory as the
//! working directory.

use std::fmt::Write as _;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// One line-plot script: PNG terminal, grid, and a `plot` command built
/// from `(dat file, legend label)` pairs over the given column pair
///
/// `using` is a gnuplot column selector, e.g. `"1:2"` for position vs time
/// or `"2:3"` for the phase diagram
pub fn line_plot_script(
    output: &str,
    title: &str,
    xlabel: &str,
    ylabel: &str,
    using: &str,
    series: &[(String, String)],
) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "set terminal png size 1000,600");
    let _ = writeln!(s, "set output '{output}'");
    let _ = writeln!(s, "set title '{title}'");
    let _ = writeln!(s, "set xlabel '{xlabel}'");
    let _ = writeln!(s, "set ylabel '{ylabel}'");
    let _ = writeln!(s, "set grid");

    let plots: Vec<String> = series
        .iter()
        .map(|(file, label)| format!("'{file}' using {using} with lines title '{label}'"))
        .collect();
    let _ = writeln!(s, "plot {}", plots.join(", \\\n     "));
    s
}

/// Run gnuplot on `script` (a file name relative to `dir`)
///
/// The caller decides what a missing gnuplot binary means; the driver logs
/// it and moves on
pub fn run_gnuplot(dir: &Path, script: &str) -> io::Result<ExitStatus> {
    Command::new("gnuplot").arg(script).current_dir(dir).status()
}
