//! Plain-text trajectory output
//!
//! One `.dat` file per run: a `# t x v` header followed by one
//! whitespace-separated row per sample, ready for gnuplot's `using` clauses

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use crate::simulation::states::Trajectory;

/// Render a trajectory as a `.dat` table
pub fn format_dat(traj: &Trajectory) -> String {
    let mut out = String::with_capacity(traj.len() * 36 + 8);
    out.push_str("# t x v\n");
    for s in &traj.samples {
        // write! into a String cannot fail
        let _ = writeln!(out, "{:.9e} {:.9e} {:.9e}", s.t, s.x, s.v);
    }
    out
}

/// Write `traj` to `path` in `.dat` form
pub fn write_dat(path: &Path, traj: &Trajectory) -> io::Result<()> {
    fs::write(path, format_dat(traj))
}
