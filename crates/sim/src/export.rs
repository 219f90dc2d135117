//! CSV export of the recorded series.
//!
//! The display side of the simulator is an external consumer; what leaves
//! the process is a pair of time-indexed CSV files, decimated by the
//! configured stride.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;

use crate::driver::SimTrace;

/// Write `output.csv` and `debug.csv` under `dir`, keeping every
/// `stride`-th sample.
pub fn write_csv(trace: &SimTrace, dir: &Path, stride: usize) -> anyhow::Result<()> {
    let stride = stride.max(1);
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let path = dir.join("output.csv");
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "time,i_u,i_v,i_w,v_u,v_v,v_w,theta,omega")?;
    for i in (0..trace.time.len()).step_by(stride) {
        let y = &trace.outputs[i];
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{}",
            trace.time[i], y.i_u, y.i_v, y.i_w, y.v_u, y.v_v, y.v_w, y.theta, y.omega
        )?;
    }
    out.flush()?;

    let path = dir.join("debug.csv");
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "time,e_u,e_v,e_w,v_u,v_v,v_w,v_star")?;
    for i in (0..trace.time.len()).step_by(stride) {
        let d = &trace.debug[i];
        writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            trace.time[i], d.e_u, d.e_v, d.e_w, d.v_u, d.v_v, d.v_w, d.v_star
        )?;
    }
    out.flush()?;

    Ok(())
}
