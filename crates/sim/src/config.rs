//! YAML run configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use spinsim_control::{PwmConfig, SwitchPolicy};
use spinsim_motor::MotorParams;

/// Complete configuration for one simulation run.
///
/// The `motor` section is mandatory and every one of its fields is
/// required; the remaining sections fall back to their defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct SimConfig {
    pub motor: MotorParams,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub pwm: PwmConfig,
    #[serde(default)]
    pub policy: SwitchPolicy,
}

/// Time stepping, initial conditions and disturbance inputs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Stepping frequency (Hz).
    pub frequency: f64,
    /// Simulated duration (s).
    pub duration: f64,
    /// Initial rotor angle (rad).
    pub initial_theta: f64,
    /// Initial angular velocity (rad/s). Kept non-zero: the torque
    /// balance is singular at exact standstill.
    pub initial_omega: f64,
    /// External load torque (N·m).
    pub load_torque: f64,
    /// Static friction threshold (N·m).
    pub static_friction: f64,
    /// Keep every n-th sample when exporting.
    pub export_stride: usize,
    /// Directory the exported series are written to.
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frequency: 10_000.0,
            duration: 1.0,
            initial_theta: 0.0,
            initial_omega: 0.0017,
            load_torque: 0.0,
            static_friction: 1.0,
            export_stride: 3,
            output_dir: PathBuf::from("out"),
        }
    }
}

impl SimConfig {
    /// Load and validate a run configuration from a YAML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: SimConfig = serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.pwm.duty > 0.0 && self.pwm.duty < 1.0,
            "pwm duty must lie in (0, 1), got {}",
            self.pwm.duty
        );
        anyhow::ensure!(
            self.run.frequency > 0.0,
            "run frequency must be positive, got {}",
            self.run.frequency
        );
        anyhow::ensure!(
            self.run.duration > 0.0,
            "run duration must be positive, got {}",
            self.run.duration
        );
        Ok(())
    }
}
