//! PWM carrier configuration.

use serde::Deserialize;

/// Fixed-frequency PWM carrier driving the chopped switch.
///
/// Passed explicitly to the controller; there is no ambient PWM state.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PwmConfig {
    /// Carrier frequency (Hz).
    pub frequency: f64,
    /// Duty ratio, dimensionless, `0 < duty < 1`.
    pub duty: f64,
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self {
            frequency: 16_000.0,
            duty: 0.4,
        }
    }
}

impl PwmConfig {
    /// Carrier period (s).
    pub fn period(&self) -> f64 {
        1.0 / self.frequency
    }

    /// Whether the chopped switch is commanded on at time `t`: the first
    /// `duty` fraction of every carrier period, end inclusive.
    pub fn chop_on(&self, t: f64) -> bool {
        t % self.period() <= self.duty * self.period()
    }
}
