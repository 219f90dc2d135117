//! Trapezoidal back-EMF waveform.

use std::f64::consts::{PI, TAU};

use spinsim_core::normalize_angle;
use thiserror::Error;

use crate::params::MotorParams;
use crate::state::MotorState;

/// An electrical angle escaped `[0, 2π)` after normalization.
///
/// Signals a broken normalization invariant upstream, not a recoverable
/// runtime condition: the step is aborted instead of patched over.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("electrical angle {angle} rad is outside [0, 2π)")]
pub struct AngleBoundError {
    pub angle: f64,
}

/// Trapezoidal waveform over one electrical revolution.
///
/// Six regions of `[0, 2π)`, half-open so every normalized angle falls in
/// exactly one: a linear rise through zero over `[0°, 30°)`, a `+peak`
/// plateau over `[30°, 150°)`, a linear fall through zero at 180° over
/// `[150°, 210°)`, a `-peak` plateau over `[210°, 330°)`, and a linear
/// rise back towards zero over `[330°, 360°)`. Angles outside `[0, 2π)`
/// (including NaN) are rejected.
pub fn trapezoid(angle: f64, peak: f64) -> Result<f64, AngleBoundError> {
    if !(0.0..TAU).contains(&angle) {
        return Err(AngleBoundError { angle });
    }

    let value = if angle < PI * (1.0 / 6.0) {
        (peak / (PI * (1.0 / 6.0))) * angle
    } else if angle < PI * (5.0 / 6.0) {
        peak
    } else if angle < PI * (7.0 / 6.0) {
        -((peak / (PI / 6.0)) * (angle - PI))
    } else if angle < PI * (11.0 / 6.0) {
        -peak
    } else {
        (peak / (PI / 6.0)) * (angle - TAU)
    };

    Ok(value)
}

impl MotorParams {
    /// Back-EMF induced in the winding sitting `phase_offset` rad
    /// (electrical) from phase U, at the given rotor state.
    ///
    /// The rotor angle is converted to an electrical angle
    /// (`θ · pole_pairs + offset`, normalized) and the waveform is scaled
    /// by `ke · ω`.
    pub fn back_emf(
        &self,
        state: &MotorState,
        phase_offset: f64,
    ) -> Result<f64, AngleBoundError> {
        let electrical_angle = normalize_angle(state.theta * self.pole_pairs() + phase_offset);
        let peak = self.bemf_constant() * state.omega;
        trapezoid(electrical_angle, peak)
    }
}
