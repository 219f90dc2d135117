//! Electromechanical dynamics: torque balance and winding currents.

use crate::bemf::AngleBoundError;
use crate::command::{Phase, SwitchCommand};
use crate::output::{DebugTrace, MotorOutput};
use crate::params::MotorParams;
use crate::state::{MotorState, Perturbation, StateDerivative};

/// Coulomb friction deadband applied to the net mechanical torque.
///
/// Torque inside `(0, threshold]` or `[-threshold, 0)` is absorbed
/// entirely; beyond the threshold the friction torque is subtracted.
/// Exactly zero torque passes through unchanged. The boundary
/// inclusivities are load-bearing: a torque of exactly `threshold` maps
/// to zero, `threshold + ε` maps to `ε`.
fn coulomb_deadband(torque: f64, threshold: f64) -> f64 {
    if torque > 0.0 && torque <= threshold {
        0.0
    } else if torque >= threshold {
        torque - threshold
    } else if torque < 0.0 && torque >= -threshold {
        0.0
    } else if torque <= -threshold {
        torque + threshold
    } else {
        torque
    }
}

impl MotorParams {
    /// State derivative for the integrator.
    ///
    /// Same computation as [`MotorParams::derivative_debug`] with the
    /// instrumentation discarded.
    pub fn derivative(
        &self,
        state: &MotorState,
        t: f64,
        command: &SwitchCommand,
        perturbation: &Perturbation,
    ) -> Result<StateDerivative, AngleBoundError> {
        let (derivative, _) = self.derivative_debug(state, t, command, perturbation)?;
        Ok(derivative)
    }

    /// State derivative plus the per-step instrumentation trace.
    ///
    /// The electromagnetic torque is the electrical power over the shaft
    /// speed, `Σ e·i / ω`, which is singular at ω = 0; the quotient is
    /// propagated as-is (NaN or ±inf) rather than clamped.
    pub fn derivative_debug(
        &self,
        state: &MotorState,
        _t: f64,
        command: &SwitchCommand,
        perturbation: &Perturbation,
    ) -> Result<(StateDerivative, DebugTrace), AngleBoundError> {
        let e_u = self.back_emf(state, Phase::U.electrical_offset())?;
        let e_v = self.back_emf(state, Phase::V.electrical_offset())?;
        let e_w = self.back_emf(state, Phase::W.electrical_offset())?;

        let electromagnetic_torque =
            (e_u * state.i_u + e_v * state.i_v + e_w * state.i_w) / state.omega;

        let mechanical_torque = electromagnetic_torque * self.pole_pairs()
            - self.damping * state.omega
            - perturbation.load_torque;
        let mechanical_torque =
            coulomb_deadband(mechanical_torque, perturbation.static_friction);

        let omega_dot = mechanical_torque / self.inertia;

        let v = self.voltages(state, command)?;
        let inductance = self.coil_inductance - self.mutual_inductance;
        let i_u_dot = (v.u - self.phase_resistance * state.i_u - e_u - v.star) / inductance;
        let i_v_dot = (v.v - self.phase_resistance * state.i_v - e_v - v.star) / inductance;
        let i_w_dot = (v.w - self.phase_resistance * state.i_w - e_w - v.star) / inductance;

        let derivative = StateDerivative {
            theta_dot: state.omega,
            omega_dot,
            i_u_dot,
            i_v_dot,
            i_w_dot,
        };
        let trace = DebugTrace {
            e_u,
            e_v,
            e_w,
            v_u: v.u,
            v_v: v.v,
            v_w: v.w,
            v_star: v.star,
        };
        Ok((derivative, trace))
    }

    /// Assemble the observable output for one step from the state and the
    /// switch command the terminals saw.
    pub fn output(
        &self,
        state: &MotorState,
        command: &SwitchCommand,
    ) -> Result<MotorOutput, AngleBoundError> {
        let v = self.voltages(state, command)?;
        Ok(MotorOutput {
            i_u: state.i_u,
            i_v: state.i_v,
            i_w: state.i_w,
            v_u: v.u,
            v_v: v.v,
            v_w: v.w,
            theta: state.theta,
            omega: state.omega,
        })
    }
}
