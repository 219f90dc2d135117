//! Electrical and mechanical model of a three-phase BLDC motor.
//!
//! The model is split along the data it owns: immutable [`MotorParams`],
//! the integrator-owned [`MotorState`], and the per-step inputs
//! ([`SwitchCommand`], [`Perturbation`]). The dynamics are exposed as a
//! derivative function suitable for an external fixed-step ODE solver,
//! plus the observable [`MotorOutput`] the commutation controller runs on.

pub mod bemf;
pub mod command;
pub mod dynamics;
pub mod output;
pub mod params;
pub mod state;
pub mod voltages;

pub use bemf::{trapezoid, AngleBoundError};
pub use command::{Phase, SwitchCommand};
pub use output::{DebugTrace, MotorOutput};
pub use params::MotorParams;
pub use state::{MotorState, Perturbation, StateDerivative};
pub use voltages::PhaseVoltages;

/// Parameter set for a small 4-pole motor, shared by the unit tests.
#[cfg(test)]
pub(crate) fn test_params() -> MotorParams {
    MotorParams {
        n_poles: 4,
        inertia: 1e-6,
        damping: 1e-6,
        supply_voltage: 24.0,
        phase_resistance: 1.0,
        coil_inductance: 1e-3,
        mutual_inductance: 1e-4,
        velocity_constant: 1000.0,
        diode_forward_voltage: 0.7,
    }
}
