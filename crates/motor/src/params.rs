//! Immutable physical parameters of the simulated motor.

use serde::Deserialize;
use spinsim_core::bemf_constant_of_velocity_constant;

/// Physical parameters of a three-phase BLDC motor.
///
/// Created once at startup and shared by reference for the rest of the
/// run. Every field is required: a parameter file with a missing field
/// fails to parse, which is fatal before the simulation starts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MotorParams {
    /// Number of rotor poles (two poles per pole pair).
    pub n_poles: u32,
    /// Rotor inertia (kg·m²).
    pub inertia: f64,
    /// Viscous damping coefficient (N·m·s/rad).
    pub damping: f64,
    /// DC supply voltage across the bridge (V).
    pub supply_voltage: f64,
    /// Per-phase winding resistance (Ω).
    pub phase_resistance: f64,
    /// Per-phase self-inductance (H).
    pub coil_inductance: f64,
    /// Mutual inductance between two phases (H).
    pub mutual_inductance: f64,
    /// Velocity constant (RPM/V), as printed on the datasheet.
    pub velocity_constant: f64,
    /// Forward voltage of the free-wheeling diodes (V). Unused until
    /// diode conduction is modeled; see `voltages`.
    pub diode_forward_voltage: f64,
}

impl MotorParams {
    /// Electrical cycles per mechanical revolution.
    pub fn pole_pairs(&self) -> f64 {
        f64::from(self.n_poles) / 2.0
    }

    /// Back-EMF constant ke (V·s/rad) derived from the velocity constant.
    pub fn bemf_constant(&self) -> f64 {
        bemf_constant_of_velocity_constant(self.velocity_constant)
    }
}
