//! Observable per-step quantities, derived rather than stored.

/// Output assembled for the commutation controller and display sinks:
/// phase currents, terminal voltages, rotor angle and speed.
///
/// Computed from the state together with the command of an *earlier* step;
/// the sensing lag is part of the simulated plant, not an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotorOutput {
    /// Phase currents (A).
    pub i_u: f64,
    pub i_v: f64,
    pub i_w: f64,
    /// Phase terminal voltages (V), relative to the supply midpoint.
    pub v_u: f64,
    pub v_v: f64,
    pub v_w: f64,
    /// Mechanical rotor angle (rad).
    pub theta: f64,
    /// Mechanical angular velocity (rad/s).
    pub omega: f64,
}

/// Instrumentation trace: per-phase back-EMF and the reconstructed
/// terminal voltages. Never consumed by the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DebugTrace {
    /// Back-EMF per phase (V).
    pub e_u: f64,
    pub e_v: f64,
    pub e_w: f64,
    /// Reconstructed terminal voltages (V).
    pub v_u: f64,
    pub v_v: f64,
    pub v_w: f64,
    /// Reconstructed star-point potential (V).
    pub v_star: f64,
}
