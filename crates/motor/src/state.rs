//! Mechanical and electrical state advanced by the integrator.

use nalgebra::Vector5;
use spinsim_core::normalize_angle;

/// Instantaneous motor state: rotor position and speed plus the three
/// phase currents.
///
/// Owned and mutated exclusively by the integration step of the driver.
/// The angle must be folded back into `[0, 2π)` after every step; the
/// back-EMF lookup depends on that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotorState {
    /// Mechanical rotor angle (rad).
    pub theta: f64,
    /// Mechanical angular velocity (rad/s).
    pub omega: f64,
    /// Phase U current (A).
    pub i_u: f64,
    /// Phase V current (A).
    pub i_v: f64,
    /// Phase W current (A).
    pub i_w: f64,
}

impl MotorState {
    /// Flatten into the column vector handed to the ODE solver.
    ///
    /// Component order is θ, ω, i_u, i_v, i_w — a fixed contract shared
    /// with [`StateDerivative::to_vector`] and [`MotorState::from_vector`].
    pub fn to_vector(&self) -> Vector5<f64> {
        Vector5::new(self.theta, self.omega, self.i_u, self.i_v, self.i_w)
    }

    /// Rebuild a state from the solver's column vector.
    pub fn from_vector(v: &Vector5<f64>) -> Self {
        Self {
            theta: v[0],
            omega: v[1],
            i_u: v[2],
            i_v: v[3],
            i_w: v[4],
        }
    }

    /// Fold θ back into `[0, 2π)`.
    pub fn normalize_theta(&mut self) {
        self.theta = normalize_angle(self.theta);
    }
}

/// Time derivative of [`MotorState`], same component order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateDerivative {
    pub theta_dot: f64,
    pub omega_dot: f64,
    pub i_u_dot: f64,
    pub i_v_dot: f64,
    pub i_w_dot: f64,
}

impl StateDerivative {
    /// Flatten into the column vector consumed by the ODE solver.
    pub fn to_vector(&self) -> Vector5<f64> {
        Vector5::new(
            self.theta_dot,
            self.omega_dot,
            self.i_u_dot,
            self.i_v_dot,
            self.i_w_dot,
        )
    }
}

/// External disturbance inputs, constant or externally driven; never
/// mutated by the model itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Perturbation {
    /// External load torque on the shaft (N·m).
    pub load_torque: f64,
    /// Static friction threshold (N·m) of the Coulomb deadband.
    pub static_friction: f64,
}
