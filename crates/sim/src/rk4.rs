//! Fixed-step Runge-Kutta 4 integration.

use nalgebra::Vector5;

/// Advance `x` from `t` to `t + dt` with one classic RK4 step.
///
/// `f(x, t)` evaluates the state derivative; an error from any of the
/// four evaluations aborts the step.
pub fn rk4_step<F, E>(f: F, x: &Vector5<f64>, t: f64, dt: f64) -> Result<Vector5<f64>, E>
where
    F: Fn(&Vector5<f64>, f64) -> Result<Vector5<f64>, E>,
{
    let k1 = f(x, t)?;
    let k2 = f(&(x + k1 * (dt / 2.0)), t + dt / 2.0)?;
    let k3 = f(&(x + k2 * (dt / 2.0)), t + dt / 2.0)?;
    let k4 = f(&(x + k3 * dt), t + dt)?;
    Ok(x + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// dx/dt = -x decays exactly as e^{-t}; RK4 should track it to the
    /// step size's fourth order.
    #[test]
    fn test_exponential_decay() {
        let f = |x: &Vector5<f64>, _t: f64| Ok::<_, ()>(-*x);
        let mut x = Vector5::repeat(1.0);
        let dt = 0.1;
        for i in 0..10 {
            x = rk4_step(f, &x, f64::from(i) * dt, dt).unwrap();
        }
        let exact = (-1.0_f64).exp();
        assert!(
            (x[0] - exact).abs() < 1e-6,
            "RK4 drifted from e^-1: {} vs {}",
            x[0],
            exact
        );
    }

    /// A circular oscillation conserves its radius well over many steps.
    #[test]
    fn test_harmonic_oscillator_energy() {
        let f = |x: &Vector5<f64>, _t: f64| {
            Ok::<_, ()>(Vector5::new(x[1], -x[0], 0.0, 0.0, 0.0))
        };
        let mut x = Vector5::new(1.0, 0.0, 0.0, 0.0, 0.0);
        let dt = 0.01;
        for i in 0..1_000 {
            x = rk4_step(f, &x, f64::from(i) * dt, dt).unwrap();
        }
        let radius = (x[0] * x[0] + x[1] * x[1]).sqrt();
        assert!(
            (radius - 1.0).abs() < 1e-6,
            "oscillator radius drifted to {}",
            radius
        );
    }

    #[test]
    fn test_error_aborts_the_step() {
        let f = |_x: &Vector5<f64>, _t: f64| Err::<Vector5<f64>, &str>("boom");
        let x = Vector5::repeat(0.0);
        assert!(rk4_step(f, &x, 0.0, 0.1).is_err());
    }
}
