//! Shared math helpers for the spinsim crates.
//!
//! Angle normalization plus the unit conversions used at the boundary
//! between datasheet units (deg, RPM, RPM/V) and the SI units the model
//! works in (rad, rad/s, V·s/rad).

use std::f64::consts::TAU;

/// Normalize an angle into `[0, 2π)`.
///
/// Periodic: `normalize_angle(a + 2π·k) == normalize_angle(a)` for any
/// integer `k`, up to floating-point rounding.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to the modulus itself for tiny negative
    // inputs; fold that back onto 0 so the result stays inside [0, 2π).
    if a == TAU {
        0.0
    } else {
        a
    }
}

/// Degrees of an angle in radians.
pub fn deg_of_rad(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Radians of an angle in degrees.
pub fn rad_of_deg(deg: f64) -> f64 {
    deg.to_radians()
}

/// RPM of an angular velocity in rad/s.
pub fn rpm_of_rad_per_sec(rad_per_sec: f64) -> f64 {
    rad_per_sec * 60.0 / TAU
}

/// rad/s of an angular velocity in RPM.
pub fn rad_per_sec_of_rpm(rpm: f64) -> f64 {
    rpm * TAU / 60.0
}

/// Back-EMF constant ke (V·s/rad) of a datasheet velocity constant (RPM/V).
///
/// A motor spinning at `kv` RPM per applied volt induces `1/kv` volts per
/// RPM of shaft speed; this is that same figure in SI units.
pub fn bemf_constant_of_velocity_constant(kv_rpm_per_volt: f64) -> f64 {
    1.0 / rad_per_sec_of_rpm(kv_rpm_per_volt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_normalize_angle_range() {
        for &a in &[0.0, 0.1, PI, 6.2, -0.1, -PI, 100.0, -100.0] {
            let n = normalize_angle(a);
            assert!(
                (0.0..TAU).contains(&n),
                "normalize_angle({}) = {} escaped [0, 2π)",
                a,
                n
            );
        }
    }

    #[test]
    fn test_normalize_angle_periodic() {
        for k in -3_i32..=3 {
            let a = 1.234;
            let shifted = a + TAU * f64::from(k);
            assert!(
                (normalize_angle(shifted) - normalize_angle(a)).abs() < 1e-9,
                "normalize_angle not periodic for k={}: {} vs {}",
                k,
                normalize_angle(shifted),
                normalize_angle(a)
            );
        }
    }

    #[test]
    fn test_normalize_angle_tiny_negative() {
        // -1e-18 + 2π rounds to exactly 2π; the result must still be < 2π.
        let n = normalize_angle(-1e-18);
        assert!(n < TAU, "tiny negative angle normalized to {}", n);
    }

    #[test]
    fn test_angle_conversions() {
        assert!((deg_of_rad(PI) - 180.0).abs() < 1e-12);
        assert!((rad_of_deg(90.0) - PI / 2.0).abs() < 1e-12);
        assert!((rpm_of_rad_per_sec(TAU) - 60.0).abs() < 1e-9);
        assert!((rad_per_sec_of_rpm(60.0) - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_bemf_constant_of_velocity_constant() {
        // 1000 RPM/V: ke = 60 / (2π · 1000) ≈ 9.5493e-3 V·s/rad
        let ke = bemf_constant_of_velocity_constant(1000.0);
        assert!(
            (ke - 0.0095493).abs() < 1e-6,
            "ke for 1000 RPM/V should be ≈0.0095493, got {}",
            ke
        );
    }
}
