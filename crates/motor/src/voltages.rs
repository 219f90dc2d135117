//! Phase terminal voltage reconstruction.
//!
//! The star point of the windings is not directly observable. Driven
//! phases sit on a supply rail; the star potential is reconstructed from
//! the driven phases and their back-EMFs, and each floating phase is then
//! inferred as its own back-EMF on top of the star potential.

use crate::bemf::AngleBoundError;
use crate::command::{Phase, SwitchCommand};
use crate::params::MotorParams;
use crate::state::MotorState;

/// Phase terminal voltages plus the reconstructed star-point potential,
/// all relative to the supply midpoint (V).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhaseVoltages {
    pub u: f64,
    pub v: f64,
    pub w: f64,
    pub star: f64,
}

impl MotorParams {
    /// Rail a driven phase is clamped to: `+Vdc/2` with the high-side
    /// switch closed, `-Vdc/2` with the low side.
    fn rail(&self, high_side: bool) -> f64 {
        if high_side {
            self.supply_voltage / 2.0
        } else {
            -self.supply_voltage / 2.0
        }
    }

    /// Reconstruct the phase voltages for the given switch state.
    ///
    /// Branches on which of the phases are excited; each floating phase
    /// reads `back_emf + star`. Free-wheeling diode conduction is not
    /// modeled, so a floating phase is never clamped to the rails.
    // TODO: clamp floating phases to ±(Vdc/2 + diode_forward_voltage) once
    // diode conduction is modeled.
    pub fn voltages(
        &self,
        state: &MotorState,
        command: &SwitchCommand,
    ) -> Result<PhaseVoltages, AngleBoundError> {
        debug_assert!(!command.shoot_through(), "shorted leg in {:?}", command);

        let e_u = self.back_emf(state, Phase::U.electrical_offset())?;
        let e_v = self.back_emf(state, Phase::V.electrical_offset())?;
        let e_w = self.back_emf(state, Phase::W.electrical_offset())?;

        let excited = (
            command.excited(Phase::U),
            command.excited(Phase::V),
            command.excited(Phase::W),
        );

        let (u, v, w, star) = match excited {
            // All three phases driven: the star floats at the rail average
            // less the back-EMF average.
            (true, true, true) => {
                let u = self.rail(command.high_u);
                let v = self.rail(command.high_v);
                let w = self.rail(command.high_w);
                let star = (u + v + w - e_u - e_v - e_w) / 3.0;
                (u, v, w, star)
            }
            // U and V driven, W floating.
            (true, true, false) => {
                let u = self.rail(command.high_u);
                let v = self.rail(command.high_v);
                let star = (u + v - e_u - e_v) / 2.0;
                (u, v, e_w + star, star)
            }
            // U and W driven, V floating.
            (true, false, true) => {
                let u = self.rail(command.high_u);
                let w = self.rail(command.high_w);
                let star = (u + w - e_u - e_w) / 2.0;
                (u, e_v + star, w, star)
            }
            // V and W driven, U floating.
            (false, true, true) => {
                let v = self.rail(command.high_v);
                let w = self.rail(command.high_w);
                let star = (v + w - e_v - e_w) / 2.0;
                (e_u + star, v, w, star)
            }
            // Only U driven.
            (true, false, false) => {
                let u = self.rail(command.high_u);
                let star = u - e_u;
                (u, e_v + star, e_w + star, star)
            }
            // Only V driven.
            (false, true, false) => {
                let v = self.rail(command.high_v);
                let star = v - e_v;
                (e_u + star, v, e_w + star, star)
            }
            // Only W driven.
            (false, false, true) => {
                let w = self.rail(command.high_w);
                let star = w - e_w;
                (e_u + star, e_v + star, w, star)
            }
            // Full coast: the star tracks phase U's back-EMF and V/W float
            // at their own; U's terminal stays at the reference zero.
            (false, false, false) => (0.0, e_v, e_w, e_u),
        };

        Ok(PhaseVoltages { u, v, w, star })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_params;

    /// At standstill every back-EMF is zero, which makes rail arithmetic
    /// easy to check by hand.
    fn standstill() -> MotorState {
        MotorState::default()
    }

    /// A spinning state with three distinct non-zero back-EMFs.
    fn spinning() -> MotorState {
        MotorState {
            theta: 0.3,
            omega: 200.0,
            ..Default::default()
        }
    }

    fn bemfs(params: &MotorParams, state: &MotorState) -> (f64, f64, f64) {
        (
            params.back_emf(state, Phase::U.electrical_offset()).unwrap(),
            params.back_emf(state, Phase::V.electrical_offset()).unwrap(),
            params.back_emf(state, Phase::W.electrical_offset()).unwrap(),
        )
    }

    #[test]
    fn test_all_three_driven_high() {
        let params = test_params();
        let command = SwitchCommand {
            high_u: true,
            high_v: true,
            high_w: true,
            ..Default::default()
        };
        let v = params.voltages(&standstill(), &command).unwrap();
        assert_eq!(v.u, 12.0);
        assert_eq!(v.v, 12.0);
        assert_eq!(v.w, 12.0);
        assert_eq!(v.star, 12.0, "star should sit at the rail average");
    }

    #[test]
    fn test_three_driven_mixed_rails() {
        let params = test_params();
        let command = SwitchCommand {
            high_u: true,
            low_v: true,
            low_w: true,
            ..Default::default()
        };
        let v = params.voltages(&standstill(), &command).unwrap();
        assert_eq!((v.u, v.v, v.w), (12.0, -12.0, -12.0));
        assert!((v.star + 4.0).abs() < 1e-12, "star should be -4 V, got {}", v.star);
    }

    #[test]
    fn test_pair_uv_floating_w() {
        let params = test_params();
        let state = spinning();
        let (e_u, e_v, e_w) = bemfs(&params, &state);
        let command = SwitchCommand {
            high_u: true,
            low_v: true,
            ..Default::default()
        };
        let v = params.voltages(&state, &command).unwrap();
        let star = (12.0 - 12.0 - e_u - e_v) / 2.0;
        assert!((v.star - star).abs() < 1e-12);
        assert!(
            (v.w - (e_w + star)).abs() < 1e-12,
            "floating W should read its bemf over the star potential"
        );
        assert_eq!((v.u, v.v), (12.0, -12.0));
    }

    #[test]
    fn test_pair_uw_floating_v() {
        let params = test_params();
        let state = spinning();
        let (e_u, e_v, e_w) = bemfs(&params, &state);
        let command = SwitchCommand {
            low_u: true,
            high_w: true,
            ..Default::default()
        };
        let v = params.voltages(&state, &command).unwrap();
        let star = (-12.0 + 12.0 - e_u - e_w) / 2.0;
        assert!((v.star - star).abs() < 1e-12);
        assert!((v.v - (e_v + star)).abs() < 1e-12, "floating V mis-reconstructed");
        assert_eq!((v.u, v.w), (-12.0, 12.0));
    }

    #[test]
    fn test_pair_vw_floating_u() {
        let params = test_params();
        let state = spinning();
        let (e_u, e_v, e_w) = bemfs(&params, &state);
        let command = SwitchCommand {
            high_v: true,
            low_w: true,
            ..Default::default()
        };
        let v = params.voltages(&state, &command).unwrap();
        let star = (12.0 - 12.0 - e_v - e_w) / 2.0;
        assert!((v.star - star).abs() < 1e-12);
        assert!((v.u - (e_u + star)).abs() < 1e-12, "floating U mis-reconstructed");
        assert_eq!((v.v, v.w), (12.0, -12.0));
    }

    #[test]
    fn test_single_phase_driven() {
        let params = test_params();
        let state = spinning();
        let (e_u, e_v, e_w) = bemfs(&params, &state);
        let command = SwitchCommand {
            high_v: true,
            ..Default::default()
        };
        let v = params.voltages(&state, &command).unwrap();
        let star = 12.0 - e_v;
        assert!((v.star - star).abs() < 1e-12);
        assert_eq!(v.v, 12.0);
        assert!((v.u - (e_u + star)).abs() < 1e-12);
        assert!((v.w - (e_w + star)).abs() < 1e-12);
    }

    #[test]
    fn test_full_coast() {
        let params = test_params();
        let state = spinning();
        let (e_u, e_v, e_w) = bemfs(&params, &state);
        let v = params
            .voltages(&state, &SwitchCommand::default())
            .unwrap();
        assert_eq!(v.u, 0.0, "coasting U terminal stays at the reference");
        assert!((v.v - e_v).abs() < 1e-12);
        assert!((v.w - e_w).abs() < 1e-12);
        assert!((v.star - e_u).abs() < 1e-12, "coasting star tracks e_u");
    }
}
