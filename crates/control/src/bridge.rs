//! Six-step switching state machine.
//!
//! Maps the observed rotor angle and the PWM phase onto the six bridge
//! switch lines. The switching table is built in logical commutation
//! order (U leads V leads W) and then connected to the simulated motor's
//! terminals by an explicit lead mapping.

use serde::Deserialize;
use spinsim_core::{deg_of_rad, normalize_angle};
use spinsim_motor::{MotorOutput, Phase, SwitchCommand};
use tracing::trace;

use crate::pwm::PwmConfig;
use crate::sector::Sector;

/// How the active pair is driven during the PWM off interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchPolicy {
    /// Chop the leading phase's high side; hold the return phase's low
    /// side on for the whole sector. The pair coasts while the chop is
    /// off.
    #[default]
    HighPwmLowOn,
    /// Alternate the active pair's polarity every PWM interval instead of
    /// coasting, approximating bipolar drive. The mean pair voltage is
    /// `(2·duty − 1)·Vdc`, so duty below 0.5 drives the rotor backwards.
    BipolarAlternating,
}

/// Switch state of one bridge leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Leg {
    pub high: bool,
    pub low: bool,
}

/// Bridge switch states in logical commutation order, before the phase
/// leads are connected to the motor terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogicalCommand {
    pub u: Leg,
    pub v: Leg,
    pub w: Leg,
}

impl LogicalCommand {
    fn leg_mut(&mut self, phase: Phase) -> &mut Leg {
        match phase {
            Phase::U => &mut self.u,
            Phase::V => &mut self.v,
            Phase::W => &mut self.w,
        }
    }
}

/// Connect the controller's logical phase leads to the motor terminals:
/// U straight through, V and W cross-wired. Swapping one lead pair picks
/// the rotation direction the logical switching table produces on the
/// motor.
pub fn connect_leads(logical: &LogicalCommand) -> SwitchCommand {
    SwitchCommand {
        high_u: logical.u.high,
        low_u: logical.u.low,
        high_v: logical.w.high,
        low_v: logical.w.low,
        high_w: logical.v.high,
        low_w: logical.v.low,
    }
}

/// Open-loop six-step commutation controller.
///
/// Pure per invocation: the switch command is a function of the last
/// observed output and the simulation time alone. The only motor
/// knowledge it carries is the pole count, needed to turn the mechanical
/// angle into an electrical one.
#[derive(Debug, Clone)]
pub struct HBridge {
    n_poles: u32,
    pub pwm: PwmConfig,
    pub policy: SwitchPolicy,
}

impl HBridge {
    pub fn new(n_poles: u32, pwm: PwmConfig, policy: SwitchPolicy) -> Self {
        Self {
            n_poles,
            pwm,
            policy,
        }
    }

    /// Compute the switch command for time `t` from the last observed
    /// output.
    pub fn run(&self, output: &MotorOutput, t: f64) -> SwitchCommand {
        let electrical_angle =
            normalize_angle(output.theta * f64::from(self.n_poles) / 2.0);
        let sector = Sector::of_electrical_angle(electrical_angle);
        let (chopped, ret) = sector.active_pair();
        let chop_on = self.pwm.chop_on(t);

        let mut logical = LogicalCommand::default();
        match self.policy {
            SwitchPolicy::HighPwmLowOn => {
                logical.leg_mut(chopped).high = chop_on;
                logical.leg_mut(ret).low = true;
            }
            SwitchPolicy::BipolarAlternating => {
                if chop_on {
                    logical.leg_mut(chopped).high = true;
                    logical.leg_mut(ret).low = true;
                } else {
                    logical.leg_mut(chopped).low = true;
                    logical.leg_mut(ret).high = true;
                }
            }
        }

        let command = connect_leads(&logical);
        trace!(
            time = t,
            sector = sector.label(),
            angle_deg = deg_of_rad(electrical_angle),
            ?command,
            "commutation"
        );
        command
    }
}
