//! Bridge switch commands applied to the motor terminals.

use std::f64::consts::PI;

/// One of the three motor phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    U,
    V,
    W,
}

impl Phase {
    /// Electrical angle offset of this phase's back-EMF relative to
    /// phase U (rad).
    pub fn electrical_offset(self) -> f64 {
        match self {
            Phase::U => 0.0,
            Phase::V => PI * (2.0 / 3.0),
            Phase::W => PI * (4.0 / 3.0),
        }
    }
}

/// The six switch lines of the three-phase bridge: one high-side and one
/// low-side switch per phase, `true` meaning closed.
///
/// Produced fresh by the controller every step and not retained. The high
/// and low switch of one leg must never be closed together (that would
/// short the supply through the leg); the dynamics assert this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwitchCommand {
    pub low_u: bool,
    pub high_u: bool,
    pub low_v: bool,
    pub high_v: bool,
    pub low_w: bool,
    pub high_w: bool,
}

impl SwitchCommand {
    /// A phase is excited (driven) when either of its switches is closed;
    /// otherwise it floats.
    pub fn excited(&self, phase: Phase) -> bool {
        match phase {
            Phase::U => self.high_u || self.low_u,
            Phase::V => self.high_v || self.low_v,
            Phase::W => self.high_w || self.low_w,
        }
    }

    /// True when some leg has both switches closed at once.
    pub fn shoot_through(&self) -> bool {
        (self.high_u && self.low_u) || (self.high_v && self.low_v) || (self.high_w && self.low_w)
    }
}
