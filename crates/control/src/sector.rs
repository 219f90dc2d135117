//! Commutation sectors over one electrical revolution.

use std::f64::consts::PI;

use spinsim_motor::Phase;

/// The six 60°-wide commutation sectors, with the sector straddling 0°
/// split into its two halves.
///
/// Boundaries sit at the odd multiples of 30°, so that each sector is
/// centered on one of the six back-EMF waveform features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sector {
    /// `(330°, 360°)` — the half of the wrap-around sector before 0°.
    S1a,
    /// `[0°, 30°]` — the half of the wrap-around sector after 0°.
    S1b,
    /// `(30°, 90°]`.
    S2,
    /// `(90°, 150°]`.
    S3,
    /// `(150°, 210°]`.
    S4,
    /// `(210°, 270°]`.
    S5,
    /// `(270°, 330°]`.
    S6,
}

impl Sector {
    /// Sector containing a normalized electrical angle.
    ///
    /// Total over `[0, 2π)`: the intervals share their boundaries upper
    /// bound inclusive and leave no gap, so every normalized angle maps
    /// to exactly one sector.
    pub fn of_electrical_angle(angle: f64) -> Sector {
        if angle <= PI * (1.0 / 6.0) {
            Sector::S1b
        } else if angle <= PI * (3.0 / 6.0) {
            Sector::S2
        } else if angle <= PI * (5.0 / 6.0) {
            Sector::S3
        } else if angle <= PI * (7.0 / 6.0) {
            Sector::S4
        } else if angle <= PI * (9.0 / 6.0) {
            Sector::S5
        } else if angle <= PI * (11.0 / 6.0) {
            Sector::S6
        } else {
            Sector::S1a
        }
    }

    /// The actively switched phase pair of this sector, in logical
    /// commutation order: `(chopped side, return side)`. The remaining
    /// third phase floats.
    pub fn active_pair(self) -> (Phase, Phase) {
        match self {
            Sector::S1a | Sector::S1b => (Phase::W, Phase::V),
            Sector::S2 => (Phase::U, Phase::V),
            Sector::S3 => (Phase::U, Phase::W),
            Sector::S4 => (Phase::V, Phase::W),
            Sector::S5 => (Phase::V, Phase::U),
            Sector::S6 => (Phase::W, Phase::U),
        }
    }

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            Sector::S1a => "1a",
            Sector::S1b => "1b",
            Sector::S2 => "2",
            Sector::S3 => "3",
            Sector::S4 => "4",
            Sector::S5 => "5",
            Sector::S6 => "6",
        }
    }
}
