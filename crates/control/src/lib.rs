//! Six-step (trapezoidal) commutation control for the simulated motor.
//!
//! [`HBridge`] turns the rotor's electrical angle and the PWM carrier
//! phase into discrete switch commands, sector by sector.

pub mod bridge;
pub mod pwm;
pub mod sector;

pub use bridge::{connect_leads, HBridge, Leg, LogicalCommand, SwitchPolicy};
pub use pwm::PwmConfig;
pub use sector::Sector;
