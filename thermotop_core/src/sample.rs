//! One timestamped reading per control zone.

/// The two heater/probe zones of the rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    A,
    B,
}

impl Zone {
    pub const ALL: [Zone; 2] = [Zone::A, Zone::B];

    pub fn index(self) -> usize {
        match self {
            Zone::A => 0,
            Zone::B => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Zone::A => "Zone A",
            Zone::B => "Zone B",
        }
    }
}

/// A single reading, immutable once recorded. Timestamps are seconds since
/// startup and must never move backwards within a buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: f64,
    /// Measured temperature in °C.
    pub temperature: f64,
    /// Operator setpoint in °C at the time of the reading.
    pub setpoint: f64,
    /// Heater drive in percent (0..=100).
    pub heater_output: f64,
}
