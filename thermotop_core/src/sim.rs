//! Simulated readings standing in for the real probe and heater feedback.

use rand::Rng;

use crate::sample::Sample;

/// Produces one reading per tick with a monotonically advancing clock.
pub struct SimSource {
    clock: f64,
    tick: f64,
}

impl SimSource {
    pub fn new(tick_secs: f64) -> Self {
        Self {
            clock: 0.0,
            tick: tick_secs,
        }
    }

    /// Next reading: temperature wanders in the 25–30 °C band, drive is
    /// random while the heater is commanded on and zero otherwise. The
    /// setpoint is the operator-entered value, recorded as-is.
    pub fn next_sample(&mut self, setpoint: f64, heater_on: bool) -> Sample {
        let mut rng = rand::thread_rng();
        let sample = Sample {
            timestamp: self.clock,
            temperature: rng.gen_range(25.0..30.0),
            setpoint,
            heater_output: if heater_on {
                rng.gen_range(0.0..100.0)
            } else {
                0.0
            },
        };
        self.clock += self.tick;
        sample
    }
}
