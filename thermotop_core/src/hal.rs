//! Hardware seam for the rig. No real driver lives in this crate; the trait
//! describes what one would be asked to do, and `SimBench` records the
//! commanded state so the shell has something to display.

use crate::sample::Zone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JogDirection {
    Forward,
    Reverse,
}

/// PID tuning entered on the setup screen. Stored only; nothing in this
/// crate runs a control loop with them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PidGains {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
}

/// What a heater/stepper driver exposes to the shell.
pub trait ControllerIo {
    fn set_heater(&mut self, zone: Zone, on: bool);
    fn heater_on(&self, zone: Zone) -> bool;

    fn set_manual_enable(&mut self, zone: Zone, enabled: bool);
    fn manual_enabled(&self, zone: Zone) -> bool;

    /// Move the stepper one step. Only honored while manual enable is set
    /// for the zone, matching the physical interlock on the rig.
    fn jog_stepper(&mut self, zone: Zone, direction: JogDirection);
    /// Position in whole steps; jogging is the only thing that moves it.
    fn stepper_position(&self, zone: Zone) -> i64;
}

/// Bench stand-in: remembers commanded state, moves nothing.
#[derive(Debug, Default)]
pub struct SimBench {
    heater_on: [bool; 2],
    manual_enable: [bool; 2],
    stepper_position: [i64; 2],
}

impl SimBench {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ControllerIo for SimBench {
    fn set_heater(&mut self, zone: Zone, on: bool) {
        self.heater_on[zone.index()] = on;
    }

    fn heater_on(&self, zone: Zone) -> bool {
        self.heater_on[zone.index()]
    }

    fn set_manual_enable(&mut self, zone: Zone, enabled: bool) {
        self.manual_enable[zone.index()] = enabled;
    }

    fn manual_enabled(&self, zone: Zone) -> bool {
        self.manual_enable[zone.index()]
    }

    fn jog_stepper(&mut self, zone: Zone, direction: JogDirection) {
        if !self.manual_enable[zone.index()] {
            return;
        }
        let step = match direction {
            JogDirection::Forward => 1,
            JogDirection::Reverse => -1,
        };
        self.stepper_position[zone.index()] += step;
    }

    fn stepper_position(&self, zone: Zone) -> i64 {
        self.stepper_position[zone.index()]
    }
}
