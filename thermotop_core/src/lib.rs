//! Data core for the thermotop console: bounded sample history, the hardware
//! seam, and the simulated reading source. No I/O and no global state; the UI
//! shell owns one instance of everything here.

pub mod buffer;
pub mod hal;
pub mod sample;
pub mod sim;

pub use buffer::{BufferError, Retention, SampleBuffer};
pub use sample::{Sample, Zone};
