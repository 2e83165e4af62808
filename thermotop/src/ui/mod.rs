//! UI module root: exposes drawing functions for individual panels.

pub mod footer;
pub mod header;
pub mod setup;
pub mod trend;
pub mod zones;
