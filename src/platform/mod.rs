//! Platform abstraction layer
//!
//! Handles everything outside the simulation:
//! - Input events and pointer position (`input`)
//! - Fixed-rate tick pacing (`time`)
//! - The native window, GPU surface and event loop (`native`)

pub mod input;
pub mod native;
pub mod time;

pub use input::{EventQueue, InputEvent, InputSource};
pub use time::{Clock, FixedRateClock};
