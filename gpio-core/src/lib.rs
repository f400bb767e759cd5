//! GPIO Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Hardware-Traits, die Pure Functions und die drei
//! Demo-Treiber (Schieberegister, Blinky, RGB), die nur gegen die Traits
//! programmiert sind.

#![no_std]

pub mod blinky;
pub mod config;
pub mod interval;
pub mod logic;
pub mod rgb_cycle;
pub mod shift_register;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use blinky::Blinker;
pub use config::{BlinkConfig, RgbConfig, ShiftRegisterConfig, ShiftRegisterPins};
pub use interval::{apply_interval, is_halt};
pub use logic::{advance_mask, normalize_mask, serial_level, toggle_mask};
pub use rgb_cycle::RgbCycler;
pub use shift_register::{INITIAL_MASK, ShiftRegisterDriver};
pub use traits::{DriveMode, GpioController, GpioError, Level, OutputLine, TickSource};
pub use types::{DemoCommand, DriverStatus, IntervalChange, RgbPhase, ShiftRegisterSnapshot};
