// Library-Root: Hardware-Bindung der GPIO-Demos
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von gpio-core
pub use gpio_core::{
    Blinker, DemoCommand, DriverStatus, GpioError, IntervalChange, RgbCycler, ShiftRegisterDriver,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::pubsub::{PubSubChannel, Publisher, Subscriber};

use crate::config::{COMMAND_CAPACITY, COMMAND_PUBLISHERS, COMMAND_SUBSCRIBERS};
use crate::hal::{EmbassyTickSource, EspOutputLine};

// ============================================================================
// Type-Aliase für die Demo-Treiber auf echter Hardware
// ============================================================================

/// Schieberegister-Treiber mit esp-hal Leitungen und embassy Taktquelle
pub type EspShiftRegister = ShiftRegisterDriver<EspOutputLine, EmbassyTickSource>;

/// Blinky-Demo mit esp-hal Leitung und embassy Taktquelle
pub type EspBlinker = Blinker<EspOutputLine, EmbassyTickSource>;

/// RGB-Demo mit esp-hal Leitungen und embassy Taktquelle
pub type EspRgbCycler = RgbCycler<EspOutputLine, EmbassyTickSource>;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Publisher<'static, NoopRawMutex, DemoCommand, 4, 3, 2>
// Nutze:  DemoCommandPublisher

/// PubSubChannel für Bedien-Kommandos (Taster → alle Demo-Tasks)
/// Jeder Demo-Task bekommt jedes Kommando und ignoriert, was ihn nicht betrifft.
pub type DemoCommandChannel = PubSubChannel<
    NoopRawMutex,
    DemoCommand,
    COMMAND_CAPACITY,
    COMMAND_SUBSCRIBERS,
    COMMAND_PUBLISHERS,
>;

/// Publisher für Bedien-Kommandos (Taster-Tasks)
pub type DemoCommandPublisher = Publisher<
    'static,
    NoopRawMutex,
    DemoCommand,
    COMMAND_CAPACITY,
    COMMAND_SUBSCRIBERS,
    COMMAND_PUBLISHERS,
>;

/// Subscriber für Bedien-Kommandos (Demo-Tasks)
pub type DemoCommandSubscriber = Subscriber<
    'static,
    NoopRawMutex,
    DemoCommand,
    COMMAND_CAPACITY,
    COMMAND_SUBSCRIBERS,
    COMMAND_PUBLISHERS,
>;
