// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use gpio_core::config::{DEMO_INTERVAL_MS, HALT_INTERVAL_MS, SHIFT_INTERVAL_MS};
use gpio_core::{BlinkConfig, RgbConfig, ShiftRegisterConfig, ShiftRegisterPins};

// ============================================================================
// Schieberegister (74HC595) Konfiguration
// ============================================================================
//
// WICHTIG: Die Pin-Nummern müssen zu den Peripherals passen, die main.rs
// an den EspGpioController übergibt (z.B. GPIO0 ↔ 0).

/// Pins des 74HC595 auf dem ESP32-C6
pub const SHIFT_REGISTER_PINS: ShiftRegisterPins = ShiftRegisterPins {
    shift_clock: 0,    // SRCLK
    serial: 1,         // SER
    register_clock: 2, // RCLK
    output_enable: 3,  // OE (low-aktiv)
    clear: 4,          // SRCLR (low-aktiv)
};

pub const SHIFT_REGISTER: ShiftRegisterConfig = ShiftRegisterConfig {
    pins: SHIFT_REGISTER_PINS,
    interval_ms: SHIFT_INTERVAL_MS,
    minimum_interval_ms: HALT_INTERVAL_MS,
};

// ============================================================================
// Blinky Konfiguration
// ============================================================================

/// GPIO-Pin für die Blinky-LED (low-aktiv)
pub const BLINK_LED_PIN: u8 = 5;

/// Blink-Intervall in Millisekunden
pub const BLINK_INTERVAL_MS: f64 = DEMO_INTERVAL_MS;

pub const BLINK: BlinkConfig = BlinkConfig {
    led_pin: BLINK_LED_PIN,
    interval_ms: BLINK_INTERVAL_MS,
    minimum_interval_ms: HALT_INTERVAL_MS,
};

// ============================================================================
// RGB LED Konfiguration
// ============================================================================
//
// GPIO8 ist die Onboard-WS2812 und ein Strapping-Pin, GPIO12/13 sind USB.
// Daher liegt die diskrete RGB-LED auf GPIO18-20.

pub const RGB_RED_PIN: u8 = 18;
pub const RGB_BLUE_PIN: u8 = 19;
pub const RGB_GREEN_PIN: u8 = 20;

/// Farbwechsel-Intervall in Millisekunden
pub const RGB_INTERVAL_MS: f64 = DEMO_INTERVAL_MS;

pub const RGB: RgbConfig = RgbConfig {
    red_pin: RGB_RED_PIN,
    blue_pin: RGB_BLUE_PIN,
    green_pin: RGB_GREEN_PIN,
    interval_ms: RGB_INTERVAL_MS,
    minimum_interval_ms: HALT_INTERVAL_MS,
};

// ============================================================================
// Taster Konfiguration
// ============================================================================

/// Toggle-Taster (BOOT-Taster auf dem DevKit): Polarität umschalten
pub const TOGGLE_BUTTON_PIN: u8 = 9;

/// Intervall-Taster: schaltet durch INTERVAL_PRESETS_MS
pub const INTERVAL_BUTTON_PIN: u8 = 21;

/// Entprell-Zeit der Taster in Millisekunden
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Intervall-Stufen für den Intervall-Taster
/// Der Halt-Wert stoppt alle Demos, die nächste Stufe startet sie wieder.
pub const INTERVAL_PRESETS_MS: [f64; 6] = [100.0, 250.0, 500.0, 1000.0, HALT_INTERVAL_MS, 50.0];

// ============================================================================
// Command Channel Konfiguration
// ============================================================================

/// Kapazität des Command-Channels (Nachrichten)
pub const COMMAND_CAPACITY: usize = 4;

/// Anzahl Subscribers: Schieberegister, Blinky, RGB
pub const COMMAND_SUBSCRIBERS: usize = 3;

/// Anzahl Publishers: Toggle-Taster, Intervall-Taster
pub const COMMAND_PUBLISHERS: usize = 2;
