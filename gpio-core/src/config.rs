//! Konfiguration der Demos: Pin-Zuordnungen und Intervalle
//!
//! Die `Default`-Werte entsprechen der Referenz-Verdrahtung
//! (Raspberry Pi 2 GPIO-Nummern). Die Firmware überschreibt sie mit
//! den ESP32-C6 Pins aus ihrer `config.rs`.

/// Intervall-Wert, der "gestoppt" bedeutet (Minimum des Reglers)
pub const HALT_INTERVAL_MS: f64 = 0.0;

/// Standard-Takt für das Schieberegister in Millisekunden
pub const SHIFT_INTERVAL_MS: f64 = 100.0;

/// Standard-Takt für Blinky und RGB in Millisekunden
pub const DEMO_INTERVAL_MS: f64 = 500.0;

/// Helligkeit der Anzeigefarbe (0-255)
pub const INDICATOR_BRIGHTNESS: u8 = 10;

/// Die fünf Steuerleitungen des 74HC595
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShiftRegisterPins {
    /// SRCLK: Takt für den seriellen Eingang
    pub shift_clock: u8,
    /// SER: serielle Daten
    pub serial: u8,
    /// RCLK: Takt Schieberegister → Speicherregister
    pub register_clock: u8,
    /// OE: Ausgänge aktiv (low-aktiv)
    pub output_enable: u8,
    /// SRCLR: Löschen (low-aktiv)
    pub clear: u8,
}

impl Default for ShiftRegisterPins {
    fn default() -> Self {
        Self {
            shift_clock: 0,
            serial: 1,
            register_clock: 5,
            output_enable: 6,
            clear: 12,
        }
    }
}

/// Konfiguration des Schieberegister-Treibers
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShiftRegisterConfig {
    pub pins: ShiftRegisterPins,
    /// Start-Intervall nach erfolgreicher Initialisierung
    pub interval_ms: f64,
    /// Werte <= Minimum stoppen die Taktquelle
    pub minimum_interval_ms: f64,
}

impl Default for ShiftRegisterConfig {
    fn default() -> Self {
        Self {
            pins: ShiftRegisterPins::default(),
            interval_ms: SHIFT_INTERVAL_MS,
            minimum_interval_ms: HALT_INTERVAL_MS,
        }
    }
}

/// Konfiguration der Blinky-Demo
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkConfig {
    pub led_pin: u8,
    pub interval_ms: f64,
    pub minimum_interval_ms: f64,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            led_pin: 5,
            interval_ms: DEMO_INTERVAL_MS,
            minimum_interval_ms: HALT_INTERVAL_MS,
        }
    }
}

/// Konfiguration der RGB-Demo
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbConfig {
    pub red_pin: u8,
    pub blue_pin: u8,
    pub green_pin: u8,
    pub interval_ms: f64,
    pub minimum_interval_ms: f64,
}

impl Default for RgbConfig {
    fn default() -> Self {
        Self {
            red_pin: 5,
            blue_pin: 6,
            green_pin: 13,
            interval_ms: DEMO_INTERVAL_MS,
            minimum_interval_ms: HALT_INTERVAL_MS,
        }
    }
}
