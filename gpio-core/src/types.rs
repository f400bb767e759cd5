//! Core Types für die GPIO-Demos
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Zustand eines Demo-Treibers aus Sicht der Oberfläche
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DriverStatus {
    /// `initialize()` wurde noch nicht aufgerufen
    Uninitialized,
    /// Kein GPIO-Controller vorhanden (degradiert)
    NoController,
    /// Leitungen konnten nicht initialisiert werden (degradiert)
    InitFailed,
    /// Leitungen geöffnet, Taktquelle gestartet
    Ready,
    /// `shutdown()` wurde aufgerufen, alle Leitungen freigegeben
    ShutDown,
}

impl DriverStatus {
    /// Statustext für die Anzeige
    pub fn message(self) -> &'static str {
        match self {
            DriverStatus::Uninitialized => "GPIO not initialized yet.",
            DriverStatus::NoController => "There is no GPIO controller on this device.",
            DriverStatus::InitFailed => "There were problems initializing the GPIO pins.",
            DriverStatus::Ready => "GPIO pin initialized correctly.",
            DriverStatus::ShutDown => "GPIO pins released.",
        }
    }

    /// Degradiert: Protokoll-Schritte sind No-Ops
    pub fn is_degraded(self) -> bool {
        !matches!(self, DriverStatus::Ready)
    }
}

/// Ergebnis einer Intervall-Änderung
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IntervalChange {
    /// Taktquelle läuft mit neuer Periode
    Running { interval_ms: f64 },
    /// Minimum erreicht: Taktquelle gestoppt
    Halted,
    /// Treiber nicht bereit, Anfrage verworfen
    Ignored,
}

/// Momentaufnahme des Schieberegister-Treibers für die Anzeige
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftRegisterSnapshot {
    pub status: DriverStatus,
    pub pin_mask: u8,
    pub inverted: bool,
    pub interval_ms: f64,
    pub running: bool,
}

/// Phase der RGB-Rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RgbPhase {
    Off,
    Red,
    Blue,
    Green,
}

impl RgbPhase {
    /// Anzeigename der Phase
    pub fn name(self) -> &'static str {
        match self {
            RgbPhase::Off => "Off",
            RgbPhase::Red => "Red",
            RgbPhase::Blue => "Blue",
            RgbPhase::Green => "Green",
        }
    }
}

/// Kommando von der Bedienung (Taster / Oberfläche) an einen Demo-Task
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DemoCommand {
    /// Polarität des Schieberegisters umschalten
    ToggleInversion,
    /// Takt-Intervall in Millisekunden setzen (Minimum = Stopp)
    SetInterval(f64),
}
