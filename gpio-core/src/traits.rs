//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Fähigkeiten, die die Demo-Treiber von der
//! Plattform brauchen: Output-Leitungen öffnen und schreiben, und eine
//! periodische Taktquelle. Konkrete Implementierungen liegen in der Firmware
//! (esp-hal + embassy) bzw. als Mocks in den Tests.

use core::fmt;

/// Logischer Pegel einer Output-Leitung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Liefert den jeweils anderen Pegel
    pub fn toggled(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

/// Treiber-Modus einer Leitung
///
/// Alle Demos nutzen ausschließlich `Output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveMode {
    Input,
    Output,
}

/// Fehler-Typ für GPIO-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Die Plattform hat keinen GPIO-Controller
    NoController,
    /// Eine Leitung konnte nicht geöffnet werden
    LineOpenFailure { pin: u8 },
    /// Schreiben auf eine Leitung ist fehlgeschlagen
    WriteFailure { pin: u8 },
    /// Der Controller unterstützt den angeforderten Modus nicht
    UnsupportedDriveMode { pin: u8 },
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpioError::NoController => write!(f, "no GPIO controller"),
            GpioError::LineOpenFailure { pin } => write!(f, "failed to open GPIO {}", pin),
            GpioError::WriteFailure { pin } => write!(f, "failed to write GPIO {}", pin),
            GpioError::UnsupportedDriveMode { pin } => {
                write!(f, "unsupported drive mode on GPIO {}", pin)
            }
        }
    }
}

impl core::error::Error for GpioError {}

/// Eine geöffnete binäre Output-Leitung
///
/// Die Leitung gehört exklusiv dem Treiber, der sie geöffnet hat.
/// Freigabe (Dispose) passiert über `Drop` - genau einmal, vom Compiler garantiert.
///
/// # Implementierungen
/// - **Production:** EspOutputLine (esp-hal `Output`)
/// - **Testing:** MockLine (zeichnet Schreibzugriffe auf)
pub trait OutputLine {
    /// Setzt den Pegel der Leitung
    ///
    /// # Fehlerbehandlung
    /// Gibt `GpioError::WriteFailure` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, level: Level) -> Result<(), GpioError>;

    /// Setzt den Treiber-Modus der Leitung
    fn set_drive_mode(&mut self, mode: DriveMode) -> Result<(), GpioError>;

    /// Pulst die Leitung: High, dann Low
    ///
    /// Kein Delay zwischen den Flanken: Setup/Hold-Zeiten des 74HC595 liegen
    /// bei 5V im Nanosekunden-Bereich. Gilt nur für diese Hardware!
    fn pulse(&mut self) -> Result<(), GpioError> {
        self.write(Level::High)?;
        self.write(Level::Low)
    }
}

/// GPIO-Controller der Plattform
pub trait GpioController {
    type Line: OutputLine;

    /// Öffnet die Leitung mit der gegebenen Pin-Nummer
    fn open_pin(&mut self, pin: u8) -> Result<Self::Line, GpioError>;
}

/// Periodische Taktquelle (Timer)
///
/// Wird in den Treiber injiziert; Tests nutzen eine deterministische Fake-Quelle.
pub trait TickSource {
    /// Startet (oder programmiert neu) mit der Periode in Millisekunden
    fn start(&mut self, period_ms: f64);

    /// Stoppt die Taktquelle
    fn stop(&mut self);

    /// Läuft die Taktquelle gerade?
    fn is_running(&self) -> bool;
}
