//! Bit-Banging-Treiber für ein 74HC595 Schieberegister
//!
//! Pro Takt wird genau ein Bit seriell eingeschoben und sofort in das
//! Speicherregister übernommen. Dadurch wandert eine aktive Position
//! (ein LED) durch die acht Ausgänge.
//!
//! Ohne GPIO-Controller (oder wenn eine Leitung nicht geöffnet werden kann)
//! läuft der Treiber degradiert weiter: alle Protokoll-Schritte sind No-Ops.

use crate::config::ShiftRegisterConfig;
use crate::config::ShiftRegisterPins;
use crate::interval::apply_interval;
use crate::logic::{advance_mask, normalize_mask, serial_level, toggle_mask};
use crate::traits::{DriveMode, GpioController, GpioError, Level, OutputLine, TickSource};
use crate::types::{DriverStatus, IntervalChange, ShiftRegisterSnapshot};

/// Startmaske nach dem Reset: Position 0 aktiv
pub const INITIAL_MASK: u8 = 0x01;

/// Die fünf geöffneten Leitungen - entweder alle oder keine
struct ShiftRegisterLines<L: OutputLine> {
    shift_clock: L,
    serial: L,
    register_clock: L,
    output_enable: L,
    clear: L,
}

impl<L: OutputLine> ShiftRegisterLines<L> {
    /// Öffnet alle fünf Leitungen
    ///
    /// Schlägt eine fehl, werden die bereits geöffneten beim `?` gedroppt
    /// und damit freigegeben.
    fn open<C>(controller: &mut C, pins: &ShiftRegisterPins) -> Result<Self, GpioError>
    where
        C: GpioController<Line = L>,
    {
        let shift_clock = controller.open_pin(pins.shift_clock)?;
        let serial = controller.open_pin(pins.serial)?;
        let register_clock = controller.open_pin(pins.register_clock)?;
        let output_enable = controller.open_pin(pins.output_enable)?;
        let clear = controller.open_pin(pins.clear)?;

        Ok(Self {
            shift_clock,
            serial,
            register_clock,
            output_enable,
            clear,
        })
    }

    /// Bringt die Leitungen in einen bekannten Zustand und löscht das Register
    fn reset(&mut self) -> Result<(), GpioError> {
        for line in [
            &mut self.shift_clock,
            &mut self.serial,
            &mut self.register_clock,
            &mut self.output_enable,
            &mut self.clear,
        ] {
            line.write(Level::Low)?;
            line.set_drive_mode(DriveMode::Output)?;
        }

        // SRCLR ist low: eine steigende Flanke auf RCLK löscht das Register.
        // SRCLR bleibt danach low, wie in der Referenz-Verdrahtung.
        self.register_clock.pulse()
    }

    /// Schiebt ein Bit ein und übernimmt es in die Ausgänge
    fn send_bit(&mut self, level: Level) -> Result<(), GpioError> {
        self.serial.write(level)?;
        self.shift_clock.pulse()?;
        self.register_clock.pulse()
    }
}

/// Schieberegister-Treiber
///
/// Besitzt die fünf Leitungen exklusiv und die injizierte Taktquelle.
/// Alle Einstiegspunkte nehmen `&mut self` und können sich daher nie
/// überlappen.
pub struct ShiftRegisterDriver<L: OutputLine, T: TickSource> {
    config: ShiftRegisterConfig,
    ticker: T,
    lines: Option<ShiftRegisterLines<L>>,
    pin_mask: u8,
    inverted: bool,
    interval_ms: f64,
    status: DriverStatus,
}

impl<L: OutputLine, T: TickSource> ShiftRegisterDriver<L, T> {
    /// Erstellt einen noch nicht initialisierten Treiber
    pub fn new(ticker: T, config: ShiftRegisterConfig) -> Self {
        Self {
            config,
            ticker,
            lines: None,
            pin_mask: INITIAL_MASK,
            inverted: true,
            interval_ms: config.interval_ms,
            status: DriverStatus::Uninitialized,
        }
    }

    /// Öffnet die Leitungen, löscht das Register und startet die Taktquelle
    ///
    /// Fehler sind nicht fatal: der Treiber bleibt degradiert und der Status
    /// beschreibt das Problem. Der Fehler wird trotzdem zurückgegeben, damit
    /// der Aufrufer ihn loggen kann.
    pub fn initialize<C>(&mut self, controller: Option<&mut C>) -> Result<(), GpioError>
    where
        C: GpioController<Line = L>,
    {
        if self.lines.is_some() {
            self.shutdown();
        }

        let Some(controller) = controller else {
            self.status = DriverStatus::NoController;
            return Err(GpioError::NoController);
        };

        let mut lines = match ShiftRegisterLines::open(controller, &self.config.pins) {
            Ok(lines) => lines,
            Err(e) => {
                self.status = DriverStatus::InitFailed;
                return Err(e);
            }
        };

        if let Err(e) = lines.reset() {
            // `lines` wird hier gedroppt → alle fünf Leitungen freigegeben
            self.status = DriverStatus::InitFailed;
            return Err(e);
        }

        self.lines = Some(lines);
        self.pin_mask = INITIAL_MASK;
        self.inverted = true;
        self.interval_ms = self.config.interval_ms;
        self.status = DriverStatus::Ready;

        // Taktquelle erst nach erfolgreichem Reset starten, mit dem
        // konfigurierten Intervall (ein früherer Halt gilt nicht weiter)
        apply_interval(
            &mut self.ticker,
            self.interval_ms,
            self.config.minimum_interval_ms,
        );
        Ok(())
    }

    /// Ein Protokoll-Schritt: ein Bit senden, Maske weiterschieben
    ///
    /// Degradiert ist das ein No-Op. Schlägt ein Schreibzugriff fehl, bleibt
    /// die Maske unverändert.
    pub fn step(&mut self) -> Result<(), GpioError> {
        let Some(lines) = self.lines.as_mut() else {
            return Ok(());
        };

        lines.send_bit(serial_level(self.pin_mask))?;
        self.pin_mask = advance_mask(self.pin_mask, self.inverted);
        Ok(())
    }

    /// Polarität umschalten; gibt den neuen `inverted`-Wert zurück
    ///
    /// Die sichtbare Position bleibt erhalten. Schreibt keine Leitungen.
    pub fn toggle_inversion(&mut self) -> bool {
        self.inverted = !self.inverted;
        self.pin_mask = normalize_mask(toggle_mask(self.pin_mask), self.inverted);
        self.inverted
    }

    /// Takt-Intervall ändern; das Minimum stoppt die Taktquelle
    ///
    /// Die Maske bleibt beim Stoppen auf dem zuletzt erreichten Wert stehen.
    pub fn set_interval(&mut self, millis: f64) -> IntervalChange {
        if self.status.is_degraded() {
            return IntervalChange::Ignored;
        }

        self.interval_ms = millis;
        apply_interval(&mut self.ticker, millis, self.config.minimum_interval_ms)
    }

    /// Stoppt die Taktquelle und gibt alle Leitungen genau einmal frei
    ///
    /// Ein zweiter Aufruf ist ein No-Op.
    pub fn shutdown(&mut self) {
        self.ticker.stop();
        if let Some(lines) = self.lines.take() {
            drop(lines);
        }
        if self.status != DriverStatus::Uninitialized {
            self.status = DriverStatus::ShutDown;
        }
    }

    pub fn status(&self) -> DriverStatus {
        self.status
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn pin_mask(&self) -> u8 {
        self.pin_mask
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Läuft die Taktquelle?
    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn snapshot(&self) -> ShiftRegisterSnapshot {
        ShiftRegisterSnapshot {
            status: self.status,
            pin_mask: self.pin_mask,
            inverted: self.inverted,
            interval_ms: self.interval_ms,
            running: self.ticker.is_running(),
        }
    }

    pub fn tick_source(&self) -> &T {
        &self.ticker
    }

    /// Zugriff auf die Taktquelle, z.B. um in der Firmware auf den nächsten Tick zu warten
    pub fn tick_source_mut(&mut self) -> &mut T {
        &mut self.ticker
    }
}

impl<L: OutputLine, T: TickSource> Drop for ShiftRegisterDriver<L, T> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
