//! RGB-Demo: drei Leitungen, pro Takt leuchtet genau eine Farbe
//!
//! Reihenfolge: Rot → Blau → Grün → Rot. Die LED ist high-aktiv verdrahtet.

use rgb::RGB8;

use crate::config::{INDICATOR_BRIGHTNESS, RgbConfig};
use crate::interval::apply_interval;
use crate::logic::{next_rgb_phase, phase_color};
use crate::traits::{DriveMode, GpioController, GpioError, Level, OutputLine, TickSource};
use crate::types::{DriverStatus, IntervalChange, RgbPhase};

/// Rot, Blau, Grün - entweder alle geöffnet oder keine
struct RgbLines<L: OutputLine> {
    red: L,
    blue: L,
    green: L,
}

impl<L: OutputLine> RgbLines<L> {
    fn open<C>(controller: &mut C, config: &RgbConfig) -> Result<Self, GpioError>
    where
        C: GpioController<Line = L>,
    {
        let red = controller.open_pin(config.red_pin)?;
        let blue = controller.open_pin(config.blue_pin)?;
        let green = controller.open_pin(config.green_pin)?;

        let mut lines = Self { red, blue, green };
        // Start mit allen Leitungen low (aus), nicht high: die LED ist high-aktiv verdrahtet
        lines.show(RgbPhase::Off)?;
        for line in [&mut lines.red, &mut lines.blue, &mut lines.green] {
            line.set_drive_mode(DriveMode::Output)?;
        }
        Ok(lines)
    }

    /// Schaltet genau die Leitung der Phase ein, die anderen aus
    fn show(&mut self, phase: RgbPhase) -> Result<(), GpioError> {
        self.red.write(Level::from(phase == RgbPhase::Red))?;
        self.blue.write(Level::from(phase == RgbPhase::Blue))?;
        self.green.write(Level::from(phase == RgbPhase::Green))
    }
}

pub struct RgbCycler<L: OutputLine, T: TickSource> {
    config: RgbConfig,
    ticker: T,
    lines: Option<RgbLines<L>>,
    phase: RgbPhase,
    interval_ms: f64,
    status: DriverStatus,
}

impl<L: OutputLine, T: TickSource> RgbCycler<L, T> {
    pub fn new(ticker: T, config: RgbConfig) -> Self {
        Self {
            config,
            ticker,
            lines: None,
            phase: RgbPhase::Off,
            interval_ms: config.interval_ms,
            status: DriverStatus::Uninitialized,
        }
    }

    /// Öffnet die drei Leitungen (alle aus) und startet die Taktquelle
    ///
    /// Wie beim Blinky läuft die Taktquelle auch degradiert weiter.
    pub fn initialize<C>(&mut self, controller: Option<&mut C>) -> Result<(), GpioError>
    where
        C: GpioController<Line = L>,
    {
        if self.lines.is_some() {
            self.shutdown();
        }

        self.phase = RgbPhase::Off;
        self.interval_ms = self.config.interval_ms;
        let result = match controller {
            None => Err(GpioError::NoController),
            Some(controller) => RgbLines::open(controller, &self.config),
        };

        let result = match result {
            Ok(lines) => {
                self.lines = Some(lines);
                self.status = DriverStatus::Ready;
                Ok(())
            }
            Err(e) => {
                self.status = match e {
                    GpioError::NoController => DriverStatus::NoController,
                    _ => DriverStatus::InitFailed,
                };
                Err(e)
            }
        };

        apply_interval(
            &mut self.ticker,
            self.interval_ms,
            self.config.minimum_interval_ms,
        );
        result
    }

    /// Nächste Farbe anzeigen
    ///
    /// Degradiert wird nur die Phase weitergeschaltet (für die Anzeige).
    pub fn step(&mut self) -> Result<(), GpioError> {
        let next = next_rgb_phase(self.phase);
        if let Some(lines) = self.lines.as_mut() {
            lines.show(next)?;
        }
        self.phase = next;
        Ok(())
    }

    /// Takt-Intervall ändern; das Minimum stoppt und schaltet die LED aus
    pub fn set_interval(&mut self, millis: f64) -> Result<IntervalChange, GpioError> {
        if matches!(
            self.status,
            DriverStatus::Uninitialized | DriverStatus::ShutDown
        ) {
            return Ok(IntervalChange::Ignored);
        }

        self.interval_ms = millis;
        let change = apply_interval(&mut self.ticker, millis, self.config.minimum_interval_ms);
        if change == IntervalChange::Halted {
            if let Some(lines) = self.lines.as_mut() {
                lines.show(RgbPhase::Off)?;
            }
            self.phase = RgbPhase::Off;
        }
        Ok(change)
    }

    pub fn shutdown(&mut self) {
        self.ticker.stop();
        if let Some(lines) = self.lines.take() {
            drop(lines);
        }
        if self.status != DriverStatus::Uninitialized {
            self.status = DriverStatus::ShutDown;
        }
    }

    pub fn phase(&self) -> RgbPhase {
        self.phase
    }

    /// Anzeigefarbe der aktuellen Phase
    pub fn color(&self) -> RGB8 {
        phase_color(self.phase, INDICATOR_BRIGHTNESS)
    }

    pub fn status(&self) -> DriverStatus {
        self.status
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn tick_source(&self) -> &T {
        &self.ticker
    }

    pub fn tick_source_mut(&mut self) -> &mut T {
        &mut self.ticker
    }
}

impl<L: OutputLine, T: TickSource> Drop for RgbCycler<L, T> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
