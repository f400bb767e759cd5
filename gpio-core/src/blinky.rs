//! Blinky-Demo: eine LED, pro Takt umschalten
//!
//! Die LED ist low-aktiv verdrahtet: `Level::Low` = an.

use crate::config::BlinkConfig;
use crate::interval::apply_interval;
use crate::traits::{DriveMode, GpioController, GpioError, Level, OutputLine, TickSource};
use crate::types::{DriverStatus, IntervalChange};

pub struct Blinker<L: OutputLine, T: TickSource> {
    config: BlinkConfig,
    ticker: T,
    line: Option<L>,
    level: Level,
    interval_ms: f64,
    status: DriverStatus,
}

impl<L: OutputLine, T: TickSource> Blinker<L, T> {
    pub fn new(ticker: T, config: BlinkConfig) -> Self {
        Self {
            config,
            ticker,
            line: None,
            level: Level::High,
            interval_ms: config.interval_ms,
            status: DriverStatus::Uninitialized,
        }
    }

    /// Öffnet die LED-Leitung (LED aus) und startet die Taktquelle
    ///
    /// Die Taktquelle läuft auch degradiert, damit die Anzeige weiter blinkt;
    /// nur die Leitung wird dann nie beschrieben.
    pub fn initialize<C>(&mut self, controller: Option<&mut C>) -> Result<(), GpioError>
    where
        C: GpioController<Line = L>,
    {
        if self.line.is_some() {
            self.shutdown();
        }

        self.level = Level::High;
        self.interval_ms = self.config.interval_ms;
        let result = match controller {
            None => Err(GpioError::NoController),
            Some(controller) => Self::open_line(controller, self.config.led_pin),
        };

        let result = match result {
            Ok(line) => {
                self.line = Some(line);
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

    fn open_line<C>(controller: &mut C, pin: u8) -> Result<L, GpioError>
    where
        C: GpioController<Line = L>,
    {
        let mut line = controller.open_pin(pin)?;
        line.write(Level::High)?;
        line.set_drive_mode(DriveMode::Output)?;
        Ok(line)
    }

    /// LED umschalten
    pub fn step(&mut self) -> Result<(), GpioError> {
        let next = self.level.toggled();
        if let Some(line) = self.line.as_mut() {
            line.write(next)?;
        }
        self.level = next;
        Ok(())
    }

    pub fn set_interval(&mut self, millis: f64) -> IntervalChange {
        if matches!(
            self.status,
            DriverStatus::Uninitialized | DriverStatus::ShutDown
        ) {
            return IntervalChange::Ignored;
        }

        self.interval_ms = millis;
        apply_interval(&mut self.ticker, millis, self.config.minimum_interval_ms)
    }

    pub fn shutdown(&mut self) {
        self.ticker.stop();
        if let Some(line) = self.line.take() {
            drop(line);
        }
        if self.status != DriverStatus::Uninitialized {
            self.status = DriverStatus::ShutDown;
        }
    }

    /// Leuchtet die LED gerade? (Leitung low)
    pub fn is_lit(&self) -> bool {
        self.level == Level::Low
    }

    pub fn level(&self) -> Level {
        self.level
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

impl<L: OutputLine, T: TickSource> Drop for Blinker<L, T> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
