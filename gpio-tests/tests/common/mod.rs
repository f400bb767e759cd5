//! Mock-Hardware für die Host-Tests
//!
//! Alle Mock-Leitungen eines Controllers schreiben in ein gemeinsames
//! Event-Log, damit Tests die exakte Reihenfolge der Zugriffe prüfen können.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use gpio_core::{DriveMode, GpioController, GpioError, Level, OutputLine, TickSource};

// ============================================================================
// Event-Log
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Open(u8),
    Write(u8, Level),
    DriveMode(u8, DriveMode),
    Release(u8),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

// ============================================================================
// Mock Controller
// ============================================================================

#[derive(Default)]
pub struct MockController {
    pub log: EventLog,
    /// Pins, deren `open_pin()` fehlschlägt
    pub failing_pins: Vec<u8>,
    /// Nächster Schreibzugriff auf diesen Pin schlägt fehl
    pub fail_next_write_on: Rc<RefCell<Option<u8>>>,
    /// Pin, dessen Leitung keinen Treiber-Modus annimmt
    pub fail_drive_mode_on: Option<u8>,
}

impl MockController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(pin: u8) -> Self {
        Self {
            failing_pins: vec![pin],
            ..Self::default()
        }
    }

    pub fn failing_drive_mode_on(pin: u8) -> Self {
        Self {
            fail_drive_mode_on: Some(pin),
            ..Self::default()
        }
    }

    pub fn fail_next_write(&self, pin: u8) {
        *self.fail_next_write_on.borrow_mut() = Some(pin);
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub fn clear_log(&self) {
        self.log.borrow_mut().clear();
    }

    /// Alle geschriebenen Pegel eines Pins in Reihenfolge
    pub fn writes_to(&self, pin: u8) -> Vec<Level> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Write(p, level) if *p == pin => Some(*level),
                _ => None,
            })
            .collect()
    }

    pub fn write_count(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|event| matches!(event, Event::Write(..)))
            .count()
    }

    pub fn release_count(&self, pin: u8) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|event| **event == Event::Release(pin))
            .count()
    }

    pub fn open_count(&self, pin: u8) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|event| **event == Event::Open(pin))
            .count()
    }
}

impl GpioController for MockController {
    type Line = MockLine;

    fn open_pin(&mut self, pin: u8) -> Result<MockLine, GpioError> {
        if self.failing_pins.contains(&pin) {
            return Err(GpioError::LineOpenFailure { pin });
        }

        self.log.borrow_mut().push(Event::Open(pin));
        Ok(MockLine {
            pin,
            level: None,
            log: Rc::clone(&self.log),
            fail_next_write_on: Rc::clone(&self.fail_next_write_on),
            fail_drive_mode: self.fail_drive_mode_on == Some(pin),
        })
    }
}

// ============================================================================
// Mock Line
// ============================================================================

pub struct MockLine {
    pin: u8,
    level: Option<Level>,
    log: EventLog,
    fail_next_write_on: Rc<RefCell<Option<u8>>>,
    fail_drive_mode: bool,
}

impl OutputLine for MockLine {
    fn write(&mut self, level: Level) -> Result<(), GpioError> {
        let mut fail = self.fail_next_write_on.borrow_mut();
        if *fail == Some(self.pin) {
            *fail = None;
            return Err(GpioError::WriteFailure { pin: self.pin });
        }

        self.level = Some(level);
        self.log.borrow_mut().push(Event::Write(self.pin, level));
        Ok(())
    }

    fn set_drive_mode(&mut self, mode: DriveMode) -> Result<(), GpioError> {
        if self.fail_drive_mode {
            return Err(GpioError::UnsupportedDriveMode { pin: self.pin });
        }

        self.log.borrow_mut().push(Event::DriveMode(self.pin, mode));
        Ok(())
    }
}

impl Drop for MockLine {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Event::Release(self.pin));
    }
}

// ============================================================================
// Fake Tick Source
// ============================================================================

/// Deterministische Taktquelle: Tests rufen `step()` selbst auf
#[derive(Default)]
pub struct FakeTickSource {
    pub period_ms: Option<f64>,
    pub start_count: usize,
    pub stop_count: usize,
}

impl TickSource for FakeTickSource {
    fn start(&mut self, period_ms: f64) {
        self.period_ms = Some(period_ms);
        self.start_count += 1;
    }

    fn stop(&mut self) {
        self.period_ms = None;
        self.stop_count += 1;
    }

    fn is_running(&self) -> bool {
        self.period_ms.is_some()
    }
}
