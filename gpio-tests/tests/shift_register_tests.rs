//! Integration Tests für den Schieberegister-Treiber
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockController,
//! MockLine und FakeTickSource

mod common;

use common::{Event, FakeTickSource, MockController, MockLine};
use gpio_core::{
    DriveMode, DriverStatus, GpioError, INITIAL_MASK, IntervalChange, Level,
    ShiftRegisterConfig, ShiftRegisterDriver,
};

type Driver = ShiftRegisterDriver<MockLine, FakeTickSource>;

// Referenz-Verdrahtung (ShiftRegisterPins::default())
const SRCLK: u8 = 0;
const SER: u8 = 1;
const RCLK: u8 = 5;
const OE: u8 = 6;
const SRCLR: u8 = 12;

fn new_driver() -> Driver {
    Driver::new(FakeTickSource::default(), ShiftRegisterConfig::default())
}

fn ready_driver() -> (Driver, MockController) {
    let mut controller = MockController::new();
    let mut driver = new_driver();
    driver.initialize(Some(&mut controller)).unwrap();
    (driver, controller)
}

/// Simuliert einen Timer-Tick: nur wenn die Taktquelle läuft
fn tick(driver: &mut Driver) -> bool {
    if driver.is_running() {
        driver.step().unwrap();
        true
    } else {
        false
    }
}

// ============================================================================
// Tests: Initialisierung & Reset
// ============================================================================

#[test]
fn test_healthy_init_starts_at_first_position() {
    let (driver, _controller) = ready_driver();

    assert_eq!(driver.status(), DriverStatus::Ready);
    assert_eq!(driver.pin_mask(), INITIAL_MASK);
    assert!(driver.is_inverted());
    assert!(driver.is_running());
    assert_eq!(driver.tick_source().period_ms, Some(100.0));
}

#[test]
fn test_init_sequence_opens_resets_and_clears() {
    let (_driver, controller) = ready_driver();

    let mut expected = vec![
        Event::Open(SRCLK),
        Event::Open(SER),
        Event::Open(RCLK),
        Event::Open(OE),
        Event::Open(SRCLR),
    ];
    for pin in [SRCLK, SER, RCLK, OE, SRCLR] {
        expected.push(Event::Write(pin, Level::Low));
        expected.push(Event::DriveMode(pin, DriveMode::Output));
    }
    // Register löschen: SRCLR low, steigende Flanke auf RCLK
    expected.push(Event::Write(RCLK, Level::High));
    expected.push(Event::Write(RCLK, Level::Low));

    assert_eq!(controller.events(), expected);
}

#[test]
fn test_clear_stays_low_after_reset() {
    let (_driver, controller) = ready_driver();
    assert_eq!(controller.writes_to(SRCLR), vec![Level::Low]);
    assert_eq!(controller.writes_to(OE), vec![Level::Low]);
}

#[test]
fn test_no_controller_degrades() {
    let mut driver = new_driver();

    let result = driver.initialize(None::<&mut MockController>);

    assert_eq!(result, Err(GpioError::NoController));
    assert_eq!(driver.status(), DriverStatus::NoController);
    assert_eq!(
        driver.status().message(),
        "There is no GPIO controller on this device."
    );
    assert!(!driver.is_running());
}

#[test]
fn test_open_failure_releases_partial_opens() {
    let mut controller = MockController::failing_on(OE);
    let mut driver = new_driver();

    let result = driver.initialize(Some(&mut controller));

    assert_eq!(result, Err(GpioError::LineOpenFailure { pin: OE }));
    assert_eq!(driver.status(), DriverStatus::InitFailed);
    assert!(!driver.is_running());
    for pin in [SRCLK, SER, RCLK] {
        assert_eq!(controller.open_count(pin), 1);
        assert_eq!(controller.release_count(pin), 1);
    }
    assert_eq!(controller.open_count(SRCLR), 0);
    assert_eq!(controller.write_count(), 0);
}

#[test]
fn test_write_failure_during_reset_releases_all_lines() {
    let mut controller = MockController::new();
    controller.fail_next_write(SRCLR);
    let mut driver = new_driver();

    let result = driver.initialize(Some(&mut controller));

    assert_eq!(result, Err(GpioError::WriteFailure { pin: SRCLR }));
    assert_eq!(driver.status(), DriverStatus::InitFailed);
    assert!(!driver.is_running());
    for pin in [SRCLK, SER, RCLK, OE, SRCLR] {
        assert_eq!(controller.release_count(pin), 1);
    }
}

#[test]
fn test_drive_mode_failure_during_reset_releases_all_lines() {
    let mut controller = MockController::failing_drive_mode_on(OE);
    let mut driver = new_driver();

    let result = driver.initialize(Some(&mut controller));

    assert_eq!(result, Err(GpioError::UnsupportedDriveMode { pin: OE }));
    assert_eq!(driver.status(), DriverStatus::InitFailed);
    assert!(!driver.is_running());
    for pin in [SRCLK, SER, RCLK, OE, SRCLR] {
        assert_eq!(controller.open_count(pin), 1);
        assert_eq!(controller.release_count(pin), 1);
    }
    // SRCLR wurde nie erreicht
    assert!(controller.writes_to(SRCLR).is_empty());
}

#[test]
fn test_reinitialize_releases_previous_lines() {
    let (mut driver, mut controller) = ready_driver();
    driver.step().unwrap();

    driver.initialize(Some(&mut controller)).unwrap();

    assert_eq!(driver.status(), DriverStatus::Ready);
    assert_eq!(driver.pin_mask(), INITIAL_MASK);
    for pin in [SRCLK, SER, RCLK, OE, SRCLR] {
        assert_eq!(controller.open_count(pin), 2);
        assert_eq!(controller.release_count(pin), 1);
    }
}

#[test]
fn test_reinitialize_after_halt_restarts_ticker() {
    let (mut driver, mut controller) = ready_driver();
    assert_eq!(driver.set_interval(0.0), IntervalChange::Halted);
    assert!(!driver.is_running());

    driver.initialize(Some(&mut controller)).unwrap();

    assert!(driver.is_running());
    assert_eq!(driver.interval_ms(), 100.0);
    assert_eq!(driver.tick_source().period_ms, Some(100.0));
}

// ============================================================================
// Tests: Protokoll-Schritt
// ============================================================================

#[test]
fn test_first_step_sends_low_and_shifts() {
    let (mut driver, controller) = ready_driver();
    controller.clear_log();

    driver.step().unwrap();

    assert_eq!(
        controller.events(),
        vec![
            Event::Write(SER, Level::Low),
            Event::Write(SRCLK, Level::High),
            Event::Write(SRCLK, Level::Low),
            Event::Write(RCLK, Level::High),
            Event::Write(RCLK, Level::Low),
        ]
    );
    assert_eq!(driver.pin_mask(), 0x02);
}

#[test]
fn test_serial_line_follows_bit_seven() {
    let (mut driver, controller) = ready_driver();
    controller.clear_log();

    for _ in 0..8 {
        driver.step().unwrap();
    }

    // Nur bei Maske 0x80 (achter Schritt) ist Bit 7 gesetzt
    let mut expected = vec![Level::Low; 7];
    expected.push(Level::High);
    assert_eq!(controller.writes_to(SER), expected);
}

#[test]
fn test_inverted_cycle_returns_after_eight_steps() {
    let (mut driver, _controller) = ready_driver();

    let mut visited = Vec::new();
    for _ in 0..8 {
        driver.step().unwrap();
        visited.push(driver.pin_mask());
    }

    assert_eq!(visited, vec![0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x01]);
}

#[test]
fn test_non_inverted_cycle_returns_after_eight_steps() {
    let (mut driver, _controller) = ready_driver();
    driver.toggle_inversion();
    assert_eq!(driver.pin_mask(), 0xFE);

    let mut visited = Vec::new();
    for _ in 0..8 {
        driver.step().unwrap();
        visited.push(driver.pin_mask());
        assert_eq!(driver.pin_mask().count_zeros(), 1);
    }

    assert_eq!(visited, vec![0xFD, 0xFB, 0xF7, 0xEF, 0xDF, 0xBF, 0x7F, 0xFE]);
}

#[test]
fn test_write_failure_does_not_advance_mask() {
    let (mut driver, controller) = ready_driver();
    controller.fail_next_write(RCLK);

    let result = driver.step();

    assert_eq!(result, Err(GpioError::WriteFailure { pin: RCLK }));
    assert_eq!(driver.pin_mask(), INITIAL_MASK);

    // Nächster Schritt klappt wieder
    driver.step().unwrap();
    assert_eq!(driver.pin_mask(), 0x02);
}

#[test]
fn test_degraded_driver_ignores_all_events() {
    let mut driver = new_driver();
    let _ = driver.initialize(None::<&mut MockController>);

    for _ in 0..20 {
        driver.step().unwrap();
    }
    assert_eq!(driver.pin_mask(), INITIAL_MASK);

    assert_eq!(driver.set_interval(50.0), IntervalChange::Ignored);
    assert!(!driver.is_running());

    // Umschalten ist reiner Zustand und funktioniert trotzdem
    assert!(!driver.toggle_inversion());
    assert!(driver.toggle_inversion());
    assert_eq!(driver.pin_mask(), INITIAL_MASK);
}

#[test]
fn test_failed_init_makes_no_writes_on_step() {
    let mut controller = MockController::failing_on(SRCLR);
    let mut driver = new_driver();
    let _ = driver.initialize(Some(&mut controller));
    controller.clear_log();

    for _ in 0..5 {
        driver.step().unwrap();
        driver.toggle_inversion();
        driver.set_interval(10.0);
    }

    assert!(controller.events().is_empty());
}

// ============================================================================
// Tests: Polarität
// ============================================================================

#[test]
fn test_toggle_on_second_position() {
    let (mut driver, _controller) = ready_driver();
    driver.step().unwrap();
    assert_eq!(driver.pin_mask(), 0x02);

    let inverted = driver.toggle_inversion();

    assert!(!inverted);
    assert_eq!(driver.pin_mask(), 0xFD);
    assert!(!driver.is_inverted());
}

#[test]
fn test_double_toggle_restores_state() {
    let (mut driver, _controller) = ready_driver();
    for steps in 0..8 {
        for _ in 0..steps {
            driver.step().unwrap();
        }
        let mask = driver.pin_mask();
        let inverted = driver.is_inverted();

        driver.toggle_inversion();
        driver.toggle_inversion();

        assert_eq!(driver.pin_mask(), mask);
        assert_eq!(driver.is_inverted(), inverted);
    }
}

#[test]
fn test_toggle_writes_no_lines() {
    let (mut driver, controller) = ready_driver();
    controller.clear_log();

    driver.toggle_inversion();

    assert!(controller.events().is_empty());
}

// ============================================================================
// Tests: Intervall
// ============================================================================

#[test]
fn test_minimum_interval_halts_ticks() {
    let (mut driver, _controller) = ready_driver();
    assert!(tick(&mut driver));
    assert_eq!(driver.pin_mask(), 0x02);

    assert_eq!(driver.set_interval(0.0), IntervalChange::Halted);

    for _ in 0..5 {
        assert!(!tick(&mut driver));
    }
    // Maske bleibt stehen, kein Reset
    assert_eq!(driver.pin_mask(), 0x02);

    assert_eq!(
        driver.set_interval(250.0),
        IntervalChange::Running { interval_ms: 250.0 }
    );
    assert!(tick(&mut driver));
    assert_eq!(driver.pin_mask(), 0x04);
    assert_eq!(driver.tick_source().period_ms, Some(250.0));
}

#[test]
fn test_interval_last_write_wins() {
    let (mut driver, _controller) = ready_driver();

    driver.set_interval(20.0);
    driver.set_interval(700.0);

    assert_eq!(driver.interval_ms(), 700.0);
    assert_eq!(driver.tick_source().period_ms, Some(700.0));
}

#[test]
fn test_interval_before_init_is_ignored() {
    let mut driver = new_driver();
    assert_eq!(driver.set_interval(50.0), IntervalChange::Ignored);
    assert_eq!(driver.tick_source().start_count, 0);
}

#[test]
fn test_halt_config_does_not_start_ticker() {
    let mut controller = MockController::new();
    let config = ShiftRegisterConfig {
        interval_ms: 0.0,
        ..ShiftRegisterConfig::default()
    };
    let mut driver = Driver::new(FakeTickSource::default(), config);

    driver.initialize(Some(&mut controller)).unwrap();

    assert_eq!(driver.status(), DriverStatus::Ready);
    assert!(!driver.is_running());
}

// ============================================================================
// Tests: Shutdown
// ============================================================================

#[test]
fn test_shutdown_twice_releases_each_line_once() {
    let (mut driver, controller) = ready_driver();

    driver.shutdown();
    driver.shutdown();

    for pin in [SRCLK, SER, RCLK, OE, SRCLR] {
        assert_eq!(controller.release_count(pin), 1);
    }
    assert_eq!(driver.status(), DriverStatus::ShutDown);
    assert!(!driver.is_running());
}

#[test]
fn test_no_writes_after_shutdown() {
    let (mut driver, controller) = ready_driver();
    driver.shutdown();
    controller.clear_log();

    driver.step().unwrap();
    driver.toggle_inversion();
    assert_eq!(driver.set_interval(100.0), IntervalChange::Ignored);

    assert!(controller.events().is_empty());
}

#[test]
fn test_drop_releases_lines() {
    let (driver, controller) = ready_driver();

    drop(driver);

    for pin in [SRCLK, SER, RCLK, OE, SRCLR] {
        assert_eq!(controller.release_count(pin), 1);
    }
}

#[test]
fn test_shutdown_after_degraded_init_is_noop() {
    let mut driver = new_driver();
    let _ = driver.initialize(None::<&mut MockController>);

    driver.shutdown();
    driver.shutdown();

    assert_eq!(driver.status(), DriverStatus::ShutDown);
}

// ============================================================================
// Tests: Snapshot
// ============================================================================

#[test]
fn test_snapshot_reflects_state() {
    let (mut driver, _controller) = ready_driver();
    driver.step().unwrap();
    driver.toggle_inversion();

    let snapshot = driver.snapshot();

    assert_eq!(snapshot.status, DriverStatus::Ready);
    assert_eq!(snapshot.pin_mask, 0xFD);
    assert!(!snapshot.inverted);
    assert_eq!(snapshot.interval_ms, 100.0);
    assert!(snapshot.running);
}

#[test]
fn test_snapshot_serializes_to_json() {
    let (driver, _controller) = ready_driver();
    let mut buffer = [0u8; 128];

    let len = serde_json_core::to_slice(&driver.snapshot(), &mut buffer).unwrap();
    let json = core::str::from_utf8(&buffer[..len]).unwrap();

    assert!(json.contains("\"status\":\"Ready\""));
    assert!(json.contains("\"pin_mask\":1"));
    assert!(json.contains("\"inverted\":true"));
}
