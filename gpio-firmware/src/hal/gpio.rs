// GPIO-Controller und Output-Leitungen auf Basis von esp-hal
//
// esp-hal Pins sind typisierte Singletons. Der Controller bekommt beim Start
// die freigegebenen Pins als AnyPin zusammen mit ihrer Nummer und gibt sie
// bei open_pin() genau einmal als Output heraus.

use defmt::debug;
use esp_hal::gpio::{AnyPin, Level as HalLevel, Output, OutputConfig};
use gpio_core::{DriveMode, GpioController, GpioError, Level, OutputLine};

/// Konvertiert den Core-Pegel in den esp-hal Pegel
fn hal_level(level: Level) -> HalLevel {
    match level {
        Level::Low => HalLevel::Low,
        Level::High => HalLevel::High,
    }
}

/// GPIO-Controller mit einer festen Menge an Pins
///
/// Ein Pin kann nur einmal geöffnet werden: der Output konsumiert den AnyPin.
pub struct EspGpioController<const N: usize> {
    pins: [Option<(u8, AnyPin<'static>)>; N],
}

impl<const N: usize> EspGpioController<N> {
    /// Erstellt den Controller aus (Pin-Nummer, Pin)-Paaren
    ///
    /// # Parameter
    /// - `pins`: z.B. `[(0, peripherals.GPIO0.degrade()), ...]`
    pub fn new(pins: [(u8, AnyPin<'static>); N]) -> Self {
        Self {
            pins: pins.map(Some),
        }
    }
}

impl<const N: usize> GpioController for EspGpioController<N> {
    type Line = EspOutputLine;

    fn open_pin(&mut self, pin: u8) -> Result<EspOutputLine, GpioError> {
        let index = self
            .pins
            .iter()
            .position(|slot| matches!(slot, Some((number, _)) if *number == pin))
            .ok_or(GpioError::LineOpenFailure { pin })?;
        let (_, any_pin) = self.pins[index]
            .take()
            .ok_or(GpioError::LineOpenFailure { pin })?;

        // Startet low, wie es die Demos beim Reset ohnehin schreiben
        let output = Output::new(any_pin, HalLevel::Low, OutputConfig::default());
        debug!("GPIO{}: opened as output", pin);

        Ok(EspOutputLine { pin, output })
    }
}

/// Output-Leitung (esp-hal Push-Pull Output)
pub struct EspOutputLine {
    pin: u8,
    output: Output<'static>,
}

impl OutputLine for EspOutputLine {
    fn write(&mut self, level: Level) -> Result<(), GpioError> {
        // GPIO-Register-Zugriff kann auf dem ESP32 nicht fehlschlagen
        self.output.set_level(hal_level(level));
        Ok(())
    }

    fn set_drive_mode(&mut self, mode: DriveMode) -> Result<(), GpioError> {
        match mode {
            // esp-hal Output ist bereits als Push-Pull Output konfiguriert
            DriveMode::Output => Ok(()),
            DriveMode::Input => Err(GpioError::UnsupportedDriveMode { pin: self.pin }),
        }
    }
}

impl Drop for EspOutputLine {
    fn drop(&mut self) {
        debug!("GPIO{}: released", self.pin);
    }
}
