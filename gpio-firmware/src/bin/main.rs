// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Pin, Pull};
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_gpio_demos::config::{self, BLINK, RGB, SHIFT_REGISTER};
use esp_gpio_demos::hal::{EmbassyTickSource, EspGpioController};
use esp_gpio_demos::tasks::{
    blinky_task, interval_button_task, rgb_led_task, shift_register_task, toggle_button_task,
};
use esp_gpio_demos::{DemoCommandChannel, EspBlinker, EspRgbCycler, EspShiftRegister};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware und die drei Demo-Treiber, startet die Embassy
/// Runtime und spawnt die Tasks. Danach schläft main() - alle Arbeit läuft
/// in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // GPIO-Controller mit allen Output-Pins der Demos
    // Pin-Nummern müssen zu config.rs passen!
    let mut controller = EspGpioController::new([
        (SHIFT_REGISTER.pins.shift_clock, peripherals.GPIO0.degrade()),
        (SHIFT_REGISTER.pins.serial, peripherals.GPIO1.degrade()),
        (SHIFT_REGISTER.pins.register_clock, peripherals.GPIO2.degrade()),
        (SHIFT_REGISTER.pins.output_enable, peripherals.GPIO3.degrade()),
        (SHIFT_REGISTER.pins.clear, peripherals.GPIO4.degrade()),
        (BLINK.led_pin, peripherals.GPIO5.degrade()),
        (RGB.red_pin, peripherals.GPIO18.degrade()),
        (RGB.blue_pin, peripherals.GPIO19.degrade()),
        (RGB.green_pin, peripherals.GPIO20.degrade()),
    ]);

    // Demo-Treiber initialisieren
    // Fehler sind nicht fatal: der Treiber läuft degradiert weiter
    let mut shift_register = EspShiftRegister::new(EmbassyTickSource::new(), SHIFT_REGISTER);
    if let Err(e) = shift_register.initialize(Some(&mut controller)) {
        error!("ShiftRegister: init failed: {}", e);
    }

    let mut blinker = EspBlinker::new(EmbassyTickSource::new(), BLINK);
    if let Err(e) = blinker.initialize(Some(&mut controller)) {
        error!("Blinky: init failed: {}", e);
    }

    let mut rgb_cycler = EspRgbCycler::new(EmbassyTickSource::new(), RGB);
    if let Err(e) = rgb_cycler.initialize(Some(&mut controller)) {
        error!("RGB: init failed: {}", e);
    }

    // Degradierte Demos laufen weiter, schalten aber keine Leitungen
    for (name, status) in [
        ("ShiftRegister", shift_register.status()),
        ("Blinky", blinker.status()),
        ("RGB", rgb_cycler.status()),
    ] {
        if status.is_degraded() {
            warn!("{}: degraded - {}", name, status.message());
        }
    }

    // Command-Channel erstellen (Taster → alle Demo-Tasks)
    // PubSubChannel für Broadcast: alle Subscribers bekommen jedes Kommando
    static COMMAND_CHANNEL: static_cell::StaticCell<DemoCommandChannel> =
        static_cell::StaticCell::new();
    let command_channel = &*COMMAND_CHANNEL.init(DemoCommandChannel::new());

    // Spawn Demo Tasks (jeder besitzt seinen Treiber exklusiv)
    spawner
        .spawn(shift_register_task(
            shift_register,
            command_channel.subscriber().unwrap(),
        ))
        .unwrap();
    spawner
        .spawn(blinky_task(blinker, command_channel.subscriber().unwrap()))
        .unwrap();
    spawner
        .spawn(rgb_led_task(
            rgb_cycler,
            command_channel.subscriber().unwrap(),
        ))
        .unwrap();

    // Taster mit Pull-Up (Taster ziehen nach GND)
    let toggle_button = Input::new(
        peripherals.GPIO9,
        InputConfig::default().with_pull(Pull::Up),
    );
    let interval_button = Input::new(
        peripherals.GPIO21,
        InputConfig::default().with_pull(Pull::Up),
    );
    info!(
        "Buttons: toggle=GPIO{} interval=GPIO{}",
        config::TOGGLE_BUTTON_PIN,
        config::INTERVAL_BUTTON_PIN
    );

    // Spawn Taster Tasks
    spawner
        .spawn(toggle_button_task(
            toggle_button,
            command_channel.publisher().unwrap(),
        ))
        .unwrap();
    spawner
        .spawn(interval_button_task(
            interval_button,
            command_channel.publisher().unwrap(),
        ))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
