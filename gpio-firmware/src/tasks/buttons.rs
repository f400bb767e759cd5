// Taster Tasks - Ersetzen Toggle-Button und Intervall-Regler der Oberfläche
use defmt::info;
use embassy_time::{Duration, Timer};
use esp_hal::gpio::Input;

use crate::config::{BUTTON_DEBOUNCE_MS, INTERVAL_PRESETS_MS};
use crate::{DemoCommand, DemoCommandPublisher};

/// Wartet auf das Loslassen und entprellt danach
///
/// Auch das Prellen beim Loslassen erzeugt fallende Flanken. Erst nach der
/// Entprell-Zeit wird wieder auf den nächsten Druck gewartet.
async fn wait_for_release(button: &mut Input<'static>) {
    Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
    button.wait_for_high().await;
    Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
}

/// Toggle-Taster: jede fallende Flanke schaltet die Polarität um
///
/// # Parameter
/// - `button`: Input mit Pull-Up (Taster zieht nach GND)
/// - `publisher`: PubSub Publisher für Bedien-Kommandos
#[embassy_executor::task]
pub async fn toggle_button_task(mut button: Input<'static>, publisher: DemoCommandPublisher) {
    loop {
        button.wait_for_falling_edge().await;
        info!("Button: toggle inversion");
        publisher.publish_immediate(DemoCommand::ToggleInversion);

        wait_for_release(&mut button).await;
    }
}

/// Intervall-Taster: schaltet reihum durch INTERVAL_PRESETS_MS
///
/// Startet bei Stufe 0 (entspricht dem Start-Intervall der Demos).
#[embassy_executor::task]
pub async fn interval_button_task(mut button: Input<'static>, publisher: DemoCommandPublisher) {
    let mut index = 0;

    loop {
        button.wait_for_falling_edge().await;
        index = (index + 1) % INTERVAL_PRESETS_MS.len();
        let millis = INTERVAL_PRESETS_MS[index];
        info!("Button: interval preset {} ({} ms)", index, millis);
        publisher.publish_immediate(DemoCommand::SetInterval(millis));

        wait_for_release(&mut button).await;
    }
}
