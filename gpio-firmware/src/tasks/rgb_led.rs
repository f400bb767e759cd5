// RGB LED Task - Rot → Blau → Grün pro Tick
use defmt::{error, info};
use embassy_futures::select::{Either, select};
use rgb::RGB8;

use crate::{DemoCommand, DemoCommandSubscriber, EspRgbCycler};

/// Loggt Phase und Anzeigefarbe
fn log_color(name: &str, color: RGB8) {
    info!("RGB: {} ({}, {}, {})", name, color.r, color.g, color.b);
}

#[embassy_executor::task]
pub async fn rgb_led_task(mut cycler: EspRgbCycler, mut commands: DemoCommandSubscriber) {
    info!("RGB: {}", cycler.status().message());

    loop {
        let event = select(
            cycler.tick_source_mut().wait_tick(),
            commands.next_message_pure(),
        )
        .await;

        match event {
            Either::First(()) => match cycler.step() {
                Ok(()) => log_color(cycler.phase().name(), cycler.color()),
                Err(e) => error!("RGB: write failed: {}", e),
            },
            Either::Second(DemoCommand::SetInterval(millis)) => {
                match cycler.set_interval(millis) {
                    Ok(change) => info!("RGB: {}", change),
                    Err(e) => error!("RGB: turning off failed: {}", e),
                }
            }
            Either::Second(DemoCommand::ToggleInversion) => {}
        }
    }
}
