// Blinky Task - Eine LED pro Tick umschalten
use defmt::{debug, error, info};
use embassy_futures::select::{Either, select};

use crate::{DemoCommand, DemoCommandSubscriber, EspBlinker};

#[embassy_executor::task]
pub async fn blinky_task(mut blinker: EspBlinker, mut commands: DemoCommandSubscriber) {
    info!("Blinky: {}", blinker.status().message());

    loop {
        let event = select(
            blinker.tick_source_mut().wait_tick(),
            commands.next_message_pure(),
        )
        .await;

        match event {
            Either::First(()) => match blinker.step() {
                Ok(()) => debug!("Blinky: lit={}", blinker.is_lit()),
                Err(e) => error!("Blinky: write failed: {}", e),
            },
            Either::Second(DemoCommand::SetInterval(millis)) => {
                let change = blinker.set_interval(millis);
                info!("Blinky: {}", change);
            }
            // Polarität betrifft nur das Schieberegister
            Either::Second(DemoCommand::ToggleInversion) => {}
        }
    }
}
