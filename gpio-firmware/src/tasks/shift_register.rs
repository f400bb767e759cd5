// Schieberegister Task - Taktet den 74HC595 per Bit-Banging
use defmt::{error, info, warn};
use embassy_futures::select::{Either, select};

use crate::{DemoCommand, DemoCommandSubscriber, EspShiftRegister, IntervalChange};

/// Schieberegister Task
///
/// Besitzt den (bereits initialisierten) Treiber exklusiv:
/// - Tick → ein Bit senden (`step()`)
/// - `ToggleInversion` → Polarität umschalten
/// - `SetInterval` → Takt ändern oder stoppen
///
/// Ist der Treiber degradiert, läuft die Taktquelle nie an und der Task
/// reagiert nur noch auf Kommandos (die dann No-Ops sind).
#[embassy_executor::task]
pub async fn shift_register_task(
    mut driver: EspShiftRegister,
    mut commands: DemoCommandSubscriber,
) {
    info!("ShiftRegister: {}", driver.status().message());

    loop {
        let event = select(
            driver.tick_source_mut().wait_tick(),
            commands.next_message_pure(),
        )
        .await;

        match event {
            Either::First(()) => {
                // Schlägt ein Schreibzugriff fehl, bleibt die Maske stehen
                if let Err(e) = driver.step() {
                    error!("ShiftRegister: step failed: {}", e);
                }
            }
            Either::Second(DemoCommand::ToggleInversion) => {
                let inverted = driver.toggle_inversion();
                info!(
                    "ShiftRegister: inverted={} mask={=u8:#b}",
                    inverted,
                    driver.pin_mask()
                );
            }
            Either::Second(DemoCommand::SetInterval(millis)) => {
                match driver.set_interval(millis) {
                    IntervalChange::Running { interval_ms } => {
                        info!("ShiftRegister: interval {} ms", interval_ms)
                    }
                    IntervalChange::Halted => info!(
                        "ShiftRegister: stopped at mask={=u8:#b}",
                        driver.pin_mask()
                    ),
                    IntervalChange::Ignored => {
                        warn!("ShiftRegister: interval ignored (not ready)")
                    }
                }
            }
        }
    }
}
