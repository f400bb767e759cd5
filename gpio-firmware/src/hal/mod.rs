// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus gpio-core für echte ESP32-C6 Hardware:
// GPIO-Controller/Output-Leitungen (esp-hal) und Taktquelle (embassy-time).

pub mod gpio;
pub mod ticker;

pub use gpio::{EspGpioController, EspOutputLine};
pub use ticker::EmbassyTickSource;
