// Taktquelle auf Basis von embassy-time
//
// start()/stop() sind synchron (TickSource-Trait), gewartet wird im Task
// über wait_tick(). Gestoppt wartet wait_tick() für immer, sodass select()
// nur noch auf Kommandos reagiert.

use core::future::pending;
use embassy_time::{Duration, Ticker};
use gpio_core::TickSource;

/// Längste Periode (ein Tag); größere Werte würden `Instant + Duration` überlaufen
const MAX_PERIOD_MS: f64 = 86_400_000.0;

pub struct EmbassyTickSource {
    ticker: Option<Ticker>,
}

impl EmbassyTickSource {
    pub fn new() -> Self {
        Self { ticker: None }
    }

    /// Wartet auf den nächsten Tick
    pub async fn wait_tick(&mut self) {
        match self.ticker.as_mut() {
            Some(ticker) => ticker.next().await,
            None => pending::<()>().await,
        }
    }
}

impl Default for EmbassyTickSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for EmbassyTickSource {
    fn start(&mut self, period_ms: f64) {
        // Auflösung in Mikrosekunden, mindestens 1 µs
        let micros = ((period_ms.min(MAX_PERIOD_MS) * 1000.0) as u64).max(1);
        self.ticker = Some(Ticker::every(Duration::from_micros(micros)));
    }

    fn stop(&mut self) {
        self.ticker = None;
    }

    fn is_running(&self) -> bool {
        self.ticker.is_some()
    }
}
