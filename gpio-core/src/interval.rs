//! Intervall-Steuerung für alle Demos
//!
//! Der Regler hat ein Minimum, das "gestoppt" bedeutet. Jeder andere Wert
//! programmiert die Taktquelle neu und startet sie. Der letzte Wert gewinnt.

use crate::traits::TickSource;
use crate::types::IntervalChange;

/// Ist `millis` ein Halt-Wert? (`<= minimum` oder NaN)
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn is_halt(millis: f64, minimum_ms: f64) -> bool {
    !(millis > minimum_ms)
}

/// Wendet eine Intervall-Anfrage auf die Taktquelle an
pub fn apply_interval<T: TickSource>(
    ticker: &mut T,
    millis: f64,
    minimum_ms: f64,
) -> IntervalChange {
    if is_halt(millis, minimum_ms) {
        ticker.stop();
        IntervalChange::Halted
    } else {
        ticker.start(millis);
        IntervalChange::Running {
            interval_ms: millis,
        }
    }
}
