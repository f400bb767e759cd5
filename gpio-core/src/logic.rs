//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::traits::Level;
use crate::types::RgbPhase;

/// Pegel für die serielle Datenleitung: Bit 7 der aktuellen Maske
pub fn serial_level(mask: u8) -> Level {
    Level::from(mask & 0x80 != 0)
}

/// Berechnet die Maske für den nächsten Takt
///
/// - Invertiert: Schieben, bei Überlauf auf `0x00` zurück auf `0x01`
/// - Nicht invertiert: Schieben, Bit 0 setzen, `0xFF` wird zu `0xFE`
///
/// # Beispiele
///
/// ```
/// # use gpio_core::advance_mask;
/// assert_eq!(advance_mask(0x80, true), 0x01);
/// assert_eq!(advance_mask(0x7F, false), 0xFE);
/// ```
pub fn advance_mask(mask: u8, inverted: bool) -> u8 {
    let mut next = mask << 1;
    if inverted {
        if next == 0 {
            next = 0x01;
        }
    } else {
        next |= 0x01;
        if next == 0xFF {
            next &= 0xFE;
        }
    }
    next
}

/// Invertiert die Maske (sichtbare Position bleibt erhalten)
pub fn toggle_mask(mask: u8) -> u8 {
    mask ^ 0xFF
}

/// Bringt eine Maske in die Form "genau eine aktive Position"
///
/// Invertiert: genau ein gesetztes Bit. Nicht invertiert: genau ein
/// gelöschtes Bit. Bei mehreren Kandidaten gewinnt die niedrigste Position,
/// ohne Kandidat wird Position 0 aktiv.
pub fn normalize_mask(mask: u8, inverted: bool) -> u8 {
    let active = if inverted { mask } else { !mask };
    let position = if active == 0 { 0 } else { active.trailing_zeros() };
    let single = 1u8 << position;
    if inverted { single } else { !single }
}

/// Nächste Phase der RGB-Rotation: Rot → Blau → Grün → Rot
pub fn next_rgb_phase(phase: RgbPhase) -> RgbPhase {
    match phase {
        RgbPhase::Off | RgbPhase::Green => RgbPhase::Red,
        RgbPhase::Red => RgbPhase::Blue,
        RgbPhase::Blue => RgbPhase::Green,
    }
}

/// Anzeigefarbe einer RGB-Phase
pub fn phase_color(phase: RgbPhase, brightness: u8) -> RGB8 {
    match phase {
        RgbPhase::Off => RGB8::default(),
        RgbPhase::Red => RGB8 {
            r: brightness,
            g: 0,
            b: 0,
        },
        RgbPhase::Blue => RGB8 {
            r: 0,
            g: 0,
            b: brightness,
        },
        RgbPhase::Green => RGB8 {
            r: 0,
            g: brightness,
            b: 0,
        },
    }
}
