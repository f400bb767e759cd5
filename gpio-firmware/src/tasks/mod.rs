// Task-Modul: Enthält alle Embassy Tasks
//
// Jede Demo gehört genau einem Task. Der Task wartet per select() auf den
// nächsten Tick oder ein Bedien-Kommando - dadurch laufen Protokoll-Schritt
// und Kommandos nie überlappend.
// Die Taster-Tasks publizieren Kommandos (Taster → alle Demos).

pub mod blinky;
pub mod buttons;
pub mod rgb_led;
pub mod shift_register;

// Re-export Tasks für einfachen Import
pub use blinky::blinky_task;
pub use buttons::{interval_button_task, toggle_button_task};
pub use rgb_led::rgb_led_task;
pub use shift_register::shift_register_task;
