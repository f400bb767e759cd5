// Build-Script: Linker-Konfiguration für die ESP32-C6 Firmware
//
// Die Demos brauchen weder WiFi noch Heap, daher nur defmt + linkall.

fn main() {
    // Hilfreiche Hinweise bei typischen Linker-Fehlern
    linker_hints();

    // defmt.x: Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // linkall.x: Flash/RAM-Layout und Startup-Code - muss als LETZTES kommen
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Wird vom Linker als "--error-handling-script" mit (Fehler-Typ, Symbol) aufgerufen
fn linker_hints() {
    let args: Vec<String> = std::env::args().collect();

    if let [_, kind, what, ..] = args.as_slice() {
        if kind != "undefined-symbol" {
            std::process::exit(1);
        }

        if what.starts_with("_defmt_") {
            eprintln!();
            eprintln!("💡 `defmt` not found - is `defmt.x` passed to the linker?");
            eprintln!();
        } else if what == "_stack_start" {
            eprintln!();
            eprintln!("💡 Is the linker script `linkall.x` missing?");
            eprintln!();
        }

        std::process::exit(0);
    }

    println!(
        "cargo:rustc-link-arg=--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}
