//! * Generate shell autocompletion files.

use clap::ValueEnum;
use clap_complete::{generate_to, Shell};
use std::env;
use std::io::Error;

mod blink { include!("src/bin/blink/cli.rs"); }

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=src/bin/blink/cli.rs");

    let out_dir = {
        let out_dir = env::var_os("OUT_DIR").expect("ENV[OUT_DIR] to have a value.");
        let mut out_dir = std::path::PathBuf::from(out_dir);
        out_dir.push("autocomplete");
        std::fs::create_dir_all(&out_dir)?;
        out_dir
    };

    let mut command = blink::command();
    let bin_name = command.get_bin_name().expect("Expected command to have bin_name.").to_string();

    for &shell in Shell::value_variants() {
        let mut out_dir = out_dir.clone();
        out_dir.push(shell.to_string());
        std::fs::create_dir_all(&out_dir)?;
        let _ = generate_to(shell, &mut command, bin_name.clone(), &out_dir)?;
    }

    Ok(())
}
