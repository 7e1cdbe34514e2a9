//! Binary entry point for `cargo-version-table`.

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = cargo_version_table::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
