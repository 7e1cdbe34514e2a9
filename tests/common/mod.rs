//! Integration tests for cargo-version-table
//!
//! These tests create a plugin project on disk and run the binary against it
//! through the command-line interface.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const README: &str = "# myplug

Shakes the camera.

## Bevy version support

| bevy | myplug |
|-|-|
|0.13|0.5, main|
|0.12|0.4|

## License

MIT
";

/// Helper to create a plugin project with a manifest and a README
pub fn create_plugin_project(manifest: &str, readme: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Cargo.toml"), manifest).unwrap();
    fs::write(temp.path().join("README.md"), readme).unwrap();
    temp
}

/// Manifest declaring `version` for the package and a plain `bevy` dependency
#[allow(unused)]
pub fn manifest(version: &str, bevy: &str) -> String {
    format!(
        r#"[package]
name = "myplug"
version = "{version}"
edition = "2021"

[dependencies]
bevy = "{bevy}"
"#
    )
}

#[allow(unused)]
pub fn read_readme(root: &Path) -> String {
    fs::read_to_string(root.join("README.md")).unwrap()
}

/// Helper to run the version-table subcommand
pub fn run_bump(root: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("cargo-version-table");
    cmd.arg("version-table").args(extra_args).current_dir(root);

    cmd.assert()
}
