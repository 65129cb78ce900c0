//! Build script for dumbwaiter-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates machine.toml and compiles it into a `MACHINE_CONFIG` constant

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dumbwaiter_core::config::{ActiveLevel, ConfigError, MachineConfig};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    setup_linker(&out_dir);
    generate_config(&out_dir);
}

/// Set up linker search paths and scripts
fn setup_linker(out_dir: &Path) {
    fs::write(out_dir.join("memory.x"), include_bytes!("memory.x"))
        .expect("failed to copy memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse, validate and emit machine.toml
fn generate_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed=machine.toml");

    let config_path = Path::new("machine.toml");
    if !config_path.exists() {
        fail(
            "machine.toml not found!",
            &["Create one in the dumbwaiter-firmware directory."],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read machine.toml", &[e.to_string().as_str()]),
    };

    let config: MachineConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            let message = e.to_string();
            let lines: Vec<&str> = message.lines().collect();
            fail("Invalid machine.toml", &lines)
        }
    };

    if let Err(e) = config.validate() {
        fail("Invalid machine configuration", &[describe(e)]);
    }

    fs::write(out_dir.join("machine_config.rs"), render(&config))
        .expect("failed to write machine_config.rs");

    println!(
        "cargo:warning=machine.toml validated: {} floors, guard {} ms",
        config.cabin.floor_count, config.cabin.guard_delay_ms
    );
}

fn describe(error: ConfigError) -> &'static str {
    match error {
        ConfigError::VersionMismatch => "version must be 1",
        ConfigError::FloorCount => "[cabin] floor_count must be 2-8",
        ConfigError::GuardDelay => "[cabin] guard_delay_ms must be greater than 0",
        ConfigError::CycleInterval => {
            "[cabin] cycle_interval_ms must be greater than 0 and less than guard_delay_ms"
        }
        ConfigError::BaudRate => "[bus] baud_rate must be greater than 0",
    }
}

fn level(level: ActiveLevel) -> &'static str {
    match level {
        ActiveLevel::High => "ActiveLevel::High",
        ActiveLevel::Low => "ActiveLevel::Low",
    }
}

/// Rust source for the validated configuration
fn render(config: &MachineConfig) -> String {
    format!(
        "pub const MACHINE_CONFIG: MachineConfig = MachineConfig {{
    version: {version},
    cabin: CabinConfig {{
        floor_count: {floor_count},
        guard_delay_ms: {guard_delay_ms},
        cycle_interval_ms: {cycle_interval_ms},
    }},
    inputs: InputConfig {{
        door_open: {door_open},
        magnet: {magnet},
        buttons: {buttons},
    }},
    bus: BusConfig {{
        baud_rate: {baud_rate},
        status_refresh_ms: {status_refresh_ms},
    }},
}};
",
        version = config.version,
        floor_count = config.cabin.floor_count,
        guard_delay_ms = config.cabin.guard_delay_ms,
        cycle_interval_ms = config.cabin.cycle_interval_ms,
        door_open = level(config.inputs.door_open),
        magnet = level(config.inputs.magnet),
        buttons = level(config.inputs.buttons),
        baud_rate = config.bus.baud_rate,
        status_refresh_ms = config.bus.status_refresh_ms,
    )
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[&str]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<58} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
