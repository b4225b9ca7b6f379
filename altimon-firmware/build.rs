//! Build script for altimon-firmware
//!
//! - Sets up linker search paths and arguments for memory.x
//! - Validates board.toml at compile time
//! - Generates the `BOARD` constant from board.toml

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level layout of board.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BoardToml {
    i2c: I2cSection,
    display: DisplaySection,
    sensor: SensorSection,
    #[serde(default)]
    monitor: MonitorSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct I2cSection {
    frequency_hz: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DisplaySection {
    address: u8,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SensorSection {
    address: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
struct MonitorSection {
    poll_interval_ms: u32,
    cycle_interval_ms: u32,
}

impl Default for MonitorSection {
    fn default() -> Self {
        Self {
            poll_interval_ms: 500,
            cycle_interval_ms: 1000,
        }
    }
}

fn main() {
    setup_linker();
    let board = load_board_config();
    validate_board(&board);
    generate_board_constants(&board);
}

/// Set up linker search paths and scripts for the RP2040
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and parse board.toml
fn load_board_config() -> BoardToml {
    // Re-run if board.toml changes
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the altimon-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&config_content) {
        Ok(board) => board,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid board.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check value ranges that serde cannot express
fn validate_board(board: &BoardToml) {
    let mut errors = Vec::new();

    if !(10_000..=1_000_000).contains(&board.i2c.frequency_hz) {
        errors.push("[i2c] frequency_hz must be 10000-1000000".to_string());
    }

    if ![0x3C, 0x3D].contains(&board.display.address) {
        errors.push(format!(
            "[display] address must be 0x3C or 0x3D (got {:#04X})",
            board.display.address
        ));
    }

    if sensor_address_variant(&board.sensor.address).is_none() {
        errors.push(format!(
            "[sensor] address must be 'primary' or 'secondary' (got '{}')",
            board.sensor.address
        ));
    }

    if board.monitor.poll_interval_ms == 0 {
        errors.push("[monitor] poll_interval_ms must be greater than 0".to_string());
    }

    if board.monitor.cycle_interval_ms == 0 {
        errors.push("[monitor] cycle_interval_ms must be greater than 0".to_string());
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid board configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=board.toml validated successfully");
}

/// Map the board.toml sensor address onto the driver enum variant
fn sensor_address_variant(address: &str) -> Option<&'static str> {
    match address {
        "primary" => Some("Primary"),
        "secondary" => Some("Secondary"),
        _ => None,
    }
}

/// Write `board_config.rs` into OUT_DIR
fn generate_board_constants(board: &BoardToml) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let variant = sensor_address_variant(&board.sensor.address).unwrap();

    let source = format!(
        "/// Board configuration generated from board.toml\n\
         pub const BOARD: BoardConfig = BoardConfig {{\n\
         \x20   i2c_frequency_hz: {},\n\
         \x20   display_address: {:#04X},\n\
         \x20   sensor_address: SensorAddress::{},\n\
         \x20   monitor: MonitorConfig::new({}, {}),\n\
         }};\n",
        board.i2c.frequency_hz,
        board.display.address,
        variant,
        board.monitor.poll_interval_ms,
        board.monitor.cycle_interval_ms,
    );

    fs::write(out_dir.join("board_config.rs"), source).unwrap();
}
