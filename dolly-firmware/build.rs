//! Build script for dolly-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates slider.toml at compile time
//! - Generates `slider_config.rs` constants from it

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Section, key, inclusive range
const INTEGER_KEYS: &[(&str, &str, i64, i64)] = &[
    ("motion", "steps_per_mm", 1, 1000),
    ("motion", "max_travel_mm", 1, 999_999),
    ("motion", "min_pulse_period_us", 10, 1_000_000),
    ("motion", "step_pulse_us", 1, 100),
    ("motion", "poll_interval_us", 100, 100_000),
    ("shutter", "settle_ms", 0, 60_000),
    ("shutter", "pulse_ms", 1, 60_000),
    ("shutter", "open_ms", 1, 600_000),
    ("display", "cols", 8, 40),
    ("display", "rows", 2, 4),
    ("keypad", "settle_ms", 0, 1000),
    ("keypad", "poll_ms", 1, 100),
    ("digits", "distance", 1, 6),
    ("digits", "duration", 1, 6),
    ("digits", "steps", 1, 6),
];

const ADC_MAX: i64 = 4095;
const LADDER_KEYS: usize = 5;

fn main() {
    setup_linker();
    let config = load_config();
    let values = validate_config(&config);
    generate_config(&values);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // cortex-m-rt, embassy-rp boot2 and defmt linker scripts
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and parse slider.toml
fn load_config() -> toml::Value {
    println!("cargo:rerun-if-changed=slider.toml");

    let config_path = Path::new("slider.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: slider.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a slider.toml configuration file.         ║\n\
            ║  Please create one in the dolly-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read slider.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in slider.toml                       ║\n\
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

/// Validated configuration values
struct Values {
    ints: Vec<(String, i64)>,
    thresholds: [i64; LADDER_KEYS],
}

impl Values {
    fn get(&self, section: &str, key: &str) -> i64 {
        let name = const_name(section, key);
        self.ints
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
            .unwrap_or(0)
    }
}

/// Validate every section, collecting all problems before failing
fn validate_config(config: &toml::Value) -> Values {
    let mut errors = Vec::new();
    let mut ints = Vec::new();

    for &(section, key, min, max) in INTEGER_KEYS {
        match config.get(section).and_then(|s| s.get(key)) {
            Some(toml::Value::Integer(v)) if (min..=max).contains(v) => {
                ints.push((const_name(section, key), *v));
            }
            Some(toml::Value::Integer(_)) => {
                errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            }
            Some(_) => errors.push(format!("[{}] {} must be an integer", section, key)),
            None => errors.push(format!("[{}] missing '{}'", section, key)),
        }
    }

    let thresholds = validate_thresholds(config, &mut errors);

    let values = Values { ints, thresholds };

    if errors.is_empty() {
        validate_cross_checks(&values, &mut errors);
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in slider.toml                     ║\n\
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

    println!("cargo:warning=slider.toml validated successfully");
    values
}

/// Ladder thresholds: five ascending ADC counts
fn validate_thresholds(config: &toml::Value, errors: &mut Vec<String>) -> [i64; LADDER_KEYS] {
    let mut thresholds = [0; LADDER_KEYS];

    let array = match config.get("keypad").and_then(|k| k.get("thresholds")) {
        Some(toml::Value::Array(a)) => a,
        Some(_) => {
            errors.push("[keypad] thresholds must be an array".to_string());
            return thresholds;
        }
        None => {
            errors.push("[keypad] missing 'thresholds'".to_string());
            return thresholds;
        }
    };

    if array.len() != LADDER_KEYS {
        errors.push(format!(
            "[keypad] thresholds needs {} entries, found {}",
            LADDER_KEYS,
            array.len()
        ));
        return thresholds;
    }

    for (i, value) in array.iter().enumerate() {
        match value {
            toml::Value::Integer(v) if (0..=ADC_MAX).contains(v) => thresholds[i] = *v,
            _ => errors.push(format!("[keypad] thresholds[{}] must be 0-{}", i, ADC_MAX)),
        }
    }

    if thresholds.windows(2).any(|w| w[0] >= w[1]) {
        errors.push("[keypad] thresholds must be strictly ascending".to_string());
    }

    thresholds
}

/// Rules that span more than one key
fn validate_cross_checks(values: &Values, errors: &mut Vec<String>) {
    let settle = values.get("shutter", "settle_ms");
    let pulse = values.get("shutter", "pulse_ms");
    let open = values.get("shutter", "open_ms");
    if settle + pulse > open {
        errors.push("[shutter] settle_ms + pulse_ms must not exceed open_ms".to_string());
    }

    let step_pulse = values.get("motion", "step_pulse_us");
    let min_period = values.get("motion", "min_pulse_period_us");
    if min_period < 2 * step_pulse {
        errors.push("[motion] min_pulse_period_us must be >= 2 x step_pulse_us".to_string());
    }

    let distance_digits = values.get("digits", "distance") as u32;
    let max_entry = 10i64.pow(distance_digits) - 1;
    if values.get("motion", "max_travel_mm") > max_entry {
        errors.push("[motion] max_travel_mm does not fit in [digits] distance".to_string());
    }

    let cols = values.get("display", "cols");
    let widest = ["distance", "duration", "steps"]
        .iter()
        .map(|k| values.get("digits", k))
        .max()
        .unwrap_or(0);
    // Digits, a space and the longest unit ("shots")
    if widest + 6 > cols {
        errors.push("[display] cols too narrow for the widest value line".to_string());
    }
}

/// Emit `slider_config.rs` into OUT_DIR
fn generate_config(values: &Values) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut out = String::from("// Generated by build.rs from slider.toml\n\n");

    for (name, value) in &values.ints {
        let ty = const_type(name);
        out.push_str(&format!("pub const {}: {} = {};\n", name, ty, value));
    }

    out.push_str(&format!(
        "pub const KEYPAD_THRESHOLDS: [u16; {}] = [{}];\n",
        LADDER_KEYS,
        values
            .thresholds
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    ));

    fs::write(out_dir.join("slider_config.rs"), out).unwrap();
}

/// Constant name for a section/key pair, e.g. `SHUTTER_OPEN_MS`
fn const_name(section: &str, key: &str) -> String {
    format!("{}_{}", section, key).to_uppercase()
}

/// Rust type of a generated constant
fn const_type(name: &str) -> &'static str {
    if name.starts_with("DISPLAY_") || name.starts_with("DIGITS_") {
        "u8"
    } else {
        "u32"
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
