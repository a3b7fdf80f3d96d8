// detect.rs - Best-effort probes for the host's night-mode preference

use crate::context::SystemNightMode;

pub const NIGHT_MODE_ENV_VAR: &str = "APPEARANCE_NIGHT_MODE";

/// Night-mode bit for the current process. The APPEARANCE_NIGHT_MODE
/// variable wins, then an OS probe where one exists. Every failure path
/// degrades to `Undefined`, which resolution treats as light.
pub fn system_night_mode() -> SystemNightMode {
    match night_mode_from_env() {
        SystemNightMode::Undefined => night_mode_from_os(),
        mode => mode,
    }
}

pub fn night_mode_from_env() -> SystemNightMode {
    match std::env::var(NIGHT_MODE_ENV_VAR) {
        Ok(value) => night_mode_from_value(&value),
        Err(_) => SystemNightMode::Undefined,
    }
}

fn night_mode_from_value(value: &str) -> SystemNightMode {
    match value.trim().to_lowercase().as_str() {
        "yes" | "dark" | "1" | "true" => SystemNightMode::Yes,
        "no" | "light" | "0" | "false" => SystemNightMode::No,
        _ => SystemNightMode::Undefined,
    }
}

#[cfg(target_os = "macos")]
fn night_mode_from_os() -> SystemNightMode {
    match std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) => night_mode_from_interface_style(
            output.status.success(),
            &String::from_utf8_lossy(&output.stdout),
        ),
        Err(_) => SystemNightMode::No,
    }
}

/// AppleInterfaceStyle only exists while dark mode is on; any failed read
/// means light mode.
#[cfg(any(target_os = "macos", test))]
fn night_mode_from_interface_style(read_succeeded: bool, style: &str) -> SystemNightMode {
    if read_succeeded && style.trim().eq_ignore_ascii_case("dark") {
        SystemNightMode::Yes
    } else {
        SystemNightMode::No
    }
}

#[cfg(not(target_os = "macos"))]
fn night_mode_from_os() -> SystemNightMode {
    SystemNightMode::Undefined
}
