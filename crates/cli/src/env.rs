// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

// --- Settings file ---

/// Settings file named by SHELLCMD_CONFIG
pub fn config_override() -> Option<PathBuf> {
    std::env::var_os("SHELLCMD_CONFIG")
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

/// <config dir>/shellcmd/config.toml, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shellcmd").join("config.toml"))
}

// --- Logging ---

/// Filter directives for the stderr log, e.g. `shellcmd_parser=debug`.
pub fn log_filter() -> String {
    std::env::var("SHELLCMD_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "warn".to_string())
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}
