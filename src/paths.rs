//! Platform-appropriate locations for the config file and logs.
//!
//! In development mode (cargo run), paths resolve to the working directory.
//! In installed mode, paths resolve to platform-specific locations:
//! - Windows: `%APPDATA%\Fenceline\`
//! - macOS: `~/Library/Application Support/Fenceline/`
//! - Linux: `~/.config/fenceline/` (config), `~/.local/share/fenceline/` (logs)

use std::path::PathBuf;

/// Returns true when running in development mode (cargo run).
///
/// Detection methods:
/// - `CARGO` env var is set (cargo run sets this)
/// - Debug assertions enabled (debug builds)
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

/// Platform-appropriate config directory.
pub fn config_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    #[cfg(target_os = "linux")]
    {
        dirs::config_dir().map(|p| p.join("fenceline"))
    }

    #[cfg(not(target_os = "linux"))]
    {
        data_dir()
    }
}

/// Platform-appropriate data directory.
pub fn data_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    dirs::data_dir().map(|p| p.join("fenceline"))
}

/// Path to the config file (`config.json` inside [`config_dir`]).
pub fn config_file() -> PathBuf {
    config_dir()
        .map(|p| p.join("config.json"))
        .unwrap_or_else(|| PathBuf::from("config.json"))
}

/// Path to the logs directory (`logs/` inside [`data_dir`]).
pub fn logs_dir() -> PathBuf {
    data_dir()
        .map(|p| p.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Ensure the config directory exists so the config file can be written.
pub fn ensure_config_dir() -> std::io::Result<()> {
    if is_dev_mode() {
        return Ok(());
    }

    if let Some(config) = config_dir() {
        std::fs::create_dir_all(config)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_has_json_extension() {
        let path = config_file();
        assert!(path.to_string_lossy().ends_with("config.json"));
    }

    #[test]
    fn test_logs_dir_ends_with_logs() {
        assert!(logs_dir().ends_with("logs"));
    }

    #[test]
    fn test_dev_mode_returns_local_paths() {
        // In tests, is_dev_mode() should be true due to debug_assertions
        assert!(is_dev_mode());
        assert_eq!(config_dir(), Some(PathBuf::from(".")));
        assert_eq!(data_dir(), Some(PathBuf::from(".")));
    }
}
