// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Config and data directories are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`PHOTO_SWIPE_DATA_DIR`, `PHOTO_SWIPE_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The photo library root has its own chain, see [`resolve_library_root`].

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "PhotoSwipe";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "PHOTO_SWIPE_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PHOTO_SWIPE_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` and `--config-dir` arguments.
///
/// Call once at startup before any path is resolved. Later calls are
/// ignored; the first values stay in effect for the whole process.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let _ = CLI_DATA_DIR.set(data_dir.map(PathBuf::from));
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

fn get_cli_data_dir() -> Option<PathBuf> {
    CLI_DATA_DIR.get().and_then(Clone::clone)
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the directory holding `state.cbor`.
///
/// Platform defaults:
/// - Linux: `~/.local/share/PhotoSwipe/`
/// - macOS: `~/Library/Application Support/PhotoSwipe/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\PhotoSwipe\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the data directory, preferring `override_path` when given.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(get_cli_data_dir)
        .or_else(|| env_dir(ENV_DATA_DIR))
        .or_else(|| dirs::data_dir().map(|path| path.join(APP_NAME)))
}

/// Returns the directory holding `settings.toml`.
///
/// Platform defaults:
/// - Linux: `~/.config/PhotoSwipe/`
/// - macOS: `~/Library/Application Support/PhotoSwipe/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\PhotoSwipe\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(get_cli_config_dir)
        .or_else(|| env_dir(ENV_CONFIG_DIR))
        .or_else(|| dirs::config_dir().map(|path| path.join(APP_NAME)))
}

/// Picks the directory to treat as the photo library.
///
/// 1. `--library` argument
/// 2. `[library] root` from `settings.toml`
/// 3. The platform pictures directory
/// 4. The home directory
pub fn resolve_library_root(cli: Option<PathBuf>, configured: Option<PathBuf>) -> Option<PathBuf> {
    cli.or(configured)
        .or_else(dirs::picture_dir)
        .or_else(dirs::home_dir)
}
