// src/utils/io.rs
use std::path::PathBuf;

/// Get the application data directory, used as a fallback location
/// for the reference wordlist files.
pub fn get_app_data_dir() -> Option<PathBuf> {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "passcraft", "passcraft") {
        Some(proj_dirs.data_dir().to_path_buf())
    } else {
        log::error!("Could not determine data directory");
        None
    }
}
