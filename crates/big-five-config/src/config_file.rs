use crate::paths::app_config_path;
use std::path::Path;

const LOCAL_CONFIG_FILE: &str = ".big-five-lander.toml";

/// Load config file content from CWD first, then the config directory
///
/// Searches for:
/// 1. `.big-five-lander.toml` in the current working directory
/// 2. `config.toml` in the application config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Some(content) = read_config(Path::new(LOCAL_CONFIG_FILE)) {
        return Some(content);
    }

    match app_config_path() {
        Ok(path) => read_config(&path),
        Err(e) => {
            log::debug!("No config directory available: {:#}", e);
            None
        }
    }
}

fn read_config(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(_) => None,
    }
}
