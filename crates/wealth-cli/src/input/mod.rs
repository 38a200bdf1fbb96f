pub mod file;
pub mod stdin;

use log::info;
use serde::de::DeserializeOwned;

/// Resolve a command's input: `--input` file first, then piped stdin.
/// `Ok(None)` means neither was supplied and the caller should fall back
/// to its individual flags.
pub fn load<T: DeserializeOwned>(path: Option<&str>) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        info!("reading input from {path}");
        return Ok(Some(file::read_input(path)?));
    }
    if let Some(data) = stdin::read_stdin()? {
        info!("reading input from stdin");
        return Ok(Some(serde_json::from_value(data)?));
    }
    Ok(None)
}
