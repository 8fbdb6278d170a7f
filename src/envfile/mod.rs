//! Env store — the flat `KEY=value` file read by docker compose substitution
//!
//! The generator only ever adds or overwrites keys. Keys it does not know
//! about (VPN credentials, per-app secrets maintained by hand) are preserved
//! untouched, along with comments, blank lines, and line order.

use std::path::Path;
use tracing::info;

/// Apply `updates` to the env file at `path`, creating it if missing.
/// Existing keys are overwritten in place; new keys are appended. Values are
/// written without quoting.
pub fn update(path: &str, updates: &[(&str, String)]) -> Result<(), String> {
    let existing = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(format!("Failed to read env file {}: {}", path, e)),
    };

    let mut lines: Vec<String> = existing.lines().map(|l| l.to_string()).collect();
    for (key, value) in updates {
        let prefix = format!("{}=", key);
        match lines.iter_mut().find(|l| l.starts_with(&prefix)) {
            Some(line) => *line = format!("{}={}", key, value),
            None => lines.push(format!("{}={}", key, value)),
        }
    }

    let mut content = lines.join("\n");
    content.push('\n');
    write_atomic(path, &content)?;
    info!("🔑 Env store: updated {} key(s) in {}", updates.len(), path);
    Ok(())
}

/// Write a file via a temp file + rename so readers never see a partial file
pub fn write_atomic(path: &str, contents: &str) -> Result<(), String> {
    let tmp = format!("{}.tmp", path);
    std::fs::write(&tmp, contents)
        .map_err(|e| format!("Failed to write {}: {}", tmp, e))?;
    std::fs::rename(&tmp, path)
        .map_err(|e| format!("Failed to move {} into place: {}", Path::new(path).display(), e))?;
    Ok(())
}
