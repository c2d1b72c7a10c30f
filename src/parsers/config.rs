use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::CardConfig;

// Config files are a handful of keys; anything larger is a mistake
const MAX_CONFIG_SIZE_BYTES: u64 = 64 * 1024;

/// Load a JSON card config file
///
/// Missing keys take their defaults (see [`CardConfig::default`]).
///
/// # Errors
///
/// Returns an error if the file cannot be opened, exceeds 64KB, or is not valid config JSON.
pub fn load_config(path: &Path) -> Result<CardConfig> {
    // Check size on the open handle so the file we read is the file we measured
    let file = File::open(path)
        .with_context(|| format!("Failed to open config file: {}", path.display()))?;
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    if metadata.len() > MAX_CONFIG_SIZE_BYTES {
        bail!(
            "Config file too large: {} ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_CONFIG_SIZE_BYTES
        );
    }

    let config: CardConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    tracing::debug!(path = %path.display(), ?config, "loaded card config");
    Ok(config)
}
