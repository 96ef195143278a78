//! Loading exported collections from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use linarqa_config::ReportConfig;
use linarqa_core::decode_collection;
use serde::de::DeserializeOwned;
use tracing::info;

/// Reads a backend JSON body from `path` and decodes its items.
///
/// Relative paths resolve against the configured data directory. The body
/// may be a bare array or a paging envelope; any other shape yields an empty
/// list.
pub fn load_collection<T>(config: &ReportConfig, path: impl AsRef<Path>) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let path = config.resolve(path);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let body: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    let items: Vec<T> = decode_collection(body)
        .with_context(|| format!("Failed to decode {}", path.display()))?;

    info!(path = %path.display(), count = items.len(), "Loaded collection");
    Ok(items)
}
