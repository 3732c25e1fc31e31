use super::snapshot::{RestoreCapability, SavedState, decode_state, encode_state};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes encoded state to `path`, replacing any previous file atomically.
pub fn write_state_file<P: Serialize>(path: &Path, saved: &SavedState<P>) -> Result<()> {
    let bytes = encode_state(saved)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| {
            format!("failed to create state directory {}", parent.display())
        })?;
    }

    let tmp_path = temp_path(path);
    {
        let mut tmp_file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
            .with_context(|| {
                format!("failed to open temporary state file {}", tmp_path.display())
            })?;
        tmp_file
            .write_all(&bytes)
            .context("failed to write surface state")?;
        tmp_file
            .sync_all()
            .context("failed to sync temporary state file")?;
    }

    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "failed to move temporary state file {} -> {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    info!("Surface state saved to {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Reads state previously written by [`write_state_file`].
///
/// Returns `Ok(None)` when no file exists at `path`.
pub fn read_state_file<P: DeserializeOwned>(
    path: &Path,
    capability: RestoreCapability,
) -> Result<Option<SavedState<P>>> {
    if !path.exists() {
        debug!("No state file present at {}, skipping restore", path.display());
        return Ok(None);
    }

    let bytes =
        fs::read(path).with_context(|| format!("failed to read state file {}", path.display()))?;
    let saved = decode_state(&bytes, capability)
        .with_context(|| format!("failed to decode state file {}", path.display()))?;
    Ok(Some(saved))
}

fn temp_path(target: &Path) -> PathBuf {
    let mut candidate = target.with_extension("json.tmp");
    let mut counter = 0u32;
    while candidate.exists() {
        counter += 1;
        candidate = target.with_extension(format!("json.tmp{}", counter));
    }
    candidate
}
