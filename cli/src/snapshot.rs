// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The event collection on disk, a JSON array of events.

use std::{error::Error, io, path::Path};

use calgrid_core::Event;
use tokio::fs;

/// Loads the event collection, a missing file is an empty collection.
#[tracing::instrument]
pub async fn load(path: &Path) -> Result<Vec<Event>, Box<dyn Error>> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("events file not found, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(format!("Failed to read events file at {}: {e}", path.display()).into());
        }
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let events: Vec<Event> = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse events file at {}: {e}", path.display()))?;
    tracing::debug!(count = events.len(), "events loaded");
    Ok(events)
}

/// Writes the event collection, replacing the file in one rename.
#[tracing::instrument(skip(events), fields(count = events.len()))]
pub async fn save(path: &Path, events: &[Event]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| format!("Failed to create directory {}: {e}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(events)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)
        .await
        .map_err(|e| format!("Failed to write events file at {}: {e}", tmp.display()))?;
    fs::rename(&tmp, path)
        .await
        .map_err(|e| format!("Failed to replace events file at {}: {e}", path.display()))?;

    tracing::debug!("events saved");
    Ok(())
}
