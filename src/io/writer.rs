// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Writes rendered modules to disk

use super::renderer::ScadFile;
use anyhow::{Context, Result};
use std::fs;
use tracing::debug;

/// Write every file, creating parent directories as needed
pub fn write_files(files: &[ScadFile]) -> Result<()> {
    for file in files {
        if let Some(parent) = file.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file.path, &file.body)
            .with_context(|| format!("Failed to write SCAD file: {}", file.path.display()))?;

        debug!(path = %file.path.display(), bytes = file.body.len(), "wrote module");
    }

    Ok(())
}
