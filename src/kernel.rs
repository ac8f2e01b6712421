// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Generator API: encode, render and write in one place

use crate::ast::{self, Encode, Function};
use crate::config::GeneratorConfig;
use crate::io::{self, Renderer, ScadFile};
use anyhow::{Context, Result};
use tracing::info;

/// Generates `.scad` modules from records using one configuration
pub struct Generator {
    config: GeneratorConfig,
    renderer: Renderer,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let renderer = Renderer::from_config(&config);
        Self { config, renderer }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Encode a record into its call tree
    pub fn encode(&self, record: &dyn Encode) -> crate::Result<Function> {
        ast::encode(record)
    }

    /// Encode and render a record into files below the configured output directory
    pub fn render(&self, record: &dyn Encode) -> crate::Result<Vec<ScadFile>> {
        let function = self.encode(record)?;
        self.renderer.render(&function, &self.config.output_dir)
    }

    /// Render a record and write the files
    pub fn write(&self, record: &dyn Encode) -> Result<Vec<ScadFile>> {
        let files = self
            .render(record)
            .with_context(|| format!("Failed to render {}", record.type_name()))?;
        io::write_files(&files)?;

        info!(
            files = files.len(),
            output_dir = %self.config.output_dir.display(),
            "generated modules"
        );
        Ok(files)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
