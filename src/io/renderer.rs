// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Module renderer
//!
//! Turns a [`Function`] tree into `.scad` files. The root and every
//! explicitly named call become modules with their own file; all other calls
//! are written inline in the body of the nearest enclosing module.
//!
//! A named sub-module lives in a directory named after it, next to the file
//! that uses it:
//!
//! ```text
//! translate_component.scad
//! cube_component/cube_component.scad
//! ```

use crate::ast::Function;
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::name::Identifier;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScadFile {
    pub path: PathBuf,
    pub body: String,
}

/// Renders call trees as OpenSCAD modules
#[derive(Debug, Clone)]
pub struct Renderer {
    indent: String,
    component_suffix: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            indent: config.indent.clone(),
            component_suffix: config.component_suffix.clone(),
        }
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Identifier of the root module: its explicit name, or `<call>_component`
    pub fn root_identifier(&self, root: &Function) -> Result<Identifier> {
        match &root.module {
            Some(module) => Ok(module.clone()),
            None => Identifier::new(format!("{}{}", root.name, self.component_suffix)),
        }
    }

    /// Render `root` and every named module below it. The root file comes first.
    pub fn render(&self, root: &Function, output_dir: impl AsRef<Path>) -> Result<Vec<ScadFile>> {
        let module = self.root_identifier(root)?;
        let mut files = Vec::new();
        self.render_module(root, &module, output_dir.as_ref(), &mut files)?;
        Ok(files)
    }

    /// The statements for `function` alone, e.g. `cube(size=[1, 2, 3]);`
    pub fn content(&self, function: &Function) -> String {
        let mut out = String::new();
        self.write_call(&mut out, function, 0, true);
        out
    }

    fn render_module(
        &self,
        function: &Function,
        module: &Identifier,
        dir: &Path,
        files: &mut Vec<ScadFile>,
    ) -> Result<()> {
        let mut dependencies = Vec::new();
        collect_dependencies(function, module, &mut dependencies)?;

        let mut body = String::new();
        for (dependency, _) in &dependencies {
            body.push_str(&format!("use <{}/{}>\n", dependency, dependency.filename()));
        }
        if !dependencies.is_empty() {
            body.push('\n');
        }

        body.push_str(&format!("module {}() {{\n", module));
        self.write_call(&mut body, function, 1, true);
        body.push_str("}\n\n");
        body.push_str(&format!("{}();\n", module));

        let path = module.file_path(dir);
        debug!(module = %module, path = %path.display(), uses = dependencies.len(), "rendered module");
        files.push(ScadFile { path, body });

        for (dependency, child) in dependencies {
            self.render_module(child, dependency, &child_dir(dir, dependency), files)?;
        }

        Ok(())
    }

    /// Write one call. Named calls other than the module being defined are
    /// written as a call to their module.
    fn write_call(&self, out: &mut String, function: &Function, depth: usize, defining: bool) {
        let pad = self.indent.repeat(depth);

        if !defining {
            if let Some(module) = &function.module {
                out.push_str(&format!("{}{}();\n", pad, module));
                return;
            }
        }

        if function.children.is_empty() {
            out.push_str(&format!("{}{};\n", pad, function.call()));
            return;
        }

        out.push_str(&format!("{}{} {{\n", pad, function.call()));
        for child in &function.children {
            self.write_call(out, child, depth + 1, false);
        }
        out.push_str(&format!("{}}}\n", pad));
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Named modules referenced by `function`, directly or through inline
/// children, in first-use order and without repeats. None of them may share
/// the identifier of `defining`, the module whose body holds them.
fn collect_dependencies<'a>(
    function: &'a Function,
    defining: &Identifier,
    found: &mut Vec<(&'a Identifier, &'a Function)>,
) -> Result<()> {
    for child in &function.children {
        match &child.module {
            Some(module) if module == defining => {
                return Err(Error::ConflictingModule {
                    identifier: module.to_string(),
                });
            }
            Some(module) => match found.iter().find(|(seen, _)| *seen == module) {
                Some((_, existing)) if *existing != child => {
                    return Err(Error::ConflictingModule {
                        identifier: module.to_string(),
                    });
                }
                Some(_) => {}
                None => found.push((module, child)),
            },
            None => collect_dependencies(child, defining, found)?,
        }
    }
    Ok(())
}

fn child_dir(dir: &Path, module: &Identifier) -> PathBuf {
    if dir.as_os_str().is_empty() || dir == Path::new(".") {
        PathBuf::from(module.as_str())
    } else {
        dir.join(module.as_str())
    }
}
