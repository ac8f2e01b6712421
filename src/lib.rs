// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! scadgen
//!
//! Encodes typed Rust records into OpenSCAD source. A record describes its
//! fields through [`ast::Encode`]; the encoder turns it into a [`Function`]
//! call tree and the [`Renderer`] writes that tree as one `.scad` module per
//! named call.
//!
//! ```rust
//! use scadgen::primitives::Cube;
//!
//! let files = scadgen::render(&Cube::new(1.0, 2.0, 3.0), ".").unwrap();
//! assert_eq!(
//!     files[0].body,
//!     "module cube_component() {\n\tcube(size=[1, 2, 3]);\n}\n\ncube_component();\n"
//! );
//! ```

pub mod ast;
pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod io;
pub mod kernel;
pub mod models;
pub mod name;
pub mod primitives;
pub mod value;

pub use ast::{encode, Encode, Field, Function, Layout};
pub use compose::{add, add_with_name, apply, union, wrap, Component, Composite, EncodeExt, Named};
pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use io::{write_files, Renderer, ScadFile};
pub use kernel::Generator;
pub use name::{first_non_empty, Identifier};

use std::path::Path;

/// Encode a record and render it into files below `output_dir`
pub fn render(record: &dyn Encode, output_dir: impl AsRef<Path>) -> Result<Vec<ScadFile>> {
    let function = encode(record)?;
    Renderer::new().render(&function, output_dir)
}
