// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - rendering call trees and writing them out

mod renderer;
mod writer;

pub use renderer::{Renderer, ScadFile};
pub use writer::write_files;
