// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Call tree module
//!
//! Defines the generic OpenSCAD call tree and the encoder that builds it from typed records

mod encode;
mod encoder;
mod function;

pub use encode::{Encode, Field, FunctionName, Layout, NameProvider, ParameterProvider, Role};
pub use encoder::{encode, encode_optional};
pub use function::Function;
