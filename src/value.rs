// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Explicitly-set parameter values
//!
//! OpenSCAD functions have defaults for most parameters, so a record field
//! must be able to say "not given" as opposed to "given as zero". Every
//! wrapper here starts out unset and only contributes a parameter once a
//! value has been set.

use crate::ast::ParameterProvider;
use nalgebra::{Vector2, Vector3};

/// A value that can be written as an OpenSCAD literal
pub trait Literal {
    fn literal(&self) -> String;
}

impl Literal for i64 {
    fn literal(&self) -> String {
        self.to_string()
    }
}

/// Finite values use the shortest round-trip form without an exponent.
/// OpenSCAD has no literal for NaN or infinity, so those render as the
/// divisions that produce them.
impl Literal for f64 {
    fn literal(&self) -> String {
        if self.is_nan() {
            "0/0".to_string()
        } else if self.is_infinite() {
            if *self > 0.0 { "1/0" } else { "-1/0" }.to_string()
        } else {
            format!("{}", self)
        }
    }
}

impl Literal for bool {
    fn literal(&self) -> String {
        self.to_string()
    }
}

impl Literal for String {
    fn literal(&self) -> String {
        let mut out = String::with_capacity(self.len() + 2);
        out.push('"');
        for c in self.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\t' => out.push_str("\\t"),
                '\r' => out.push_str("\\r"),
                c => out.push(c),
            }
        }
        out.push('"');
        out
    }
}

impl<T: Literal, const N: usize> Literal for [T; N] {
    fn literal(&self) -> String {
        let parts: Vec<String> = self.iter().map(Literal::literal).collect();
        format!("[{}]", parts.join(", "))
    }
}

/// A value plus a flag recording whether it was explicitly set
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Explicit<T> {
    value: T,
    set: bool,
}

impl<T> Explicit<T> {
    /// A wrapper holding `value`, marked as set
    pub fn new(value: T) -> Self {
        Self { value, set: true }
    }

    /// Explicitly set the value
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.set = true;
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_set(&self) -> bool {
        self.set
    }

    /// The value if it was set
    pub fn get(&self) -> Option<&T> {
        self.set.then_some(&self.value)
    }
}

impl<T: Literal> ParameterProvider for Explicit<T> {
    fn is_set(&self) -> bool {
        self.set
    }

    fn render(&self) -> String {
        self.value.literal()
    }
}

/// Integer parameter
pub type Int = Explicit<i64>;
/// Floating point parameter
pub type Float = Explicit<f64>;
/// Boolean parameter
pub type Bool = Explicit<bool>;
/// String parameter
pub type Str = Explicit<String>;
/// Two-component vector parameter
pub type FloatXY = Explicit<[f64; 2]>;
/// Three-component vector parameter
pub type FloatXYZ = Explicit<[f64; 3]>;

impl Explicit<[f64; 2]> {
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new([x, y])
    }
}

impl Explicit<[f64; 3]> {
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new([x, y, z])
    }
}

impl From<i64> for Int {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<f64> for Float {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<bool> for Bool {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Str {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl From<String> for Str {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<[f64; 2]> for FloatXY {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value)
    }
}

impl From<[f64; 3]> for FloatXYZ {
    fn from(value: [f64; 3]) -> Self {
        Self::new(value)
    }
}

impl From<Vector2<f64>> for FloatXY {
    fn from(v: Vector2<f64>) -> Self {
        Self::xy(v.x, v.y)
    }
}

impl From<Vector3<f64>> for FloatXYZ {
    fn from(v: Vector3<f64>) -> Self {
        Self::xyz(v.x, v.y, v.z)
    }
}
