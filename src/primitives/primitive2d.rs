// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! 2D primitives

use crate::ast::{Encode, Field, Layout};
use crate::value::{Bool, Float, FloatXY, Int, Str};

/// `square()`. Set only one of `size` or `size_xy`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Square {
    pub size: Float,
    pub size_xy: FloatXY,
    pub center: Bool,
}

impl Encode for Square {
    fn layout(&self) -> Layout<'_> {
        Layout::Record(vec![
            Field::auto_name("Square"),
            Field::parameter("Size", &self.size),
            Field::parameter("SizeXY", &self.size_xy).rename("size"),
            Field::parameter("Center", &self.center),
        ])
    }
}

/// `circle()`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    pub r: Float,
    pub d: Float,
    pub fn_: Int,
}

impl Encode for Circle {
    fn layout(&self) -> Layout<'_> {
        Layout::Record(vec![
            Field::auto_name("Circle"),
            Field::parameter("R", &self.r),
            Field::parameter("D", &self.d),
            Field::parameter("Fn", &self.fn_).rename("$fn"),
        ])
    }
}

/// `text()`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub text: Str,
    pub size: Float,
    pub font: Str,
    pub halign: Str,
    pub valign: Str,
    pub spacing: Float,
}

impl Encode for Text {
    fn layout(&self) -> Layout<'_> {
        Layout::Record(vec![
            Field::auto_name("Text"),
            Field::parameter("Text", &self.text),
            Field::parameter("Size", &self.size),
            Field::parameter("Font", &self.font),
            Field::parameter("HAlign", &self.halign),
            Field::parameter("VAlign", &self.valign),
            Field::parameter("Spacing", &self.spacing),
        ])
    }
}
