// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! 3D primitives

use crate::ast::{Encode, Field, Layout};
use crate::value::{Bool, Float, FloatXYZ, Int};

/// `cube()`. Set only one of `size` or `size_xyz`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cube {
    pub size: Float,
    pub size_xyz: FloatXYZ,
    pub center: Bool,
}

impl Cube {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            size_xyz: FloatXYZ::xyz(x, y, z),
            ..Self::default()
        }
    }

    pub fn centered(mut self) -> Self {
        self.center.set(true);
        self
    }
}

impl Encode for Cube {
    fn layout(&self) -> Layout<'_> {
        Layout::Record(vec![
            Field::auto_name("Cube"),
            Field::parameter("Size", &self.size),
            Field::parameter("SizeXYZ", &self.size_xyz).rename("size"),
            Field::parameter("Center", &self.center),
        ])
    }
}

/// `sphere()`. Set only one of `r` or `d`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sphere {
    pub r: Float,
    pub d: Float,
    pub fn_: Int,
}

impl Encode for Sphere {
    fn layout(&self) -> Layout<'_> {
        Layout::Record(vec![
            Field::auto_name("Sphere"),
            Field::parameter("R", &self.r),
            Field::parameter("D", &self.d),
            Field::parameter("Fn", &self.fn_).rename("$fn"),
        ])
    }
}

/// `cylinder()`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cylinder {
    pub h: Float,
    pub r: Float,
    pub r1: Float,
    pub r2: Float,
    pub d: Float,
    pub d1: Float,
    pub d2: Float,
    pub center: Bool,
    pub fn_: Int,
}

impl Encode for Cylinder {
    fn layout(&self) -> Layout<'_> {
        Layout::Record(vec![
            Field::auto_name("Cylinder"),
            Field::parameter("H", &self.h),
            Field::parameter("R", &self.r),
            Field::parameter("R1", &self.r1),
            Field::parameter("R2", &self.r2),
            Field::parameter("D", &self.d),
            Field::parameter("D1", &self.d1),
            Field::parameter("D2", &self.d2),
            Field::parameter("Center", &self.center),
            Field::parameter("Fn", &self.fn_).rename("$fn"),
        ])
    }
}
