// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! OpenSCAD primitive library
//!
//! Plain records over the capability traits. Every unset value is left out
//! of the generated call so OpenSCAD's own defaults apply.

macro_rules! transformation {
    ($($ty:ty),* $(,)?) => {
        $(
            impl crate::compose::Transformation for $ty {
                fn push_child(&mut self, child: crate::compose::Composite) {
                    self.children.push(child);
                }

                fn into_composite(self: Box<Self>) -> crate::compose::Composite {
                    self
                }
            }
        )*
    };
}

mod boolean;
mod extrude;
mod primitive2d;
mod primitive3d;
mod transformation;

pub use boolean::{Difference, Intersection, Union};
pub use extrude::LinearExtrude;
pub use primitive2d::{Circle, Square, Text};
pub use primitive3d::{Cube, Cylinder, Sphere};
pub use transformation::{Rotate, Scale, Translate};
