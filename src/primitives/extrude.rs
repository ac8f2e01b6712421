// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Extrusions

use crate::ast::{Encode, Field, Layout};
use crate::compose::Composite;
use crate::value::{Bool, Float, FloatXY, Int};

/// `linear_extrude()`. Set only one of `scale` or `scale_xy`.
#[derive(Default)]
pub struct LinearExtrude {
    pub height: Float,
    pub twist: Float,
    pub center: Bool,
    pub slices: Int,
    pub scale: Float,
    pub scale_xy: FloatXY,
    pub children: Vec<Composite>,
}

impl LinearExtrude {
    pub fn new(height: f64) -> Self {
        Self {
            height: Float::new(height),
            ..Self::default()
        }
    }
}

impl Encode for LinearExtrude {
    fn layout(&self) -> Layout<'_> {
        Layout::Record(vec![
            Field::auto_name("linearExtrude").rename("linear_extrude"),
            Field::parameter("Height", &self.height),
            Field::parameter("Twist", &self.twist),
            Field::parameter("Center", &self.center),
            Field::parameter("Slices", &self.slices),
            Field::parameter("Scale", &self.scale),
            Field::parameter("ScaleXY", &self.scale_xy).rename("scale"),
            Field::children("Children", &self.children),
        ])
    }
}

transformation!(LinearExtrude);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::encode;
    use crate::compose::EncodeExt;
    use crate::primitives::Square;
    use crate::Error;

    #[test]
    fn test_linear_extrude() {
        let extrude = Square {
            size_xy: FloatXY::xy(2.0, 3.0),
            ..Default::default()
        }
        .within(LinearExtrude {
            twist: Float::new(90.0),
            slices: Int::new(20),
            ..LinearExtrude::new(10.0)
        });

        let f = encode(&extrude).unwrap();
        assert_eq!(f.call(), "linear_extrude(height=10, slices=20, twist=90)");
        assert_eq!(f.children[0].call(), "square(size=[2, 3])");
    }

    #[test]
    fn test_conflicting_scale() {
        let extrude = LinearExtrude {
            scale: Float::new(2.0),
            scale_xy: FloatXY::xy(1.0, 2.0),
            ..LinearExtrude::new(1.0)
        };
        assert!(matches!(
            encode(&extrude),
            Err(Error::DuplicateParameterField { ref key, .. }) if key == "scale"
        ));
    }
}
