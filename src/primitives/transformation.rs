// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Transformations

use crate::ast::{Encode, Field, Layout};
use crate::compose::Composite;
use crate::value::{Float, FloatXYZ};

/// `translate(v)`
#[derive(Default)]
pub struct Translate {
    pub v: FloatXYZ,
    pub children: Vec<Composite>,
}

impl Translate {
    pub fn new(v: impl Into<FloatXYZ>) -> Self {
        Self {
            v: v.into(),
            children: Vec::new(),
        }
    }
}

impl Encode for Translate {
    fn layout(&self) -> Layout<'_> {
        Layout::Record(vec![
            Field::auto_name("Translate"),
            Field::parameter("V", &self.v),
            Field::children("Children", &self.children),
        ])
    }
}

/// `rotate(a, v)`. Set only one of `a` or `a_xyz`.
#[derive(Default)]
pub struct Rotate {
    pub a: Float,
    pub a_xyz: FloatXYZ,
    pub v: FloatXYZ,
    pub children: Vec<Composite>,
}

impl Rotate {
    /// Rotation by per-axis angles
    pub fn by(angles: impl Into<FloatXYZ>) -> Self {
        Self {
            a_xyz: angles.into(),
            ..Self::default()
        }
    }

    /// Rotation by `a` degrees about axis `v`
    pub fn about(a: f64, v: impl Into<FloatXYZ>) -> Self {
        Self {
            a: Float::new(a),
            v: v.into(),
            ..Self::default()
        }
    }
}

impl Encode for Rotate {
    fn layout(&self) -> Layout<'_> {
        Layout::Record(vec![
            Field::auto_name("Rotate"),
            Field::parameter("A", &self.a),
            Field::parameter("AXYZ", &self.a_xyz).rename("a"),
            Field::parameter("V", &self.v),
            Field::children("Children", &self.children),
        ])
    }
}

/// `scale(v)`
#[derive(Default)]
pub struct Scale {
    pub v: FloatXYZ,
    pub children: Vec<Composite>,
}

impl Scale {
    pub fn new(v: impl Into<FloatXYZ>) -> Self {
        Self {
            v: v.into(),
            children: Vec::new(),
        }
    }
}

impl Encode for Scale {
    fn layout(&self) -> Layout<'_> {
        Layout::Record(vec![
            Field::auto_name("Scale"),
            Field::parameter("V", &self.v),
            Field::children("Children", &self.children),
        ])
    }
}

transformation!(Translate, Rotate, Scale);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::encode;
    use crate::compose::EncodeExt;
    use crate::primitives::Cube;

    #[test]
    fn test_translate_with_child() {
        let translate = Cube::new(1.0, 2.0, 3.0).within(Translate::new([1.0, 2.0, 3.0]));
        let f = encode(&translate).unwrap();
        assert_eq!(f.call(), "translate(v=[1, 2, 3])");
        assert_eq!(f.children.len(), 1);
        assert_eq!(f.children[0].call(), "cube(size=[1, 2, 3])");
    }

    #[test]
    fn test_rotate_forms() {
        let by = encode(&Rotate::by([0.0, 0.0, 90.0])).unwrap();
        assert_eq!(by.call(), "rotate(a=[0, 0, 90])");

        let about = encode(&Rotate::about(45.0, [0.0, 1.0, 0.0])).unwrap();
        assert_eq!(about.call(), "rotate(a=45, v=[0, 1, 0])");
    }

    #[test]
    fn test_scale() {
        let f = encode(&Scale::new([2.0, 2.0, 1.0])).unwrap();
        assert_eq!(f.call(), "scale(v=[2, 2, 1])");
        assert!(f.children.is_empty());
    }
}
