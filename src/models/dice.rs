// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Dice with spherical dimples for pips

use crate::ast::{Encode, Layout};
use crate::compose::{apply, EncodeExt};
use crate::name::first_non_empty;
use crate::primitives::{Cube, Difference, Rotate, Sphere, Translate};
use crate::value::{Float, Int};
use nalgebra::Vector3;

/// A sphere removed from a die face, leaving a dimple of the given depth and diameter
#[derive(Debug, Clone, PartialEq)]
pub struct Dimple {
    /// Module name, `dimple` when empty
    pub name: String,
    /// How deep the dimple is
    pub depth: f64,
    /// How wide the dimple is where it meets the face
    pub diameter: f64,
}

impl Dimple {
    pub fn new(depth: f64, diameter: f64) -> Self {
        Self {
            name: String::new(),
            depth,
            diameter,
        }
    }

    /// Radius of the sphere whose cap has this depth and diameter
    pub fn sphere_radius(&self) -> f64 {
        (self.depth.powi(2) + (self.diameter / 2.0).powi(2)) / (2.0 * self.depth)
    }
}

impl Encode for Dimple {
    fn layout(&self) -> Layout<'_> {
        let radius = self.sphere_radius();
        let sphere = Sphere {
            r: Float::new(radius),
            fn_: Int::new(48),
            ..Default::default()
        };

        let body = apply(
            sphere,
            vec![
                Box::new(Translate::new(Vector3::new(0.0, 0.0, radius - self.depth))),
                Box::new(Rotate::about(180.0, Vector3::<f64>::x())),
            ],
        );

        let (name, _) = first_non_empty([self.name.as_str(), "dimple"]);
        Layout::Module { name, body }
    }
}

/// A cube with one dimple in the center of its top face
#[derive(Debug, Clone, PartialEq)]
pub struct Die {
    pub size: f64,
    pub dimple: Dimple,
}

impl Die {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            dimple: Dimple::new(size / 12.0, size / 4.0),
        }
    }
}

impl Encode for Die {
    fn layout(&self) -> Layout<'_> {
        let pip = self
            .dimple
            .clone()
            .within(Translate::new(Vector3::new(0.0, 0.0, self.size / 2.0)));

        let body = Difference {
            children: vec![
                Cube::new(self.size, self.size, self.size).centered().boxed(),
                pip.boxed(),
            ],
        };

        Layout::Module {
            name: "die".to_string(),
            body: body.boxed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::encode;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_radius() {
        // depth 1, diameter 4: (1 + 4) / 2
        assert_relative_eq!(Dimple::new(1.0, 4.0).sphere_radius(), 2.5);
        // a hemisphere has radius equal to its depth
        assert_relative_eq!(Dimple::new(2.0, 4.0).sphere_radius(), 2.0);
    }

    #[test]
    fn test_dimple_encodes_as_module() {
        let f = encode(&Dimple::new(1.0, 4.0)).unwrap();
        assert_eq!(f.module.as_ref().map(|m| m.as_str()), Some("dimple"));
        assert_eq!(f.call(), "rotate(a=180, v=[1, 0, 0])");
        assert_eq!(f.children[0].call(), "translate(v=[0, 0, 1.5])");
        assert_eq!(f.children[0].children[0].call(), "sphere($fn=48, r=2.5)");
    }

    #[test]
    fn test_dimple_custom_name() {
        let dimple = Dimple {
            name: "pip".into(),
            ..Dimple::new(1.0, 4.0)
        };
        let f = encode(&dimple).unwrap();
        assert_eq!(f.module.as_ref().map(|m| m.as_str()), Some("pip"));
    }

    #[test]
    fn test_die_uses_dimple_module() {
        let f = encode(&Die::new(12.0)).unwrap();
        assert_eq!(f.name, "difference");
        assert!(f.is_module());
        let pip = &f.children[1];
        assert_eq!(pip.call(), "translate(v=[0, 0, 6])");
        assert!(pip.children[0].is_module());
    }
}
