// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Extruded text plate

use crate::ast::{Encode, Layout};
use crate::compose::{add_with_name, EncodeExt};
use crate::primitives::{Cube, LinearExtrude, Text, Translate};
use crate::value::{Float, Str};

/// Raised lettering on a thin base plate
#[derive(Debug, Clone, PartialEq)]
pub struct Sign {
    pub text: String,
    pub size: f64,
    pub height: f64,
}

impl Sign {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: 10.0,
            height: 2.0,
        }
    }
}

impl Encode for Sign {
    fn layout(&self) -> Layout<'_> {
        let width = self.size * self.text.chars().count() as f64;
        let plate = Cube::new(width + self.size, self.size * 2.0, 1.0);

        let lettering = Text {
            text: Str::from(self.text.as_str()),
            size: Float::new(self.size),
            halign: Str::from("center"),
            valign: Str::from("center"),
            ..Default::default()
        }
        .within(LinearExtrude::new(self.height))
        .within(Translate::new([(width + self.size) / 2.0, self.size, 1.0]));

        Layout::Custom(add_with_name("sign", plate, [lettering.boxed()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::encode;

    #[test]
    fn test_sign_structure() {
        let f = encode(&Sign::new("Hi")).unwrap();
        assert_eq!(f.name, "union");
        assert_eq!(f.module.as_ref().map(|m| m.as_str()), Some("sign"));
        assert_eq!(f.children[0].call(), "cube(size=[30, 20, 1])");

        let extrude = &f.children[1].children[0];
        assert_eq!(extrude.call(), "linear_extrude(height=2)");
        assert_eq!(
            extrude.children[0].call(),
            "text(halign=\"center\", size=10, text=\"Hi\", valign=\"center\")"
        );
    }
}
