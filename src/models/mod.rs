// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Bundled demo models

mod dice;
mod sign;

pub use dice::{Die, Dimple};
pub use sign::Sign;

use crate::compose::{Composite, EncodeExt};
use crate::primitives::{Cube, Translate};

/// Demo models available from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Cube,
    TranslatedCube,
    Dimple,
    Die,
    Sign,
}

impl Demo {
    pub const ALL: [Demo; 5] = [
        Demo::Cube,
        Demo::TranslatedCube,
        Demo::Dimple,
        Demo::Die,
        Demo::Sign,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Demo::Cube => "cube",
            Demo::TranslatedCube => "translated-cube",
            Demo::Dimple => "dimple",
            Demo::Die => "die",
            Demo::Sign => "sign",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|demo| demo.as_str() == name.to_lowercase())
    }

    /// Build the demo's record
    pub fn model(&self) -> Composite {
        match self {
            Demo::Cube => Cube::new(1.0, 2.0, 3.0).boxed(),
            Demo::TranslatedCube => Cube::new(1.0, 2.0, 3.0)
                .component()
                .within(Translate::new([1.0, 2.0, 3.0]))
                .component()
                .boxed(),
            Demo::Dimple => Dimple::new(1.0, 4.0).boxed(),
            Demo::Die => Die::new(16.0).boxed(),
            Demo::Sign => Sign::new("scadgen").boxed(),
        }
    }
}
