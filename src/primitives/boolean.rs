// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Boolean operations

use crate::ast::{Encode, Field, Layout};
use crate::compose::Composite;

/// `union()`
#[derive(Default)]
pub struct Union {
    pub children: Vec<Composite>,
}

impl Encode for Union {
    fn layout(&self) -> Layout<'_> {
        Layout::Record(vec![
            Field::auto_name("Union"),
            Field::children("Children", &self.children),
        ])
    }
}

/// `difference()`. The first child is kept, the rest are subtracted from it.
#[derive(Default)]
pub struct Difference {
    pub children: Vec<Composite>,
}

impl Encode for Difference {
    fn layout(&self) -> Layout<'_> {
        Layout::Record(vec![
            Field::auto_name("Difference"),
            Field::children("Children", &self.children),
        ])
    }
}

/// `intersection()`
#[derive(Default)]
pub struct Intersection {
    pub children: Vec<Composite>,
}

impl Encode for Intersection {
    fn layout(&self) -> Layout<'_> {
        Layout::Record(vec![
            Field::auto_name("Intersection"),
            Field::children("Children", &self.children),
        ])
    }
}

transformation!(Union, Difference, Intersection);
