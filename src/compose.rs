// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Composition helpers
//!
//! Stack transformations around a record and group records under `union()`.

use crate::ast::{Encode, Layout};
use crate::primitives::Union;

/// An owned, type-erased record
pub type Composite = Box<dyn Encode>;

/// Wraps a value inside another value
pub type ChildWrapper = Box<dyn FnOnce(Composite) -> Composite>;

/// A record that takes child records, such as `translate` or `linear_extrude`
pub trait Transformation: Encode {
    /// Append a child
    fn push_child(&mut self, child: Composite);

    /// Erase the transformation's type
    fn into_composite(self: Box<Self>) -> Composite;
}

/// Apply `wrappers` in order, each one nesting the previous result
pub fn wrap<I>(value: Composite, wrappers: I) -> Composite
where
    I: IntoIterator<Item = ChildWrapper>,
{
    wrappers.into_iter().fold(value, |inner, wrapper| wrapper(inner))
}

/// A [`ChildWrapper`] that places its input inside `transformation`
pub fn wrapper<T>(transformation: T) -> ChildWrapper
where
    T: Transformation + 'static,
{
    Box::new(move |child| {
        let mut transformation = Box::new(transformation);
        transformation.push_child(child);
        transformation.into_composite()
    })
}

/// Stack `transformations` around `value`, innermost first.
///
/// `apply(sphere, vec![translate, rotate])` yields `rotate() { translate() { sphere(); } }`.
pub fn apply<T>(value: T, transformations: Vec<Box<dyn Transformation>>) -> Composite
where
    T: Encode + 'static,
{
    transformations
        .into_iter()
        .fold(value.boxed(), |inner, mut transformation| {
            transformation.push_child(inner);
            transformation.into_composite()
        })
}

/// Group `results` under a `union()` call. With a non-empty name, the union
/// becomes its own module.
pub fn union<I>(results: I, name: Option<&str>) -> Composite
where
    I: IntoIterator<Item = Composite>,
{
    let union = Union {
        children: results.into_iter().collect(),
    };

    match name {
        Some(name) if !name.is_empty() => Box::new(Named::new(name, union)),
        _ => Box::new(union),
    }
}

/// Inline union of `first` and `rest`
pub fn add<T, I>(first: T, rest: I) -> Composite
where
    T: Encode + 'static,
    I: IntoIterator<Item = Composite>,
{
    union(std::iter::once(first.boxed()).chain(rest), None)
}

/// Union of `first` and `rest` rendered as module `name`
pub fn add_with_name<T, I>(name: &str, first: T, rest: I) -> Composite
where
    T: Encode + 'static,
    I: IntoIterator<Item = Composite>,
{
    union(std::iter::once(first.boxed()).chain(rest), Some(name))
}

/// A record rendered as its own module. An empty name renders it inline.
#[derive(Debug, Clone)]
pub struct Named<T> {
    name: String,
    body: T,
}

impl<T> Named<T> {
    pub fn new(name: impl Into<String>, body: T) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &T {
        &self.body
    }
}

impl<T: Encode> Encode for Named<T> {
    fn layout(&self) -> Layout<'_> {
        Layout::Module {
            name: self.name.clone(),
            body: Box::new(&self.body),
        }
    }
}

/// A record rendered as its own module, identified as `<call>_component`
#[derive(Debug, Clone)]
pub struct Component<T> {
    body: T,
}

impl<T> Component<T> {
    pub fn new(body: T) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &T {
        &self.body
    }
}

impl<T: Encode> Encode for Component<T> {
    fn layout(&self) -> Layout<'_> {
        Layout::Component(Box::new(&self.body))
    }
}

/// Convenience methods for any owned record
pub trait EncodeExt: Encode + Sized + 'static {
    /// Erase the record's type
    fn boxed(self) -> Composite {
        Box::new(self)
    }

    /// Render the record as module `name`
    fn named(self, name: impl Into<String>) -> Named<Self> {
        Named::new(name, self)
    }

    /// Render the record as a module named after its call, such as `cube_component`
    fn component(self) -> Component<Self> {
        Component::new(self)
    }

    /// Place the record inside `transformation`
    fn within<T>(self, mut transformation: T) -> T
    where
        T: Transformation,
    {
        transformation.push_child(self.boxed());
        transformation
    }
}

impl<T: Encode + Sized + 'static> EncodeExt for T {}
