// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Capability traits that describe how a record maps onto a [`Function`]
//!
//! A record implements [`Encode`] by listing the fields that take part in
//! the call. Each [`Field`] has a key and a role:
//!
//! - a *name* field decides the function name (exactly one per record)
//! - a *parameter* field contributes `key=value` when its value is set
//! - a *children* field supplies nested records (at most one per record)
//!
//! The key is the field's rename if one was given, otherwise the lowercased
//! field identifier.
//!
//! [`Function`]: super::Function

use crate::value::Explicit;
use std::rc::Rc;
use std::sync::Arc;

/// Field type that names the function
pub trait NameProvider {
    /// The function name. An empty string falls back to the field key.
    fn function_name(&self) -> &str;
}

/// Field type that contributes one parameter
pub trait ParameterProvider {
    /// Whether the value was explicitly set
    fn is_set(&self) -> bool;

    /// OpenSCAD literal for the value
    fn render(&self) -> String;

    /// The literal and whether it was set
    fn parameter_value(&self) -> (String, bool) {
        (self.render(), self.is_set())
    }
}

impl NameProvider for str {
    fn function_name(&self) -> &str {
        self
    }
}

impl NameProvider for String {
    fn function_name(&self) -> &str {
        self
    }
}

/// A function name that may be left empty to use the field key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionName(String);

impl FunctionName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl NameProvider for FunctionName {
    fn function_name(&self) -> &str {
        &self.0
    }
}

/// What a field contributes to the call
pub enum Role<'a> {
    /// Names the function. `None` always uses the field key.
    Name(Option<&'a dyn NameProvider>),
    /// Contributes one parameter
    Parameter(&'a dyn ParameterProvider),
    /// Supplies the child calls, in order
    Children(Vec<&'a dyn Encode>),
}

/// One participating field of a record
pub struct Field<'a> {
    ident: &'static str,
    rename: Option<&'static str>,
    role: Role<'a>,
}

impl<'a> Field<'a> {
    pub fn new(ident: &'static str, role: Role<'a>) -> Self {
        Self {
            ident,
            rename: None,
            role,
        }
    }

    /// Name field backed by a provider
    pub fn name(ident: &'static str, provider: &'a dyn NameProvider) -> Self {
        Self::new(ident, Role::Name(Some(provider)))
    }

    /// Name field whose value is always its key
    pub fn auto_name(ident: &'static str) -> Self {
        Self::new(ident, Role::Name(None))
    }

    pub fn parameter(ident: &'static str, provider: &'a dyn ParameterProvider) -> Self {
        Self::new(ident, Role::Parameter(provider))
    }

    pub fn children<I, T>(ident: &'static str, items: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: Encode + 'a,
    {
        let items = items.into_iter().map(|item| item as &dyn Encode).collect();
        Self::new(ident, Role::Children(items))
    }

    /// Override the key, e.g. `Field::parameter("size_xyz", &self.size_xyz).rename("size")`
    pub fn rename(mut self, key: &'static str) -> Self {
        self.rename = Some(key);
        self
    }

    /// The DSL-facing key of the field
    pub fn key(&self) -> String {
        match self.rename {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => self.ident.to_lowercase(),
        }
    }

    pub fn role(&self) -> &Role<'a> {
        &self.role
    }

    pub(crate) fn into_parts(self) -> (String, Role<'a>) {
        let key = self.key();
        (key, self.role)
    }
}

/// How a value presents itself to the encoder
pub enum Layout<'a> {
    /// A record with participating fields
    Record(Vec<Field<'a>>),
    /// Encode this other value in place of the record
    Custom(Box<dyn Encode + 'a>),
    /// Encode `body` and make it a module named `name`. An empty name
    /// leaves `body` inline.
    Module {
        name: String,
        body: Box<dyn Encode + 'a>,
    },
    /// Encode `body` and make it a module named after its call,
    /// `<call>_component`, unless `body` already names its own module
    Component(Box<dyn Encode + 'a>),
    /// An absent record
    Nil,
    /// A plain value, not a record
    Scalar,
}

/// A value that can be encoded into a [`Function`](super::Function)
pub trait Encode {
    fn layout(&self) -> Layout<'_>;

    /// Type name used in error messages
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn layout(&self) -> Layout<'_> {
        (**self).layout()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn layout(&self) -> Layout<'_> {
        (**self).layout()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

impl<T: Encode + ?Sized> Encode for Rc<T> {
    fn layout(&self) -> Layout<'_> {
        (**self).layout()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

impl<T: Encode + ?Sized> Encode for Arc<T> {
    fn layout(&self) -> Layout<'_> {
        (**self).layout()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

impl<T: Encode> Encode for Option<T> {
    fn layout(&self) -> Layout<'_> {
        match self {
            Some(inner) => inner.layout(),
            None => Layout::Nil,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Some(inner) => inner.type_name(),
            None => std::any::type_name::<Self>(),
        }
    }
}

impl<T> Encode for Explicit<T> {
    fn layout(&self) -> Layout<'_> {
        Layout::Scalar
    }
}

macro_rules! scalar_encode {
    ($($ty:ty),*) => {
        $(
            impl Encode for $ty {
                fn layout(&self) -> Layout<'_> {
                    Layout::Scalar
                }
            }
        )*
    };
}

scalar_encode!(i64, f64, bool, str, String);
