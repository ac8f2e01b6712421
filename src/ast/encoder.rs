// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Record to call-tree encoder

use super::encode::{Encode, Field, Layout, Role};
use super::function::Function;
use crate::error::{Error, Result};
use crate::name::{Identifier, COMPONENT_SUFFIX};
use tracing::trace;

/// Encode a record into a [`Function`].
///
/// The resulting call takes its name from the single name field, its
/// parameters from every set parameter field and its children from the
/// children field, encoded recursively in order.
pub fn encode(record: &dyn Encode) -> Result<Function> {
    match record.layout() {
        Layout::Nil => Err(Error::NilRecord),
        Layout::Scalar => Err(Error::NotARecord {
            type_name: record.type_name(),
        }),
        Layout::Custom(inner) => encode(inner.as_ref()),
        Layout::Module { name, body } => {
            let function = encode(body.as_ref())?;
            if name.is_empty() {
                return Ok(function);
            }
            let module = Identifier::new(name)?;
            trace!(module = %module, name = %function.name, "encoded module");
            Ok(function.with_module(module))
        }
        Layout::Component(body) => {
            let function = encode(body.as_ref())?;
            if function.is_module() {
                return Ok(function);
            }
            let module = Identifier::new(format!("{}{}", function.name, COMPONENT_SUFFIX))?;
            trace!(module = %module, name = %function.name, "encoded component");
            Ok(function.with_module(module))
        }
        Layout::Record(fields) => encode_fields(record.type_name(), fields),
    }
}

/// Encode a record that may be absent
pub fn encode_optional(record: Option<&dyn Encode>) -> Result<Function> {
    record.map_or(Err(Error::NilRecord), encode)
}

fn encode_fields(type_name: &'static str, fields: Vec<Field<'_>>) -> Result<Function> {
    let mut function = Function::default();
    let mut named = false;
    let mut has_children = false;

    for field in fields {
        let (key, role) = field.into_parts();

        match role {
            Role::Name(provider) => {
                if named {
                    return Err(Error::DuplicateNameField { type_name, key });
                }
                named = true;

                let given = provider.map(|p| p.function_name()).unwrap_or_default();
                function.name = if given.is_empty() {
                    key
                } else {
                    given.to_string()
                };
            }
            Role::Parameter(provider) => {
                let (value, set) = provider.parameter_value();
                if set && function.set_parameter(key.clone(), value) {
                    return Err(Error::DuplicateParameterField { type_name, key });
                }
            }
            Role::Children(items) => {
                if has_children {
                    return Err(Error::DuplicateChildrenField { type_name, key });
                }
                has_children = true;

                function.children = items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        encode(item).map_err(|source| Error::Child {
                            type_name,
                            index,
                            source: Box::new(source),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
            }
        }
    }

    if !named || function.name.is_empty() {
        return Err(Error::MissingNameField { type_name });
    }

    trace!(
        record = type_name,
        name = %function.name,
        parameters = function.parameters.len(),
        children = function.children.len(),
        "encoded record"
    );

    Ok(function)
}
