// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Function call node

use crate::name::Identifier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single OpenSCAD function call, such as `cube`, `translate` or `union`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    /// Function name
    pub name: String,

    /// Parameter key to rendered literal. Kept sorted by key.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,

    /// Child calls, in call order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Function>,

    /// Set when the call was explicitly named and becomes its own module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<Identifier>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set a parameter. Returns `true` if the key already held a value.
    pub fn set_parameter(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        self.parameters.insert(key.into(), value.into()).is_some()
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_parameter(key, value);
        self
    }

    pub fn with_children(mut self, children: Vec<Function>) -> Self {
        self.children = children;
        self
    }

    pub fn with_module(mut self, module: Identifier) -> Self {
        self.module = Some(module);
        self
    }

    /// Whether this call is rendered as a separate module
    pub fn is_module(&self) -> bool {
        self.module.is_some()
    }

    /// Parameters as `key=value` pairs joined for a call site
    pub fn parameters_string(&self) -> String {
        self.parameters
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The call expression without terminator, e.g. `cube(size=[1, 2, 3])`
    pub fn call(&self) -> String {
        format!("{}({})", self.name, self.parameters_string())
    }

    /// Number of calls in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Function::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_sorted_by_key() {
        let f = Function::new("cylinder")
            .with_parameter("r", "2")
            .with_parameter("h", "10")
            .with_parameter("center", "true");

        assert_eq!(f.parameters_string(), "center=true, h=10, r=2");
        assert_eq!(f.call(), "cylinder(center=true, h=10, r=2)");
    }

    #[test]
    fn test_set_parameter_reports_replacement() {
        let mut f = Function::new("cube");
        assert!(!f.set_parameter("size", "1"));
        assert!(f.set_parameter("size", "2"));
        assert_eq!(f.parameters["size"], "2");
    }

    #[test]
    fn test_node_count() {
        let f = Function::new("union").with_children(vec![
            Function::new("cube"),
            Function::new("translate").with_children(vec![Function::new("sphere")]),
        ]);
        assert_eq!(f.node_count(), 4);
        assert!(!f.is_module());
    }
}
