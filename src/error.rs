// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for encoding and rendering

use thiserror::Error;

/// Errors raised while encoding a record or rendering a call tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The record to encode was absent
    #[error("attempted to encode a nil record")]
    NilRecord,

    /// The value to encode does not describe a record
    #[error("attempted to encode non-record value ({type_name})")]
    NotARecord { type_name: &'static str },

    /// No field of the record provides the function name
    #[error("record ({type_name}) has no name field")]
    MissingNameField { type_name: &'static str },

    /// More than one field of the record provides the function name
    #[error("record ({type_name}) has multiple name fields, second is {key:?}")]
    DuplicateNameField { type_name: &'static str, key: String },

    /// Two set parameter fields resolved to the same key
    #[error("record ({type_name}) sets parameter {key:?} more than once")]
    DuplicateParameterField { type_name: &'static str, key: String },

    /// More than one field of the record provides children
    #[error("record ({type_name}) has multiple children fields, second is {key:?}")]
    DuplicateChildrenField { type_name: &'static str, key: String },

    /// A child record failed to encode
    #[error("child {index} of record ({type_name}) failed to encode: {source}")]
    Child {
        type_name: &'static str,
        index: usize,
        #[source]
        source: Box<Error>,
    },

    /// A name is not usable as a module identifier
    #[error("invalid identifier {0:?}")]
    InvalidIdentifier(String),

    /// Two different modules under one parent claim the same identifier
    #[error("conflicting definitions for module {identifier:?}")]
    ConflictingModule { identifier: String },
}

impl Error {
    /// The innermost error, skipping any [`Error::Child`] wrappers
    pub fn root_cause(&self) -> &Error {
        let mut err = self;
        while let Error::Child { source, .. } = err {
            err = source;
        }
        err
    }

    /// Path of child indices leading to the failing record
    pub fn child_path(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut err = self;
        while let Error::Child { index, source, .. } = err {
            path.push(*index);
            err = source;
        }
        path
    }
}

/// Result type for encoding and rendering
pub type Result<T> = std::result::Result<T, Error>;
