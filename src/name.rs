// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Module identifiers
//!
//! An [`Identifier`] names a generated module and the `.scad` file that holds it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// File extension of generated modules
pub const EXTENSION: &str = "scad";

/// Appended to a call name to form the default identifier of its module
pub const COMPONENT_SUFFIX: &str = "_component";

/// A validated module identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Validate `raw` and wrap it as an identifier
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if is_valid(&raw) {
            Ok(Self(raw))
        } else {
            Err(Error::InvalidIdentifier(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the module, `<identifier>.scad`
    pub fn filename(&self) -> String {
        format!("{}.{}", self.0, EXTENSION)
    }

    /// Location of the module's file inside `dir`. `"."` means no sub-directory.
    pub fn file_path(&self, dir: impl AsRef<Path>) -> PathBuf {
        let dir = dir.as_ref();
        if dir.as_os_str().is_empty() || dir == Path::new(".") {
            PathBuf::from(self.filename())
        } else {
            dir.join(self.filename())
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

/// Check the identifier rules: at least two characters, leading letter,
/// trailing letter or digit, and only letters, digits or underscores.
pub fn is_valid(raw: &str) -> bool {
    let mut chars = raw.chars();

    let (Some(first), Some(last)) = (chars.next(), raw.chars().next_back()) else {
        return false;
    };

    raw.chars().count() >= 2
        && first.is_alphabetic()
        && last.is_alphanumeric()
        && raw.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Pick the first non-empty candidate.
///
/// The candidate is returned even when it is not a valid identifier; the
/// boolean reports whether it is.
pub fn first_non_empty<I, S>(candidates: I) -> (String, bool)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .find(|c| !c.as_ref().is_empty())
        .map(|c| {
            let c = c.as_ref();
            (c.to_string(), is_valid(c))
        })
        .unwrap_or_default()
}
