//! Problem details value type (RFC 7807)

mod members;
mod wire;

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{CodecError, Result};

pub use members::{is_reserved, ExtensionMembers, RESERVED_MEMBERS};
pub(crate) use members::value_kind;

/// Type URI used when a problem carries no type of its own
pub const ABOUT_BLANK: &str = "about:blank";

/// Structured error carried in HTTP API responses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProblemError {
    /// URI reference identifying the problem type
    pub type_url: String,
    /// Short summary of the problem type
    pub title: String,
    /// HTTP status code of this occurrence, zero when unset
    pub status: u16,
    /// Explanation specific to this occurrence
    pub detail: String,
    /// URI reference identifying this occurrence
    pub instance: String,
    /// Additional members; keys must not be one of [`RESERVED_MEMBERS`]
    pub extension_members: ExtensionMembers,
}

impl ProblemError {
    /// Create a problem from its title, status and type URI.
    ///
    /// Nothing is validated: an out-of-range status or a malformed URI is
    /// stored as given.
    pub fn new(title: impl Into<String>, status: u16, type_url: impl Into<String>) -> Self {
        Self {
            type_url: type_url.into(),
            title: title.into(),
            status,
            detail: String::new(),
            instance: String::new(),
            extension_members: ExtensionMembers::new(),
        }
    }

    /// Set the occurrence-specific explanation
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Set the URI reference of this occurrence
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = instance.into();
        self
    }

    /// Replace the problem type URI
    pub fn with_type(mut self, type_url: impl Into<String>) -> Self {
        self.type_url = type_url.into();
        self
    }

    /// Add an extension member, returning the problem for chaining
    pub fn with_extension<T>(mut self, key: impl Into<String>, value: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        self.insert_extension(key, value)?;
        Ok(self)
    }

    /// Encode `value` and store it under `key`, returning the previous value.
    ///
    /// Fails when `key` is reserved or when `value` has no JSON representation
    /// (a map with non-string keys, for instance).
    pub fn insert_extension<T>(&mut self, key: impl Into<String>, value: &T) -> Result<Option<Value>>
    where
        T: Serialize + ?Sized,
    {
        let key = key.into();
        if is_reserved(&key) {
            return Err(CodecError::ReservedMember { key });
        }
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(err) => return Err(CodecError::encode(key, err)),
        };
        Ok(self.extension_members.insert(key, value))
    }

    /// Look up an extension member
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extension_members.get(key)
    }

    /// The type URI, or `about:blank` when none is set
    pub fn type_or_blank(&self) -> &str {
        if self.type_url.is_empty() {
            ABOUT_BLANK
        } else {
            &self.type_url
        }
    }
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} reference {}",
            self.title, self.instance, self.type_url
        )
    }
}

impl std::error::Error for ProblemError {}
