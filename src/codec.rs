//! Pluggable encoding of extension members and decoding of whole payloads

use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::DecodeLimits;
use crate::error::BoxError;
use crate::problem::{is_reserved, value_kind};

/// Encode/decode strategy used by [`ProblemError::to_json_with`] and
/// [`ProblemError::from_json_with`].
///
/// The fixed members are always written by the crate itself. A codec only
/// decides how individual extension values are encoded and how raw bytes are
/// turned into a generic object.
///
/// [`ProblemError::to_json_with`]: crate::ProblemError::to_json_with
/// [`ProblemError::from_json_with`]: crate::ProblemError::from_json_with
pub trait ProblemCodec {
    /// Encode the extension value stored under `key`
    fn encode_member(&self, key: &str, value: &Value) -> Result<Value, BoxError>;

    /// Decode a whole payload into a generic object
    fn decode_document(&self, bytes: &[u8]) -> Result<Map<String, Value>, BoxError>;
}

/// Limit violations reported by [`JsonCodec`]
#[derive(Debug, Error)]
pub enum LimitExceeded {
    #[error("payload is {size} bytes, limit is {limit}")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("payload has {count} extension members, limit is {limit}")]
    TooManyMembers { count: usize, limit: usize },
}

/// Default codec backed by `serde_json`
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    limits: DecodeLimits,
}

impl JsonCodec {
    /// Create a codec that enforces `limits` when decoding
    pub fn new(limits: DecodeLimits) -> Self {
        Self { limits }
    }

    /// Limits applied by [`ProblemCodec::decode_document`]
    pub fn limits(&self) -> &DecodeLimits {
        &self.limits
    }
}

impl ProblemCodec for JsonCodec {
    fn encode_member(&self, _key: &str, value: &Value) -> Result<Value, BoxError> {
        Ok(serde_json::to_value(value)?)
    }

    fn decode_document(&self, bytes: &[u8]) -> Result<Map<String, Value>, BoxError> {
        if bytes.len() > self.limits.max_payload_bytes {
            return Err(LimitExceeded::PayloadTooLarge {
                size: bytes.len(),
                limit: self.limits.max_payload_bytes,
            }
            .into());
        }

        let document = match serde_json::from_slice::<Value>(bytes)? {
            Value::Object(document) => document,
            other => {
                return Err(format!("expected a JSON object, found {}", value_kind(&other)).into())
            }
        };

        let count = document.keys().filter(|key| !is_reserved(key)).count();
        if count > self.limits.max_extension_members {
            return Err(LimitExceeded::TooManyMembers {
                count,
                limit: self.limits.max_extension_members,
            }
            .into());
        }

        Ok(document)
    }
}
