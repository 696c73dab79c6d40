//! Errors raised while moving problem details to and from the wire

use thiserror::Error;

/// Boxed error returned by pluggable codecs
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias defaulting to [`CodecError`]
pub type Result<T, E = CodecError> = std::result::Result<T, E>;

/// Failure while encoding or decoding problem details
#[derive(Debug, Error)]
pub enum CodecError {
    /// An extension member value could not be encoded
    #[error("cannot encode extension member `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: BoxError,
    },

    /// The payload could not be decoded into a JSON object
    #[error("cannot decode problem details: {source}")]
    Decode {
        #[source]
        source: BoxError,
    },

    /// A reserved member is missing or has the wrong shape
    #[error("malformed problem details: `{field}` {reason}")]
    MalformedPayload { field: &'static str, reason: String },

    /// The encoded extension members could not be written out
    #[error("cannot write problem details: {source}")]
    Write {
        #[source]
        source: BoxError,
    },

    /// An extension member uses one of the reserved member names
    #[error("extension member `{key}` collides with a reserved member")]
    ReservedMember { key: String },
}

impl CodecError {
    pub(crate) fn encode(key: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Encode {
            key: key.into(),
            source: source.into(),
        }
    }

    pub(crate) fn decode(source: impl Into<BoxError>) -> Self {
        Self::Decode {
            source: source.into(),
        }
    }

    pub(crate) fn malformed(field: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            field,
            reason: reason.into(),
        }
    }
}
