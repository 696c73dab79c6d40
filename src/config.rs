use serde::{Deserialize, Serialize};

/// Bounds applied when decoding problem details received from other services.
///
/// The default accepts any well-formed payload; bounds are opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeLimits {
    /// Maximum payload size (bytes)
    pub max_payload_bytes: usize,

    /// Maximum number of extension members
    pub max_extension_members: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_payload_bytes: usize::MAX,
            max_extension_members: usize::MAX,
        }
    }
}

impl DecodeLimits {
    /// Limits suited to payloads read from untrusted upstream services
    pub fn untrusted() -> Self {
        Self {
            max_payload_bytes: 64 * 1024,
            max_extension_members: 64,
        }
    }
}
