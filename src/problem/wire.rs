use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::members::{is_reserved, value_kind};
use super::ProblemError;
use crate::codec::{JsonCodec, ProblemCodec};
use crate::error::{CodecError, Result};

/// Wire shape: the fixed members are always present, in this order, and the
/// extension members follow at the same level.
#[derive(Serialize)]
struct WireProblem<'a> {
    #[serde(rename = "type")]
    type_url: &'a str,
    title: &'a str,
    status: u16,
    detail: &'a str,
    instance: &'a str,
    #[serde(flatten)]
    extension_members: BTreeMap<&'a str, Cow<'a, Value>>,
}

impl ProblemError {
    /// Serialize to JSON with the default codec
    pub fn to_json(&self) -> Result<Vec<u8>> {
        self.to_json_with(&JsonCodec::default())
    }

    /// Serialize to JSON, encoding each extension member with `codec`.
    ///
    /// Fails on the first extension member that is reserved or that the codec
    /// refuses; nothing is returned in that case.
    pub fn to_json_with<C>(&self, codec: &C) -> Result<Vec<u8>>
    where
        C: ProblemCodec + ?Sized,
    {
        let mut extension_members = BTreeMap::new();
        for (key, value) in &self.extension_members {
            if is_reserved(key) {
                return Err(CodecError::ReservedMember { key: key.clone() });
            }
            let encoded = codec
                .encode_member(key, value)
                .map_err(|source| CodecError::Encode {
                    key: key.clone(),
                    source,
                })?;
            extension_members.insert(key.as_str(), Cow::Owned(encoded));
        }

        serde_json::to_vec(&self.wire(extension_members)).map_err(|err| CodecError::Write {
            source: err.into(),
        })
    }

    /// Parse JSON with the default codec
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Self::from_json_with(bytes, &JsonCodec::default())
    }

    /// Parse a payload decoded by `codec`, separating the reserved members
    /// from the extension members.
    pub fn from_json_with<C>(bytes: &[u8], codec: &C) -> Result<Self>
    where
        C: ProblemCodec + ?Sized,
    {
        let document = codec.decode_document(bytes).map_err(CodecError::decode)?;
        Self::try_from(document)
    }

    fn wire<'a>(
        &'a self,
        extension_members: BTreeMap<&'a str, Cow<'a, Value>>,
    ) -> WireProblem<'a> {
        WireProblem {
            type_url: &self.type_url,
            title: &self.title,
            status: self.status,
            detail: &self.detail,
            instance: &self.instance,
            extension_members,
        }
    }
}

impl TryFrom<Map<String, Value>> for ProblemError {
    type Error = CodecError;

    fn try_from(mut document: Map<String, Value>) -> Result<Self> {
        let type_url = take_string(&mut document, "type")?;
        let title = take_string(&mut document, "title")?;
        let status = take_status(&mut document)?;
        let detail = take_string(&mut document, "detail")?;
        let instance = take_string(&mut document, "instance")?;

        Ok(Self {
            type_url,
            title,
            status,
            detail,
            instance,
            extension_members: document.into_iter().collect(),
        })
    }
}

fn take_member(document: &mut Map<String, Value>, field: &'static str) -> Result<Value> {
    match document.remove(field) {
        Some(Value::Null) | None => Err(CodecError::malformed(field, "is missing")),
        Some(value) => Ok(value),
    }
}

fn take_string(document: &mut Map<String, Value>, field: &'static str) -> Result<String> {
    match take_member(document, field)? {
        Value::String(value) => Ok(value),
        other => Err(CodecError::malformed(
            field,
            format!("must be a string, found {}", value_kind(&other)),
        )),
    }
}

/// Reads `status`, truncating fractional numbers toward zero
fn take_status(document: &mut Map<String, Value>) -> Result<u16> {
    let number = match take_member(document, "status")? {
        Value::Number(number) => number,
        other => {
            return Err(CodecError::malformed(
                "status",
                format!("must be a number, found {}", value_kind(&other)),
            ))
        }
    };

    let status = if let Some(status) = number.as_u64() {
        u16::try_from(status).ok()
    } else {
        number
            .as_f64()
            .map(f64::trunc)
            .filter(|status| (0.0..=f64::from(u16::MAX)).contains(status))
            .map(|status| status as u16)
    };

    status.ok_or_else(|| {
        CodecError::malformed("status", format!("{number} is not a valid status code"))
    })
}

impl Serialize for ProblemError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut extension_members = BTreeMap::new();
        for (key, value) in &self.extension_members {
            if is_reserved(key) {
                return Err(S::Error::custom(CodecError::ReservedMember {
                    key: key.clone(),
                }));
            }
            extension_members.insert(key.as_str(), Cow::Borrowed(value));
        }
        self.wire(extension_members).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ProblemError {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = Map::<String, Value>::deserialize(deserializer)?;
        Self::try_from(document).map_err(D::Error::custom)
    }
}
