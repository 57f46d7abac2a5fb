//! Document attributes, their typed values, and facet aggregates.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ids::AttributeKey;
use super::vocabulary::DocumentAttributeValueType;
use super::wire::Timestamp;
use crate::{ModelError, ModelResult};

/// Value of a document attribute.
///
/// Exactly one kind is active at a time. `Empty` is the state of a value
/// decoded from `{}` and encodes back to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireAttributeValue", into = "WireAttributeValue")]
pub enum DocumentAttributeValue {
    #[default]
    Empty,
    String(String),
    StringList(Vec<String>),
    Long(i64),
    Date(Timestamp),
}

impl DocumentAttributeValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn string_list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::StringList(values.into_iter().map(Into::into).collect())
    }

    pub fn long(value: i64) -> Self {
        Self::Long(value)
    }

    /// Build a date value. Sub-second parts are dropped.
    pub fn date(value: impl Into<Timestamp>) -> Self {
        Self::Date(value.into())
    }

    /// Build a date value from epoch seconds.
    pub fn date_from_secs(secs: i64) -> ModelResult<Self> {
        Timestamp::from_secs(secs).map(Self::Date)
    }

    /// Kind currently held, or `None` for the empty value.
    pub fn value_type(&self) -> Option<DocumentAttributeValueType> {
        match self {
            Self::Empty => None,
            Self::String(_) => Some(DocumentAttributeValueType::StringValue),
            Self::StringList(_) => Some(DocumentAttributeValueType::StringListValue),
            Self::Long(_) => Some(DocumentAttributeValueType::LongValue),
            Self::Date(_) => Some(DocumentAttributeValueType::DateValue),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_string(&self) -> ModelResult<&str> {
        match self {
            Self::String(value) => Ok(value.as_str()),
            other => Err(other.wrong_kind(DocumentAttributeValueType::StringValue)),
        }
    }

    pub fn as_string_list(&self) -> ModelResult<&[String]> {
        match self {
            Self::StringList(values) => Ok(values.as_slice()),
            other => Err(other.wrong_kind(DocumentAttributeValueType::StringListValue)),
        }
    }

    pub fn as_long(&self) -> ModelResult<i64> {
        match self {
            Self::Long(value) => Ok(*value),
            other => Err(other.wrong_kind(DocumentAttributeValueType::LongValue)),
        }
    }

    pub fn as_date(&self) -> ModelResult<Timestamp> {
        match self {
            Self::Date(value) => Ok(*value),
            other => Err(other.wrong_kind(DocumentAttributeValueType::DateValue)),
        }
    }

    fn wrong_kind(&self, expected: DocumentAttributeValueType) -> ModelError {
        ModelError::WrongVariantAccess {
            expected,
            actual: self.value_type().map_or("EMPTY", |kind| kind.as_str()),
        }
    }
}

impl fmt::Display for DocumentAttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("{}"),
            Self::String(value) => write!(f, "{{StringValue: {value}}}"),
            Self::StringList(values) => write!(f, "{{StringListValue: [{}]}}", values.join(", ")),
            Self::Long(value) => write!(f, "{{LongValue: {value}}}"),
            Self::Date(value) => write!(f, "{{DateValue: {value}}}"),
        }
    }
}

/// Wire shape of an attribute value: an object with at most one member set.
#[derive(Debug, Default, Serialize, Deserialize)]
struct WireAttributeValue {
    #[serde(rename = "StringValue", default, skip_serializing_if = "Option::is_none")]
    string_value: Option<String>,
    #[serde(rename = "StringListValue", default, skip_serializing_if = "Option::is_none")]
    string_list_value: Option<Vec<String>>,
    #[serde(rename = "LongValue", default, skip_serializing_if = "Option::is_none")]
    long_value: Option<i64>,
    #[serde(rename = "DateValue", default, skip_serializing_if = "Option::is_none")]
    date_value: Option<Timestamp>,
}

impl TryFrom<WireAttributeValue> for DocumentAttributeValue {
    type Error = ModelError;

    fn try_from(wire: WireAttributeValue) -> Result<Self, Self::Error> {
        let mut kinds = Vec::new();
        let mut value = Self::Empty;
        if let Some(v) = wire.string_value {
            kinds.push(DocumentAttributeValueType::StringValue);
            value = Self::String(v);
        }
        if let Some(v) = wire.string_list_value {
            kinds.push(DocumentAttributeValueType::StringListValue);
            value = Self::StringList(v);
        }
        if let Some(v) = wire.long_value {
            kinds.push(DocumentAttributeValueType::LongValue);
            value = Self::Long(v);
        }
        if let Some(v) = wire.date_value {
            kinds.push(DocumentAttributeValueType::DateValue);
            value = Self::Date(v);
        }
        if kinds.len() > 1 {
            let kinds = kinds.iter().map(|k| k.as_str()).collect::<Vec<_>>().join(", ");
            return Err(ModelError::AmbiguousAttributeValue { kinds });
        }
        Ok(value)
    }
}

impl From<DocumentAttributeValue> for WireAttributeValue {
    fn from(value: DocumentAttributeValue) -> Self {
        let mut wire = Self::default();
        match value {
            DocumentAttributeValue::Empty => {}
            DocumentAttributeValue::String(v) => wire.string_value = Some(v),
            DocumentAttributeValue::StringList(v) => wire.string_list_value = Some(v),
            DocumentAttributeValue::Long(v) => wire.long_value = Some(v),
            DocumentAttributeValue::Date(v) => wire.date_value = Some(v),
        }
        wire
    }
}

/// A named, typed attribute attached to a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentAttribute {
    #[serde(rename = "Key")]
    key: AttributeKey,
    #[serde(rename = "Value")]
    value: DocumentAttributeValue,
}

impl DocumentAttribute {
    /// Build an attribute, validating the key.
    pub fn new(key: impl Into<String>, value: DocumentAttributeValue) -> ModelResult<Self> {
        Ok(Self {
            key: AttributeKey::new(key)?,
            value,
        })
    }

    pub fn from_key(key: AttributeKey, value: DocumentAttributeValue) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &AttributeKey {
        &self.key
    }

    pub fn value(&self) -> &DocumentAttributeValue {
        &self.value
    }

    /// Replace the key. On error the attribute is left unchanged.
    pub fn set_key(&mut self, key: impl Into<String>) -> ModelResult<&mut Self> {
        self.key = AttributeKey::new(key)?;
        Ok(self)
    }

    pub fn set_value(&mut self, value: DocumentAttributeValue) -> &mut Self {
        self.value = value;
        self
    }

    pub fn with_value(mut self, value: DocumentAttributeValue) -> Self {
        self.value = value;
        self
    }

    pub fn into_parts(self) -> (AttributeKey, DocumentAttributeValue) {
        (self.key, self.value)
    }
}

impl fmt::Display for DocumentAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Key: {}, Value: {}}}", self.key, self.value)
    }
}

/// One bucket of a facet: an attribute value and how many results carry it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentAttributeValueCountPair {
    #[serde(rename = "DocumentAttributeValue", default)]
    value: DocumentAttributeValue,
    #[serde(rename = "Count", deserialize_with = "deserialize_count")]
    count: u64,
}

impl DocumentAttributeValueCountPair {
    pub fn new(value: DocumentAttributeValue, count: i64) -> ModelResult<Self> {
        Ok(Self {
            value,
            count: checked_count(count)?,
        })
    }

    pub fn value(&self) -> &DocumentAttributeValue {
        &self.value
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl fmt::Display for DocumentAttributeValueCountPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{DocumentAttributeValue: {}, Count: {}}}", self.value, self.count)
    }
}

fn checked_count(count: i64) -> ModelResult<u64> {
    u64::try_from(count).map_err(|_| ModelError::InvalidCount(count))
}

fn deserialize_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let count = i64::deserialize(deserializer)?;
    checked_count(count).map_err(serde::de::Error::custom)
}

/// Request-side facet: the attribute to aggregate results on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Facet {
    #[serde(rename = "DocumentAttributeKey")]
    pub document_attribute_key: AttributeKey,
}

impl Facet {
    pub fn new(key: impl Into<String>) -> ModelResult<Self> {
        Ok(Self {
            document_attribute_key: AttributeKey::new(key)?,
        })
    }
}

/// Counts for every value of one attribute across the matching results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetResult {
    #[serde(rename = "DocumentAttributeKey")]
    pub document_attribute_key: AttributeKey,
    #[serde(
        rename = "DocumentAttributeValueType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub document_attribute_value_type: Option<DocumentAttributeValueType>,
    #[serde(rename = "DocumentAttributeValueCountPairs", default)]
    pub document_attribute_value_count_pairs: Vec<DocumentAttributeValueCountPair>,
}

impl FacetResult {
    /// Sum of all bucket counts, saturating at `u64::MAX`.
    pub fn total_count(&self) -> u64 {
        self.document_attribute_value_count_pairs
            .iter()
            .map(DocumentAttributeValueCountPair::count)
            .fold(0, u64::saturating_add)
    }

    /// Count for one value, if that value has a bucket.
    pub fn count_for(&self, value: &DocumentAttributeValue) -> Option<u64> {
        self.document_attribute_value_count_pairs
            .iter()
            .find(|pair| pair.value() == value)
            .map(DocumentAttributeValueCountPair::count)
    }
}
