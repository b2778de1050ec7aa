//! The Resume Record handed to the renderer and written back out as structured data.
//!
//! All types serialize with the camelCase keys used by the editor's JSON files, and every
//! field tolerates being missing or `null` on input.  Uploaded data goes through
//! [`ResumeRecord::from_json_str`], which also assigns positional `order` hints and fresh
//! identifiers to entries that lack them.  The renderer itself never looks at either value.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::ResumeError;

/// Treats an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Accepts a string, number or boolean and keeps its text; `null` becomes an empty string.
///
/// Hand-edited uploads often carry values like `"gpa": 3.8` or `"grad": 2020`.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(de::Error::invalid_type(
            de::Unexpected::Other(json_kind(&other)),
            &"a string or number",
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "array",
        Value::Object(_) => "object",
        _ => "scalar",
    }
}

/// Reads an `order` hint, discarding anything that is not a non-negative integer.
///
/// The hint is re-assigned from the entry's position when discarded.
fn lenient_order<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let order = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    Ok(order)
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Root aggregate describing a single resume.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub github: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    /// Skill lines; each may contain inline markup.
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectEntry>,
}

impl ResumeRecord {
    /// Parses an uploaded JSON document and normalizes it.
    ///
    /// Nothing is returned on failure, so callers holding a previous record can keep it.
    pub fn from_json_str(text: &str) -> Result<Self, ResumeError> {
        let mut record: ResumeRecord =
            serde_json::from_str(text).map_err(ResumeError::InvalidInput)?;
        record.normalize();
        Ok(record)
    }

    /// Fills in missing `order` hints and identifiers on every entry.
    ///
    /// Values already present are left untouched.
    pub fn normalize(&mut self) {
        assign_order_and_ids(&mut self.education);
        assign_order_and_ids(&mut self.experience);
        assign_order_and_ids(&mut self.projects);
    }

    /// Serializes the record as pretty-printed JSON with a stable key order.
    pub fn to_json_pretty(&self) -> Result<String, ResumeError> {
        serde_json::to_string_pretty(self).map_err(ResumeError::Serialize)
    }
}

/// Common identity fields shared by the three entry variants.
pub trait Entry {
    fn id(&self) -> &str;
    fn order(&self) -> Option<u32>;
    fn set_id(&mut self, id: String);
    fn set_order(&mut self, order: u32);
}

fn assign_order_and_ids<E: Entry>(entries: &mut [E]) {
    for (index, entry) in entries.iter_mut().enumerate() {
        if entry.order().is_none() {
            entry.set_order(index as u32 + 1);
        }
        if entry.id().is_empty() {
            entry.set_id(generate_id());
        }
    }
}

macro_rules! impl_entry {
    ($ty:ty) => {
        impl Entry for $ty {
            fn id(&self) -> &str {
                &self.id
            }

            fn order(&self) -> Option<u32> {
                self.order
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }

            fn set_order(&mut self, order: u32) {
                self.order = Some(order);
            }
        }

        impl $ty {
            /// Creates an empty entry carrying a freshly generated identifier.
            pub fn new() -> Self {
                Self {
                    id: generate_id(),
                    ..Self::default()
                }
            }
        }
    };
}

/// One education item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "lenient_order",
        skip_serializing_if = "Option::is_none"
    )]
    pub order: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub university: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub gpa: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub grad: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awards: Option<String>,
    /// Keys the editor does not know about, kept for the round trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One work experience item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "lenient_order",
        skip_serializing_if = "Option::is_none"
    )]
    pub order: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    /// Month-granularity date such as `2021-04`.
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub start_date: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub end_date: String,
    /// When set, `end_date` is ignored and the entry runs to "Present".
    #[serde(default, deserialize_with = "null_as_default")]
    pub ongoing: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One project item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "lenient_order",
        skip_serializing_if = "Option::is_none"
    )]
    pub order: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stack: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl_entry!(EducationEntry);
impl_entry!(ExperienceEntry);
impl_entry!(ProjectEntry);

/// Reads any serde-compatible value from a JSON string, mapping failures to invalid input.
pub(crate) fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, ResumeError> {
    serde_json::from_str(text).map_err(ResumeError::InvalidInput)
}
