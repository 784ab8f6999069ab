use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The descriptive payload of a listing
///
/// Only the slug is interpreted, every other field is stored exactly as it was submitted.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Info {
    /// The human-readable unique identifier
    pub slug: String,
    /// Any remaining fields
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
