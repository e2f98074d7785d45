//! Subgroup: a named subdivision of a group's members.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::errors::BuildError;
use crate::json;

/// A named subdivision of a [`Group`](crate::Group).
///
/// `members` is a derived backlink over member uids, populated by the group
/// builder's resolution pass. It is skipped on serialization so a built
/// group round-trips to the original payload shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subgroup {
    /// `id` in the API.
    #[serde(rename = "id")]
    pub uid: String,
    pub name: String,
    /// Uids of the members in this subgroup, in resolution order.
    #[serde(skip_serializing)]
    pub members: Vec<String>,
}

impl Subgroup {
    /// Parse a subgroup from one item of a group payload's `subGroups` list.
    pub fn from_value(data: &Value) -> Result<Self, BuildError> {
        let obj = json::as_object(data, "subgroup")?;
        Ok(Self {
            uid: json::req_str(obj, "subgroup", "id")?.to_string(),
            name: json::req_str(obj, "subgroup", "name")?.to_string(),
            members: Vec::new(),
        })
    }
}

impl fmt::Display for Subgroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subgroup '{}'", self.name)
    }
}
