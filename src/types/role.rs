//! Role: a named tag assignable to members within a group.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::errors::BuildError;
use crate::json;

/// A named tag belonging to a [`Group`](crate::Group).
///
/// A member has zero or more of its group's roles. `members` is a derived
/// backlink over member uids, populated by the group builder's resolution
/// pass and skipped on serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Role {
    /// `id` in the API.
    #[serde(rename = "id")]
    pub uid: String,
    pub name: String,
    /// Uids of the members holding this role, in resolution order.
    #[serde(skip_serializing)]
    pub members: Vec<String>,
}

impl Role {
    /// Parse a role from one item of a group payload's `roles` list.
    pub fn from_value(data: &Value) -> Result<Self, BuildError> {
        let obj = json::as_object(data, "role")?;
        Ok(Self {
            uid: json::req_str(obj, "role", "id")?.to_string(),
            name: json::req_str(obj, "role", "name")?.to_string(),
            members: Vec::new(),
        })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Role '{}'", self.name)
    }
}
