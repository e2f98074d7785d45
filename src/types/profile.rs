//! Profile: an individual's account-level record.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::errors::BuildError;
use crate::json;

/// An account-level record, distinct from the per-group [`Member`] record.
///
/// A profile is nested within a member; a member holds at most one.
///
/// [`Member`]: crate::Member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    /// `id` in the API.
    #[serde(rename = "id")]
    pub uid: String,
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl Profile {
    /// Parse a profile from a member's nested `profile` object.
    pub fn from_value(data: &Value) -> Result<Self, BuildError> {
        let obj = json::as_object(data, "profile")?;
        Ok(Self {
            uid: json::req_str(obj, "profile", "id")?.to_string(),
            first_name: json::opt_str(obj, "profile", "firstName")?,
            last_name: json::opt_str(obj, "profile", "lastName")?,
            email: json::opt_str(obj, "profile", "email")?,
            phone_number: json::opt_str(obj, "profile", "phoneNumber")?,
        })
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Profile(uid='{}')", self.uid)
    }
}
