//! Member: an individual's record within a group.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::errors::BuildError;
use crate::json;
use crate::types::Profile;

/// An individual's record inside one [`Group`](crate::Group).
///
/// A member belongs to exactly one group and may belong to any number of
/// that group's subgroups and carry any number of its roles. The `roles`
/// and `subgroups` lists hold uids into the owning group's canonical
/// collections; they start empty and are populated by the group builder
/// during its resolution pass, never by [`Member::from_value`] itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    /// `id` in the API.
    #[serde(rename = "id")]
    pub uid: String,
    /// `createdTime` in the API.
    #[serde(rename = "createdTime")]
    pub created_time: DateTime<Utc>,
    /// `firstName` in the API.
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// `lastName` in the API.
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `phoneNumber` in the API.
    #[serde(rename = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// The member's account-level profile, when the payload carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    /// Uids of this member's roles, in raw join-data order.
    pub roles: Vec<String>,
    /// Uids of the subgroups this member belongs to, in raw join-data order.
    #[serde(rename = "subGroups")]
    pub subgroups: Vec<String>,
}

impl Member {
    /// Parse a member from one item of a group payload's `members` list.
    ///
    /// Only the member's own fields are populated here; the `roles` and
    /// `subgroups` join data is resolved later against the full group.
    pub fn from_value(data: &Value) -> Result<Self, BuildError> {
        let obj = json::as_object(data, "member")?;
        let profile = match json::opt_object(obj, "member", "profile")? {
            Some(profile_data) => Some(Profile::from_value(profile_data)?),
            None => None,
        };
        Ok(Self {
            uid: json::req_str(obj, "member", "id")?.to_string(),
            created_time: json::req_timestamp(obj, "member", "createdTime")?,
            first_name: json::req_str(obj, "member", "firstName")?.to_string(),
            last_name: json::req_str(obj, "member", "lastName")?.to_string(),
            email: json::opt_str(obj, "member", "email")?,
            phone_number: json::opt_str(obj, "member", "phoneNumber")?,
            profile,
            roles: Vec::new(),
            subgroups: Vec::new(),
        })
    }

    /// The member's full name, derived from first and last name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Member {
    /// The last few uid chars are included because a full name is unlikely
    /// to be unique.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tail = self
            .uid
            .get(self.uid.len().saturating_sub(3)..)
            .unwrap_or("");
        write!(f, "Member '{}' (uid ends '...{tail}')", self.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn simple_member_data() -> Value {
        json!({
            "createdTime": "2022-03-24T16:36:29Z",
            "email": "brendan@example.com",
            "firstName": "Brendan",
            "id": "6F63AF02CE05328153ABA477C76E6189",
            "lastName": "Gleason",
            "phoneNumber": "+123456789",
            "profile": {
                "id": "364C188137AD92DC0F32E1A31A0E1731",
            },
        })
    }

    #[test]
    fn parses_simple_member() {
        let member = Member::from_value(&simple_member_data()).unwrap();

        assert_eq!(member.uid, "6F63AF02CE05328153ABA477C76E6189");
        assert_eq!(member.created_time.to_rfc3339(), "2022-03-24T16:36:29+00:00");
        assert_eq!(member.first_name, "Brendan");
        assert_eq!(member.last_name, "Gleason");
        assert_eq!(member.email.as_deref(), Some("brendan@example.com"));
        assert_eq!(member.phone_number.as_deref(), Some("+123456789"));
        assert_eq!(
            member.profile.as_ref().map(|p| p.uid.as_str()),
            Some("364C188137AD92DC0F32E1A31A0E1731")
        );
        // Relationship lists are the builder's job.
        assert!(member.roles.is_empty());
        assert!(member.subgroups.is_empty());
    }

    #[test]
    fn optional_fields_default_to_absent() {
        let member = Member::from_value(&json!({
            "createdTime": "2022-03-24T16:36:29Z",
            "firstName": "Brendan",
            "id": "M1",
            "lastName": "Gleason",
        }))
        .unwrap();

        assert_eq!(member.email, None);
        assert_eq!(member.phone_number, None);
        assert_eq!(member.profile, None);
    }

    #[test]
    fn derives_full_name() {
        let member = Member::from_value(&simple_member_data()).unwrap();
        assert_eq!(member.full_name(), "Brendan Gleason");
    }

    #[test]
    fn displays_name_and_uid_tail() {
        let member = Member::from_value(&simple_member_data()).unwrap();
        assert_eq!(
            member.to_string(),
            "Member 'Brendan Gleason' (uid ends '...189')"
        );
    }

    #[test]
    fn rejects_non_object_input() {
        let err = Member::from_value(&json!(["not", "a", "member"])).unwrap_err();
        assert!(matches!(err, BuildError::Shape { .. }));
    }

    #[test]
    fn rejects_missing_last_name() {
        let err = Member::from_value(&json!({
            "createdTime": "2022-03-24T16:36:29Z",
            "firstName": "Brendan",
            "id": "M1",
        }))
        .unwrap_err();
        assert_eq!(err, BuildError::missing_field("member", "lastName"));
    }

    #[test]
    fn rejects_malformed_created_time() {
        let err = Member::from_value(&json!({
            "createdTime": "not-a-timestamp",
            "firstName": "Brendan",
            "id": "M1",
            "lastName": "Gleason",
        }))
        .unwrap_err();
        assert!(matches!(err, BuildError::InvalidTimestamp { .. }));
    }
}
