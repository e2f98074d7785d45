//! Event and its member responses.
//!
//! Events are flat records: the response lists name members by uid only and
//! are never cross-referenced against a group's collections here.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::errors::BuildError;
use crate::json;

/// Member responses to an [`Event`]: five disjoint ordered lists of member
/// uids.
///
/// Each list defaults to empty when its key is absent from the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Responses {
    /// `acceptedIds` in the API.
    #[serde(rename = "acceptedIds")]
    pub accepted_uids: Vec<String>,
    /// `declinedIds` in the API.
    #[serde(rename = "declinedIds")]
    pub declined_uids: Vec<String>,
    /// `unansweredIds` in the API.
    #[serde(rename = "unansweredIds")]
    pub unanswered_uids: Vec<String>,
    /// `waitinglistIds` in the API.
    #[serde(rename = "waitinglistIds")]
    pub waiting_list_uids: Vec<String>,
    /// `unconfirmedIds` in the API.
    #[serde(rename = "unconfirmedIds")]
    pub unconfirmed_uids: Vec<String>,
}

impl Responses {
    fn from_value(data: &Value) -> Result<Self, BuildError> {
        let obj = json::as_object(data, "event responses")?;
        Ok(Self {
            accepted_uids: json::opt_str_array(obj, "event responses", "acceptedIds")?,
            declined_uids: json::opt_str_array(obj, "event responses", "declinedIds")?,
            unanswered_uids: json::opt_str_array(obj, "event responses", "unansweredIds")?,
            waiting_list_uids: json::opt_str_array(obj, "event responses", "waitinglistIds")?,
            unconfirmed_uids: json::opt_str_array(obj, "event responses", "unconfirmedIds")?,
        })
    }
}

/// A scheduled event belonging to one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// `id` in the API.
    #[serde(rename = "id")]
    pub uid: String,
    pub heading: String,
    /// `startTimestamp` in the API.
    #[serde(rename = "startTimestamp")]
    pub start_time: DateTime<Utc>,
    /// `endTimestamp` in the API.
    #[serde(rename = "endTimestamp", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// `createdTime` in the API.
    #[serde(rename = "createdTime", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    /// `inviteTime` in the API.
    #[serde(rename = "inviteTime", skip_serializing_if = "Option::is_none")]
    pub invite_time: Option<DateTime<Utc>>,
    pub responses: Responses,
}

impl Event {
    /// Parse an event from one item of an `events` payload.
    pub fn from_value(data: &Value) -> Result<Self, BuildError> {
        let obj = json::as_object(data, "event")?;
        let responses = Responses::from_value(json::req_object(obj, "event", "responses")?)?;
        Ok(Self {
            uid: json::req_str(obj, "event", "id")?.to_string(),
            heading: json::req_str(obj, "event", "heading")?.to_string(),
            start_time: json::req_timestamp(obj, "event", "startTimestamp")?,
            end_time: json::opt_timestamp(obj, "event", "endTimestamp")?,
            created_time: json::opt_timestamp(obj, "event", "createdTime")?,
            invite_time: json::opt_timestamp(obj, "event", "inviteTime")?,
            responses,
        })
    }

    /// Alias for `heading`, for consistency with the other named entities.
    pub fn name(&self) -> &str {
        &self.heading
    }
}

impl fmt::Display for Event {
    /// The date is included because a heading is unlikely to be unique.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event '{}' on {}",
            self.heading,
            self.start_time.date_naive()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn simple_event_data() -> Value {
        json!({
            "id": "A390CE5396D2F5C3015F53E171EC59D5",
            "heading": "Event 1",
            "startTimestamp": "2021-07-06T06:00:00Z",
            "responses": {},
        })
    }

    fn complex_event_data() -> Value {
        json!({
            "id": "36D7F1A46EB2CDED4B6F22D400229822",
            "heading": "Event 2",
            "startTimestamp": "2022-11-04T06:00:00Z",
            "endTimestamp": "2022-11-04T08:00:00Z",
            "createdTime": "2022-10-28T19:00:00Z",
            "inviteTime": "2022-10-30T19:00:00Z",
            "responses": {
                "acceptedIds": ["B24FA75A4CCBC63199A57361E88B0646"],
                "declinedIds": ["B4C5339E366FB5350310F2F8EA069F41"],
                "unansweredIds": ["3E546CDE2EAE242C1B8281C2042B5990"],
                "waitinglistIds": ["0362B36507E156365471B64574EB6764"],
                "unconfirmedIds": ["2D1BB37608F09511FD5F280D219DFD97"],
            },
        })
    }

    #[test]
    fn parses_simple_event_with_empty_responses() {
        let event = Event::from_value(&simple_event_data()).unwrap();

        assert_eq!(event.uid, "A390CE5396D2F5C3015F53E171EC59D5");
        assert_eq!(event.heading, "Event 1");
        assert_eq!(event.name(), "Event 1");
        assert_eq!(event.start_time.to_rfc3339(), "2021-07-06T06:00:00+00:00");
        assert_eq!(event.end_time, None);
        assert_eq!(event.created_time, None);
        assert_eq!(event.invite_time, None);
        assert_eq!(event.responses, Responses::default());
        assert_eq!(event.to_string(), "Event 'Event 1' on 2021-07-06");
    }

    #[test]
    fn parses_complex_event() {
        let event = Event::from_value(&complex_event_data()).unwrap();

        assert_eq!(
            event.responses.accepted_uids,
            vec!["B24FA75A4CCBC63199A57361E88B0646"]
        );
        assert_eq!(
            event.responses.declined_uids,
            vec!["B4C5339E366FB5350310F2F8EA069F41"]
        );
        assert_eq!(
            event.responses.unanswered_uids,
            vec!["3E546CDE2EAE242C1B8281C2042B5990"]
        );
        assert_eq!(
            event.responses.waiting_list_uids,
            vec!["0362B36507E156365471B64574EB6764"]
        );
        assert_eq!(
            event.responses.unconfirmed_uids,
            vec!["2D1BB37608F09511FD5F280D219DFD97"]
        );
        assert!(event.end_time.is_some());
        assert!(event.created_time.is_some());
        assert!(event.invite_time.is_some());
        assert_eq!(event.to_string(), "Event 'Event 2' on 2022-11-04");
    }

    #[test]
    fn rejects_missing_responses() {
        let err = Event::from_value(&json!({
            "id": "E1",
            "heading": "Event 1",
            "startTimestamp": "2021-07-06T06:00:00Z",
        }))
        .unwrap_err();
        assert_eq!(err, BuildError::missing_field("event", "responses"));
    }

    #[test]
    fn rejects_non_object_responses() {
        let err = Event::from_value(&json!({
            "id": "E1",
            "heading": "Event 1",
            "startTimestamp": "2021-07-06T06:00:00Z",
            "responses": ["yes"],
        }))
        .unwrap_err();
        assert!(matches!(err, BuildError::Shape { .. }));
    }
}
