//! # Roster Graph
//!
//! This crate converts the nested JSON payloads returned by a team/event
//! management web API into typed, validated, cross-referenced object graphs.
//! Its job ends at parsing, validation and lookup: no network I/O, no
//! persistence, no mutation of source data.
//!
//! The centrepiece is [`Group::from_value`], which takes one denormalized
//! group payload (flat `members`, `subGroups` and `roles` lists, with
//! members referencing subgroups and roles by id) and builds a fully linked,
//! bidirectionally navigable [`Group`]. Construction is all-or-nothing: a
//! malformed payload yields a [`BuildError`] and never a partial graph.
//!
//! [`Event`], [`Profile`] and [`Chat`] are flat records with no
//! cross-referencing; they share the same parsing contract.
//!
//! ```
//! use roster_graph::Group;
//! use serde_json::json;
//!
//! let group = Group::from_value(&json!({
//!     "id": "G2",
//!     "name": "Group Two",
//!     "members": [{
//!         "id": "G2M1",
//!         "firstName": "Brendan",
//!         "lastName": "Gleason",
//!         "createdTime": "2022-03-24T16:36:29Z",
//!         "subGroups": ["G2S1"],
//!         "roles": ["G2R1"],
//!     }],
//!     "subGroups": [{ "id": "G2S1", "name": "Subgroup B1" }],
//!     "roles": [{ "id": "G2R1", "name": "Role B2" }],
//! }))
//! .unwrap();
//!
//! let member = group.member_by_id("G2M1").unwrap();
//! assert_eq!(member.full_name(), "Brendan Gleason");
//! assert_eq!(member.roles, vec!["G2R1"]);
//! assert_eq!(group.role_by_id("G2R1").unwrap().members, vec!["G2M1"]);
//! ```

mod json;

pub mod errors;
pub mod types;

pub use errors::{BuildError, EntityKind, QueryError};
pub use types::{Chat, Event, Group, Member, Message, Profile, Responses, Role, Subgroup};
