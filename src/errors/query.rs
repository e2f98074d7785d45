//! Query-time error types.
//!
//! Unlike [`BuildError`](super::BuildError), these are ordinary expected
//! outcomes of a lookup ("does this group have a member with this id") and
//! are meant to be handled by normal control flow.

use thiserror::Error;

use super::EntityKind;

/// Errors returned by lookup and derived-membership queries on a built group.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A by-id lookup found no entity with the given uid.
    #[error("no {kind} with id '{uid}' in this group")]
    NotFound { kind: EntityKind, uid: String },

    /// A derived-membership query was given an entity from a different group.
    #[error("{kind} '{uid}' does not belong to this group")]
    ForeignEntity { kind: EntityKind, uid: String },
}
