//! Build-time error types.
//!
//! Any of these aborts the whole build: a failed build never returns a
//! partially constructed `Group`.

use thiserror::Error;

use super::EntityKind;

/// Errors raised while parsing a raw payload into a linked object graph.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A value did not have the expected JSON shape (object, array or string).
    #[error("expected {expected} for {context}")]
    Shape {
        context: String,
        expected: &'static str,
    },

    /// A mandatory key was absent from an otherwise well-shaped object.
    #[error("missing required field '{field}' in {context}")]
    MissingField { context: String, field: &'static str },

    /// A timestamp string failed RFC 3339 parsing.
    #[error("invalid timestamp '{value}' in field '{field}' of {context}")]
    InvalidTimestamp {
        context: String,
        field: &'static str,
        value: String,
    },

    /// Two entities of the same kind within one group share a uid.
    ///
    /// The check is scoped to a single build; separate builds never interact.
    #[error("duplicate {kind} id '{uid}'")]
    DuplicateId { kind: EntityKind, uid: String },

    /// A member's join data names a subgroup/role id with no matching entity.
    #[error("member '{member_uid}' references unknown {kind} id '{uid}'")]
    UnresolvedReference {
        member_uid: String,
        kind: EntityKind,
        uid: String,
    },
}

impl BuildError {
    /// Create a shape error for the given parse site.
    pub(crate) fn shape(context: impl Into<String>, expected: &'static str) -> Self {
        Self::Shape {
            context: context.into(),
            expected,
        }
    }

    /// Create a missing-field error for the given parse site.
    pub(crate) fn missing_field(context: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            context: context.into(),
            field,
        }
    }
}
