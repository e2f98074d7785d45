//! Error types for building and querying group graphs.

mod build;
mod query;

use std::fmt;

pub use build::BuildError;
pub use query::QueryError;

/// The entity kinds that carry uids within a group.
///
/// Used by both build-time and query-time errors to report which collection
/// a uid was checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Member,
    Subgroup,
    Role,
}

impl AsRef<str> for EntityKind {
    fn as_ref(&self) -> &str {
        match self {
            EntityKind::Member => "member",
            EntityKind::Subgroup => "subgroup",
            EntityKind::Role => "role",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
