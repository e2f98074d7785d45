//! Group: the top-level aggregate, its builder, and its query surface.
//!
//! A group payload arrives denormalized: flat `members`, `subGroups` and
//! `roles` lists, where each raw member item names its subgroups and roles
//! by id only. [`Group::from_value`] turns that payload into a fully linked
//! graph in two passes:
//!
//! 1. **Independent pass** — parse the three collections in payload order,
//!    rejecting duplicate uids per entity kind. Uniqueness is scoped to this
//!    one build; separate builds never interact.
//! 2. **Resolution pass** — re-read each raw member item's join data (the
//!    built [`Member`] deliberately does not keep it), resolve every
//!    referenced id against the built collections, and append both link
//!    directions together. An id with no matching entity aborts the build:
//!    silently dropping join data would hand the caller a graph that quietly
//!    violates the bidirectional invariant.
//!
//! After a successful build the graph is immutable and the invariant holds
//! for all reads: member `m` lists role `r` exactly when `r` lists `m`, and
//! likewise for subgroups.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::errors::{BuildError, EntityKind, QueryError};
use crate::json;
use crate::types::{Member, Role, Subgroup};

/// A fully linked group aggregate.
///
/// Owns its members, subgroups and roles by composition; none of them are
/// shared across groups. Relationship links between them are uid handles
/// into these canonical collections, so discarding the `Group` discards the
/// whole graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    /// `id` in the API.
    #[serde(rename = "id")]
    pub uid: String,
    pub name: String,
    pub members: Vec<Member>,
    /// `subGroups` in the API.
    #[serde(rename = "subGroups")]
    pub subgroups: Vec<Subgroup>,
    pub roles: Vec<Role>,
}

impl Group {
    /// Build a fully resolved group from one raw group payload.
    ///
    /// Construction is all-or-nothing: any shape fault, missing field,
    /// duplicate uid or unresolved reference returns an error and no
    /// partially linked `Group` ever escapes.
    #[instrument(skip_all)]
    pub fn from_value(data: &Value) -> Result<Self, BuildError> {
        let obj = json::as_object(data, "group")?;
        let uid = json::req_str(obj, "group", "id")?.to_string();
        let name = json::req_str(obj, "group", "name")?.to_string();

        let raw_members = json::req_array(obj, "group", "members")?;
        let raw_subgroups = json::req_array(obj, "group", "subGroups")?;
        let raw_roles = json::req_array(obj, "group", "roles")?;

        // Independent pass: build each collection in payload order.
        let subgroups = parse_unique(raw_subgroups, EntityKind::Subgroup, Subgroup::from_value, |s| {
            s.uid.as_str()
        })?;
        let roles = parse_unique(raw_roles, EntityKind::Role, Role::from_value, |r| {
            r.uid.as_str()
        })?;
        let members = parse_unique(raw_members, EntityKind::Member, Member::from_value, |m| {
            m.uid.as_str()
        })?;

        debug!(
            group_uid = %uid,
            member_count = members.len(),
            subgroup_count = subgroups.len(),
            role_count = roles.len(),
            "Parsed group collections"
        );

        let mut group = Self {
            uid,
            name,
            members,
            subgroups,
            roles,
        };
        group.resolve_references(raw_members)?;
        Ok(group)
    }

    /// Resolution pass: link members to their subgroups and roles, in both
    /// directions, from the raw join data.
    fn resolve_references(&mut self, raw_members: &[Value]) -> Result<(), BuildError> {
        let subgroup_index: HashMap<String, usize> =
            index_by_uid(&self.subgroups, |s| s.uid.as_str());
        let role_index: HashMap<String, usize> = index_by_uid(&self.roles, |r| r.uid.as_str());
        let mut link_count = 0usize;

        for (member_pos, raw_member) in raw_members.iter().enumerate() {
            // Shape was already validated by the independent pass.
            let raw = json::as_object(raw_member, "member")?;
            let member_uid = json::req_str(raw, "member", "id")?.to_string();
            let subgroup_uids = json::req_str_array(raw, "member", "subGroups")?;
            let role_uids = json::opt_str_array(raw, "member", "roles")?;

            for subgroup_uid in subgroup_uids {
                let subgroup_pos = *subgroup_index.get(&subgroup_uid).ok_or_else(|| {
                    BuildError::UnresolvedReference {
                        member_uid: member_uid.clone(),
                        kind: EntityKind::Subgroup,
                        uid: subgroup_uid.clone(),
                    }
                })?;
                // Both directions together, so no read ever sees half a link.
                self.members[member_pos].subgroups.push(subgroup_uid);
                self.subgroups[subgroup_pos].members.push(member_uid.clone());
                link_count += 1;
            }

            for role_uid in role_uids {
                let role_pos = *role_index.get(&role_uid).ok_or_else(|| {
                    BuildError::UnresolvedReference {
                        member_uid: member_uid.clone(),
                        kind: EntityKind::Role,
                        uid: role_uid.clone(),
                    }
                })?;
                self.members[member_pos].roles.push(role_uid);
                self.roles[role_pos].members.push(member_uid.clone());
                link_count += 1;
            }
        }

        debug!(group_uid = %self.uid, link_count, "Resolved member references");
        Ok(())
    }

    /// Return the member with the given uid.
    ///
    /// First match in insertion order; a miss is an ordinary
    /// [`QueryError::NotFound`], not a build fault.
    pub fn member_by_id(&self, uid: &str) -> Result<&Member, QueryError> {
        self.members
            .iter()
            .find(|member| member.uid == uid)
            .ok_or_else(|| QueryError::NotFound {
                kind: EntityKind::Member,
                uid: uid.to_string(),
            })
    }

    /// Return the subgroup with the given uid.
    pub fn subgroup_by_id(&self, uid: &str) -> Result<&Subgroup, QueryError> {
        self.subgroups
            .iter()
            .find(|subgroup| subgroup.uid == uid)
            .ok_or_else(|| QueryError::NotFound {
                kind: EntityKind::Subgroup,
                uid: uid.to_string(),
            })
    }

    /// Return the role with the given uid.
    pub fn role_by_id(&self, uid: &str) -> Result<&Role, QueryError> {
        self.roles
            .iter()
            .find(|role| role.uid == uid)
            .ok_or_else(|| QueryError::NotFound {
                kind: EntityKind::Role,
                uid: uid.to_string(),
            })
    }

    /// Return the members of `subgroup`, in this group's member order.
    ///
    /// Errors if `subgroup` does not belong to this group.
    pub fn members_by_subgroup(&self, subgroup: &Subgroup) -> Result<Vec<&Member>, QueryError> {
        if !self.subgroups.iter().any(|s| s.uid == subgroup.uid) {
            return Err(QueryError::ForeignEntity {
                kind: EntityKind::Subgroup,
                uid: subgroup.uid.clone(),
            });
        }
        Ok(self
            .members
            .iter()
            .filter(|member| member.subgroups.iter().any(|uid| *uid == subgroup.uid))
            .collect())
    }

    /// Return the members holding `role`, in this group's member order.
    ///
    /// Errors if `role` does not belong to this group.
    pub fn members_by_role(&self, role: &Role) -> Result<Vec<&Member>, QueryError> {
        if !self.roles.iter().any(|r| r.uid == role.uid) {
            return Err(QueryError::ForeignEntity {
                kind: EntityKind::Role,
                uid: role.uid.clone(),
            });
        }
        Ok(self
            .members
            .iter()
            .filter(|member| member.roles.iter().any(|uid| *uid == role.uid))
            .collect())
    }

    /// Resolve `member`'s role uid handles to role objects, in join-data
    /// order.
    ///
    /// Errors if `member` does not belong to this group.
    pub fn member_roles<'a>(&'a self, member: &Member) -> Result<Vec<&'a Role>, QueryError> {
        self.require_member(member)?;
        // The resolution pass guarantees every handle resolves.
        Ok(member
            .roles
            .iter()
            .filter_map(|uid| self.role_by_id(uid).ok())
            .collect())
    }

    /// Resolve `member`'s subgroup uid handles to subgroup objects, in
    /// join-data order.
    ///
    /// Errors if `member` does not belong to this group.
    pub fn member_subgroups<'a>(&'a self, member: &Member) -> Result<Vec<&'a Subgroup>, QueryError> {
        self.require_member(member)?;
        Ok(member
            .subgroups
            .iter()
            .filter_map(|uid| self.subgroup_by_id(uid).ok())
            .collect())
    }

    fn require_member(&self, member: &Member) -> Result<(), QueryError> {
        if self.members.iter().any(|m| m.uid == member.uid) {
            Ok(())
        } else {
            Err(QueryError::ForeignEntity {
                kind: EntityKind::Member,
                uid: member.uid.clone(),
            })
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group '{}'", self.name)
    }
}

/// Parse a raw collection in payload order, rejecting duplicate uids.
fn parse_unique<T>(
    items: &[Value],
    kind: EntityKind,
    parse: fn(&Value) -> Result<T, BuildError>,
    uid_of: fn(&T) -> &str,
) -> Result<Vec<T>, BuildError> {
    let mut seen: HashSet<String> = HashSet::with_capacity(items.len());
    let mut entities = Vec::with_capacity(items.len());
    for item in items {
        let entity = parse(item)?;
        let uid = uid_of(&entity);
        if !seen.insert(uid.to_string()) {
            return Err(BuildError::DuplicateId {
                kind,
                uid: uid.to_string(),
            });
        }
        entities.push(entity);
    }
    Ok(entities)
}

fn index_by_uid<T>(entities: &[T], uid_of: fn(&T) -> &str) -> HashMap<String, usize> {
    entities
        .iter()
        .enumerate()
        .map(|(pos, entity)| (uid_of(entity).to_string(), pos))
        .collect()
}
