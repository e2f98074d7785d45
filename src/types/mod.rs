mod chat;
mod event;
mod group;
mod member;
mod profile;
mod role;
mod subgroup;

pub use chat::{Chat, Message};
pub use event::{Event, Responses};
pub use group::Group;
pub use member::Member;
pub use profile::Profile;
pub use role::Role;
pub use subgroup::Subgroup;
