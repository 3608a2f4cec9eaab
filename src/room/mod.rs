use std::fmt;

use tracing::debug;

use crate::error::RoomResult;

pub use member::Member;
pub use select::first_by_name;

mod member;
mod select;

/// An ordered, read-only collection of members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatRoom {
    members: Vec<Member>,
}

impl ChatRoom {
    pub fn new(members: Vec<Member>) -> Self {
        debug!("Creating chat room with {} members", members.len());
        Self { members }
    }

    /// Members in insertion order. The room hands out a shared slice only,
    /// so nothing outside can reorder it.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn first_by_name(&self) -> RoomResult<&Member> {
        first_by_name(&self.members)
    }
}

impl From<Vec<Member>> for ChatRoom {
    fn from(members: Vec<Member>) -> Self {
        Self::new(members)
    }
}

impl FromIterator<Member> for ChatRoom {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for ChatRoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", member)?;
        }
        write!(f, "]")
    }
}
