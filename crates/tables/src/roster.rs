use super::Name;
use std::collections::HashMap;
use ttev_core::PlayerId;

/// Player id to display name, the right-hand side of the player left join.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Roster(HashMap<PlayerId, String>);

impl Roster {
    pub fn name(&self, id: PlayerId) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// later rows win on duplicate ids
impl FromIterator<Name> for Roster {
    fn from_iter<I: IntoIterator<Item = Name>>(iter: I) -> Self {
        Self(iter.into_iter().map(|n| (n.id, n.name)).collect())
    }
}
