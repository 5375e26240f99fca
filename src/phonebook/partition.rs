use super::{
    contact::Contact,
    favorites::FavoriteSet,
};

/// The two display sequences: pinned contacts first, everything else in the
/// paginated remainder. Mutually exclusive; together they cover every
/// contact that went in.
#[derive(Debug)]
pub struct Partitioned {
    favorites:  Vec<Contact>,
    remaining:  Vec<Contact>,
}

impl Partitioned {
    /// Assembles the two sequences when the session fetched them separately
    /// (id-in for favorites, id-not-in for the remainder).
    pub(crate) fn from_parts(favorites: Vec<Contact>, remaining: Vec<Contact>) -> Self {
        Self { favorites, remaining }
    }

    pub fn favorites(&self) -> &[Contact] {
        &self.favorites
    }

    pub fn remaining(&self) -> &[Contact] {
        &self.remaining
    }

    pub fn len(&self) -> usize {
        self.favorites.len() + self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty() && self.remaining.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Contact>, Vec<Contact>) {
        (self.favorites, self.remaining)
    }
}

/// Splits one fetched collection by favorite membership, preserving the
/// input order within both halves.
pub fn partition(contacts: Vec<Contact>, favorites: &FavoriteSet) -> Partitioned {
    let mut pinned = Vec::new();
    let mut remaining = Vec::new();

    for contact in contacts {
        match favorites.contains(contact.id()) {
            true  => pinned.push(contact),
            false => remaining.push(contact),
        }
    }

    Partitioned::from_parts(pinned, remaining)
}
