pub mod core;
pub mod phonebook;

pub use crate::core::{
    error::{self, Error},
    config::{self, Config},
    default_configuration as configuration,
};

pub use crate::phonebook::{
    contact::{self, Contact, ContactBuilder, ContactChange, ContactId, Phone},
    draft::{self, DraftContact, ErrorTag},
    validation::{self, Similarity, Validation},
    favorites::{self, FavoriteSet, KvStore},
    partition::{self, Partitioned},
    pagination::{self, HasMore, PageCursor, PAGE_SIZE},
    filter::{self, ContactFilter},
    persistence::{self, FileStore},
    api_client::APIClient,
    session::Phonebook,
};

pub(crate) fn is_none_or_empty(v: &Option<String>) -> bool {
    v.as_ref().map(|s| s.is_empty()).unwrap_or(true)
}
