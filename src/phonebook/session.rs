use std::path::Path;
use futures::join;
use log::{info, warn};

use crate::{
    Config,
    error::Result,
    core::logger,
};

use super::{
    api_client::APIClient,
    contact::{Contact, ContactChange, ContactId},
    draft::DraftContact,
    favorites::{FavoriteSet, KvStore},
    filter::ContactFilter,
    pagination::{HasMore, PageCursor},
    partition::Partitioned,
    persistence::FileStore,
    validation::{self, Similarity},
};

/// A directory session: the GraphQL client, the persisted favorite set, the
/// page cursor, and the active search filter. All state mutation happens on
/// one logical thread in response to discrete events, so there is nothing to
/// lock.
pub struct Phonebook {
    client:     APIClient,
    favorites:  FavoriteSet,
    cursor:     PageCursor,
    search:     Option<String>,
}

impl Phonebook {
    pub fn new(cfg: &Box<dyn Config>) -> Result<Self> {
        logger::setup(cfg.log_level(), cfg.log_file());

        let store = FileStore::open(Path::new(cfg.data_dir()))?;
        let client = APIClient::new(cfg.api_url())?;

        info!("Phonebook session opened against {}", cfg.api_url());
        Ok(Self::with_parts(client, Box::new(store)))
    }

    /// Construction with an injected persistence capability, keeping the
    /// favorites lifecycle testable without a real backing file.
    pub fn with_parts(client: APIClient, store: Box<dyn KvStore>) -> Self {
        Self {
            client,
            favorites:  FavoriteSet::load(store),
            cursor:     PageCursor::new(),
            search:     None,
        }
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn set_search(&mut self, query: &str) {
        self.search = match query.is_empty() {
            true  => None,
            false => Some(query.to_string()),
        };
        self.cursor.reset_to_first();
    }

    pub fn clear_search(&mut self) {
        self.search = None;
        self.cursor.reset_to_first();
    }

    pub fn page(&self) -> u32 {
        self.cursor.page()
    }

    pub fn has_more(&self) -> HasMore {
        self.cursor.has_more()
    }

    pub fn next_page(&mut self) -> bool {
        self.cursor.next()
    }

    pub fn prev_page(&mut self) -> bool {
        self.cursor.prev()
    }

    #[cfg(test)]
    pub(crate) fn cursor_mut(&mut self) -> &mut PageCursor {
        &mut self.cursor
    }

    pub fn is_favorite(&self, id: ContactId) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorite_ids(&self) -> Vec<ContactId> {
        self.favorites.ids()
    }

    /// Toggles favorite membership, flushes the set, and rewinds to the
    /// first page because membership changes shift the remaining query.
    /// Returns whether the contact is a favorite after the toggle.
    pub fn toggle_favorite(&mut self, id: ContactId) -> bool {
        let now_favorite = self.favorites.toggle(id);
        self.cursor.reset_to_first();
        now_favorite
    }

    /// Fetches the favorites view and the current page of the remaining
    /// view. The two fetches run concurrently and may resolve in either
    /// order; the remaining fetch length feeds the has-more signal.
    pub async fn load_page(&mut self) -> Result<Partitioned> {
        let client = &self.client;
        let search = self.search.clone();
        let favorite_ids = self.favorites.ids();
        let limit = self.cursor.limit();
        let offset = self.cursor.offset();

        let favorites_fut = async {
            if favorite_ids.is_empty() {
                return Ok(Vec::new());
            }

            let mut filter = ContactFilter::new();
            filter.with_id_in(favorite_ids.clone());
            if let Some(query) = search.as_ref() {
                filter.with_name_like(query);
            }
            client.fetch_contacts(&filter, None, None).await
        };

        let remaining_fut = async {
            let mut filter = ContactFilter::new();
            filter.with_id_not_in(favorite_ids.clone());
            if let Some(query) = search.as_ref() {
                filter.with_name_like(query);
            }
            client.fetch_contacts(&filter, Some(limit), Some(offset)).await
        };

        let (favorites, remaining) = join!(favorites_fut, remaining_fut);
        let favorites = favorites?;
        let remaining = remaining?;

        self.cursor.record_fetched(remaining.len());
        Ok(Partitioned::from_parts(favorites, remaining))
    }

    /// Validates the draft against the store and submits it. An invalid
    /// draft gets its error message and tag stamped and yields `None`; the
    /// caller keeps the form open. A transport failure propagates untouched
    /// so the form state survives it too.
    pub async fn save(&self, draft: &mut DraftContact) -> Result<Option<Contact>> {
        let similar = match self.client.fetch_similar(draft.first_name(), draft.last_name()).await {
            Ok(matches) => Similarity::from_matches(&matches),
            Err(e) => {
                warn!("Uniqueness lookup failed: {}", e);
                Similarity::Failed
            }
        };

        let verdict = validation::validate(draft.first_name(), draft.last_name(), &similar);
        if let (Some(message), Some(tag)) = (verdict.message(), verdict.tag()) {
            draft.set_error(message, tag);
            return Ok(None);
        }

        draft.clear_error();
        let contact = self.client.create_contact(
            draft.first_name(),
            draft.last_name(),
            draft.numbers()
        ).await?;

        info!("Created contact {} ({})", contact.display_name(), contact.id());
        Ok(Some(contact))
    }

    pub async fn detail(&self, id: ContactId) -> Result<Option<Contact>> {
        self.client.fetch_contact(id).await
    }

    pub async fn rename(&self, id: ContactId, change: &ContactChange) -> Result<Contact> {
        self.client.update_contact(id, change).await
    }

    /// Deletes the contact at the store. Favorite membership is left alone;
    /// partition simply never sees the stale id again.
    pub async fn remove(&self, id: ContactId) -> Result<ContactId> {
        self.client.delete_contact(id).await
    }
}
