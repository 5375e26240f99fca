/// Fixed window size for the remaining-contacts query.
pub const PAGE_SIZE: usize = 10;

/// What the length of the most recent fetch says about further pages. A full
/// page only suggests more may follow; when the collection size is an exact
/// multiple of `PAGE_SIZE` the signal over-estimates by one empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasMore {
    Likely,
    Exhausted,
    Unknown,
}

/// Tracks the page index for the paginated "remaining" subset and derives
/// request offsets and button state from it. Not persisted.
#[derive(Debug)]
pub struct PageCursor {
    page:       u32,
    has_more:   HasMore,
}

impl PageCursor {
    pub fn new() -> Self {
        Self {
            page:       1,
            has_more:   HasMore::Unknown,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * PAGE_SIZE
    }

    pub fn limit(&self) -> usize {
        PAGE_SIZE
    }

    pub fn has_more(&self) -> HasMore {
        self.has_more
    }

    /// Feed the length of the fetch that just resolved for the current page.
    pub fn record_fetched(&mut self, count: usize) {
        self.has_more = match count >= PAGE_SIZE {
            true  => HasMore::Likely,
            false => HasMore::Exhausted,
        };
    }

    /// Advances only while the last fetch filled the page. No-op otherwise.
    pub fn next(&mut self) -> bool {
        if self.has_more != HasMore::Likely {
            return false;
        }
        self.page += 1;
        self.has_more = HasMore::Unknown;
        true
    }

    /// No-op at the first page.
    pub fn prev(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        self.has_more = HasMore::Unknown;
        true
    }

    /// Invoked whenever the search filter or the favorite set changes, since
    /// either shifts which contacts fall into the paginated query.
    pub fn reset_to_first(&mut self) {
        self.page = 1;
        self.has_more = HasMore::Unknown;
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}
