//! Read-side projection: filter, search, sort, and paginate tickets.
//!
//! Pure functions of (collection, view parameters); nothing here caches or
//! mutates the store. The projection is recomputed on every call, which is
//! fine at client-memory data volumes.

use crate::model::{Status, Ticket};

/// Default number of tickets revealed per "load more" step.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Status filter: everything, or one status only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    fn matches(self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Newest first by creation time.
    #[default]
    Date,
    /// High before Medium before Low; ties keep their relative order.
    Priority,
}

/// The visible slice plus enough bookkeeping for incremental loading.
#[derive(Debug, Clone)]
pub struct Projection<'a> {
    pub visible: Vec<&'a Ticket>,
    pub filtered_total: usize,
}

impl Projection<'_> {
    /// Whether entries beyond the visible slice remain.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.filtered_total > self.visible.len()
    }
}

/// Compute the display projection for one set of view parameters.
///
/// Filter by status, then by case-insensitive substring search over
/// customer name, title, and email, then sort, then truncate to
/// `display_count`.
#[must_use]
pub fn project<'a>(
    tickets: &'a [Ticket],
    filter: StatusFilter,
    sort: SortMode,
    search: &str,
    display_count: usize,
) -> Projection<'a> {
    let mut out: Vec<&Ticket> = tickets
        .iter()
        .filter(|ticket| filter.matches(ticket.status))
        .filter(|ticket| search.is_empty() || ticket.matches_search(search))
        .collect();

    match sort {
        // Stable sort, so equal ranks keep the collection's own order.
        SortMode::Priority => out.sort_by_key(|ticket| ticket.priority.rank()),
        SortMode::Date => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    let filtered_total = out.len();
    out.truncate(display_count);

    Projection {
        visible: out,
        filtered_total,
    }
}

/// Incremental-loading state: how many entries are currently revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    display_count: usize,
}

impl Pager {
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            page_size,
            display_count: page_size,
        }
    }

    #[must_use]
    pub const fn display_count(&self) -> usize {
        self.display_count
    }

    /// Reveal one more page, but only while entries actually remain.
    /// Returns whether the count grew.
    pub fn load_more(&mut self, filtered_total: usize) -> bool {
        if self.display_count >= filtered_total {
            return false;
        }
        self.display_count += self.page_size;
        true
    }

    /// Back to a single page. Called whenever a view parameter changes.
    pub fn reset(&mut self) {
        self.display_count = self.page_size;
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// View parameters plus pager, with the reset rule applied on every change.
///
/// Setting a parameter to its current value is not a change and leaves the
/// pager alone.
#[derive(Debug, Clone)]
pub struct ListView {
    filter: StatusFilter,
    sort: SortMode,
    search: String,
    pager: Pager,
}

impl ListView {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: StatusFilter::All,
            sort: SortMode::Date,
            search: String::new(),
            pager: Pager::new(page_size),
        }
    }

    #[must_use]
    pub const fn filter(&self) -> StatusFilter {
        self.filter
    }

    #[must_use]
    pub const fn sort(&self) -> SortMode {
        self.sort
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn display_count(&self) -> usize {
        self.pager.display_count()
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.pager.reset();
        }
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        if self.sort != sort {
            self.sort = sort;
            self.pager.reset();
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.search != search {
            self.search = search;
            self.pager.reset();
        }
    }

    /// Reveal one more page if the current projection has more entries.
    /// Returns whether anything changed.
    pub fn load_more(&mut self, tickets: &[Ticket]) -> bool {
        let total = self.project(tickets).filtered_total;
        self.pager.load_more(total)
    }

    #[must_use]
    pub fn project<'a>(&self, tickets: &'a [Ticket]) -> Projection<'a> {
        project(
            tickets,
            self.filter,
            self.sort,
            &self.search,
            self.pager.display_count(),
        )
    }
}

impl Default for ListView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
