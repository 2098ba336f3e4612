//! Flat List Table Query
//!
//! Client-side filter, sort and pagination over the fetched flat list.

use crate::models::FlatCategory;

pub const PAGE_SIZES: [usize; 3] = [10, 25, 50];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Active, StatusFilter::Inactive];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "Active" => StatusFilter::Active,
            "Inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }

    fn matches(&self, item: &FlatCategory) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => item.is_active,
            StatusFilter::Inactive => !item.is_active,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Id,
    Name,
}

/// Current table controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub search: String,
    pub status: StatusFilter,
    pub sort: SortKey,
    pub descending: bool,
    /// Zero-based
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            sort: SortKey::Id,
            descending: false,
            page: 0,
            page_size: PAGE_SIZES[0],
        }
    }
}

/// One rendered page of the table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TablePage {
    pub rows: Vec<FlatCategory>,
    /// Rows surviving the filters, across all pages
    pub filtered: usize,
    /// Page actually shown after clamping
    pub page: usize,
    pub page_count: usize,
}

impl TableQuery {
    /// New search text restarts at the first page
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 0;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.page = 0;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    /// Clicking the active column flips direction, another column
    /// sorts ascending by it.
    pub fn sort_by(&mut self, key: SortKey) {
        if self.sort == key {
            self.descending = !self.descending;
        } else {
            self.sort = key;
            self.descending = false;
        }
    }

    pub fn apply(&self, items: &[FlatCategory]) -> TablePage {
        let needle = self.search.trim().to_lowercase();
        let mut rows: Vec<&FlatCategory> = items
            .iter()
            .filter(|item| self.status.matches(item))
            .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
            .collect();

        match self.sort {
            SortKey::Id => rows.sort_by_key(|item| item.id),
            SortKey::Name => rows.sort_by(|a, b| {
                a.name
                    .to_lowercase()
                    .cmp(&b.name.to_lowercase())
                    .then(a.id.cmp(&b.id))
            }),
        }
        if self.descending {
            rows.reverse();
        }

        let page_size = self.page_size.max(1);
        let filtered = rows.len();
        let page_count = filtered.div_ceil(page_size).max(1);
        let page = self.page.min(page_count - 1);

        TablePage {
            rows: rows
                .into_iter()
                .skip(page * page_size)
                .take(page_size)
                .cloned()
                .collect(),
            filtered,
            page,
            page_count,
        }
    }
}
