//! Client-side paging/sorting/filtering state for the data grid.
//!
//! # Design
//! - State is owned by [`GridController`] and mutated only through its
//!   methods; derived values are recomputed on demand, never cached.
//! - Every state-changing method returns `Some(LoadRequest)` when the grid
//!   needs fresh data. The component layer forwards that request to the host
//!   callback synchronously, so mutation and emission stay atomic.
//! - Out-of-range navigation is silently ignored rather than clamped or
//!   rejected with an error; callers cannot navigate past the data.

use std::collections::HashMap;

/// Column sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// No sorting applied.
    #[default]
    None,
    /// Ascending sort (A-Z, 0-9).
    Ascending,
    /// Descending sort (Z-A, 9-0).
    Descending,
}

impl SortDirection {
    /// Next direction in the None → Ascending → Descending → None cycle.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::None => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::None,
        }
    }
}

/// Canonical description of the data slice the host should fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadRequest {
    /// Number of leading items to skip.
    pub skip: u64,
    /// Number of items to fetch (the page size).
    pub take: u64,
    /// Field to sort by, `None` when unsorted.
    pub sort_by: Option<String>,
    /// Direction for `sort_by`.
    pub sort_direction: SortDirection,
    /// Snapshot of the active per-field filters.
    pub filters: HashMap<String, String>,
}

/// Horizontal alignment for a grid column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Left-aligned content.
    #[default]
    Left,
    /// Center-aligned content.
    Center,
    /// Right-aligned content.
    Right,
}

impl TextAlign {
    /// Utility class applied to header and body cells.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Left => "text-left",
            Self::Center => "text-center",
            Self::Right => "text-right",
        }
    }
}

/// Immutable column configuration supplied declaratively to the grid.
///
/// Columns are plain records handed to the grid as an ordered list; there is
/// no registration protocol and nothing mutates them after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridColumn {
    /// Field name used for sorting and filtering.
    pub field: String,
    /// Header caption.
    pub title: String,
    /// Whether the header toggles sorting.
    pub sortable: bool,
    /// Whether the column renders a filter input.
    pub filterable: bool,
    /// Cell alignment.
    pub align: TextAlign,
}

impl GridColumn {
    /// Create a sortable, filterable, left-aligned column.
    #[must_use]
    pub fn new(field: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            title: title.into(),
            sortable: true,
            filterable: true,
            align: TextAlign::Left,
        }
    }

    /// Disable sorting for this column.
    #[must_use]
    pub fn without_sort(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Disable filtering for this column.
    #[must_use]
    pub fn without_filter(mut self) -> Self {
        self.filterable = false;
        self
    }

    /// Set the cell alignment.
    #[must_use]
    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// Default page size when none is configured.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Advisory page size options for the selector; any positive size is accepted.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [u64; 4] = [10, 25, 50, 100];

/// Owns the grid's paging, sorting, and filtering state.
///
/// The controller never performs I/O: its sole externally observable effect
/// is the [`LoadRequest`] returned from each state-changing operation. The
/// host executes the request and feeds the resulting total back through
/// [`GridController::set_total_count`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridController {
    /// Zero-based page index.
    current_page: u64,
    /// Items per page.
    page_size: u64,
    /// Sorted field; `None` iff `sort_direction` is `None`.
    sort_property: Option<String>,
    /// Direction for `sort_property`.
    sort_direction: SortDirection,
    /// Per-field filters; entries are always non-blank.
    active_filters: HashMap<String, String>,
    /// Total matching items, supplied by the host.
    total_count: u64,
    /// Advisory sizes offered by the page-size selector.
    page_size_options: Vec<u64>,
}

impl Default for GridController {
    fn default() -> Self {
        Self::new()
    }
}

impl GridController {
    /// Create a controller with the default page size and options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sort_property: None,
            sort_direction: SortDirection::None,
            active_filters: HashMap::new(),
            total_count: 0,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
        }
    }

    /// Override the initial page size.
    ///
    /// A non-positive size is kept as-is and degrades `total_pages` to zero,
    /// which freezes navigation instead of crashing.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Override the advisory page size options.
    #[must_use]
    pub fn with_page_size_options(mut self, options: Vec<u64>) -> Self {
        self.page_size_options = options;
        self
    }

    /// Update the total item count after the host loads a page.
    pub const fn set_total_count(&mut self, total_count: u64) {
        self.total_count = total_count;
    }

    /// Current zero-based page index.
    #[must_use]
    pub const fn current_page(&self) -> u64 {
        self.current_page
    }

    /// Current page size.
    #[must_use]
    pub const fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Advisory page size options for the selector.
    #[must_use]
    pub fn page_size_options(&self) -> &[u64] {
        &self.page_size_options
    }

    /// Total item count as last reported by the host.
    #[must_use]
    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Sorted field name, if any.
    #[must_use]
    pub fn sort_property(&self) -> Option<&str> {
        self.sort_property.as_deref()
    }

    /// Direction applied to the sorted field.
    #[must_use]
    pub const fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Direction shown on a specific column header.
    #[must_use]
    pub fn sort_direction_for(&self, field: &str) -> SortDirection {
        if self.sort_property.as_deref() == Some(field) {
            self.sort_direction
        } else {
            SortDirection::None
        }
    }

    /// Active filter value for a field, if set.
    #[must_use]
    pub fn filter_value(&self, field: &str) -> Option<&str> {
        self.active_filters.get(field).map(String::as_str)
    }

    /// Whether any filter is active.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.active_filters.is_empty()
    }

    /// Total number of pages; zero when the page size is not positive.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            0
        } else {
            self.total_count.div_ceil(self.page_size)
        }
    }

    /// One-based page number for display.
    #[must_use]
    pub const fn display_page_number(&self) -> u64 {
        self.current_page + 1
    }

    /// One-based index of the first item on the current page, zero when empty.
    #[must_use]
    pub const fn first_item_index(&self) -> u64 {
        if self.total_count == 0 {
            0
        } else {
            self.current_page * self.page_size + 1
        }
    }

    /// One-based index of the last item on the current page.
    #[must_use]
    pub const fn last_item_index(&self) -> u64 {
        let end = (self.current_page + 1) * self.page_size;
        if end < self.total_count {
            end
        } else {
            self.total_count
        }
    }

    /// Navigate to the first page.
    pub fn first_page(&mut self) -> Option<LoadRequest> {
        if self.current_page == 0 {
            return None;
        }
        self.current_page = 0;
        Some(self.request())
    }

    /// Navigate to the previous page.
    pub fn previous_page(&mut self) -> Option<LoadRequest> {
        if self.current_page == 0 {
            return None;
        }
        self.current_page -= 1;
        Some(self.request())
    }

    /// Navigate to the next page.
    pub fn next_page(&mut self) -> Option<LoadRequest> {
        if self.current_page + 1 >= self.total_pages() {
            return None;
        }
        self.current_page += 1;
        Some(self.request())
    }

    /// Navigate to the last page.
    pub fn last_page(&mut self) -> Option<LoadRequest> {
        let pages = self.total_pages();
        if pages == 0 || self.current_page == pages - 1 {
            return None;
        }
        self.current_page = pages - 1;
        Some(self.request())
    }

    /// Navigate to a specific zero-based page index.
    ///
    /// Out-of-range indexes are ignored without signalling; callers that need
    /// to distinguish "ignored" from "already there" must compare state.
    pub fn go_to_page(&mut self, page: u64) -> Option<LoadRequest> {
        if page >= self.total_pages() || page == self.current_page {
            return None;
        }
        self.current_page = page;
        Some(self.request())
    }

    /// Change the page size and jump back to the first page.
    pub fn change_page_size(&mut self, page_size: u64) -> Option<LoadRequest> {
        if page_size == 0 || page_size == self.page_size {
            return None;
        }
        self.page_size = page_size;
        self.current_page = 0;
        Some(self.request())
    }

    /// Toggle sorting for a column.
    ///
    /// Repeated toggles on the same field cycle None → Ascending →
    /// Descending → None; wrapping to `None` clears the sorted field. A new
    /// field always starts ascending, discarding any prior direction. Every
    /// non-blank toggle resets to the first page and requests a load.
    pub fn toggle_sort(&mut self, property: &str) -> Option<LoadRequest> {
        if property.is_empty() {
            return None;
        }
        if self.sort_property.as_deref() == Some(property) {
            self.sort_direction = self.sort_direction.cycled();
            if self.sort_direction == SortDirection::None {
                self.sort_property = None;
            }
        } else {
            self.sort_property = Some(property.to_string());
            self.sort_direction = SortDirection::Ascending;
        }
        self.current_page = 0;
        Some(self.request())
    }

    /// Apply or clear a per-field filter.
    ///
    /// A blank value removes the field's filter; blank values are never
    /// stored. Any call with a non-blank field requests a load, even when
    /// removing a filter that was not set.
    pub fn apply_filter(&mut self, property: &str, value: &str) -> Option<LoadRequest> {
        if property.is_empty() {
            return None;
        }
        if value.trim().is_empty() {
            self.active_filters.remove(property);
        } else {
            self.active_filters
                .insert(property.to_string(), value.to_string());
        }
        self.current_page = 0;
        Some(self.request())
    }

    /// Remove all filters and jump back to the first page.
    pub fn clear_filters(&mut self) -> Option<LoadRequest> {
        if self.active_filters.is_empty() {
            return None;
        }
        self.active_filters.clear();
        self.current_page = 0;
        Some(self.request())
    }

    /// Request a reload of the current slice without mutating state.
    #[must_use]
    pub fn refresh(&self) -> LoadRequest {
        self.request()
    }

    fn request(&self) -> LoadRequest {
        LoadRequest {
            skip: self.page_size * self.current_page,
            take: self.page_size,
            sort_by: self.sort_property.clone(),
            sort_direction: self.sort_direction,
            filters: self.active_filters.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(total_count: u64) -> GridController {
        let mut grid = GridController::new();
        grid.set_total_count(total_count);
        grid
    }

    #[test]
    fn defaults_match_configuration() {
        let grid = GridController::new();
        assert_eq!(grid.current_page(), 0);
        assert_eq!(grid.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(grid.page_size_options(), DEFAULT_PAGE_SIZE_OPTIONS);
        assert_eq!(grid.sort_direction(), SortDirection::None);
        assert!(grid.sort_property().is_none());
        assert!(!grid.has_active_filters());
    }

    #[test]
    fn go_to_page_changes_state_only_in_range() {
        let mut grid = grid(95);
        assert!(grid.go_to_page(10).is_none());
        assert_eq!(grid.current_page(), 0);
        assert!(grid.go_to_page(0).is_none());

        let request = grid.go_to_page(9).unwrap();
        assert_eq!(grid.current_page(), 9);
        assert_eq!(request.skip, 90);
        assert_eq!(request.take, 10);
    }

    #[test]
    fn navigation_edges_are_no_ops() {
        let mut grid = grid(30);
        assert!(grid.first_page().is_none());
        assert!(grid.previous_page().is_none());

        grid.go_to_page(2).unwrap();
        assert!(grid.next_page().is_none());
        assert!(grid.last_page().is_none());

        let request = grid.previous_page().unwrap();
        assert_eq!(request.skip, 10);
        grid.first_page().unwrap();
        assert_eq!(grid.current_page(), 0);
    }

    #[test]
    fn next_and_last_walk_forward() {
        let mut grid = grid(25);
        assert_eq!(grid.total_pages(), 3);
        assert_eq!(grid.next_page().unwrap().skip, 10);
        assert_eq!(grid.last_page().unwrap().skip, 20);
        assert_eq!(grid.display_page_number(), 3);
    }

    #[test]
    fn empty_grid_freezes_navigation() {
        let mut grid = grid(0);
        assert_eq!(grid.total_pages(), 0);
        assert_eq!(grid.first_item_index(), 0);
        assert_eq!(grid.last_item_index(), 0);
        assert!(grid.next_page().is_none());
        assert!(grid.last_page().is_none());
        assert!(grid.go_to_page(0).is_none());
    }

    #[test]
    fn zero_page_size_is_inert_but_safe() {
        let mut grid = GridController::new().with_page_size(0);
        grid.set_total_count(50);
        assert_eq!(grid.total_pages(), 0);
        assert!(grid.next_page().is_none());
        assert!(grid.last_page().is_none());
        let request = grid.refresh();
        assert_eq!(request.take, 0);
    }

    #[test]
    fn item_indexes_cover_partial_last_page() {
        let mut grid = grid(95);
        assert_eq!(grid.total_pages(), 10);
        grid.go_to_page(9).unwrap();
        assert_eq!(grid.first_item_index(), 91);
        assert_eq!(grid.last_item_index(), 95);
    }

    #[test]
    fn change_page_size_resets_to_first_page() {
        let mut grid = grid(95);
        grid.go_to_page(4).unwrap();
        let request = grid.change_page_size(25).unwrap();
        assert_eq!(grid.current_page(), 0);
        assert_eq!(request.skip, 0);
        assert_eq!(request.take, 25);
    }

    #[test]
    fn change_page_size_ignores_same_and_zero() {
        let mut grid = grid(95);
        grid.go_to_page(3).unwrap();
        assert!(grid.change_page_size(10).is_none());
        assert!(grid.change_page_size(0).is_none());
        assert_eq!(grid.current_page(), 3);
    }

    #[test]
    fn toggle_sort_cycles_back_to_unsorted() {
        let mut grid = grid(95);
        grid.go_to_page(2).unwrap();

        let request = grid.toggle_sort("name").unwrap();
        assert_eq!(request.sort_by.as_deref(), Some("name"));
        assert_eq!(request.sort_direction, SortDirection::Ascending);
        assert_eq!(grid.current_page(), 0);

        let request = grid.toggle_sort("name").unwrap();
        assert_eq!(request.sort_direction, SortDirection::Descending);

        let request = grid.toggle_sort("name").unwrap();
        assert_eq!(request.sort_direction, SortDirection::None);
        assert!(request.sort_by.is_none());
        assert!(grid.sort_property().is_none());
    }

    #[test]
    fn toggle_sort_on_new_column_starts_ascending() {
        let mut grid = grid(95);
        grid.toggle_sort("name").unwrap();
        grid.toggle_sort("name").unwrap();
        assert_eq!(grid.sort_direction_for("name"), SortDirection::Descending);

        let request = grid.toggle_sort("email").unwrap();
        assert_eq!(request.sort_by.as_deref(), Some("email"));
        assert_eq!(request.sort_direction, SortDirection::Ascending);
        assert_eq!(grid.sort_direction_for("name"), SortDirection::None);
    }

    #[test]
    fn toggle_sort_ignores_blank_property() {
        let mut grid = grid(95);
        grid.go_to_page(2).unwrap();
        assert!(grid.toggle_sort("").is_none());
        assert_eq!(grid.current_page(), 2);
    }

    #[test]
    fn apply_filter_stores_and_blank_removes() {
        let mut grid = grid(95);
        grid.apply_filter("name", "bob").unwrap();
        assert_eq!(grid.filter_value("name"), Some("bob"));
        assert!(grid.has_active_filters());

        let request = grid.apply_filter("name", "").unwrap();
        assert!(grid.filter_value("name").is_none());
        assert!(!grid.has_active_filters());
        assert!(request.filters.is_empty());
    }

    #[test]
    fn apply_filter_emits_even_when_removal_is_a_no_op() {
        // Removing a filter that was never set still reloads; hosts rely on
        // every filter gesture producing a request.
        let mut grid = grid(95);
        grid.go_to_page(3).unwrap();
        let request = grid.apply_filter("name", "   ");
        assert!(request.is_some());
        assert_eq!(grid.current_page(), 0);
        assert!(grid.apply_filter("", "bob").is_none());
    }

    #[test]
    fn apply_filter_resets_page() {
        let mut grid = grid(95);
        grid.go_to_page(5).unwrap();
        let request = grid.apply_filter("email", "@example.com").unwrap();
        assert_eq!(grid.current_page(), 0);
        assert_eq!(request.skip, 0);
        assert_eq!(
            request.filters.get("email").map(String::as_str),
            Some("@example.com")
        );
    }

    #[test]
    fn clear_filters_only_fires_when_filters_exist() {
        let mut grid = grid(95);
        assert!(grid.clear_filters().is_none());

        grid.apply_filter("name", "bob").unwrap();
        grid.apply_filter("email", "ada").unwrap();
        grid.go_to_page(2).unwrap();
        let request = grid.clear_filters().unwrap();
        assert!(request.filters.is_empty());
        assert_eq!(grid.current_page(), 0);
        assert!(!grid.has_active_filters());
    }

    #[test]
    fn refresh_replays_the_last_emission() {
        let mut grid = grid(95);
        grid.toggle_sort("name").unwrap();
        grid.apply_filter("email", "ada").unwrap();
        let last = grid.go_to_page(2).unwrap();
        assert_eq!(grid.refresh(), last);
    }

    #[test]
    fn column_builder_sets_flags() {
        let column = GridColumn::new("email", "Email")
            .without_filter()
            .aligned(TextAlign::Right);
        assert!(column.sortable);
        assert!(!column.filterable);
        assert_eq!(column.align.class(), "text-right");

        let plain = GridColumn::new("actions", "").without_sort();
        assert!(!plain.sortable);
        assert!(plain.filterable);
    }
}
