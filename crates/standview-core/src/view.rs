//! View assemblies recomputed from the snapshot on every input change.
//!
//! Nothing here caches a previous result. The only state carried between
//! events is what the user typed (query, page); everything else is derived
//! again from the snapshot each time.

use crate::detail::{self, Detail};
use crate::model::ProjectRecord;
use crate::page::{self, Page, PageNav};
use crate::search::SearchSpec;
use crate::stats::{self, BucketShare, StatusCounts};
use crate::store::RecordStore;
use serde::Serialize;

/// Query text and requested page of the listing view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    query: String,
    page: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

/// Derived listing: the current page, its navigation and the match count.
#[derive(Debug, Clone, Serialize)]
pub struct ListingView<'a> {
    pub query: String,
    pub filtered_total: usize,
    pub page: Page<&'a ProjectRecord>,
    pub nav: PageNav,
}

impl ListingState {
    #[must_use]
    pub fn new(query: impl Into<String>, page: usize) -> Self {
        Self {
            query: query.into(),
            page,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Update the query. A changed query changes the filtered set, so the
    /// page goes back to 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.page = 1;
        }
    }

    pub const fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Filter, clamp the page into range and slice it.
    ///
    /// The stored page is also clamped so the next event starts from a
    /// valid page.
    pub fn view<'a>(
        &mut self,
        records: &'a [ProjectRecord],
        spec: &SearchSpec,
        page_size: usize,
    ) -> ListingView<'a> {
        let filtered = spec.apply(records, &self.query);
        let total = page::total_pages(filtered.len(), page_size);
        self.page = page::clamp_page(self.page, total);

        let page = page::paginate(&filtered, page_size, self.page);
        let nav = page.nav();
        ListingView {
            query: self.query.clone(),
            filtered_total: filtered.len(),
            page,
            nav,
        }
    }
}

impl ListingView<'_> {
    /// "Showing X of Y entries".
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} entries",
            self.page.items.len(),
            self.filtered_total
        )
    }
}

/// Dashboard cards and status overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub counts: StatusCounts,
    pub ongoing: usize,
    pub unknown: usize,
    pub breakdown: Vec<BucketShare>,
}

impl Dashboard {
    #[must_use]
    pub fn build(records: &[ProjectRecord]) -> Self {
        let counts = stats::aggregate(records);
        Self {
            counts,
            ongoing: counts.ongoing(),
            unknown: counts.unknown(),
            breakdown: counts.breakdown(),
        }
    }
}

/// Quick-search box on the detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickSearch {
    query: String,
}

impl QuickSearch {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Suggestions for the current query; blank shows nothing.
    #[must_use]
    pub fn suggestions<'a>(
        &self,
        records: &'a [ProjectRecord],
        spec: &SearchSpec,
    ) -> Vec<&'a ProjectRecord> {
        spec.apply(records, &self.query)
    }

    /// Pick a suggestion: the box clears and the chosen id is the next route.
    pub fn select(&mut self, record: &ProjectRecord) -> String {
        self.query.clear();
        record.project_id.clone()
    }
}

/// Detail page: the resolved record and the dropdown under the search box.
#[derive(Debug, Clone)]
pub struct DetailView<'a> {
    pub detail: Detail<'a>,
    pub suggestions: Vec<&'a ProjectRecord>,
}

impl<'a> DetailView<'a> {
    #[must_use]
    pub fn build(
        store: &'a RecordStore,
        id: &str,
        search: &QuickSearch,
        spec: &SearchSpec,
    ) -> Self {
        Self {
            detail: detail::resolve_detail(store, id),
            suggestions: search.suggestions(store.all(), spec),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Dashboard, DetailView, ListingState, QuickSearch};
    use crate::detail::Detail;
    use crate::model::ProjectRecord;
    use crate::search::SearchSpec;
    use crate::store::RecordStore;

    fn records(n: usize) -> Vec<ProjectRecord> {
        (1..=n)
            .map(|i| {
                let status = if i % 2 == 0 { "Pending" } else { "Admin Approved" };
                ProjectRecord::new(format!("p-{i}"), format!("Stand {i:02}"), status)
            })
            .collect()
    }

    #[test]
    fn new_query_resets_page() {
        let mut state = ListingState::default();
        state.set_page(3);
        state.set_query("stand");
        assert_eq!(state.page(), 1);

        state.set_page(2);
        state.set_query("stand");
        assert_eq!(state.page(), 2, "unchanged query keeps the page");
    }

    #[test]
    fn view_clamps_stranded_page() {
        let data = records(20);
        let mut state = ListingState::new("", 3);
        let view = state.view(&data, &SearchSpec::listing(), 9);
        assert_eq!(view.page.items.len(), 2);

        // narrowing the filter without going through set_query
        let mut stranded = ListingState::new("pending", 3);
        let view = stranded.view(&data, &SearchSpec::listing(), 9);
        assert_eq!(view.filtered_total, 10);
        assert_eq!(view.page.page, 2);
        assert_eq!(stranded.page(), 2);
        assert_eq!(view.page.items.len(), 1);
    }

    #[test]
    fn empty_snapshot_gives_empty_listing() {
        let mut state = ListingState::default();
        let view = state.view(&[], &SearchSpec::listing(), 9);
        assert_eq!(view.filtered_total, 0);
        assert_eq!(view.nav.total_pages, 0);
        assert!(view.page.items.is_empty());
        assert!(!view.nav.show_controls());
        assert_eq!(view.summary(), "Showing 0 of 0 entries");
    }

    #[test]
    fn summary_counts_page_and_matches() {
        let data = records(12);
        let mut state = ListingState::default();
        let view = state.view(&data, &SearchSpec::listing(), 9);
        assert_eq!(view.summary(), "Showing 9 of 12 entries");
        assert!(view.nav.show_controls());
    }

    #[test]
    fn dashboard_cards() {
        let dash = Dashboard::build(&records(5));
        assert_eq!(dash.counts.total, 5);
        assert_eq!(dash.ongoing, 5);
        assert_eq!(dash.unknown, 0);
        assert_eq!(dash.breakdown.len(), 4);
    }

    #[test]
    fn quick_search_select_clears_query() {
        let data = records(3);
        let spec = SearchSpec::quick_search();
        let mut search = QuickSearch::default();
        assert!(search.suggestions(&data, &spec).is_empty());

        search.set_query("stand 02");
        let hits = search.suggestions(&data, &spec);
        assert_eq!(hits.len(), 1);
        let next = search.select(hits[0]);
        assert_eq!(next, "p-2");
        assert_eq!(search.query(), "");
    }

    #[test]
    fn detail_view_combines_record_and_suggestions() {
        let store = RecordStore::from_records(records(3));
        let search = QuickSearch::new("stand");
        let view = DetailView::build(&store, "p-3", &search, &SearchSpec::quick_search());
        assert!(matches!(view.detail, Detail::Found(r) if r.project_id == "p-3"));
        assert_eq!(view.suggestions.len(), 3);
    }
}
