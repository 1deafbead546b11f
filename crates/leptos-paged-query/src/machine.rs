//! Query State Machine
//!
//! Pure sequencing logic for the debounced list fetch: which query to send,
//! when to send it, and which responses are still current. Kept free of DOM
//! and timer types so the ordering rules are unit-testable.

use std::collections::BTreeMap;

/// Filter value meaning "not filtered"; never sent to the backend.
pub const FILTER_ALL: &str = "all";

/// One list view's query: free text, exact-match filters, 1-based page.
///
/// A new edit supersedes the previous query wholesale; there is no partial
/// merge once the user starts typing again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            page: 1,
        }
    }
}

impl ListQuery {
    /// Offset of the first row of the current page.
    pub fn skip(&self, per_page: u32) -> u32 {
        self.page.saturating_sub(1) * per_page
    }
}

/// Where the controller currently is between edits and fetches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PendingDebounce,
    Fetching,
}

/// What the caller must do after feeding an event to the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// (Re)start the debounce timer.
    Debounce,
    /// Issue `list(query)` now, tagged with this generation.
    Fetch(u64),
}

/// Sequencer for one list view.
///
/// Every issued fetch gets a fresh generation number; only the response
/// matching the latest generation may reach the display. A slow early
/// request is allowed to complete, but [`QueryMachine::resolve`] reports it
/// stale and the caller drops the result.
#[derive(Debug)]
pub struct QueryMachine {
    query: ListQuery,
    generation: u64,
    phase: Phase,
}

impl QueryMachine {
    /// Starts idle. The first page is loaded out of band by the owning
    /// view, not by the debounce path.
    pub fn new() -> Self {
        Self {
            query: ListQuery::default(),
            generation: 0,
            phase: Phase::Idle,
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Free-text edit. Returns to page 1 and asks for a fresh debounce
    /// window, whatever the machine was doing before.
    pub fn edit_search(&mut self, text: &str) -> Step {
        self.query.search = text.to_string();
        self.query.page = 1;
        self.phase = Phase::PendingDebounce;
        Step::Debounce
    }

    /// Exact-match filter edit. The `"all"` sentinel (or an empty value)
    /// clears the filter instead of sending an empty string.
    pub fn edit_filter(&mut self, key: &str, value: &str) -> Step {
        if value == FILTER_ALL || value.is_empty() {
            self.query.filters.remove(key);
        } else {
            self.query.filters.insert(key.to_string(), value.to_string());
        }
        self.query.page = 1;
        self.phase = Phase::PendingDebounce;
        Step::Debounce
    }

    /// Pagination click: no debounce, fetch right away.
    pub fn set_page(&mut self, page: u32) -> Step {
        self.query.page = page.max(1);
        self.begin_fetch()
    }

    /// Re-issues the current query immediately (initial load, refresh after
    /// a delete).
    pub fn refresh(&mut self) -> Step {
        self.begin_fetch()
    }

    /// The debounce timer fired. `None` when a cancelled timer lands after
    /// a pagination click already started the fetch.
    pub fn timer_elapsed(&mut self) -> Option<Step> {
        if self.phase != Phase::PendingDebounce {
            return None;
        }
        Some(self.begin_fetch())
    }

    /// Whether a settled fetch for `generation` is still current. Stale
    /// generations are discarded without touching the phase: a newer fetch
    /// is in flight and will settle on its own.
    pub fn resolve(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        if self.phase == Phase::Fetching {
            self.phase = Phase::Idle;
        }
        true
    }

    fn begin_fetch(&mut self) -> Step {
        self.generation += 1;
        self.phase = Phase::Fetching;
        Step::Fetch(self.generation)
    }
}

impl Default for QueryMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_without_fetching() {
        let machine = QueryMachine::new();
        assert_eq!(machine.phase(), Phase::Idle);
        assert_eq!(machine.query().page, 1);
    }

    #[test]
    fn rapid_edits_coalesce_into_one_fetch_with_the_final_query() {
        let mut machine = QueryMachine::new();
        assert_eq!(machine.edit_search("D"), Step::Debounce);
        assert_eq!(machine.edit_search("Do"), Step::Debounce);
        assert_eq!(machine.edit_search("Doe"), Step::Debounce);
        assert_eq!(machine.phase(), Phase::PendingDebounce);

        assert_eq!(machine.timer_elapsed(), Some(Step::Fetch(1)));
        assert_eq!(machine.query().search, "Doe");
        assert_eq!(machine.query().page, 1);
        assert_eq!(machine.phase(), Phase::Fetching);
    }

    #[test]
    fn stale_generation_is_discarded_after_newer_one_settles() {
        let mut machine = QueryMachine::new();
        machine.edit_search("Doe");
        let Some(Step::Fetch(first)) = machine.timer_elapsed() else {
            panic!("timer should fetch");
        };
        let Step::Fetch(second) = machine.set_page(2) else {
            panic!("pagination should fetch");
        };

        assert!(machine.resolve(second));
        assert_eq!(machine.phase(), Phase::Idle);
        // The slow first request settles afterwards: dropped.
        assert!(!machine.resolve(first));
        assert_eq!(machine.phase(), Phase::Idle);
    }

    #[test]
    fn slow_first_request_cannot_win_by_arrival_order() {
        let mut machine = QueryMachine::new();
        let Step::Fetch(first) = machine.set_page(2) else {
            panic!()
        };
        let Step::Fetch(second) = machine.set_page(3) else {
            panic!()
        };

        // First settles while the second is still in flight.
        assert!(!machine.resolve(first));
        assert_eq!(machine.phase(), Phase::Fetching);
        assert!(machine.resolve(second));
        assert_eq!(machine.phase(), Phase::Idle);
    }

    #[test]
    fn pagination_bypasses_the_debounce_window() {
        let mut machine = QueryMachine::new();
        assert_eq!(machine.set_page(2), Step::Fetch(1));
        assert_eq!(machine.phase(), Phase::Fetching);
        assert_eq!(machine.query().page, 2);
    }

    #[test]
    fn search_edit_returns_to_the_first_page() {
        let mut machine = QueryMachine::new();
        let Step::Fetch(generation) = machine.set_page(3) else {
            panic!()
        };
        assert!(machine.resolve(generation));

        machine.edit_search("Doe");
        assert_eq!(machine.query().page, 1);
    }

    #[test]
    fn all_sentinel_clears_the_filter() {
        let mut machine = QueryMachine::new();
        machine.edit_filter("status", "active");
        assert_eq!(
            machine.query().filters.get("status").map(String::as_str),
            Some("active")
        );

        machine.edit_filter("status", FILTER_ALL);
        assert!(machine.query().filters.is_empty());

        machine.edit_filter("status", "");
        assert!(machine.query().filters.is_empty());
    }

    #[test]
    fn cancelled_timer_landing_late_is_ignored() {
        let mut machine = QueryMachine::new();
        machine.edit_search("Do");
        // Pagination fires first; the stale timer callback then lands.
        let Step::Fetch(_) = machine.set_page(2) else {
            panic!()
        };
        assert_eq!(machine.timer_elapsed(), None);
    }

    #[test]
    fn edit_while_fetching_debounces_again_without_losing_the_response() {
        let mut machine = QueryMachine::new();
        machine.edit_search("Do");
        let Some(Step::Fetch(first)) = machine.timer_elapsed() else {
            panic!()
        };

        // User keeps typing while the request is in flight.
        assert_eq!(machine.edit_search("Doe"), Step::Debounce);
        assert_eq!(machine.phase(), Phase::PendingDebounce);

        // The in-flight response is still the newest settled query.
        assert!(machine.resolve(first));
        assert_eq!(machine.phase(), Phase::PendingDebounce);

        assert_eq!(machine.timer_elapsed(), Some(Step::Fetch(2)));
        assert_eq!(machine.query().search, "Doe");
    }

    #[test]
    fn refresh_keeps_the_current_query() {
        let mut machine = QueryMachine::new();
        machine.edit_search("Doe");
        machine.edit_filter("status", "active");
        let Some(Step::Fetch(generation)) = machine.timer_elapsed() else {
            panic!()
        };
        assert!(machine.resolve(generation));
        let Step::Fetch(generation) = machine.set_page(2) else {
            panic!()
        };
        assert!(machine.resolve(generation));

        assert_eq!(machine.refresh(), Step::Fetch(3));
        assert_eq!(machine.query().search, "Doe");
        assert_eq!(machine.query().page, 2);
        assert_eq!(
            machine.query().filters.get("status").map(String::as_str),
            Some("active")
        );
    }

    #[test]
    fn skip_is_the_zero_based_page_offset() {
        let mut query = ListQuery::default();
        assert_eq!(query.skip(20), 0);
        query.page = 3;
        assert_eq!(query.skip(20), 40);
    }
}
