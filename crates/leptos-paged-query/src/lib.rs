//! Leptos Paged Query
//!
//! Debounced search + pagination controller shared by the list views.
//! Coalesces rapid query edits into one delayed fetch, tags every fetch
//! with a generation so a slow stale response can never overwrite a newer
//! one, and gives keyboard focus back to the search input after the list
//! re-renders.

pub mod focus;
mod machine;

pub use machine::{ListQuery, Phase, QueryMachine, Step, FILTER_ALL};

use std::future::Future;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;

/// Debounce window between the last query edit and the fetch.
pub const DEBOUNCE_MS: u32 = 500;

/// Pagination metadata echoed by the backend with every list response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
}

/// One page of a remote collection, replaced wholesale on each fetch.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            meta: PageMeta::default(),
        }
    }
}

/// Failure produced by a page fetcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// The session is gone. The fetcher already routed back to the login
    /// screen, so the controller surfaces nothing inline.
    Unauthorized,
    /// Shown inline next to the list.
    Message(String),
}

/// Signal bundle for one list view, returned by [`use_paged_query`].
///
/// `Copy`, so it can move freely into event handlers the way plain signals
/// do. A failed fetch leaves `items` and `meta` untouched; only `error`
/// changes.
pub struct PagedQuery<T: Send + Sync + 'static> {
    pub items: ReadSignal<Vec<T>>,
    pub meta: ReadSignal<Option<PageMeta>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    /// Mirror of the machine's query for view bindings.
    pub query: ReadSignal<ListQuery>,
    /// Attach to the search `<input>` so focus survives re-renders.
    pub search_input: NodeRef<Input>,
    set_query: WriteSignal<ListQuery>,
    machine: StoredValue<QueryMachine>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    issue: StoredValue<Rc<dyn Fn(u64)>, LocalStorage>,
}

impl<T: Send + Sync + 'static> Clone for PagedQuery<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PagedQuery<T> {}

/// Wires a [`QueryMachine`] to signals, the debounce timer, and the focus
/// helpers. No fetch fires at mount; the owning view issues the first load
/// with [`PagedQuery::refresh`]. `fetch` runs once per issued generation
/// and its result is dropped whenever a newer generation has been issued
/// since (the request itself is never aborted).
pub fn use_paged_query<T, F, Fut>(fetch: F) -> PagedQuery<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(ListQuery) -> Fut + 'static,
    Fut: Future<Output = Result<Paginated<T>, FetchError>> + 'static,
{
    let (items, set_items) = signal(Vec::new());
    let (meta, set_meta) = signal(None::<PageMeta>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (query, set_query) = signal(ListQuery::default());
    let machine = StoredValue::new(QueryMachine::new());
    let search_input = NodeRef::new();

    let fetch = Rc::new(fetch);
    let issue: Rc<dyn Fn(u64)> = Rc::new(move |generation| {
        let current_query = machine.with_value(|m| m.query().clone());
        let had_focus = focus::input_has_focus(&search_input);
        set_loading.set(true);
        let fetch = Rc::clone(&fetch);
        spawn_local(async move {
            let result = fetch(current_query).await;

            // A newer generation went out while this one was in flight:
            // drop the result, whatever it was.
            let still_current = machine
                .try_update_value(|m| m.resolve(generation))
                .unwrap_or(false);
            if !still_current {
                return;
            }

            match result {
                Ok(page) => {
                    set_items.set(page.data);
                    set_meta.set(Some(page.meta));
                    set_error.set(None);
                }
                Err(FetchError::Unauthorized) => {}
                Err(FetchError::Message(message)) => set_error.set(Some(message)),
            }
            set_loading.set(false);

            if had_focus {
                focus::restore_after_render(search_input);
            }
        });
    });

    PagedQuery {
        items,
        meta,
        loading,
        error,
        query,
        search_input,
        set_query,
        machine,
        timer: StoredValue::new_local(None),
        issue: StoredValue::new_local(issue),
    }
}

impl<T: Clone + Send + Sync + 'static> PagedQuery<T> {
    /// Free-text edit; the fetch fires once the debounce window closes.
    pub fn set_search(&self, text: &str) {
        self.step(|machine| Some(machine.edit_search(text)));
    }

    /// Exact-match filter edit; `"all"` or an empty value clears the key.
    pub fn set_filter(&self, key: &str, value: &str) {
        self.step(|machine| Some(machine.edit_filter(key, value)));
    }

    /// Pagination click: fetches immediately, no debounce.
    pub fn set_page(&self, page: u32) {
        self.step(|machine| Some(machine.set_page(page)));
    }

    /// Re-issues the current query immediately. Used for the first page
    /// load and to reload after a mutation.
    pub fn refresh(&self) {
        self.step(|machine| Some(machine.refresh()));
    }

    /// Current search text, for the input binding.
    pub fn search(&self) -> String {
        self.query.with(|query| query.search.clone())
    }

    /// Current value of `key`, or the `"all"` sentinel when unset.
    pub fn filter(&self, key: &str) -> String {
        self.query.with(|query| {
            query
                .filters
                .get(key)
                .cloned()
                .unwrap_or_else(|| FILTER_ALL.to_string())
        })
    }

    fn step(&self, event: impl FnOnce(&mut QueryMachine) -> Option<Step>) {
        let step = self.machine.try_update_value(event).flatten();
        self.set_query
            .set(self.machine.with_value(|machine| machine.query().clone()));
        match step {
            Some(Step::Debounce) => self.restart_timer(),
            Some(Step::Fetch(generation)) => {
                self.clear_timer();
                self.issue.with_value(|issue| issue(generation));
            }
            None => {}
        }
    }

    fn restart_timer(&self) {
        self.clear_timer();
        let this = *self;
        let handle = Timeout::new(DEBOUNCE_MS, move || {
            if let Some(Step::Fetch(generation)) = this
                .machine
                .try_update_value(|machine| machine.timer_elapsed())
                .flatten()
            {
                this.issue.with_value(|issue| issue(generation));
            }
        });
        self.timer.set_value(Some(handle));
    }

    fn clear_timer(&self) {
        self.timer.update_value(|timer| {
            if let Some(handle) = timer.take() {
                handle.cancel();
            }
        });
    }
}
