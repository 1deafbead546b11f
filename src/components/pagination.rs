//! Pagination Component
//!
//! Numbered page buttons; hidden when everything fits on a single page.

use leptos::prelude::*;
use leptos_paged_query::PageMeta;

#[component]
pub fn Pagination(
    meta: ReadSignal<Option<PageMeta>>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        {move || meta.get().filter(|meta| meta.total_pages > 1).map(|meta| view! {
            <div class="pagination">
                {(1..=meta.total_pages).map(|page| {
                    let current = page == meta.page;
                    view! {
                        <button
                            class=if current { "page-btn current" } else { "page-btn" }
                            on:click=move |_| on_page.run(page)
                        >
                            {page}
                        </button>
                    }
                }).collect_view()}
            </div>
        })}
    }
}
