//! Confirm Dialog
//!
//! Blocking confirmation overlay for destructive actions. Driven by an
//! `Option<String>` signal carrying the description; `None` keeps it
//! closed.

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="dialog-overlay">
                <div class="dialog">
                    <h2 class="dialog-title">{title.clone()}</h2>
                    <p class="dialog-message">{move || message.get().unwrap_or_default()}</p>
                    <div class="dialog-actions">
                        <button class="cancel-btn" on:click=move |_| on_cancel.run(())>
                            "Annuler"
                        </button>
                        <button class="danger-btn" on:click=move |_| on_confirm.run(())>
                            "Supprimer"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
