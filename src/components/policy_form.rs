//! Policy Form
//!
//! Shared create/edit form. Policy number and client are fixed at
//! creation; status only becomes editable afterwards. Emits a validated
//! [`PolicyDraft`] and leaves payload shaping to the owning page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{Client, Policy};
use crate::validate::{validate_policy, FieldErrors, PolicyDraft};

/// Statuses a policy can be moved to once it exists.
const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("active", "Active"),
    ("pending", "Pending"),
    ("cancelled", "Cancelled"),
    ("expired", "Expired"),
];

#[component]
pub fn PolicyForm(
    initial: Option<Policy>,
    saving: ReadSignal<bool>,
    #[prop(into)] on_submit: Callback<PolicyDraft>,
) -> impl IntoView {
    let editing = initial.is_some();

    let (policy_number, set_policy_number) =
        signal(initial.as_ref().map(|p| p.policy_number.clone()).unwrap_or_default());
    let (client_id, set_client_id) =
        signal(initial.as_ref().map(|p| p.client_id).unwrap_or(0));
    let (kind, set_kind) =
        signal(initial.as_ref().map(|p| p.kind.clone()).unwrap_or_default());
    let (coverage, set_coverage) =
        signal(initial.as_ref().map(|p| p.coverage.clone()).unwrap_or_default());
    let (premium, set_premium) =
        signal(initial.as_ref().map(|p| p.premium.to_string()).unwrap_or_default());
    let (start_date, set_start_date) =
        signal(initial.as_ref().map(|p| p.start_date.clone()).unwrap_or_default());
    let (end_date, set_end_date) =
        signal(initial.as_ref().map(|p| p.end_date.clone()).unwrap_or_default());
    let (status, set_status) = signal(
        initial
            .as_ref()
            .map(|p| p.status.clone())
            .unwrap_or_else(|| "pending".to_string()),
    );

    let (clients, set_clients) = signal(Vec::<Client>::new());
    let errors = RwSignal::new(FieldErrors::default());

    // Client picker options, only needed when creating.
    Effect::new(move |_| {
        if editing {
            return;
        }
        spawn_local(async move {
            match api::list_client_options().await {
                Ok(loaded) => set_clients.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[POLICY-FORM] Failed to load clients: {err}").into(),
                    );
                }
            }
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = PolicyDraft {
            policy_number: policy_number.get(),
            client_id: client_id.get(),
            kind: kind.get(),
            coverage: coverage.get(),
            premium: premium.get(),
            start_date: start_date.get(),
            end_date: end_date.get(),
            status: status.get(),
            editing,
        };
        let found = validate_policy(&draft);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::default());
        on_submit.run(draft);
    };

    let field_error = move |field: &'static str| {
        errors
            .with(|errors| errors.get(field))
            .map(|message| view! { <p class="field-error">{message}</p> })
    };

    view! {
        <form class="resource-form" on:submit=submit>
            <h2>"Informations de la police"</h2>

            <Show when=move || !editing>
                <div class="form-field">
                    <label>"Numéro de police *"</label>
                    <input
                        id="policy_number"
                        type="text"
                        placeholder="POL-2025-001"
                        prop:value=move || policy_number.get()
                        on:input=move |ev| {
                            set_policy_number.set(event_target_value(&ev));
                            errors.update(|errors| errors.clear("policy_number"));
                        }
                    />
                    {move || field_error("policy_number")}
                </div>

                <div class="form-field">
                    <label>"Client *"</label>
                    <select
                        id="client_id"
                        on:change=move |ev| {
                            if let Ok(id) = event_target_value(&ev).parse::<u32>() {
                                set_client_id.set(id);
                            }
                            errors.update(|errors| errors.clear("client_id"));
                        }
                    >
                        <option value="0" prop:selected=move || client_id.get() == 0>
                            "Sélectionner un client"
                        </option>
                        <For
                            each=move || clients.get()
                            key=|client| client.id
                            children=move |client| {
                                let id = client.id;
                                let label = format!("{} ({})", client.full_name(), client.email);
                                view! {
                                    <option
                                        value=id.to_string()
                                        prop:selected=move || client_id.get() == id
                                    >
                                        {label}
                                    </option>
                                }
                            }
                        />
                    </select>
                    {move || field_error("client_id")}
                </div>
            </Show>

            <div class="form-field">
                <label>"Type *"</label>
                <input
                    id="type"
                    type="text"
                    placeholder="Auto Insurance, Health Insurance, etc."
                    prop:value=move || kind.get()
                    on:input=move |ev| {
                        set_kind.set(event_target_value(&ev));
                        errors.update(|errors| errors.clear("type"));
                    }
                />
                {move || field_error("type")}
            </div>

            <div class="form-field">
                <label>"Couverture *"</label>
                <textarea
                    id="coverage"
                    placeholder="Description de la couverture..."
                    rows=4
                    prop:value=move || coverage.get()
                    on:input=move |ev| {
                        set_coverage.set(event_target_value(&ev));
                        errors.update(|errors| errors.clear("coverage"));
                    }
                ></textarea>
                {move || field_error("coverage")}
            </div>

            <div class="form-field">
                <label>"Prime (USD) *"</label>
                <input
                    id="premium"
                    type="number"
                    step="0.01"
                    min="0"
                    placeholder="150000.00"
                    prop:value=move || premium.get()
                    on:input=move |ev| {
                        set_premium.set(event_target_value(&ev));
                        errors.update(|errors| errors.clear("premium"));
                    }
                />
                {move || field_error("premium")}
            </div>

            <div class="form-row">
                <div class="form-field">
                    <label>"Date de début *"</label>
                    <input
                        id="start_date"
                        type="date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| {
                            set_start_date.set(event_target_value(&ev));
                            errors.update(|errors| errors.clear("start_date"));
                        }
                    />
                    {move || field_error("start_date")}
                </div>

                <div class="form-field">
                    <label>"Date de fin *"</label>
                    <input
                        id="end_date"
                        type="date"
                        prop:value=move || end_date.get()
                        on:input=move |ev| {
                            set_end_date.set(event_target_value(&ev));
                            errors.update(|errors| errors.clear("end_date"));
                        }
                    />
                    {move || field_error("end_date")}
                </div>
            </div>

            <Show when=move || editing>
                <div class="form-field">
                    <label>"Statut *"</label>
                    <select
                        id="status"
                        prop:value=move || status.get()
                        on:change=move |ev| set_status.set(event_target_value(&ev))
                    >
                        {STATUS_OPTIONS.iter().map(|(value, label)| {
                            view! { <option value=*value>{*label}</option> }
                        }).collect_view()}
                    </select>
                </div>
            </Show>

            <div class="form-actions">
                <button type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Enregistrement..." } else { "Enregistrer" }}
                </button>
            </div>
        </form>
    }
}
