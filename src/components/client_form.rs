//! Client Form
//!
//! Shared create/edit form with per-field validation and a branch picker.
//! Validation failures block the submit entirely; the network call only
//! happens through the `on_submit` callback once every check passes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ClientPayload};
use crate::models::{Branch, Client};
use crate::validate::{validate_client, FieldErrors};

#[component]
pub fn ClientForm(
    initial: Option<Client>,
    saving: ReadSignal<bool>,
    #[prop(into)] on_submit: Callback<ClientPayload>,
) -> impl IntoView {
    let (branch_id, set_branch_id) =
        signal(initial.as_ref().map(|c| c.branch_id).unwrap_or(1));
    let (first_name, set_first_name) =
        signal(initial.as_ref().map(|c| c.first_name.clone()).unwrap_or_default());
    let (last_name, set_last_name) =
        signal(initial.as_ref().map(|c| c.last_name.clone()).unwrap_or_default());
    let (email, set_email) =
        signal(initial.as_ref().map(|c| c.email.clone()).unwrap_or_default());
    let (phone, set_phone) =
        signal(initial.as_ref().map(|c| c.phone.clone()).unwrap_or_default());
    let (address, set_address) =
        signal(initial.as_ref().map(|c| c.address.clone()).unwrap_or_default());
    let (date_of_birth, set_date_of_birth) =
        signal(initial.as_ref().and_then(|c| c.date_of_birth.clone()).unwrap_or_default());

    let (branches, set_branches) = signal(Vec::<Branch>::new());
    let errors = RwSignal::new(FieldErrors::default());

    // Branch options for the picker.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_branches().await {
                Ok(loaded) => set_branches.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[CLIENT-FORM] Failed to load branches: {err}").into(),
                    );
                }
            }
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let dob = date_of_birth.get();
        let payload = ClientPayload {
            branch_id: branch_id.get(),
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            phone: phone.get(),
            address: address.get(),
            date_of_birth: if dob.is_empty() { None } else { Some(dob) },
        };
        let found = validate_client(&payload);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::default());
        on_submit.run(payload);
    };

    let field_error = move |field: &'static str| {
        errors
            .with(|errors| errors.get(field))
            .map(|message| view! { <p class="field-error">{message}</p> })
    };

    view! {
        <form class="resource-form" on:submit=submit>
            <h2>"Informations du client"</h2>

            <div class="form-row">
                <div class="form-field">
                    <label>"Prénom *"</label>
                    <input
                        id="first_name"
                        type="text"
                        placeholder="John"
                        prop:value=move || first_name.get()
                        on:input=move |ev| {
                            set_first_name.set(event_target_value(&ev));
                            errors.update(|errors| errors.clear("first_name"));
                        }
                    />
                    {move || field_error("first_name")}
                </div>

                <div class="form-field">
                    <label>"Nom *"</label>
                    <input
                        id="last_name"
                        type="text"
                        placeholder="Doe"
                        prop:value=move || last_name.get()
                        on:input=move |ev| {
                            set_last_name.set(event_target_value(&ev));
                            errors.update(|errors| errors.clear("last_name"));
                        }
                    />
                    {move || field_error("last_name")}
                </div>
            </div>

            <div class="form-field">
                <label>"Email *"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="john.doe@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        set_email.set(event_target_value(&ev));
                        errors.update(|errors| errors.clear("email"));
                    }
                />
                {move || field_error("email")}
            </div>

            <div class="form-field">
                <label>"Téléphone *"</label>
                <input
                    id="phone"
                    type="text"
                    placeholder="+237 123 456 789"
                    prop:value=move || phone.get()
                    on:input=move |ev| {
                        set_phone.set(event_target_value(&ev));
                        errors.update(|errors| errors.clear("phone"));
                    }
                />
                {move || field_error("phone")}
            </div>

            <div class="form-field">
                <label>"Adresse *"</label>
                <input
                    id="address"
                    type="text"
                    placeholder="123 Main Street, City, Country"
                    prop:value=move || address.get()
                    on:input=move |ev| {
                        set_address.set(event_target_value(&ev));
                        errors.update(|errors| errors.clear("address"));
                    }
                />
                {move || field_error("address")}
            </div>

            <div class="form-field">
                <label>"Date de naissance"</label>
                <input
                    id="date_of_birth"
                    type="date"
                    prop:value=move || date_of_birth.get()
                    on:input=move |ev| set_date_of_birth.set(event_target_value(&ev))
                />
            </div>

            <div class="form-field">
                <label>"Succursale *"</label>
                <select
                    id="branch_id"
                    on:change=move |ev| {
                        if let Ok(id) = event_target_value(&ev).parse::<u32>() {
                            set_branch_id.set(id);
                        }
                        errors.update(|errors| errors.clear("branch_id"));
                    }
                >
                    <For
                        each=move || branches.get()
                        key=|branch| branch.id
                        children=move |branch| {
                            let id = branch.id;
                            view! {
                                <option
                                    value=id.to_string()
                                    prop:selected=move || branch_id.get() == id
                                >
                                    {format!("{} ({})", branch.name, branch.code)}
                                </option>
                            }
                        }
                    />
                </select>
                {move || field_error("branch_id")}
            </div>

            <div class="form-actions">
                <button type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Enregistrement..." } else { "Enregistrer" }}
                </button>
            </div>
        </form>
    }
}
