//! Home Page
//!
//! Landing cards linking to the main sections.

use leptos::prelude::*;

const SECTIONS: &[(&str, &str, &str)] = &[
    ("Clients", "Gérer les informations des clients", "/clients"),
    ("Assurances", "Gérer les polices d'assurance", "/policies"),
    ("Succursales", "Gérer les succursales", "/branches"),
    ("Tableau de bord", "Vue d'ensemble et statistiques", "/dashboard"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <div class="page-header">
                <div>
                    <h1>"INTIA Assurance"</h1>
                    <p class="page-subtitle">"Système de gestion des clients et assurances"</p>
                </div>
            </div>

            <div class="card-grid">
                {SECTIONS.iter().map(|(title, description, href)| {
                    view! {
                        <a class="card section-card" href=*href>
                            <h3>{*title}</h3>
                            <p class="card-detail">{*description}</p>
                            <span class="secondary-btn">"Accéder"</span>
                        </a>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
