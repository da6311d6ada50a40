use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::models::session_state::SessionState;
use crate::nav;

/// Authenticated landing page.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let user = use_selector(|state: &SessionState| state.user.clone());
    let Some(user) = (*user).clone() else {
        // The route guard only renders this page with a session present.
        return html! {};
    };
    let entry_count = nav::nav_entries(Some(user.role)).len();

    html! {
        <div class="p-4">
            <h1 class="text-2xl font-bold mb-4">
                { format!("Bienvenue, {}", user.display_name()) }
            </h1>
            <div class="stats shadow w-full">
                <div class="stat">
                    <div class="stat-title">{"Rôle"}</div>
                    <div class="stat-value text-primary text-2xl">{ user.role.as_str() }</div>
                    <div class="stat-desc">{"Profil de la session en cours"}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Modules accessibles"}</div>
                    <div class="stat-value text-secondary">{ entry_count }</div>
                    <div class="stat-desc">{"Entrées de navigation disponibles"}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Statut"}</div>
                    <div class="stat-value text-success text-2xl">{"Connecté"}</div>
                    <div class="stat-desc">{ user.email.clone() }</div>
                </div>
            </div>
        </div>
    }
}
