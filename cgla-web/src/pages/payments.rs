use shared::models::Payment;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store_value;

use crate::api::CglaClient;
use crate::components::{loading::Loading, toast::Toast};
use crate::models::session_state::SessionState;

/// Payment records, restricted to `super_admin`. Read-only listing.
#[function_component(PaymentsPage)]
pub fn payments_page() -> Html {
    let session = use_store_value::<SessionState>();
    let payments = use_state(Vec::<Payment>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);
    let token = session.token.clone().unwrap_or_default();

    {
        let payments = payments.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match CglaClient::shared().list_payments(&token).await {
                    Ok(list) => payments.set(list),
                    Err(err) => error.set(Some(err.toast_message())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_dismiss = {
        let error = error.clone();
        Callback::from(move |()| error.set(None))
    };

    let total: f64 = payments.iter().map(|payment| payment.amount).sum();

    html! {
        <div class="p-4">
            if let Some(message) = &*error {
                <Toast message={message.clone()} on_dismiss={on_dismiss} />
            }
            <h1 class="text-2xl font-bold mb-4">{"Paiements"}</h1>
            if *loading {
                <Loading />
            } else {
                <>
                    <div class="stats shadow mb-4">
                        <div class="stat">
                            <div class="stat-title">{"Total encaissé"}</div>
                            <div class="stat-value text-primary">{ format!("{total:.2} €") }</div>
                            <div class="stat-desc">{ format!("{} paiements", payments.len()) }</div>
                        </div>
                    </div>
                    <table class="table w-full">
                        <thead>
                            <tr>
                                <th>{"Garage"}</th>
                                <th>{"Montant"}</th>
                                <th>{"Méthode"}</th>
                                <th>{"Date"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for payments.iter().map(|payment| html! {
                                <tr key={payment.id}>
                                    <td>{ format!("#{}", payment.garage_id) }</td>
                                    <td>{ format!("{:.2} €", payment.amount) }</td>
                                    <td>{ payment.method.clone() }</td>
                                    <td>{ payment.paid_at.format("%d/%m/%Y %H:%M").to_string() }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </>
            }
        </div>
    }
}
