use shared::models::Offer;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store_value;

use crate::api::CglaClient;
use crate::components::{loading::Loading, toast::Toast};
use crate::models::session_state::SessionState;

/// Commercial offers administration, restricted to `super_admin`.
#[function_component(OffersPage)]
pub fn offers_page() -> Html {
    let session = use_store_value::<SessionState>();
    let offers = use_state(Vec::<Offer>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);
    let token = session.token.clone().unwrap_or_default();

    {
        let offers = offers.clone();
        let error = error.clone();
        let loading = loading.clone();
        let token = token.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match CglaClient::shared().list_offers(&token).await {
                    Ok(list) => offers.set(list),
                    Err(err) => error.set(Some(err.toast_message())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_delete = {
        let offers = offers.clone();
        let error = error.clone();
        Callback::from(move |id: i64| {
            let offers = offers.clone();
            let error = error.clone();
            let token = token.clone();
            spawn_local(async move {
                match CglaClient::shared().delete_resource("offers", &token, id).await {
                    Ok(()) => {
                        let remaining: Vec<Offer> =
                            offers.iter().filter(|offer| offer.id != id).cloned().collect();
                        offers.set(remaining);
                    }
                    Err(err) => error.set(Some(err.toast_message())),
                }
            });
        })
    };

    let on_dismiss = {
        let error = error.clone();
        Callback::from(move |()| error.set(None))
    };

    html! {
        <div class="p-4">
            if let Some(message) = &*error {
                <Toast message={message.clone()} on_dismiss={on_dismiss} />
            }
            <h1 class="text-2xl font-bold mb-4">{"Gestion des offres"}</h1>
            if *loading {
                <Loading />
            } else {
                <table class="table w-full">
                    <thead>
                        <tr>
                            <th>{"Offre"}</th>
                            <th>{"Prix"}</th>
                            <th>{"Validité"}</th>
                            <th>{"Statut"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for offers.iter().map(|offer| {
                            let id = offer.id;
                            let on_delete = on_delete.clone();
                            html! {
                                <tr key={offer.id}>
                                    <td>{ offer.title.clone() }</td>
                                    <td>{ format!("{:.2} €", offer.price) }</td>
                                    <td>{ format!("du {} au {}", offer.valid_from, offer.valid_until) }</td>
                                    <td>
                                        {
                                            if offer.active {
                                                html! { <span class="badge badge-success">{"Active"}</span> }
                                            } else {
                                                html! { <span class="badge badge-ghost">{"Expirée"}</span> }
                                            }
                                        }
                                    </td>
                                    <td>
                                        <button
                                            class="btn btn-error btn-xs"
                                            onclick={Callback::from(move |_| on_delete.emit(id))}
                                        >
                                            {"Supprimer"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            }
        </div>
    }
}
