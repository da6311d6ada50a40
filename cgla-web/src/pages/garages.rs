use shared::models::{Garage, GarageRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_store_value;

use crate::api::CglaClient;
use crate::components::{loading::Loading, toast::Toast};
use crate::models::session_state::SessionState;

/// Garage administration, restricted to `super_admin` and `admin_garage`.
#[function_component(GaragesPage)]
pub fn garages_page() -> Html {
    let session = use_store_value::<SessionState>();
    let garages = use_state(Vec::<Garage>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);
    let new_name = use_state(String::new);
    let new_address = use_state(String::new);
    let new_city = use_state(String::new);
    let token = session.token.clone().unwrap_or_default();

    {
        let garages = garages.clone();
        let error = error.clone();
        let loading = loading.clone();
        let token = token.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match CglaClient::shared().list_garages(&token).await {
                    Ok(list) => garages.set(list),
                    Err(err) => error.set(Some(err.toast_message())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_delete = {
        let garages = garages.clone();
        let error = error.clone();
        let token = token.clone();
        Callback::from(move |id: i64| {
            let garages = garages.clone();
            let error = error.clone();
            let token = token.clone();
            spawn_local(async move {
                match CglaClient::shared().delete_resource("garages", &token, id).await {
                    Ok(()) => {
                        let remaining: Vec<Garage> =
                            garages.iter().filter(|garage| garage.id != id).cloned().collect();
                        garages.set(remaining);
                    }
                    Err(err) => error.set(Some(err.toast_message())),
                }
            });
        })
    };

    let on_create = {
        let garages = garages.clone();
        let error = error.clone();
        let new_name = new_name.clone();
        let new_address = new_address.clone();
        let new_city = new_city.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let payload = GarageRequest {
                name: (*new_name).clone(),
                address: (*new_address).clone(),
                city: (*new_city).clone(),
                phone: None,
                email: None,
            };
            if payload.name.is_empty() || payload.city.is_empty() {
                return;
            }
            let garages = garages.clone();
            let error = error.clone();
            let new_name = new_name.clone();
            let new_address = new_address.clone();
            let new_city = new_city.clone();
            let token = token.clone();
            spawn_local(async move {
                match CglaClient::shared().create::<_, Garage>("garages", &token, &payload).await {
                    Ok(created) => {
                        let mut list = (*garages).clone();
                        list.push(created);
                        garages.set(list);
                        new_name.set(String::new());
                        new_address.set(String::new());
                        new_city.set(String::new());
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
            <h1 class="text-2xl font-bold mb-4">{"Gestion des garages"}</h1>
            <form class="flex gap-2 mb-4" onsubmit={on_create}>
                <input
                    class="input input-bordered input-sm"
                    placeholder="Nom"
                    value={(*new_name).clone()}
                    oninput={{
                        let new_name = new_name.clone();
                        Callback::from(move |event: InputEvent| {
                            let input: HtmlInputElement = event.target_unchecked_into();
                            new_name.set(input.value());
                        })
                    }}
                />
                <input
                    class="input input-bordered input-sm"
                    placeholder="Adresse"
                    value={(*new_address).clone()}
                    oninput={{
                        let new_address = new_address.clone();
                        Callback::from(move |event: InputEvent| {
                            let input: HtmlInputElement = event.target_unchecked_into();
                            new_address.set(input.value());
                        })
                    }}
                />
                <input
                    class="input input-bordered input-sm"
                    placeholder="Ville"
                    value={(*new_city).clone()}
                    oninput={{
                        let new_city = new_city.clone();
                        Callback::from(move |event: InputEvent| {
                            let input: HtmlInputElement = event.target_unchecked_into();
                            new_city.set(input.value());
                        })
                    }}
                />
                <button class="btn btn-primary btn-sm" type="submit">{"Ajouter"}</button>
            </form>
            if *loading {
                <Loading />
            } else {
                <table class="table w-full">
                    <thead>
                        <tr>
                            <th>{"Nom"}</th>
                            <th>{"Ville"}</th>
                            <th>{"Contact"}</th>
                            <th>{"Statut"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for garages.iter().map(|garage| {
                            let id = garage.id;
                            let on_delete = on_delete.clone();
                            let status = if garage.active {
                                html! { <span class="badge badge-success">{"Actif"}</span> }
                            } else {
                                html! { <span class="badge badge-ghost">{"Inactif"}</span> }
                            };
                            html! {
                                <tr key={garage.id}>
                                    <td>{ garage.name.clone() }</td>
                                    <td>{ garage.city.clone() }</td>
                                    <td>{ garage.email.clone().or_else(|| garage.phone.clone()).unwrap_or_default() }</td>
                                    <td>{ status }</td>
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
