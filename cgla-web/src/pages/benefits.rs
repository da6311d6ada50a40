use shared::models::Benefit;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store_value;

use crate::api::CglaClient;
use crate::components::{loading::Loading, toast::Toast};
use crate::models::session_state::SessionState;

/// Customer benefits administration, restricted to `super_admin`.
#[function_component(BenefitsPage)]
pub fn benefits_page() -> Html {
    let session = use_store_value::<SessionState>();
    let benefits = use_state(Vec::<Benefit>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);
    let token = session.token.clone().unwrap_or_default();

    {
        let benefits = benefits.clone();
        let error = error.clone();
        let loading = loading.clone();
        let token = token.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match CglaClient::shared().list_benefits(&token).await {
                    Ok(list) => benefits.set(list),
                    Err(err) => error.set(Some(err.toast_message())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_delete = {
        let benefits = benefits.clone();
        let error = error.clone();
        Callback::from(move |id: i64| {
            let benefits = benefits.clone();
            let error = error.clone();
            let token = token.clone();
            spawn_local(async move {
                match CglaClient::shared().delete_resource("benefits", &token, id).await {
                    Ok(()) => {
                        let remaining: Vec<Benefit> =
                            benefits.iter().filter(|benefit| benefit.id != id).cloned().collect();
                        benefits.set(remaining);
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
            <h1 class="text-2xl font-bold mb-4">{"Gestion des avantages"}</h1>
            if *loading {
                <Loading />
            } else {
                <table class="table w-full">
                    <thead>
                        <tr>
                            <th>{"Avantage"}</th>
                            <th>{"Description"}</th>
                            <th>{"Offre liée"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for benefits.iter().map(|benefit| {
                            let id = benefit.id;
                            let on_delete = on_delete.clone();
                            html! {
                                <tr key={benefit.id}>
                                    <td>{ benefit.title.clone() }</td>
                                    <td>{ benefit.description.clone() }</td>
                                    <td>
                                        {
                                            benefit.offer_id.map_or_else(
                                                || "—".to_string(),
                                                |offer_id| format!("#{offer_id}"),
                                            )
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
