use shared::models::{ManagerQuota, ManagerQuotaRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store_value;

use crate::api::CglaClient;
use crate::components::{loading::Loading, toast::Toast};
use crate::models::session_state::SessionState;

/// Manager quotas, restricted to `super_admin`. Lists every quota and
/// lets the admin raise or lower a manager's garage limit in place.
#[function_component(QuotasPage)]
pub fn quotas_page() -> Html {
    let session = use_store_value::<SessionState>();
    let quotas = use_state(Vec::<ManagerQuota>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);

    let token = session.token.clone().unwrap_or_default();

    {
        let quotas = quotas.clone();
        let error = error.clone();
        let loading = loading.clone();
        let token = token.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match CglaClient::shared().list_quotas(&token).await {
                    Ok(list) => quotas.set(list),
                    Err(err) => error.set(Some(err.toast_message())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_set_limit = {
        let quotas = quotas.clone();
        let error = error.clone();
        Callback::from(move |(id, manager_id, garage_limit): (i64, i64, u32)| {
            let quotas = quotas.clone();
            let error = error.clone();
            let token = token.clone();
            let payload = ManagerQuotaRequest {
                manager_id,
                garage_limit,
            };
            spawn_local(async move {
                match CglaClient::shared()
                    .update::<_, ManagerQuota>("quotas", &token, id, &payload)
                    .await
                {
                    Ok(updated) => {
                        let list: Vec<ManagerQuota> = quotas
                            .iter()
                            .map(|quota| {
                                if quota.id == id {
                                    updated.clone()
                                } else {
                                    quota.clone()
                                }
                            })
                            .collect();
                        quotas.set(list);
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
            <h1 class="text-2xl font-bold mb-4">{"Quotas managers"}</h1>
            if *loading {
                <Loading />
            } else {
                <table class="table w-full">
                    <thead>
                        <tr>
                            <th>{"Manager"}</th>
                            <th>{"Garages administrés"}</th>
                            <th>{"Limite"}</th>
                            <th>{"État"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for quotas.iter().map(|quota| {
                            let raise = {
                                let on_set_limit = on_set_limit.clone();
                                let (id, manager_id, limit) = (quota.id, quota.manager_id, quota.garage_limit);
                                Callback::from(move |_| on_set_limit.emit((id, manager_id, limit + 1)))
                            };
                            let lower = {
                                let on_set_limit = on_set_limit.clone();
                                let (id, manager_id, limit) = (quota.id, quota.manager_id, quota.garage_limit);
                                Callback::from(move |_| {
                                    if limit > 0 {
                                        on_set_limit.emit((id, manager_id, limit - 1));
                                    }
                                })
                            };
                            html! {
                                <tr key={quota.id}>
                                    <td>{ format!("#{}", quota.manager_id) }</td>
                                    <td>{ quota.garages_used }</td>
                                    <td>{ quota.garage_limit }</td>
                                    <td>
                                        {
                                            if quota.is_exhausted() {
                                                html! { <span class="badge badge-warning">{"Quota atteint"}</span> }
                                            } else {
                                                html! { <span class="badge badge-success">{"Disponible"}</span> }
                                            }
                                        }
                                    </td>
                                    <td class="flex gap-1">
                                        <button class="btn btn-ghost btn-xs" onclick={lower}>{"-"}</button>
                                        <button class="btn btn-ghost btn-xs" onclick={raise}>{"+"}</button>
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
