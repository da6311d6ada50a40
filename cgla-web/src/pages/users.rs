use shared::models::AuthenticatedUser;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store_value;

use crate::api::CglaClient;
use crate::components::{loading::Loading, toast::Toast};
use crate::models::session_state::SessionState;

/// User administration, restricted to `super_admin` and `manager`.
#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let session = use_store_value::<SessionState>();
    let users = use_state(Vec::<AuthenticatedUser>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);
    let token = session.token.clone().unwrap_or_default();

    {
        let users = users.clone();
        let error = error.clone();
        let loading = loading.clone();
        let token = token.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match CglaClient::shared().list_users(&token).await {
                    Ok(list) => users.set(list),
                    Err(err) => error.set(Some(err.toast_message())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_delete = {
        let users = users.clone();
        let error = error.clone();
        Callback::from(move |id: i64| {
            let users = users.clone();
            let error = error.clone();
            let token = token.clone();
            spawn_local(async move {
                match CglaClient::shared().delete_resource("users", &token, id).await {
                    Ok(()) => {
                        let remaining: Vec<AuthenticatedUser> =
                            users.iter().filter(|user| user.id != id).cloned().collect();
                        users.set(remaining);
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
            <h1 class="text-2xl font-bold mb-4">{"Gestion des utilisateurs"}</h1>
            if *loading {
                <Loading />
            } else {
                <table class="table w-full">
                    <thead>
                        <tr>
                            <th>{"Utilisateur"}</th>
                            <th>{"Email"}</th>
                            <th>{"Rôle"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for users.iter().map(|user| {
                            let id = user.id;
                            let on_delete = on_delete.clone();
                            html! {
                                <tr key={user.id}>
                                    <td>{ user.display_name() }</td>
                                    <td>{ user.email.clone() }</td>
                                    <td><span class="badge badge-outline">{ user.role.as_str() }</span></td>
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
