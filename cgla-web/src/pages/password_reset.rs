use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::api::CglaClient;
use crate::routes::MainRoute;
use crate::components::toast::{Toast, ToastKind};

/// Public page asking the backend to start a password reset.
#[function_component(PasswordResetPage)]
pub fn password_reset_page() -> Html {
    let email = use_state(String::new);
    let notice = use_state(|| None::<(String, ToastKind)>);
    let loading = use_state(|| false);

    let onsubmit = {
        let email_handle = email.clone();
        let notice_handle = notice.clone();
        let loading_handle = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email_handle).clone();
            loading_handle.set(true);
            let notice_ref = notice_handle.clone();
            let loading_ref = loading_handle.clone();
            spawn_local(async move {
                let result = CglaClient::shared().request_password_reset(&email_value).await;
                match result {
                    Ok(()) => notice_ref.set(Some((
                        "Un email de réinitialisation vous a été envoyé".to_string(),
                        ToastKind::Success,
                    ))),
                    Err(err) => notice_ref.set(Some((err.toast_message(), ToastKind::Error))),
                }
                loading_ref.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    let disable_submit = (*email).is_empty() || *loading;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            if let Some((message, kind)) = &*notice {
                <Toast message={message.clone()} kind={*kind} on_dismiss={on_dismiss} />
            }
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Réinitialiser le mot de passe"}</h2>
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {"Envoyer"}
                        </button>
                    </div>
                    <Link<MainRoute> classes="link link-hover text-xs" to={MainRoute::Landing}>
                        {"Retour à la connexion"}
                    </Link<MainRoute>>
                </form>
            </div>
        </div>
    }
}
