use crate::models::session_state::SessionState;
use crate::routes::MainRoute;
use crate::session;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Root component: rehydrates the session once, then mounts the router.
///
/// The first render always happens with `is_loading == true`, so every route
/// starts in the guard's pending state until the storage read has resolved.
#[function_component(App)]
pub fn app() -> Html {
    let (_session, dispatch) = use_store::<SessionState>();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |()| {
            session::refresh_auth(&dispatch);
            || ()
        });
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={crate::routes::switch} />
        </BrowserRouter>
    }
}
