use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] gap-4">
            <h1 class="text-4xl font-bold">{"404"}</h1>
            <p class="text-base-content/70">{"Cette page n'existe pas."}</p>
            <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-primary btn-sm">
                {"Retour à l'accueil"}
            </Link<MainRoute>>
        </div>
    }
}
