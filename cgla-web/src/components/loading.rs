use yew::{Html, function_component, html};

/// Full-height placeholder shown while the session is being resolved.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex h-full items-center justify-center">
            <div class="card bg-base-200 shadow-md">
                <div class="card-body items-center">
                    <span class="text-xl font-semibold text-primary">{"CGLA-PRO"}</span>
                    <div class="flex items-center gap-2 mt-2">
                        <span class="loading loading-dots loading-sm"></span>
                        <span>{"Chargement"}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
