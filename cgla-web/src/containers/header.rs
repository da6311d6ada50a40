use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::components::{header_nav_item::HeaderNavItem, user_dropdown::UserDropdown};
use crate::models::session_state::SessionState;
use crate::nav;
use crate::routes::{AppRoute, MainRoute};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<AppRoute>,
}

/// Top navigation bar. The entries come from the role-based navigation
/// filter; the account dropdown (with logout) is shown for any session,
/// whatever the role.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let user = use_selector(|state: &SessionState| state.user.clone());
    let user_opt = (*user).clone();
    let entries = nav::nav_entries(user_opt.as_ref().map(|user| user.role));

    let render_entries = || -> Html {
        html! {
            { for entries.iter().map(|entry| html! {
                <HeaderNavItem
                    entry={entry.clone()}
                    current_route={props.current_route.clone()}
                />
            }) }
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Dashboard} classes="text-lg">
                    {"CGLA-PRO"}
                </Link<MainRoute>>
            </a>
            <div class="dropdown dropdown-end sm:hidden">
                <button class="btn btn-soft">
                    <i class="fa-solid fa-bars text-lg"></i>
                </button>
                <ul
                    tabindex="0"
                    class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                    { render_entries() }
                </ul>
            </div>
            <ul class="hidden menu sm:menu-horizontal">
                { render_entries() }
            </ul>
            <div class="hidden sm:flex">
                {
                    user_opt.as_ref().map_or_else(
                        || html! {
                            <Link<MainRoute> to={MainRoute::Landing} classes="btn btn-primary btn-sm">
                                {"Connexion"}
                            </Link<MainRoute>>
                        },
                        |user| html! {
                            <>
                                <span class="text-sm text-base-content/80 mr-2">{ user.username.clone() }</span>
                                <UserDropdown />
                            </>
                        },
                    )
                }
            </div>
        </nav>
    }
}
