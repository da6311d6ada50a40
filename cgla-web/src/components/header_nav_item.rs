use yew::{Html, Properties, classes, function_component, html};
use yew_icons::Icon;
use yew_router::prelude::Link;

use crate::nav::NavEntry;
use crate::routes::{AdminRoute, AppRoute, MainRoute};

#[derive(Properties, PartialEq)]
pub struct HeaderNavItemProps {
    pub entry: NavEntry,
    pub current_route: Option<AppRoute>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let entry = &props.entry;
    let active_route_class = if props.current_route.as_ref() == Some(&entry.target) {
        "btn-soft"
    } else {
        ""
    };
    let link_classes = classes!("btn", "btn-ghost", "gap-2", active_route_class);
    let body = html! {
        <>
            <Icon icon_id={entry.icon} class="h-4 w-4" />
            { entry.label }
        </>
    };

    html! {
        <li>
            {
                match entry.target.clone() {
                    AppRoute::Main(route) => html! {
                        <Link<MainRoute> to={route} classes={link_classes}>{body}</Link<MainRoute>>
                    },
                    AppRoute::Admin(route) => html! {
                        <Link<AdminRoute> to={route} classes={link_classes}>{body}</Link<AdminRoute>>
                    },
                }
            }
        </li>
    }
}
