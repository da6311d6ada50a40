use yew::prelude::*;
use yew_router::prelude::Redirect;
use yewdux::prelude::use_store_value;

use crate::models::session_state::SessionState;
use crate::nav;
use crate::routes::{AdminRoute, MainRoute};

#[derive(Properties, PartialEq)]
pub struct RequireRoleProps {
    /// The admin page being guarded.
    pub page: AdminRoute,
    pub children: Children,
}

/// Renders its children only when the session's role may view the page;
/// any other role is silently redirected to the landing route, the same
/// destination the route guard uses for unauthenticated visitors.
#[function_component(RequireRole)]
pub fn require_role(props: &RequireRoleProps) -> Html {
    let session = use_store_value::<SessionState>();
    let allowed = session
        .user
        .as_ref()
        .is_some_and(|user| nav::role_can_view(user.role, &props.page));

    if allowed {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! { <Redirect<MainRoute> to={MainRoute::Landing} /> }
    }
}
