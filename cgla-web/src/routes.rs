use crate::components::loading::Loading;
use crate::components::require_role::RequireRole;
use crate::containers::layout::Layout;
use crate::guard::{self, GuardDecision};
use crate::models::session_state::SessionState;
use crate::pages::*;
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store_value;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Landing,
    #[at("/password-reset")]
    PasswordReset,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/admin")]
    AdminRoot,
    #[at("/dashboard/admin/*")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Static route classification: public routes are reachable only when
    /// unauthenticated, everything else requires a session.
    #[must_use]
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Landing | Self::PasswordReset)
    }
}

/// The admin routes.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum AdminRoute {
    #[at("/dashboard/admin/users")]
    Users,
    #[at("/dashboard/admin/garages")]
    Garages,
    #[at("/dashboard/admin/offers")]
    Offers,
    #[at("/dashboard/admin/benefits")]
    Benefits,
    #[at("/dashboard/admin/payments")]
    Payments,
    #[at("/dashboard/admin/quotas")]
    Quotas,
    #[not_found]
    #[at("/dashboard/admin/404")]
    NotFound,
}

/// The app routes.
#[derive(Debug, Clone, PartialEq)]
pub enum AppRoute {
    Main(MainRoute),
    Admin(AdminRoute),
}

impl Default for AppRoute {
    fn default() -> Self {
        AppRoute::Main(MainRoute::Landing)
    }
}

impl From<MainRoute> for AppRoute {
    fn from(route: MainRoute) -> Self {
        AppRoute::Main(route)
    }
}

impl From<AdminRoute> for AppRoute {
    fn from(route: AdminRoute) -> Self {
        AppRoute::Admin(route)
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub route: MainRoute,
}

/// Applies the guard decision to a main route: render, redirect, or hold a
/// loading indicator until the session has rehydrated.
#[function_component(RouteGuard)]
fn route_guard(props: &RouteGuardProps) -> Html {
    let session = use_store_value::<SessionState>();
    let route_is_public = props.route.is_public();

    match guard::evaluate(
        session.is_loading,
        session.is_authenticated(),
        route_is_public,
    ) {
        GuardDecision::Pending => {
            // Public routes carry no redirect decision while loading; only
            // protected content is held back behind the loading indicator.
            if route_is_public {
                render_main(&props.route)
            } else {
                html! { <Loading /> }
            }
        }
        GuardDecision::RedirectToLogin => {
            html! { <Redirect<MainRoute> to={MainRoute::Landing} /> }
        }
        GuardDecision::RedirectToHome => {
            html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> }
        }
        GuardDecision::Allow => render_main(&props.route),
    }
}

fn render_main(route: &MainRoute) -> Html {
    match route {
        MainRoute::Landing => html! { <LoginPage /> },
        MainRoute::PasswordReset => html! { <PasswordResetPage /> },
        MainRoute::Dashboard => html! {
            <Layout current_route={AppRoute::Main(MainRoute::Dashboard)}>
                <DashboardPage />
            </Layout>
        },
        MainRoute::AdminRoot => html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> },
        MainRoute::Admin => html! { <Switch<AdminRoute> render={switch_admin} /> },
        MainRoute::NotFound => html! {
            <Layout current_route={AppRoute::Main(MainRoute::NotFound)}>
                <ErrorPage />
            </Layout>
        },
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to main route: {:?}", route).as_str());
    html! { <RouteGuard {route} /> }
}

/// Switch function for the admin routes. Every page is wrapped in the
/// role gate derived from the navigation permission table.
fn switch_admin(route: AdminRoute) -> Html {
    log(std::format!("Switching to admin route: {:?}", route).as_str());
    let content = match route {
        AdminRoute::Users => html! { <UsersPage /> },
        AdminRoute::Garages => html! { <GaragesPage /> },
        AdminRoute::Offers => html! { <OffersPage /> },
        AdminRoute::Benefits => html! { <BenefitsPage /> },
        AdminRoute::Payments => html! { <PaymentsPage /> },
        AdminRoute::Quotas => html! { <QuotasPage /> },
        AdminRoute::NotFound => {
            return html! { <Redirect<MainRoute> to={MainRoute::NotFound} /> };
        }
    };
    html! {
        <Layout current_route={AppRoute::Admin(route.clone())}>
            <RequireRole page={route}>
                {content}
            </RequireRole>
        </Layout>
    }
}
