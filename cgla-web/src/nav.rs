//! Role-based navigation and page permissions.
//!
//! One declarative table drives both the header navigation and the
//! page-level access checks, so the two can never drift apart.

use shared::models::Role;
use yew_icons::IconId;

use crate::routes::{AdminRoute, AppRoute, MainRoute};

/// A single navigation entry shown in the header.
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    /// Display label, in the product's UI language.
    pub label: &'static str,
    /// Route the entry links to.
    pub target: AppRoute,
    /// Icon shown next to the label.
    pub icon: IconId,
}

const HOME: NavEntry = NavEntry {
    label: "Home",
    target: AppRoute::Main(MainRoute::Dashboard),
    icon: IconId::HeroiconsOutlineHome,
};
const USERS: NavEntry = NavEntry {
    label: "Gestion des utilisateurs",
    target: AppRoute::Admin(AdminRoute::Users),
    icon: IconId::HeroiconsOutlineUsers,
};
const GARAGES: NavEntry = NavEntry {
    label: "Gestion des garages",
    target: AppRoute::Admin(AdminRoute::Garages),
    icon: IconId::HeroiconsOutlineBuildingStorefront,
};
const OFFERS: NavEntry = NavEntry {
    label: "Gestion des offres",
    target: AppRoute::Admin(AdminRoute::Offers),
    icon: IconId::HeroiconsOutlineTag,
};
const BENEFITS: NavEntry = NavEntry {
    label: "Gestion des avantages",
    target: AppRoute::Admin(AdminRoute::Benefits),
    icon: IconId::HeroiconsOutlineGift,
};
const PAYMENTS: NavEntry = NavEntry {
    label: "Paiements",
    target: AppRoute::Admin(AdminRoute::Payments),
    icon: IconId::HeroiconsOutlineCreditCard,
};
const QUOTAS: NavEntry = NavEntry {
    label: "Quotas managers",
    target: AppRoute::Admin(AdminRoute::Quotas),
    icon: IconId::HeroiconsOutlineChartBar,
};

const ALL_ROLES: &[Role] = &Role::ALL;

/// Ordered permission rules: every group whose role set matches contributes
/// its entries, in declaration order.
const RULES: &[(&[Role], &[NavEntry])] = &[
    (ALL_ROLES, &[HOME]),
    (&[Role::SuperAdmin, Role::Manager], &[USERS]),
    (&[Role::SuperAdmin, Role::AdminGarage], &[GARAGES]),
    (&[Role::SuperAdmin], &[OFFERS, BENEFITS, PAYMENTS, QUOTAS]),
];

/// Compute the navigation entries visible to a role.
///
/// Pure: no I/O, no hidden state. An absent or unrecognized role yields an
/// empty navigation; the logout action is rendered by the header regardless.
#[must_use]
pub fn nav_entries(role: Option<Role>) -> Vec<NavEntry> {
    let Some(role) = role else {
        return Vec::new();
    };
    RULES
        .iter()
        .filter(|(roles, _)| roles.contains(&role))
        .flat_map(|(_, entries)| entries.iter().cloned())
        .collect()
}

/// The roles allowed to view an admin page. Derived from the same rules as
/// the navigation, so a page a role cannot navigate to is also a page it
/// cannot view directly. A page absent from the rules has no allowed roles.
#[must_use]
pub fn page_roles(page: &AdminRoute) -> &'static [Role] {
    let target = AppRoute::Admin(page.clone());
    RULES
        .iter()
        .find(|(_, entries)| entries.iter().any(|entry| entry.target == target))
        .map_or(&[], |&(roles, _)| roles)
}

/// Whether a role may view an admin page.
#[must_use]
pub fn role_can_view(role: Role, page: &AdminRoute) -> bool {
    page_roles(page).contains(&role)
}
