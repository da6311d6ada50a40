//! Tests for the routing system
//!
//! Validates route definitions, the static public/protected classification,
//! and the path patterns the router matches against.

#[cfg(test)]
mod tests {
    use crate::routes::{AdminRoute, AppRoute, MainRoute};
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    /// Exactly the entry routes are public; everything else is protected
    #[test]
    fn test_route_classification() {
        assert!(MainRoute::Landing.is_public());
        assert!(MainRoute::PasswordReset.is_public());

        assert!(!MainRoute::Dashboard.is_public());
        assert!(!MainRoute::AdminRoot.is_public());
        assert!(!MainRoute::Admin.is_public());
        assert!(!MainRoute::NotFound.is_public());
    }

    /// Classification is total over the route enum
    #[test]
    fn test_classification_is_total() {
        for route in MainRoute::iter() {
            // Every route answers without panicking; public routes are
            // exactly the two entry routes.
            let is_public = route.is_public();
            let expected =
                matches!(route, MainRoute::Landing | MainRoute::PasswordReset);
            assert_eq!(is_public, expected, "{route:?}");
        }
    }

    /// Main route paths
    #[test]
    fn test_main_route_paths() {
        assert_eq!(MainRoute::Landing.to_path(), "/");
        assert_eq!(MainRoute::PasswordReset.to_path(), "/password-reset");
        assert_eq!(MainRoute::Dashboard.to_path(), "/dashboard");
        assert_eq!(MainRoute::AdminRoot.to_path(), "/dashboard/admin");
    }

    /// Admin route paths all live under the protected admin prefix
    #[test]
    fn test_admin_route_paths() {
        for route in AdminRoute::iter() {
            assert!(
                route.to_path().starts_with("/dashboard/admin"),
                "{route:?} must be nested under /dashboard/admin"
            );
        }
        assert_eq!(AdminRoute::Users.to_path(), "/dashboard/admin/users");
        assert_eq!(AdminRoute::Quotas.to_path(), "/dashboard/admin/quotas");
    }

    /// Route equality and cloning
    #[test]
    fn test_route_equality() {
        assert_eq!(MainRoute::Dashboard, MainRoute::Dashboard.clone());
        assert_ne!(MainRoute::Dashboard, MainRoute::Landing);
        assert_ne!(AdminRoute::Users, AdminRoute::Garages);
    }

    /// AppRoute wraps both route families and defaults to the landing page
    #[test]
    fn test_app_route_conversions() {
        assert_eq!(AppRoute::default(), AppRoute::Main(MainRoute::Landing));
        assert_eq!(
            AppRoute::from(MainRoute::Dashboard),
            AppRoute::Main(MainRoute::Dashboard)
        );
        assert_eq!(
            AppRoute::from(AdminRoute::Users),
            AppRoute::Admin(AdminRoute::Users)
        );
    }
}
