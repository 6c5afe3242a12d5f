//! Tests for the route table and its access policy rows.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use crate::session::policy::RouteAccess;
    use shared::models::Role;
    use uuid::Uuid;
    use yew_router::Routable;

    /// Test route paths match the published URL layout
    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::RegisterShop.to_path(), "/register/shop");
        assert_eq!(MainRoute::Post.to_path(), "/post");
        assert_eq!(MainRoute::ProfileEdit.to_path(), "/profile/edit");

        let id = Uuid::new_v4();
        assert_eq!(
            MainRoute::MenuDetail { id }.to_path(),
            format!("/menus/{id}")
        );
        assert_eq!(
            MainRoute::ShopDetail { id }.to_path(),
            format!("/shops/{id}")
        );
    }

    /// Test URL recognition round-trips the parameterized routes
    #[test]
    fn test_route_recognition() {
        let id = Uuid::new_v4();
        let recognized = MainRoute::recognize(&format!("/shops/{id}"));
        assert_eq!(recognized, Some(MainRoute::ShopDetail { id }));

        assert_eq!(MainRoute::recognize("/favorites"), Some(MainRoute::Favorites));
        assert_eq!(MainRoute::recognize("/register"), Some(MainRoute::Register));
    }

    /// Test the post page is the only shop-gated route
    #[test]
    fn test_post_route_requires_shop_role() {
        let access = MainRoute::Post.access();
        assert!(access.requires_auth);
        assert_eq!(access.required_role, Some(Role::ShopUser));

        for route in [
            MainRoute::Home,
            MainRoute::Shops,
            MainRoute::Favorites,
            MainRoute::Profile,
            MainRoute::Notifications,
        ] {
            assert_eq!(route.access(), RouteAccess::AUTHENTICATED, "{route:?}");
        }
    }

    /// Test the entry pages stay reachable while logged out
    #[test]
    fn test_entry_routes_are_public() {
        assert_eq!(MainRoute::Login.access(), RouteAccess::ENTRY);
        assert_eq!(MainRoute::Register.access(), RouteAccess::PUBLIC);
        assert_eq!(MainRoute::RegisterShop.access(), RouteAccess::PUBLIC);
        assert!(!MainRoute::Login.uses_chrome());
        assert!(MainRoute::Home.uses_chrome());
    }
}
