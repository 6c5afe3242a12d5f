use crate::containers::layout::Layout;
use crate::pages::{
    FavoritesPage, HomePage, LoginPage, MenuDetailPage, NotFoundPage, NotificationsPage,
    PostPage, ProfileEditPage, ProfilePage, RegisterPage, RegisterShopPage, ShopDetailPage,
    ShopsPage,
};
use crate::session::gate::Gated;
use crate::session::policy::RouteAccess;
use uuid::Uuid;
use yew::prelude::*;
use yew_router::prelude::*;

/// The application routes.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/register/shop")]
    RegisterShop,
    #[at("/shops")]
    Shops,
    #[at("/shops/:id")]
    ShopDetail { id: Uuid },
    #[at("/menus/:id")]
    MenuDetail { id: Uuid },
    #[at("/favorites")]
    Favorites,
    #[at("/post")]
    Post,
    #[at("/profile")]
    Profile,
    #[at("/profile/edit")]
    ProfileEdit,
    #[at("/notifications")]
    Notifications,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// The route's row in the access policy table.
    #[must_use]
    pub fn access(&self) -> RouteAccess {
        match self {
            Self::Login => RouteAccess::ENTRY,
            Self::Register | Self::RegisterShop | Self::NotFound => RouteAccess::PUBLIC,
            Self::Post => RouteAccess::SHOP_ONLY,
            Self::Home
            | Self::Shops
            | Self::ShopDetail { .. }
            | Self::MenuDetail { .. }
            | Self::Favorites
            | Self::Profile
            | Self::ProfileEdit
            | Self::Notifications => RouteAccess::AUTHENTICATED,
        }
    }

    /// Whether the page is shown inside the app chrome (header + footer).
    /// The entry pages render standalone.
    #[must_use]
    pub fn uses_chrome(&self) -> bool {
        !matches!(self, Self::Login | Self::Register | Self::RegisterShop)
    }
}

/// Switch function for the main routes. Every page goes through the same
/// gate with its declared policy row.
pub fn switch(route: MainRoute) -> Html {
    let access = route.access();
    let page = match route.clone() {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Register => html! { <RegisterPage /> },
        MainRoute::RegisterShop => html! { <RegisterShopPage /> },
        MainRoute::Shops => html! { <ShopsPage /> },
        MainRoute::ShopDetail { id } => html! { <ShopDetailPage {id} /> },
        MainRoute::MenuDetail { id } => html! { <MenuDetailPage {id} /> },
        MainRoute::Favorites => html! { <FavoritesPage /> },
        MainRoute::Post => html! { <PostPage /> },
        MainRoute::Profile => html! { <ProfilePage /> },
        MainRoute::ProfileEdit => html! { <ProfileEditPage /> },
        MainRoute::Notifications => html! { <NotificationsPage /> },
        MainRoute::NotFound => html! { <NotFoundPage /> },
    };

    if route.uses_chrome() {
        html! {
            <Gated {access}>
                <Layout current_route={route}>
                    {page}
                </Layout>
            </Gated>
        }
    } else {
        html! { <Gated {access}>{page}</Gated> }
    }
}
