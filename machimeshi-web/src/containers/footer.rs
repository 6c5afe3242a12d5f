use crate::routes::MainRoute;
use crate::session::store::SessionState;
use shared::models::Role;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct ConditionalFooterProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

/// Role-conditional footer navigation.
///
/// Shop users get the shop variant (home, favorites, post, profile);
/// everyone else, including sessions with an unrecognized role, gets the
/// general variant. Nothing renders while the session is still resolving.
/// The store subscription re-renders this on login and logout.
#[function_component(ConditionalFooter)]
pub fn conditional_footer(props: &ConditionalFooterProps) -> Html {
    let session = use_selector(|state: &SessionState| state.clone());

    if session.is_loading() {
        return html! {};
    }

    let is_shop = session.role() == Some(Role::ShopUser);

    let item = |route: MainRoute, icon: IconId, label: &str| -> Html {
        let active = props.current_route.as_ref() == Some(&route);
        let classes = if active {
            "flex flex-col items-center text-primary"
        } else {
            "flex flex-col items-center text-base-content/70"
        };
        html! {
            <Link<MainRoute> to={route} {classes}>
                <Icon icon_id={icon} class="w-6 h-6" />
                <span class="text-xs">{label.to_string()}</span>
            </Link<MainRoute>>
        }
    };

    html! {
        <footer class="btm-nav fixed bottom-0 w-full border-t border-base-300 bg-base-100 py-2 flex justify-around">
            { item(MainRoute::Home, IconId::HeroiconsOutlineHome, "Home") }
            { item(MainRoute::Favorites, IconId::HeroiconsOutlineHeart, "Favorites") }
            if is_shop {
                { item(MainRoute::Post, IconId::HeroiconsOutlinePlusCircle, "Post") }
            }
            { item(MainRoute::Profile, IconId::HeroiconsOutlineUser, "Profile") }
        </footer>
    }
}
