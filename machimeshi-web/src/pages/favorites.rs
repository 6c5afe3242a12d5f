use crate::api::MachiMeshiClient;
use crate::components::error_banner::ErrorBanner;
use crate::components::menu_card::MenuCard;
use crate::components::shop_card::ShopCard;
use crate::pages::surface_error;
use crate::session::store::SessionState;
use shared::models::{Menu, Role, Shop};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FavoriteTab {
    Menus,
    Shops,
}

/// Favorites are bound to general accounts; a shop session gets a notice
/// instead of calls to the user-scoped endpoints it cannot use.
pub(crate) fn loads_user_favorites(session: &SessionState) -> bool {
    session.role() != Some(Role::ShopUser)
}

/// The bearer's favorites, split into menu and shop tabs.
#[function_component(FavoritesPage)]
pub fn favorites_page() -> Html {
    let (session, dispatch) = use_store::<SessionState>();
    let tab = use_state(|| FavoriteTab::Menus);
    let menus = use_state(|| None::<Vec<Menu>>);
    let shops = use_state(|| None::<Vec<Shop>>);
    let error = use_state(|| None::<String>);

    let fetch_favorites = loads_user_favorites(&session);

    {
        let menus = menus.clone();
        let shops = shops.clone();
        let error = error.clone();
        let dispatch = dispatch.clone();
        use_effect_with(fetch_favorites, move |&fetch_favorites| {
            spawn_local(async move {
                if !fetch_favorites {
                    return;
                }
                let client = MachiMeshiClient::shared();
                let me = match client.me().await {
                    Ok(me) => me,
                    Err(err) => {
                        surface_error(&err, &dispatch, &error);
                        return;
                    }
                };
                match client.list_menu_favorites(me.id).await {
                    Ok(listing) => menus.set(Some(listing)),
                    Err(err) => surface_error(&err, &dispatch, &error),
                }
                match client.list_shop_favorites(me.id).await {
                    Ok(listing) => shops.set(Some(listing)),
                    Err(err) => surface_error(&err, &dispatch, &error),
                }
            });
            || ()
        });
    }

    let select_tab = |target: FavoriteTab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };

    if !fetch_favorites {
        return html! {
            <div class="max-w-5xl mx-auto">
                <h1 class="text-2xl font-semibold my-4">{"Favorites"}</h1>
                <p class="text-center text-base-content/70 p-8">
                    {"Favorites are kept on general accounts. Switch to a general account to browse yours."}
                </p>
            </div>
        };
    }

    let body = match *tab {
        FavoriteTab::Menus => match &*menus {
            None => html! { <div class="flex justify-center p-8"><span class="loading loading-spinner"></span></div> },
            Some(listing) if listing.is_empty() => html! {
                <p class="text-center text-base-content/70 p-8">{"No favorite menus yet."}</p>
            },
            Some(listing) => html! {
                <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                    { for listing.iter().map(|menu| html! { <MenuCard menu={menu.clone()} /> }) }
                </div>
            },
        },
        FavoriteTab::Shops => match &*shops {
            None => html! { <div class="flex justify-center p-8"><span class="loading loading-spinner"></span></div> },
            Some(listing) if listing.is_empty() => html! {
                <p class="text-center text-base-content/70 p-8">{"No favorite shops yet."}</p>
            },
            Some(listing) => html! {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    { for listing.iter().map(|shop| html! { <ShopCard shop={shop.clone()} /> }) }
                </div>
            },
        },
    };

    html! {
        <div class="max-w-5xl mx-auto">
            <h1 class="text-2xl font-semibold my-4">{"Favorites"}</h1>
            <ErrorBanner message={(*error).clone()} />
            <div class="tabs tabs-boxed mb-4">
                <button
                    class={if *tab == FavoriteTab::Menus { "tab tab-active" } else { "tab" }}
                    onclick={select_tab(FavoriteTab::Menus)}
                >
                    {"Menus"}
                </button>
                <button
                    class={if *tab == FavoriteTab::Shops { "tab tab-active" } else { "tab" }}
                    onclick={select_tab(FavoriteTab::Shops)}
                >
                    {"Shops"}
                </button>
            </div>
            {body}
        </div>
    }
}
