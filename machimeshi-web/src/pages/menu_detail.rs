use crate::api::MachiMeshiClient;
use crate::components::error_banner::ErrorBanner;
use crate::pages::surface_error;
use crate::routes::MainRoute;
use crate::session::store::SessionState;
use shared::models::{Menu, MenuFavoriteRequest, Role};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub struct MenuDetailProps {
    pub id: Uuid,
}

/// One menu item with a favorite toggle for general users.
#[function_component(MenuDetailPage)]
pub fn menu_detail_page(props: &MenuDetailProps) -> Html {
    let (session, dispatch) = use_store::<SessionState>();
    let menu = use_state(|| None::<Menu>);
    let user_id = use_state(|| None::<Uuid>);
    let is_favorite = use_state(|| false);
    let error = use_state(|| None::<String>);

    let is_general_user = session.role() == Some(Role::GeneralUser);

    {
        let menu = menu.clone();
        let user_id = user_id.clone();
        let is_favorite = is_favorite.clone();
        let error = error.clone();
        let dispatch = dispatch.clone();
        let menu_id = props.id;
        use_effect_with((menu_id, is_general_user), move |&(menu_id, is_general_user)| {
            spawn_local(async move {
                let client = MachiMeshiClient::shared();
                match client.get_menu(menu_id).await {
                    Ok(detail) => menu.set(Some(detail)),
                    Err(err) => {
                        surface_error(&err, &dispatch, &error);
                        return;
                    }
                }
                if is_general_user {
                    if let Ok(me) = client.me().await {
                        user_id.set(Some(me.id));
                        if let Ok(status) = client.check_menu_favorite(me.id, menu_id).await {
                            is_favorite.set(status.is_favorite);
                        }
                    }
                }
            });
            || ()
        });
    }

    let on_toggle_favorite = {
        let user_id = user_id.clone();
        let is_favorite = is_favorite.clone();
        let error = error.clone();
        let dispatch = dispatch;
        let menu_id = props.id;
        Callback::from(move |_: MouseEvent| {
            let Some(user_id_value) = *user_id else {
                return;
            };
            let request = MenuFavoriteRequest {
                user_id: user_id_value,
                menu_id,
            };
            let currently = *is_favorite;
            let is_favorite = is_favorite.clone();
            let error = error.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let client = MachiMeshiClient::shared();
                let result = if currently {
                    client.remove_menu_favorite(&request).await
                } else {
                    client.add_menu_favorite(&request).await
                };
                match result {
                    Ok(_) => is_favorite.set(!currently),
                    Err(err) => surface_error(&err, &dispatch, &error),
                }
            });
        })
    };

    html! {
        <div class="max-w-3xl mx-auto">
            <ErrorBanner message={(*error).clone()} />
            {
                match &*menu {
                    None => html! { <div class="flex justify-center p-8"><span class="loading loading-spinner"></span></div> },
                    Some(detail) => html! {
                        <>
                            if let Some(image) = &detail.image_url {
                                <img src={image.clone()} alt={detail.name.clone()} class="w-full h-64 object-cover rounded-lg" />
                            }
                            <div class="flex items-center justify-between my-4">
                                <h1 class="text-2xl font-semibold">{&detail.name}</h1>
                                if is_general_user && user_id.is_some() {
                                    <button class="btn btn-ghost btn-circle" onclick={on_toggle_favorite.clone()}>
                                        <Icon
                                            icon_id={if *is_favorite { IconId::HeroiconsSolidHeart } else { IconId::HeroiconsOutlineHeart }}
                                            class={if *is_favorite { "w-6 h-6 text-error" } else { "w-6 h-6" }}
                                        />
                                    </button>
                                }
                            </div>
                            <div class="flex items-center gap-3">
                                <span class="text-xl font-semibold">{format!("¥{}", detail.price)}</span>
                                if let Some(category) = &detail.category {
                                    <span class="badge badge-ghost">{category.clone()}</span>
                                }
                                if !detail.is_available {
                                    <span class="badge badge-warning">{"Sold out"}</span>
                                }
                            </div>
                            if let Some(description) = &detail.description {
                                <p class="my-4 text-base-content/80">{description.clone()}</p>
                            }
                            <Link<MainRoute> to={MainRoute::ShopDetail { id: detail.shop_id }} classes="link">
                                {"View the shop"}
                            </Link<MainRoute>>
                        </>
                    },
                }
            }
        </div>
    }
}
