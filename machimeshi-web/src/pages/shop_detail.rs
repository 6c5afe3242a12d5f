use crate::api::MachiMeshiClient;
use crate::components::error_banner::ErrorBanner;
use crate::components::menu_card::MenuCard;
use crate::pages::surface_error;
use crate::session::store::SessionState;
use shared::models::{Menu, MenuQuery, Role, Shop};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub struct ShopDetailProps {
    pub id: Uuid,
}

/// One shop: its listing details, favorite toggle, and menu items.
#[function_component(ShopDetailPage)]
pub fn shop_detail_page(props: &ShopDetailProps) -> Html {
    let (session, dispatch) = use_store::<SessionState>();
    let shop = use_state(|| None::<Shop>);
    let menus = use_state(Vec::<Menu>::new);
    let user_id = use_state(|| None::<Uuid>);
    let is_favorite = use_state(|| false);
    let error = use_state(|| None::<String>);

    let is_general_user = session.role() == Some(Role::GeneralUser);

    {
        let shop = shop.clone();
        let menus = menus.clone();
        let user_id = user_id.clone();
        let is_favorite = is_favorite.clone();
        let error = error.clone();
        let dispatch = dispatch.clone();
        let shop_id = props.id;
        use_effect_with((shop_id, is_general_user), move |&(shop_id, is_general_user)| {
            spawn_local(async move {
                let client = MachiMeshiClient::shared();
                match client.get_shop(shop_id).await {
                    Ok(detail) => shop.set(Some(detail)),
                    Err(err) => {
                        surface_error(&err, &dispatch, &error);
                        return;
                    }
                }
                let query = MenuQuery {
                    shop_id: Some(shop_id),
                    ..MenuQuery::default()
                };
                if let Ok(page) = client.list_menus(&query).await {
                    menus.set(page.items);
                }
                if is_general_user {
                    if let Ok(me) = client.me().await {
                        user_id.set(Some(me.id));
                        if let Ok(status) = client.shop_favorite_status(me.id, shop_id).await {
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
        let shop_id = props.id;
        Callback::from(move |_: MouseEvent| {
            let Some(user_id_value) = *user_id else {
                return;
            };
            let currently = *is_favorite;
            let is_favorite = is_favorite.clone();
            let error = error.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let client = MachiMeshiClient::shared();
                let result = if currently {
                    client.remove_shop_favorite(user_id_value, shop_id).await
                } else {
                    client.add_shop_favorite(user_id_value, shop_id).await
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
                match &*shop {
                    None => html! { <div class="flex justify-center p-8"><span class="loading loading-spinner"></span></div> },
                    Some(detail) => html! {
                        <>
                            if let Some(image) = &detail.image_path {
                                <img src={image.clone()} alt={detail.name.clone()} class="w-full h-56 object-cover rounded-lg" />
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
                            if let Some(text) = &detail.detail {
                                <p class="text-base-content/80">{text.clone()}</p>
                            }
                            <ul class="my-4 space-y-1 text-sm text-base-content/70">
                                if let Some(address) = &detail.address {
                                    <li>{format!("Address: {address}")}</li>
                                }
                                if let Some(phone) = &detail.phone {
                                    <li>{format!("Phone: {phone}")}</li>
                                }
                                if let Some(homepage) = &detail.homepage_url {
                                    <li><a class="link" href={homepage.clone()}>{homepage.clone()}</a></li>
                                }
                            </ul>
                            <h2 class="text-xl font-semibold mt-6 mb-2">{"Menu"}</h2>
                            if menus.is_empty() {
                                <p class="text-base-content/70">{"No menu items posted yet."}</p>
                            } else {
                                <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                                    { for menus.iter().map(|menu| html! {
                                        <MenuCard menu={menu.clone()} />
                                    }) }
                                </div>
                            }
                        </>
                    },
                }
            }
        </div>
    }
}
