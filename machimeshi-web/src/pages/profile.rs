use crate::api::MachiMeshiClient;
use crate::components::error_banner::ErrorBanner;
use crate::pages::surface_error;
use crate::routes::MainRoute;
use crate::session::profile_cache::{self, CachedProfile};
use crate::session::store::SessionState;
use shared::models::{Role, ShopAccount};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

/// Profile page. Paints the cached copy immediately, then refreshes it from
/// the API; shop accounts show their shop binding instead.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let (session, dispatch) = use_store::<SessionState>();
    let profile = use_state(profile_cache::load);
    let shop_account = use_state(|| None::<ShopAccount>);
    let error = use_state(|| None::<String>);

    let is_shop = session.role() == Some(Role::ShopUser);

    {
        let profile = profile.clone();
        let shop_account = shop_account.clone();
        let error = error.clone();
        let dispatch = dispatch.clone();
        use_effect_with(is_shop, move |&is_shop| {
            spawn_local(async move {
                let client = MachiMeshiClient::shared();
                if is_shop {
                    match client.shop_me().await {
                        Ok(account) => shop_account.set(Some(account)),
                        Err(err) => surface_error(&err, &dispatch, &error),
                    }
                } else {
                    match client.me().await {
                        Ok(me) => {
                            let fresh = CachedProfile::from(&me);
                            profile_cache::store(&fresh);
                            profile.set(Some(fresh));
                        }
                        Err(err) => surface_error(&err, &dispatch, &error),
                    }
                }
            });
            || ()
        });
    }

    let field = |label: &str, value: String| -> Html {
        html! {
            <div class="py-2 border-b border-base-300">
                <div class="text-xs text-base-content/60">{label.to_string()}</div>
                <div>{value}</div>
            </div>
        }
    };

    html! {
        <div class="max-w-xl mx-auto">
            <h1 class="text-2xl font-semibold my-4">{"Profile"}</h1>
            <ErrorBanner message={(*error).clone()} />
            if is_shop {
                {
                    match &*shop_account {
                        None => html! { <div class="flex justify-center p-8"><span class="loading loading-spinner"></span></div> },
                        Some(account) => html! {
                            <div class="card bg-base-100 shadow p-4">
                                { field("Username", account.username.clone()) }
                                { field("Email", account.email.clone()) }
                                <Link<MainRoute> to={MainRoute::ShopDetail { id: account.shop_id }} classes="link mt-3">
                                    {"View your shop page"}
                                </Link<MainRoute>>
                            </div>
                        },
                    }
                }
            } else {
                {
                    match &*profile {
                        None => html! { <div class="flex justify-center p-8"><span class="loading loading-spinner"></span></div> },
                        Some(cached) => html! {
                            <div class="card bg-base-100 shadow p-4">
                                { field("Username", cached.username.clone()) }
                                { field("Email", cached.email.clone()) }
                                { field("Address", cached.address.clone().unwrap_or_else(|| "-".to_string())) }
                                <Link<MainRoute> to={MainRoute::ProfileEdit} classes="btn btn-outline btn-sm mt-4">
                                    {"Edit profile"}
                                </Link<MainRoute>>
                            </div>
                        },
                    }
                }
            }
        </div>
    }
}
