use crate::api::MachiMeshiClient;
use crate::routes::MainRoute;
use shared::models::{RegisterShopAccountRequest, Shop};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::hooks::use_navigator;

/// Registration page for shop accounts. The account is bound to one of the
/// listed shops.
#[function_component(RegisterShopPage)]
pub fn register_shop_page() -> Html {
    let shops = use_state(Vec::<Shop>::new);
    let shop_id = use_state(String::new);
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    {
        let shops = shops.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = MachiMeshiClient::shared();
                // A failed fetch just leaves the picker empty.
                if let Ok(listing) = client.list_shops(None).await {
                    shops.set(listing);
                }
            });
            || ()
        });
    }

    let bind_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let on_username = bind_input(&username);
    let on_email = bind_input(&email);
    let on_password = bind_input(&password);

    let on_shop_change = {
        let shop_id = shop_id.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                shop_id.set(select.value());
            }
        })
    };

    let onsubmit = {
        let shop_id = shop_id.clone();
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Ok(shop_id_value) = Uuid::parse_str(&shop_id) else {
                error_handle.set(Some("Pick the shop this account manages".to_string()));
                return;
            };
            let request = RegisterShopAccountRequest {
                shop_id: shop_id_value,
                username: (*username).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let client = MachiMeshiClient::shared();
                match client.register_shop(&request).await {
                    Ok(_) => {
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Login);
                        }
                    }
                    Err(err) => error_ref.set(Some(err.to_string())),
                }
                loading_ref.set(false);
            });
        })
    };

    let is_busy = *loading;
    let disable_submit = (*shop_id).is_empty()
        || (*username).is_empty()
        || (*email).is_empty()
        || (*password).is_empty()
        || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Register a shop account"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="shop">
                            <span class="label-text">{"Shop"}</span>
                        </label>
                        <select id="shop" class="select select-bordered" onchange={on_shop_change}>
                            <option value="" selected={(*shop_id).is_empty()}>{"Select a shop"}</option>
                            { for shops.iter().map(|shop| html! {
                                <option value={shop.id.to_string()} selected={*shop_id == shop.id.to_string()}>
                                    {shop.name.clone()}
                                </option>
                            }) }
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">{"Username"}</span>
                        </label>
                        <input id="username" class="input input-bordered" type="text"
                            required=true value={(*username).clone()} oninput={on_username} />
                    </div>
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input id="email" class="input input-bordered" type="email"
                            required=true value={(*email).clone()} oninput={on_email} />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input id="password" class="input input-bordered" type="password"
                            required=true value={(*password).clone()} oninput={on_password} />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Registering..." } else { "Register" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
