use crate::api::MachiMeshiClient;
use crate::routes::MainRoute;
use shared::models::RegisterUserRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;

/// Registration page for general user accounts.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let username = use_state(String::new);
    let email = use_state(String::new);
    let address = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

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
    let on_address = bind_input(&address);
    let on_password = bind_input(&password);

    let onsubmit = {
        let username = username.clone();
        let email = email.clone();
        let address = address.clone();
        let password = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = RegisterUserRequest {
                username: (*username).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                address: if (*address).is_empty() {
                    None
                } else {
                    Some((*address).clone())
                },
            };
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let client = MachiMeshiClient::shared();
                match client.register(&request).await {
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
    let disable_submit =
        (*username).is_empty() || (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Create an account"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
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
                        <label class="label" for="address">
                            <span class="label-text">{"Address (optional)"}</span>
                        </label>
                        <input id="address" class="input input-bordered" type="text"
                            value={(*address).clone()} oninput={on_address} />
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
                            {if is_busy { "Creating..." } else { "Create account" }}
                        </button>
                    </div>
                    <div class="text-sm text-center mt-2">
                        <Link<MainRoute> to={MainRoute::RegisterShop} classes="link">
                            {"Register a shop account instead"}
                        </Link<MainRoute>>
                    </div>
                </form>
            </div>
        </div>
    }
}
