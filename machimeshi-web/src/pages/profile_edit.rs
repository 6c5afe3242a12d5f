use crate::api::MachiMeshiClient;
use crate::components::error_banner::ErrorBanner;
use crate::pages::surface_error;
use crate::routes::MainRoute;
use crate::session::profile_cache::{self, CachedProfile};
use crate::session::store::SessionState;
use shared::models::UpdateProfileRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

/// Edit the general profile, prefilled from the current values.
#[function_component(ProfileEditPage)]
pub fn profile_edit_page() -> Html {
    let (_session, dispatch) = use_store::<SessionState>();
    let username = use_state(String::new);
    let email = use_state(String::new);
    let address = use_state(String::new);
    let loaded = use_state(|| false);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let navigator = use_navigator();

    {
        let username = username.clone();
        let email = email.clone();
        let address = address.clone();
        let loaded = loaded.clone();
        let error = error.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = MachiMeshiClient::shared();
                match client.me().await {
                    Ok(me) => {
                        username.set(me.username.clone());
                        email.set(me.email.clone());
                        address.set(me.address.clone().unwrap_or_default());
                        loaded.set(true);
                    }
                    Err(err) => surface_error(&err, &dispatch, &error),
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
    let on_address = bind_input(&address);

    let onsubmit = {
        let username = username.clone();
        let email = email.clone();
        let address = address.clone();
        let error_handle = error.clone();
        let saving_handle = saving.clone();
        let dispatch = dispatch;
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = UpdateProfileRequest {
                username: Some((*username).clone()),
                email: Some((*email).clone()),
                address: if (*address).is_empty() {
                    None
                } else {
                    Some((*address).clone())
                },
            };
            saving_handle.set(true);
            error_handle.set(None);
            let saving_ref = saving_handle.clone();
            let error_ref = error_handle.clone();
            let dispatch = dispatch.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let client = MachiMeshiClient::shared();
                match client.update_me(&request).await {
                    Ok(updated) => {
                        profile_cache::store(&CachedProfile::from(&updated));
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Profile);
                        }
                    }
                    Err(err) => surface_error(&err, &dispatch, &error_ref),
                }
                saving_ref.set(false);
            });
        })
    };

    let disable_submit = !*loaded || (*username).is_empty() || (*email).is_empty() || *saving;

    html! {
        <div class="max-w-xl mx-auto">
            <h1 class="text-2xl font-semibold my-4">{"Edit profile"}</h1>
            <ErrorBanner message={(*error).clone()} />
            <form class="space-y-3" onsubmit={onsubmit}>
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
                        <span class="label-text">{"Address"}</span>
                    </label>
                    <input id="address" class="input input-bordered" type="text"
                        value={(*address).clone()} oninput={on_address} />
                </div>
                <div class="form-control mt-6">
                    <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                        {if *saving { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
