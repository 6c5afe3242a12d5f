use crate::api::{ApiError, MachiMeshiClient};
use crate::routes::MainRoute;
use crate::session::store::{self, SessionState};
use shared::models::{LoginRequest, ShopLoginRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

/// Which kind of account the visitor is signing into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccountKind {
    General,
    Shop,
}

/// Sign-in page with a general/shop account switch.
///
/// General accounts sign in by email, shop accounts by username. On success
/// the raw `access_token` and `user_type` from the response are handed to
/// the session store, which normalizes the role and publishes the change.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (_session, dispatch) = use_store::<SessionState>();
    let kind = use_state(|| AccountKind::General);
    let identifier = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let kind_handle = kind.clone();
        let identifier_handle = identifier.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let dispatch = dispatch;
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let kind_value = *kind_handle;
            let identifier_value = (*identifier_handle).clone();
            let password_value = (*password_handle).clone();
            loading_handle.set(true);
            error_handle.set(None);
            let dispatch = dispatch.clone();
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let client = MachiMeshiClient::shared();
                let result = match kind_value {
                    AccountKind::General => {
                        client
                            .login(&LoginRequest {
                                email: identifier_value,
                                password: password_value,
                            })
                            .await
                    }
                    AccountKind::Shop => {
                        client
                            .shop_login(&ShopLoginRequest {
                                username: identifier_value,
                                password: password_value,
                            })
                            .await
                    }
                };
                match result {
                    Ok(response) => {
                        store::set_session(&dispatch, &response.access_token, &response.user_type);
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Home);
                        }
                    }
                    Err(ApiError::Unauthorized | ApiError::Message(_)) => {
                        error_ref.set(Some("Invalid credentials".to_string()));
                    }
                    Err(err) => error_ref.set(Some(err.to_string())),
                }
                loading_ref.set(false);
            });
        })
    };

    let on_identifier_change = {
        let identifier = identifier.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                identifier.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let select_kind = |target: AccountKind| {
        let kind = kind.clone();
        Callback::from(move |_: MouseEvent| kind.set(target))
    };

    let is_busy = *loading;
    let disable_submit = (*identifier).is_empty() || (*password).is_empty() || is_busy;
    let identifier_label = match *kind {
        AccountKind::General => "Email",
        AccountKind::Shop => "Username",
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in"}</h2>
                    <div class="tabs tabs-boxed">
                        <button
                            type="button"
                            class={if *kind == AccountKind::General { "tab tab-active" } else { "tab" }}
                            onclick={select_kind(AccountKind::General)}
                        >
                            {"General"}
                        </button>
                        <button
                            type="button"
                            class={if *kind == AccountKind::Shop { "tab tab-active" } else { "tab" }}
                            onclick={select_kind(AccountKind::Shop)}
                        >
                            {"Shop"}
                        </button>
                    </div>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="identifier">
                            <span class="label-text">{identifier_label}</span>
                        </label>
                        <input
                            id="identifier"
                            class="input input-bordered"
                            type={if *kind == AccountKind::General { "email" } else { "text" }}
                            required=true
                            value={(*identifier).clone()}
                            oninput={on_identifier_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                    <div class="text-sm text-center mt-2">
                        <Link<MainRoute> to={MainRoute::Register} classes="link">
                            {"Create an account"}
                        </Link<MainRoute>>
                    </div>
                </form>
            </div>
        </div>
    }
}
