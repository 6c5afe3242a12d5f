use crate::api::MachiMeshiClient;
use crate::pages::surface_error;
use crate::routes::MainRoute;
use crate::session::store::SessionState;
use js_sys::Uint8Array;
use shared::models::CreateMenuRequest;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

/// Shop-only page for posting a new menu item, with an optional image.
#[function_component(PostPage)]
pub fn post_page() -> Html {
    let (_session, dispatch) = use_store::<SessionState>();
    let name = use_state(String::new);
    let description = use_state(String::new);
    let price = use_state(String::new);
    let category = use_state(String::new);
    let available = use_state(|| true);
    let file = use_state(|| None::<File>);
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

    let on_name = bind_input(&name);
    let on_description = bind_input(&description);
    let on_price = bind_input(&price);
    let on_category = bind_input(&category);

    let on_available = {
        let available = available.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                available.set(input.checked());
            }
        })
    };

    let on_file_change = {
        let file = file.clone();
        Callback::from(move |event: Event| {
            let selected = event
                .target_dyn_into::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            file.set(selected);
        })
    };

    let onsubmit = {
        let name = name.clone();
        let description = description.clone();
        let price = price.clone();
        let category = category.clone();
        let available = available.clone();
        let file = file.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let dispatch = dispatch;
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Ok(price_value) = price.parse::<i32>() else {
                error_handle.set(Some("Price must be a whole number of yen".to_string()));
                return;
            };
            if price_value < 0 {
                error_handle.set(Some("Price must not be negative".to_string()));
                return;
            }
            let name_value = (*name).clone();
            let description_value = (*description).clone();
            let category_value = (*category).clone();
            let available_value = *available;
            let file_value = (*file).clone();
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let dispatch = dispatch.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let client = MachiMeshiClient::shared();

                // Upload the image first so the menu row can carry its URL.
                let mut image_url = None;
                if let Some(selected) = file_value {
                    let buffer = match JsFuture::from(selected.array_buffer()).await {
                        Ok(buffer) => buffer,
                        Err(_) => {
                            error_ref.set(Some("Could not read the selected image".to_string()));
                            loading_ref.set(false);
                            return;
                        }
                    };
                    let bytes = Uint8Array::new(&buffer).to_vec();
                    match client
                        .upload_image(&selected.name(), &selected.type_(), bytes)
                        .await
                    {
                        Ok(upload) => image_url = Some(upload.url),
                        Err(err) => {
                            surface_error(&err, &dispatch, &error_ref);
                            loading_ref.set(false);
                            return;
                        }
                    }
                }

                let request = CreateMenuRequest {
                    name: name_value,
                    description: if description_value.is_empty() {
                        None
                    } else {
                        Some(description_value)
                    },
                    price: price_value,
                    category: if category_value.is_empty() {
                        None
                    } else {
                        Some(category_value)
                    },
                    image_url,
                    is_available: available_value,
                };
                match client.create_menu(&request).await {
                    Ok(created) => {
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::MenuDetail { id: created.id });
                        }
                    }
                    Err(err) => surface_error(&err, &dispatch, &error_ref),
                }
                loading_ref.set(false);
            });
        })
    };

    let is_busy = *loading;
    let disable_submit = (*name).is_empty() || (*price).is_empty() || is_busy;

    html! {
        <div class="max-w-xl mx-auto">
            <h1 class="text-2xl font-semibold my-4">{"Post a menu item"}</h1>
            <form class="space-y-3" onsubmit={onsubmit}>
                if let Some(message) = &*error {
                    <div class="alert alert-error">
                        <span>{message.clone()}</span>
                    </div>
                }
                <div class="form-control">
                    <label class="label" for="name">
                        <span class="label-text">{"Name"}</span>
                    </label>
                    <input id="name" class="input input-bordered" type="text"
                        required=true value={(*name).clone()} oninput={on_name} />
                </div>
                <div class="form-control">
                    <label class="label" for="description">
                        <span class="label-text">{"Description"}</span>
                    </label>
                    <input id="description" class="input input-bordered" type="text"
                        value={(*description).clone()} oninput={on_description} />
                </div>
                <div class="form-control">
                    <label class="label" for="price">
                        <span class="label-text">{"Price (yen)"}</span>
                    </label>
                    <input id="price" class="input input-bordered" type="number" min="0"
                        required=true value={(*price).clone()} oninput={on_price} />
                </div>
                <div class="form-control">
                    <label class="label" for="category">
                        <span class="label-text">{"Category"}</span>
                    </label>
                    <input id="category" class="input input-bordered" type="text"
                        value={(*category).clone()} oninput={on_category} />
                </div>
                <div class="form-control">
                    <label class="label cursor-pointer justify-start gap-3">
                        <input type="checkbox" class="checkbox" checked={*available} onchange={on_available} />
                        <span class="label-text">{"Available now"}</span>
                    </label>
                </div>
                <div class="form-control">
                    <label class="label" for="image">
                        <span class="label-text">{"Image"}</span>
                    </label>
                    <input id="image" class="file-input file-input-bordered" type="file"
                        accept="image/*" onchange={on_file_change} />
                </div>
                <div class="form-control mt-6">
                    <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                        {if is_busy { "Posting..." } else { "Post" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
