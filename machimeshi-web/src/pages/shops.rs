use crate::api::MachiMeshiClient;
use crate::components::error_banner::ErrorBanner;
use crate::components::shop_card::ShopCard;
use crate::pages::surface_error;
use crate::session::store::SessionState;
use shared::models::{Area, Shop};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yewdux::prelude::use_store;

/// Shop listing with an area filter.
#[function_component(ShopsPage)]
pub fn shops_page() -> Html {
    let (_session, dispatch) = use_store::<SessionState>();
    let shops = use_state(|| None::<Vec<Shop>>);
    let areas = use_state(Vec::<Area>::new);
    let area_filter = use_state(|| None::<Uuid>);
    let error = use_state(|| None::<String>);

    {
        let areas = areas.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = MachiMeshiClient::shared();
                if let Ok(listing) = client.list_areas().await {
                    areas.set(listing);
                }
            });
            || ()
        });
    }

    {
        let shops = shops.clone();
        let error = error.clone();
        let dispatch = dispatch.clone();
        use_effect_with(*area_filter, move |&area_id| {
            spawn_local(async move {
                let client = MachiMeshiClient::shared();
                match client.list_shops(area_id).await {
                    Ok(listing) => {
                        error.set(None);
                        shops.set(Some(listing));
                    }
                    Err(err) => surface_error(&err, &dispatch, &error),
                }
            });
            || ()
        });
    }

    let on_area_change = {
        let area_filter = area_filter.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                area_filter.set(Uuid::parse_str(&select.value()).ok());
            }
        })
    };

    html! {
        <div class="max-w-5xl mx-auto">
            <div class="flex items-center justify-between my-4">
                <h1 class="text-2xl font-semibold">{"Shops"}</h1>
                <select class="select select-bordered" onchange={on_area_change}>
                    <option value="" selected={area_filter.is_none()}>{"All areas"}</option>
                    { for areas.iter().map(|area| html! {
                        <option value={area.id.to_string()} selected={*area_filter == Some(area.id)}>
                            {area.name.clone()}
                        </option>
                    }) }
                </select>
            </div>
            <ErrorBanner message={(*error).clone()} />
            {
                match &*shops {
                    None => html! { <div class="flex justify-center p-8"><span class="loading loading-spinner"></span></div> },
                    Some(listing) if listing.is_empty() => html! {
                        <p class="text-center text-base-content/70 p-8">{"No shops in this area yet."}</p>
                    },
                    Some(listing) => html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            { for listing.iter().map(|shop| html! {
                                <ShopCard shop={shop.clone()} />
                            }) }
                        </div>
                    },
                }
            }
        </div>
    }
}
