use crate::api::MachiMeshiClient;
use crate::components::error_banner::ErrorBanner;
use crate::components::menu_card::MenuCard;
use crate::pages::surface_error;
use crate::session::store::SessionState;
use shared::models::{MenuPage, MenuQuery};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_store;

/// Home page: the paginated menu listing with a search box.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (_session, dispatch) = use_store::<SessionState>();
    let listing = use_state(|| None::<MenuPage>);
    let search = use_state(String::new);
    let submitted_search = use_state(String::new);
    let page = use_state(|| 1_u32);
    let error = use_state(|| None::<String>);

    {
        let listing = listing.clone();
        let error = error.clone();
        let dispatch = dispatch.clone();
        let deps = ((*submitted_search).clone(), *page);
        use_effect_with(deps, move |(search_value, page_value)| {
            let query = MenuQuery {
                page: *page_value,
                search: if search_value.is_empty() {
                    None
                } else {
                    Some(search_value.clone())
                },
                ..MenuQuery::default()
            };
            spawn_local(async move {
                let client = MachiMeshiClient::shared();
                match client.list_menus(&query).await {
                    Ok(result) => {
                        error.set(None);
                        listing.set(Some(result));
                    }
                    Err(err) => surface_error(&err, &dispatch, &error),
                }
            });
            || ()
        });
    }

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };

    let on_search_submit = {
        let search = search.clone();
        let submitted_search = submitted_search.clone();
        let page = page.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            page.set(1);
            submitted_search.set((*search).clone());
        })
    };

    let total_pages = listing.as_ref().map_or(1, |result| {
        let per_page = i64::from(result.per_page.max(1));
        // Signed `div_ceil` is unstable; this is equivalent for `per_page > 0`.
        (result.total.div_euclid(per_page) + i64::from(result.total.rem_euclid(per_page) != 0))
            .max(1)
    });
    let current_page = *page;

    let go_to = |target: u32| {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set(target))
    };

    html! {
        <div class="max-w-5xl mx-auto">
            <form class="join w-full my-4" onsubmit={on_search_submit}>
                <input
                    class="input input-bordered join-item flex-grow"
                    type="search"
                    placeholder="Search menus"
                    value={(*search).clone()}
                    oninput={on_search_input}
                />
                <button class="btn btn-primary join-item" type="submit">{"Search"}</button>
            </form>
            <ErrorBanner message={(*error).clone()} />
            {
                match &*listing {
                    None => html! { <div class="flex justify-center p-8"><span class="loading loading-spinner"></span></div> },
                    Some(result) if result.items.is_empty() => html! {
                        <p class="text-center text-base-content/70 p-8">{"No menus found."}</p>
                    },
                    Some(result) => html! {
                        <>
                            <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                                { for result.items.iter().map(|menu| html! {
                                    <MenuCard menu={menu.clone()} />
                                }) }
                            </div>
                            <div class="join flex justify-center my-6">
                                <button
                                    class="join-item btn"
                                    disabled={current_page <= 1}
                                    onclick={go_to(current_page.saturating_sub(1))}
                                >
                                    {"«"}
                                </button>
                                <button class="join-item btn btn-disabled">
                                    {format!("Page {current_page} / {total_pages}")}
                                </button>
                                <button
                                    class="join-item btn"
                                    disabled={i64::from(current_page) >= total_pages}
                                    onclick={go_to(current_page + 1)}
                                >
                                    {"»"}
                                </button>
                            </div>
                        </>
                    },
                }
            }
        </div>
    }
}
