use crate::api::{ApiError, MachiMeshiClient};
use crate::components::language_selector::LanguageSelector;
use crate::routes::MainRoute;
use crate::session::profile_cache;
use crate::session::store::{self, SessionState};
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::use_store;

/// Top bar: title, notification bell with the unread badge, logout.
#[function_component(Header)]
pub fn header() -> Html {
    let (i18n, ..) = use_translation();
    let (session, dispatch) = use_store::<SessionState>();
    let navigator = use_navigator();
    let unread = use_state(|| 0_i64);

    {
        let unread = unread.clone();
        let dispatch = dispatch.clone();
        let authenticated = session.is_authenticated();
        use_effect_with(authenticated, move |&authenticated| {
            if authenticated {
                spawn_local(async move {
                    let client = MachiMeshiClient::shared();
                    match client.unread_count().await {
                        Ok(count) => unread.set(count.unread),
                        Err(ApiError::Unauthorized) => store::clear_session(&dispatch),
                        Err(_) => {}
                    }
                });
            } else {
                unread.set(0);
            }
            || ()
        });
    }

    let on_logout = {
        let dispatch = dispatch;
        let navigator = navigator;
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            store::clear_session(&dispatch);
            profile_cache::clear();
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::Login);
            }
        })
    };

    let authenticated = session.is_authenticated();

    html! {
        <nav class="navbar justify-between bg-base-300 sticky top-0 z-10">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                {i18n.t("app.title")}
            </Link<MainRoute>>
            <div class="flex items-center gap-2">
                <LanguageSelector />
                if authenticated {
                    <Link<MainRoute> to={MainRoute::Shops} classes="btn btn-ghost btn-sm">
                        {i18n.t("header.shops")}
                    </Link<MainRoute>>
                    <Link<MainRoute> to={MainRoute::Notifications} classes="btn btn-ghost btn-circle">
                        <div class="indicator">
                            <Icon icon_id={IconId::HeroiconsOutlineBell} class="w-6 h-6" />
                            if *unread > 0 {
                                <span class="badge badge-primary badge-sm indicator-item">{*unread}</span>
                            }
                        </div>
                    </Link<MainRoute>>
                    <button class="btn btn-ghost btn-sm" onclick={on_logout}>
                        {i18n.t("header.logout")}
                    </button>
                } else {
                    <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                        {i18n.t("header.login")}
                    </Link<MainRoute>>
                }
            </div>
        </nav>
    }
}
