#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)] // TODO(deps-001): remove once transitive dependencies converge.
// View components are one long html! block each, page types repeat their
// module names (pages::login::LoginPage), and every client call can fail
// with the one ApiError the pages already surface.
#![allow(
    clippy::too_many_lines,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

//! MachiMeshi web client: browse shops and menus, keep favorites, and manage
//! shop listings, with page access gated on the session role.

mod api;
mod app;
mod components;
mod containers;
mod language;
mod pages;
mod routes;
mod session;

#[cfg(test)]
mod api_test;
#[cfg(test)]
mod routes_test;

use app::App;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::supported_languages;
use session::store::SessionState;
use std::collections::HashMap;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::Dispatch;
use yewdux::YewduxRoot;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let cx = yewdux::Context::new();
    Dispatch::<SessionState>::new(&cx).set(SessionState::default());
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();

    let config = I18nProviderConfig {
        translations,
        default_language: "en".to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    // Panic payloads are truncated by default; log them in full.
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::log_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::log_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::log_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::log_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    web_sys::console::log_1(&"Starting MachiMeshi".into());

    Renderer::<InternationalApp>::new().render();
}
