use crate::routes::{MainRoute, switch};
use crate::session::store::{self, SessionState};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// App shell: resolves the session once on mount, then routes.
///
/// The store starts in the resolving phase, so every gate shows its loading
/// frame until this effect has read the cookies. That ordering is what keeps
/// protected content from flashing before the redirect decision.
#[function_component(App)]
pub fn app() -> Html {
    let (_session, dispatch) = use_store::<SessionState>();

    use_effect_with((), move |()| {
        dispatch.set(store::resolve());
        || ()
    });

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
