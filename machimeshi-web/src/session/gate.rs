//! The reusable auth gate every routed page is wrapped in.

use crate::components::loading::Loading;
use crate::routes::MainRoute;
use crate::session::policy::{AccessDecision, RouteAccess, evaluate};
use crate::session::store::SessionState;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub struct GatedProps {
    /// The route's access requirements.
    pub access: RouteAccess,
    pub children: Children,
}

/// Applies the access policy table before rendering its children.
///
/// While the session resolves, a neutral loading frame is rendered and no
/// redirect is issued. Once resolved, at most one redirect happens per
/// mount; `Redirect` navigates during the render it is returned from, so
/// protected children never appear in that frame. Because the session store
/// is subscribed, a `clear_session` (logout or 401 handling) re-evaluates
/// the gate without any polling.
#[function_component(Gated)]
pub fn gated(props: &GatedProps) -> Html {
    let (session, _) = use_store::<SessionState>();

    match evaluate(props.access, &session) {
        AccessDecision::Loading => html! { <Loading /> },
        AccessDecision::RedirectToLogin => {
            html! { <Redirect<MainRoute> to={MainRoute::Login} /> }
        }
        AccessDecision::RedirectHome => html! { <Redirect<MainRoute> to={MainRoute::Home} /> },
        AccessDecision::Render => html! { <>{ props.children.clone() }</> },
    }
}
