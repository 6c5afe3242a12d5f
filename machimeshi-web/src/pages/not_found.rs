use crate::routes::MainRoute;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Fallback page for unrecognized URLs.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] gap-4">
            <h1 class="text-4xl font-bold">{"404"}</h1>
            <p class="text-base-content/70">{"That page does not exist."}</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary btn-sm">
                {"Back to home"}
            </Link<MainRoute>>
        </div>
    }
}
