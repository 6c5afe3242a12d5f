use crate::containers::footer::ConditionalFooter;
use crate::containers::header::Header;
use crate::routes::MainRoute;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

/// App chrome: header on top, role-conditional footer navigation below.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-base-100">
            <Header />
            <main class="flex-grow p-4 pb-20">
                {props.children.clone()}
            </main>
            <ConditionalFooter current_route={props.current_route.clone()} />
        </div>
    }
}
