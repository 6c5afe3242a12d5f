use crate::routes::MainRoute;
use shared::models::Menu;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct MenuCardProps {
    pub menu: Menu,
}

/// Card for one menu item in a listing, linking to its detail page.
#[function_component(MenuCard)]
pub fn menu_card(props: &MenuCardProps) -> Html {
    let menu = &props.menu;
    let image = menu.image_url.clone().unwrap_or_default();

    html! {
        <Link<MainRoute> to={MainRoute::MenuDetail { id: menu.id }} classes="card bg-base-100 shadow hover:shadow-lg">
            if !image.is_empty() {
                <figure><img src={image} alt={menu.name.clone()} class="h-40 w-full object-cover" /></figure>
            }
            <div class="card-body p-4">
                <h3 class="card-title text-base">{&menu.name}</h3>
                if let Some(category) = &menu.category {
                    <span class="badge badge-ghost">{category.clone()}</span>
                }
                <div class="flex justify-between items-center">
                    <span class="font-semibold">{format!("¥{}", menu.price)}</span>
                    if !menu.is_available {
                        <span class="badge badge-warning">{"Sold out"}</span>
                    }
                </div>
            </div>
        </Link<MainRoute>>
    }
}
