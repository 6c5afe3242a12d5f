use crate::routes::MainRoute;
use shared::models::Shop;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct ShopCardProps {
    pub shop: Shop,
}

/// Card for one shop in a listing, linking to its detail page.
#[function_component(ShopCard)]
pub fn shop_card(props: &ShopCardProps) -> Html {
    let shop = &props.shop;
    let image = shop.image_path.clone().unwrap_or_default();

    html! {
        <Link<MainRoute> to={MainRoute::ShopDetail { id: shop.id }} classes="card bg-base-100 shadow hover:shadow-lg">
            if !image.is_empty() {
                <figure><img src={image} alt={shop.name.clone()} class="h-40 w-full object-cover" /></figure>
            }
            <div class="card-body p-4">
                <h3 class="card-title text-base">{&shop.name}</h3>
                if let Some(address) = &shop.address {
                    <p class="text-sm text-base-content/70">{address.clone()}</p>
                }
            </div>
        </Link<MainRoute>>
    }
}
