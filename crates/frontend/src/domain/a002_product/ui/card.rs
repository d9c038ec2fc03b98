use contracts::domain::a002_product::Product;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::money::format_price;

/// Asset substituted when a product image did not resolve. Products keep
/// their listing either way.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

/// Grid card shared by the featured grid and the product list.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let image_url = product
        .image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let alt_name = product.name.clone();

    view! {
        <li class="bg-white rounded shadow-sm p-4">
            <A href=format!("/product/{}", product.id)>
                <div class="flex justify-center items-center h-[200px]">
                    <img
                        src=image_url
                        alt=alt_name
                        class="h-[150px] w-[150px] object-cover transition duration-500 hover:scale-105"
                    />
                </div>
            </A>
            <div class="mt-2 text-center">
                <h3 class="text-sm font-semibold text-gray-800">{product.name.clone()}</h3>
                <p class="text-lg text-gray-600">{format_price(product.price)}</p>
            </div>
        </li>
    }
}
