use contracts::domain::a002_product::Product;
use contracts::domain::common::RemoteState;
use contracts::usecases::u101_load_catalog::load_product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::domain::a002_product::ui::card::PLACEHOLDER_IMAGE;
use crate::remote::FirestoreGateway;
use crate::shared::cancel::CancelToken;
use crate::shared::money::format_price;

use super::model::{filled_stars, whatsapp_url, RATING_ICONS};

/// Product detail page. Fetches the routed product and renders image,
/// rating, price and the WhatsApp purchase link.
///
/// A document that does not exist leaves the page on "Loading..." instead
/// of a dedicated not-found view; only transport failures surface a
/// message.
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let gateway = expect_context::<FirestoreGateway>();
    let params = use_params_map();

    let (product, set_product) = signal(RemoteState::<Product>::Loading);

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    // Re-fetches whenever the routed identifier changes.
    Effect::new(move |_| {
        let Some(id) = params.get().get("product_id") else {
            return;
        };
        set_product.set(RemoteState::Loading);

        let gateway = gateway.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            match load_product(&gateway, &id).await {
                Ok(Some(found)) => {
                    if !cancel.is_cancelled() {
                        set_product.set(RemoteState::Ready(found));
                    }
                }
                // No such document: the page stays in its loading state.
                Ok(None) => log::warn!("product {id} does not exist"),
                Err(e) => {
                    if !cancel.is_cancelled() {
                        set_product.set(RemoteState::Failed(e.to_string()));
                    }
                }
            }
        });
    });

    view! {
        {move || match product.get() {
            RemoteState::Loading => view! { <p class="p-8">"Loading..."</p> }.into_any(),
            RemoteState::Failed(message) => {
                view! { <p class="p-8 text-red-600">"Error: " {message}</p> }.into_any()
            }
            RemoteState::Ready(found) => view! { <ProductDetail product=found /> }.into_any(),
        }}
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let image_url = product
        .image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let page_url = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let purchase_url = whatsapp_url(&page_url);

    let original_price = product
        .original_price
        .map(format_price)
        .unwrap_or_else(|| "0.00".to_string());

    view! {
        <div class="font-sans bg-white">
            <div class="p-4 lg:max-w-7xl max-w-4xl mx-auto">
                <div class="grid items-start grid-cols-1 lg:grid-cols-5 gap-12 shadow p-6 rounded-lg">
                    <div class="lg:col-span-3 w-full lg:sticky top-0 text-center">
                        <div class="px-4 py-10 rounded-lg shadow relative">
                            <img
                                src=image_url
                                alt=product.name.clone()
                                class="w-3/4 rounded object-cover mx-auto"
                            />
                        </div>

                        <div class="mt-6 flex flex-wrap justify-center gap-6 mx-auto">
                            {product
                                .additional_images
                                .iter()
                                .map(|img| {
                                    view! {
                                        <div class="w-24 h-20 flex items-center justify-center rounded-lg p-4 shadow cursor-pointer">
                                            <img src=img.clone() alt=product.name.clone() class="w-full" />
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="lg:col-span-2">
                        <h2 class="text-2xl font-extrabold text-gray-800">{product.name.clone()}</h2>

                        <div class="flex space-x-2 mt-4">
                            {(0..RATING_ICONS)
                                .map(|index| {
                                    let filled = index < filled_stars(product.rating);
                                    view! { <RatingStar filled=filled /> }
                                })
                                .collect_view()}
                            <h4 class="text-gray-800 text-base">
                                {product.reviews_count.unwrap_or(0)} " Reviews"
                            </h4>
                        </div>

                        <div class="flex flex-wrap gap-4 mt-8">
                            <p class="text-gray-800 text-3xl font-bold">
                                {format_price(product.price)}
                            </p>
                            <p class="text-gray-400 text-base">
                                <s>{original_price}</s>
                                <span class="text-sm ml-1">"Tax included"</span>
                            </p>
                        </div>

                        <div class="relative mt-8 min-h-[200px]">
                            <div class="whatsapp-button">
                                <a href=purchase_url target="_blank" rel="noopener noreferrer">
                                    "Acheter via Whatsapp"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// One rating icon; unfilled icons keep the muted fill color.
#[component]
fn RatingStar(filled: bool) -> impl IntoView {
    view! {
        <svg
            class=if filled { "w-5 fill-blue-600" } else { "w-5 fill-[#9D174D]" }
            viewBox="0 0 14 13"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d="M7 0L9.4687 3.60213L13.6574 4.83688L10.9944 8.29787L11.1145 12.6631L7 11.2L2.8855 12.6631L3.00556 8.29787L0.342604 4.83688L4.5313 3.60213L7 0Z"></path>
        </svg>
    }
}
