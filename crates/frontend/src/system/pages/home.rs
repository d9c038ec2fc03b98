use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use contracts::domain::common::RemoteState;
use contracts::usecases::u101_load_catalog::{load_categories, load_featured};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_category::ui::carousel::CategoryCarousel;
use crate::domain::a002_product::ui::card::ProductCard;
use crate::remote::FirestoreGateway;
use crate::shared::cancel::CancelToken;

/// Home page: category carousel plus the four most recent products.
///
/// The carousel data set drives the whole page: while it loads the page
/// shows only the loading line, and a failed collection fetch replaces the
/// page with the error message. Featured-grid failures are logged and leave
/// the grid empty.
#[component]
pub fn HomePage() -> impl IntoView {
    let gateway = expect_context::<FirestoreGateway>();
    let (categories, set_categories) = signal(RemoteState::<Vec<Category>>::Loading);
    let (featured, set_featured) = signal(Vec::<Product>::new());

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    {
        let gateway = gateway.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            let next = match load_categories(&gateway).await {
                Ok(list) => RemoteState::Ready(list),
                Err(e) => RemoteState::Failed(e.to_string()),
            };
            if !cancel.is_cancelled() {
                set_categories.set(next);
            }
        });
    }

    {
        let gateway = gateway.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            match load_featured(&gateway).await {
                Ok(list) => {
                    if !cancel.is_cancelled() {
                        set_featured.set(list);
                    }
                }
                Err(e) => log::error!("failed to load featured products: {e}"),
            }
        });
    }

    view! {
        <div class="container mx-auto mt-5">
            {move || match categories.get() {
                RemoteState::Loading => view! { <p class="p-8">"Loading..."</p> }.into_any(),
                RemoteState::Failed(message) => {
                    view! { <p class="p-8">"Error: " {message}</p> }.into_any()
                }
                RemoteState::Ready(list) => {
                    view! {
                        <CategoryCarousel categories=list />
                        <section class="mt-8">
                            <h2 class="text-2xl font-extrabold text-gray-900 sm:text-4xl text-center mb-6">
                                "Featured Products"
                            </h2>
                            <ul class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                                {move || {
                                    featured
                                        .get()
                                        .into_iter()
                                        .map(|product| view! { <ProductCard product=product /> })
                                        .collect_view()
                                }}
                            </ul>
                        </section>
                        <div class="h-12"></div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
