pub mod state;

use contracts::domain::a002_product::listing::{apply_listing_filter, SortOption};
use contracts::domain::a002_product::Product;
use contracts::domain::common::RemoteState;
use contracts::usecases::u101_load_catalog::{load_category_names, load_products, ProductCatalog};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use wasm_bindgen::JsCast;

use crate::domain::a002_product::ui::card::ProductCard;
use crate::remote::FirestoreGateway;
use crate::shared::cancel::CancelToken;
use crate::shared::money::format_price;

use state::create_state;

/// Product list page: category dropdown, price popover, sort select and
/// the grid bound to the filter pipeline's output.
///
/// Every filter change recomputes the visible list from the full snapshot,
/// so filters never accumulate across renders.
#[component]
pub fn ProductListPage() -> impl IntoView {
    let gateway = expect_context::<FirestoreGateway>();

    // The query parameter seeds the filter once; later changes come from
    // the dropdown, not the URL.
    let query = use_query_map();
    let initial_category = query.get_untracked().get("category").unwrap_or_default();
    let state = create_state(initial_category);

    let (products, set_products) = signal(RemoteState::<ProductCatalog>::Loading);
    let (category_names, set_category_names) = signal(Vec::<String>::new());

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    {
        let gateway = gateway.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            let next = match load_products(&gateway).await {
                Ok(catalog) => RemoteState::Ready(catalog),
                Err(e) => RemoteState::Failed(e.to_string()),
            };
            if !cancel.is_cancelled() {
                set_products.set(next);
            }
        });
    }

    {
        let gateway = gateway.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            match load_category_names(&gateway).await {
                Ok(names) => {
                    if !cancel.is_cancelled() {
                        set_category_names.set(names);
                    }
                }
                // The dropdown just stays empty; the grid is unaffected.
                Err(e) => log::error!("failed to load categories: {e}"),
            }
        });
    }

    let filtered = Memo::new(move |_| match products.get() {
        RemoteState::Ready(catalog) => apply_listing_filter(&catalog.products, &state.get().filter),
        _ => Vec::<Product>::new(),
    });

    let category_dropdown = NodeRef::<leptos::html::Div>::new();
    let price_dropdown = NodeRef::<leptos::html::Div>::new();

    // Close both popovers on any press outside of them.
    let _ = window_event_listener(leptos::ev::mousedown, move |ev: leptos::ev::MouseEvent| {
        let Some(target) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
        else {
            return;
        };
        let outside = |node_ref: NodeRef<leptos::html::Div>| {
            node_ref
                .get_untracked()
                .map(|el| !el.contains(Some(&target)))
                .unwrap_or(false)
        };
        if outside(category_dropdown) {
            state.update(|s| s.is_category_open = false);
        }
        if outside(price_dropdown) {
            state.update(|s| s.is_price_open = false);
        }
    });

    view! {
        <section>
            <div class="mx-auto max-w-screen-xl px-4 py-8 sm:px-6 sm:py-12 lg:px-8">
                <header class="text-center mb-12">
                    <h2 class="text-2xl font-extrabold text-gray-900 sm:text-4xl">
                        "Catalogue des produits"
                    </h2>
                    <p class="mt-4 text-lg text-gray-600 max-w-3xl mx-auto">
                        "Explorez notre collection de produits avec des options variées et des prix compétitifs."
                    </p>
                </header>

                <div class="mt-8 flex flex-wrap items-center gap-4">
                    <div class="relative" node_ref=category_dropdown>
                        <button
                            on:click=move |_| state.update(|s| s.is_category_open = !s.is_category_open)
                            class="flex cursor-pointer items-center gap-2 border-b border-gray-400 pb-1 text-gray-900 transition hover:border-gray-600"
                        >
                            <span class="text-sm font-medium">"Catégorie"</span>
                            <Chevron rotated=Signal::derive(move || state.get().is_category_open) />
                        </button>

                        <Show when=move || state.get().is_category_open>
                            <div class="absolute mt-2 w-60 z-50 rounded border border-gray-200 bg-white">
                                <div class="p-4">
                                    <select
                                        prop:value=move || state.get().filter.selected_category
                                        on:change=move |ev| {
                                            let value = event_target_value(&ev);
                                            state.update(|s| s.filter.selected_category = value);
                                        }
                                        class="w-full rounded-md border-gray-200 shadow-sm sm:text-sm"
                                    >
                                        <option value="">"Toutes les catégories"</option>
                                        {move || {
                                            category_names
                                                .get()
                                                .into_iter()
                                                .map(|name| {
                                                    view! {
                                                        <option value=name.clone()>{name.clone()}</option>
                                                    }
                                                })
                                                .collect_view()
                                        }}
                                    </select>
                                </div>
                            </div>
                        </Show>
                    </div>

                    <div class="relative" node_ref=price_dropdown>
                        <button
                            on:click=move |_| state.update(|s| s.is_price_open = !s.is_price_open)
                            class="flex cursor-pointer items-center gap-2 border-b border-gray-400 pb-1 text-gray-900 transition hover:border-gray-600"
                        >
                            <span class="text-sm font-medium">"Prix"</span>
                            <Chevron rotated=Signal::derive(move || state.get().is_price_open) />
                        </button>

                        <Show when=move || state.get().is_price_open>
                            <div class="absolute mt-2 w-96 z-50 rounded border border-gray-200 bg-white">
                                <div class="border-t border-gray-200 p-4">
                                    <div class="flex justify-between gap-4">
                                        <label class="flex items-center gap-2">
                                            <span class="text-sm text-gray-600">"DH"</span>
                                            <input
                                                type="number"
                                                prop:value=move || state.get().filter.price_from
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    state.update(|s| s.filter.price_from = value);
                                                }
                                                placeholder="À partir de"
                                                class="w-full rounded-md border-gray-200 shadow-sm sm:text-sm"
                                            />
                                        </label>
                                        <label class="flex items-center gap-2">
                                            <span class="text-sm text-gray-600">"DH"</span>
                                            <input
                                                type="number"
                                                prop:value=move || state.get().filter.price_to
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    state.update(|s| s.filter.price_to = value);
                                                }
                                                placeholder="Jusqu'à"
                                                class="w-full rounded-md border-gray-200 shadow-sm sm:text-sm"
                                            />
                                        </label>
                                    </div>
                                    {move || {
                                        products
                                            .get()
                                            .ready()
                                            .map(|catalog| {
                                                view! {
                                                    <p class="mt-2 text-xs text-gray-500">
                                                        {format!(
                                                            "Prix maximum du catalogue: {}",
                                                            format_price(catalog.max_price),
                                                        )}
                                                    </p>
                                                }
                                            })
                                    }}
                                </div>
                            </div>
                        </Show>
                    </div>

                    <div class="ml-auto">
                        <select
                            prop:value=move || state.get().filter.sort.as_str()
                            on:change=move |ev| {
                                let sort = SortOption::parse(&event_target_value(&ev));
                                state.update(|s| s.filter.sort = sort);
                            }
                            class="h-10 rounded border-gray-300 text-sm"
                        >
                            <option value="default">"Recommandé"</option>
                            <option value="price, ASC">"Prix, ASC"</option>
                            <option value="price, DESC">"Prix, DESC"</option>
                        </select>
                    </div>
                </div>

                {move || match products.get() {
                    RemoteState::Loading => view! { <p class="mt-8">"Loading..."</p> }.into_any(),
                    RemoteState::Failed(message) => {
                        view! { <p class="mt-8 text-red-600">"Error: " {message}</p> }.into_any()
                    }
                    RemoteState::Ready(_) => {
                        view! {
                            <ul class="mt-4 grid gap-4 grid-cols-3 sm:grid-cols-3 md:grid-cols-3 lg:grid-cols-4">
                                {move || {
                                    filtered
                                        .get()
                                        .into_iter()
                                        .map(|product| view! { <ProductCard product=product /> })
                                        .collect_view()
                                }}
                            </ul>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

/// Chevron that flips while its dropdown is open.
#[component]
fn Chevron(rotated: Signal<bool>) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke-width="1.5"
            stroke="currentColor"
            class=move || {
                if rotated.get() { "size-4 transition -rotate-180" } else { "size-4 transition" }
            }
        >
            <path stroke-linecap="round" stroke-linejoin="round" d="M19.5 8.25l-7.5 7.5-7.5-7.5" />
        </svg>
    }
}
