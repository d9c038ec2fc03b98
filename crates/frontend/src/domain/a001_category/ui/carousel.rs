use contracts::domain::a001_category::Category;
use leptos::prelude::*;
use leptos_router::components::A;

/// Bootstrap-style carousel, one slide per category. Each slide links to
/// the list page pre-filtered to its category. Categories reaching this
/// component always carry a resolved image URL; the loader already dropped
/// the ones that do not.
#[component]
pub fn CategoryCarousel(categories: Vec<Category>) -> impl IntoView {
    let indicator_count = categories.len();

    view! {
        <div id="categoryCarousel" class="carousel carousel-dark slide" data-bs-ride="carousel">
            <div class="carousel-indicators">
                {(0..indicator_count)
                    .map(|index| {
                        view! {
                            <button
                                type="button"
                                data-bs-target="#categoryCarousel"
                                data-bs-slide-to=index.to_string()
                                class=if index == 0 { "active" } else { "" }
                                aria-label=format!("Slide {}", index + 1)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="carousel-inner">
                {if categories.is_empty() {
                    view! {
                        <div class="carousel-item active">
                            <p>"No Categories Available"</p>
                        </div>
                    }
                        .into_any()
                } else {
                    categories
                        .into_iter()
                        .enumerate()
                        .map(|(index, category)| {
                            let image_url = category.image_url.clone().unwrap_or_default();
                            let target = format!(
                                "/products?category={}",
                                urlencoding::encode(&category.name)
                            );
                            view! {
                                <div
                                    class=if index == 0 { "carousel-item active" } else { "carousel-item" }
                                    data-bs-interval="10000"
                                >
                                    <A href=target>
                                        <img
                                            src=image_url
                                            class="d-block w-100 h-[400px] object-cover"
                                            alt=category.name.clone()
                                        />
                                        <div class="carousel-caption d-none d-md-block">
                                            <h1 class="text-5xl font-medium text-white">
                                                {category.name.clone()}
                                            </h1>
                                        </div>
                                    </A>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <button
                class="carousel-control-prev"
                type="button"
                data-bs-target="#categoryCarousel"
                data-bs-slide="prev"
            >
                <span class="carousel-control-prev-icon" aria-hidden="true"></span>
                <span class="visually-hidden">"Previous"</span>
            </button>
            <button
                class="carousel-control-next"
                type="button"
                data-bs-target="#categoryCarousel"
                data-bs-slide="next"
            >
                <span class="carousel-control-next-icon" aria-hidden="true"></span>
                <span class="visually-hidden">"Next"</span>
            </button>
        </div>
    }
}
