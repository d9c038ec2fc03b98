use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a002_product::ui::details::ProductDetailPage;
use crate::domain::a002_product::ui::list::ProductListPage;
use crate::layout::{Footer, Header};
use crate::system::pages::home::HomePage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <div class="flex flex-col min-h-screen">
                <Header />
                <main class="flex-grow">
                    <Routes fallback=|| view! { <p class="p-8">"Page introuvable"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/products") view=ProductListPage />
                        <Route path=path!("/product/:product_id") view=ProductDetailPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
