use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm">
            <div class="mx-auto max-w-screen-xl px-4 py-4 flex items-center justify-between">
                <A href="/">
                    <span class="text-xl font-extrabold text-gray-900">"Les MDu Shop"</span>
                </A>
                <nav class="flex gap-6 text-sm font-medium text-gray-700">
                    <A href="/">"Accueil"</A>
                    <A href="/products">"Produits"</A>
                </nav>
            </div>
        </header>
    }
}
