use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-300">
            <div class="mx-auto max-w-screen-xl px-4 py-6 text-center text-sm">
                <p>"© Les MDu Shop. Tous droits réservés"</p>
            </div>
        </footer>
    }
}
