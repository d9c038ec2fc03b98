use leptos::prelude::*;

use crate::remote::{FirestoreGateway, StoreConfig};
use crate::routes::routes::AppRoutes;

#[component]
pub fn App() -> impl IntoView {
    // One shared remote client for all pages, provided via context instead
    // of a process-wide singleton; tests talk to the same trait through an
    // in-memory fake.
    provide_context(FirestoreGateway::new(StoreConfig::default()));

    view! {
        <AppRoutes />
    }
}
