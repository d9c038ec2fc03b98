use contracts::domain::a002_product::listing::ListingFilter;
use leptos::prelude::*;

/// Filter and dropdown UI state of the product list page.
#[derive(Clone, Debug, Default)]
pub struct ProductListState {
    pub filter: ListingFilter,

    // Dropdown visibility
    pub is_category_open: bool,
    pub is_price_open: bool,
}

impl ProductListState {
    /// Seeded once from the list route's `?category=` query parameter.
    pub fn seeded(initial_category: String) -> Self {
        Self {
            filter: ListingFilter::for_category(initial_category),
            ..Self::default()
        }
    }
}

pub fn create_state(initial_category: String) -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::seeded(initial_category))
}
