use std::cmp::Ordering;

use super::aggregate::Product;

/// Sort selected in the list page's sort dropdown.
///
/// The wire form is the dropdown value: `"default"`, `"price, ASC"` or
/// `"price, DESC"`. The separator is the literal `", "`; only the `price`
/// key has defined behavior, any other value keeps the incoming order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

impl SortOption {
    pub fn parse(value: &str) -> Self {
        match value.split_once(", ") {
            Some(("price", "ASC")) => SortOption::PriceAsc,
            Some(("price", "DESC")) => SortOption::PriceDesc,
            _ => SortOption::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceAsc => "price, ASC",
            SortOption::PriceDesc => "price, DESC",
        }
    }
}

/// Filter state of the product list page.
///
/// The price bounds stay as raw input strings; they are parsed at apply
/// time so unparseable input degrades to the open bound instead of being
/// rejected at the input field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingFilter {
    /// Exact category name; empty means all categories.
    pub selected_category: String,
    pub price_from: String,
    pub price_to: String,
    pub sort: SortOption,
}

impl ListingFilter {
    /// Filter seeded from the list route's `?category=` query parameter.
    pub fn for_category(category: String) -> Self {
        Self {
            selected_category: category,
            ..Self::default()
        }
    }

    fn has_price_bound(&self) -> bool {
        !self.price_from.is_empty() || !self.price_to.is_empty()
    }

    fn lower_bound(&self) -> f64 {
        parse_bound(&self.price_from).unwrap_or(0.0)
    }

    fn upper_bound(&self) -> f64 {
        parse_bound(&self.price_to).unwrap_or(f64::INFINITY)
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

fn by_price_then_id(a: &Product, b: &Product) -> Ordering {
    a.price
        .partial_cmp(&b.price)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.id.cmp(&b.id))
}

/// Recompute the visible product list from the full snapshot.
///
/// Always starts from `products`, never from a previously filtered list,
/// so filter changes cannot accumulate across renders. Steps run in fixed
/// order: category equality (case-sensitive), price range (only when at
/// least one bound is non-empty), then sort. Equal prices tie-break on `id`
/// so the result is deterministic; `Default` leaves the order untouched.
pub fn apply_listing_filter(products: &[Product], filter: &ListingFilter) -> Vec<Product> {
    let mut result: Vec<Product> = products
        .iter()
        .filter(|p| {
            filter.selected_category.is_empty() || p.category == filter.selected_category
        })
        .filter(|p| {
            if !filter.has_price_bound() {
                return true;
            }
            filter.lower_bound() <= p.price && p.price <= filter.upper_bound()
        })
        .cloned()
        .collect();

    match filter.sort {
        SortOption::Default => {}
        SortOption::PriceAsc => result.sort_by(by_price_then_id),
        SortOption::PriceDesc => result.sort_by(|a, b| by_price_then_id(b, a)),
    }

    result
}
