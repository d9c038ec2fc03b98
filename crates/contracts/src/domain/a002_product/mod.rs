pub mod aggregate;
pub mod listing;

pub use aggregate::Product;
pub use listing::{apply_listing_filter, ListingFilter, SortOption};
