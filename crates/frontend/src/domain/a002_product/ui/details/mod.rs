mod model;
mod view;

pub use view::ProductDetailPage;
