//! Read-side catalog loading: collection fetches plus per-item image
//! resolution against object storage.
//!
//! Everything here is generic over [`RemoteGateway`], so the frontend runs
//! it against the live store and tests run it against an in-memory fake.

use futures::stream::{self, StreamExt};

use crate::domain::a001_category::Category;
use crate::domain::a002_product::Product;
use crate::remote::gateway::{GatewayError, RemoteGateway, SortDirection};

/// Storage extensions probed for category images, in priority order.
/// The first extension that resolves wins.
pub const CATEGORY_IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "png", "jpeg", "webp"];

/// Featured grid size on the home page.
pub const FEATURED_LIMIT: u32 = 4;

/// How many image URLs resolve in flight at once. Bounds peak connections
/// while avoiding one-at-a-time awaits that scale load time linearly with
/// catalog size.
const IMAGE_RESOLVE_CONCURRENCY: usize = 4;

/// Products snapshot for the list page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductCatalog {
    pub products: Vec<Product>,
    /// Highest price observed at load time. Informational only; not
    /// enforced as a bound on the price inputs.
    pub max_price: f64,
}

/// Fetch all categories and resolve one image per category by probing
/// `categories/{name}.{ext}` for each candidate extension.
///
/// Categories with no resolvable asset are dropped from the result instead
/// of rendering without an image. Products behave differently (placeholder
/// image, still listed); the asymmetry is inherited behavior.
pub async fn load_categories(gateway: &dyn RemoteGateway) -> Result<Vec<Category>, GatewayError> {
    let docs = gateway.fetch_collection("categories").await?;
    let categories: Vec<Category> = docs.iter().map(Category::from_remote).collect();

    let mut resolved: Vec<(usize, Category)> = stream::iter(categories.into_iter().enumerate())
        .map(move |(index, mut category)| async move {
            let url = resolve_category_image(gateway, &category.name).await;
            category.image_url = url;
            (index, category)
        })
        .buffer_unordered(IMAGE_RESOLVE_CONCURRENCY)
        .collect()
        .await;
    resolved.sort_by_key(|(index, _)| *index);

    Ok(resolved
        .into_iter()
        .map(|(_, category)| category)
        .filter(|category| category.image_url.is_some())
        .collect())
}

/// Category names only, for the list page's filter dropdown. No image
/// probing, so categories hidden from the carousel still appear here.
pub async fn load_category_names(
    gateway: &dyn RemoteGateway,
) -> Result<Vec<String>, GatewayError> {
    let docs = gateway.fetch_collection("categories").await?;
    Ok(docs
        .iter()
        .map(|doc| doc.field_str("name").unwrap_or_default().to_string())
        .collect())
}

/// Fetch the full products collection and resolve one image per product.
pub async fn load_products(gateway: &dyn RemoteGateway) -> Result<ProductCatalog, GatewayError> {
    let docs = gateway.fetch_collection("products").await?;
    let products =
        resolve_product_images(gateway, docs.iter().map(Product::from_remote).collect()).await;
    let max_price = products.iter().map(|p| p.price).fold(0.0_f64, f64::max);
    Ok(ProductCatalog {
        products,
        max_price,
    })
}

/// The most recent products for the featured grid, newest first.
/// Equal dates keep the store's order.
pub async fn load_featured(gateway: &dyn RemoteGateway) -> Result<Vec<Product>, GatewayError> {
    let docs = gateway
        .fetch_collection_ordered("products", "date", SortDirection::Descending, FEATURED_LIMIT)
        .await?;
    Ok(resolve_product_images(gateway, docs.iter().map(Product::from_remote).collect()).await)
}

/// A single product by document identifier; `Ok(None)` when it does not
/// exist. The image resolves from `products/{id}.jpg` like everywhere else.
pub async fn load_product(
    gateway: &dyn RemoteGateway,
    id: &str,
) -> Result<Option<Product>, GatewayError> {
    let Some(doc) = gateway.fetch_document("products", id).await? else {
        return Ok(None);
    };
    let mut product = Product::from_remote(&doc);
    product.image_url = gateway
        .resolve_blob_url(&format!("products/{id}.jpg"))
        .await
        .ok();
    Ok(Some(product))
}

/// Probe the candidate extensions in order; any resolution failure moves
/// on to the next extension, and exhausting them yields `None`. No retries.
async fn resolve_category_image(gateway: &dyn RemoteGateway, name: &str) -> Option<String> {
    for ext in CATEGORY_IMAGE_EXTENSIONS {
        if let Ok(url) = gateway
            .resolve_blob_url(&format!("categories/{name}.{ext}"))
            .await
        {
            return Some(url);
        }
    }
    None
}

/// Resolve `products/{id}.jpg` for each product with a bounded fan-out,
/// then restore document order by the original index. A missing blob
/// leaves `image_url` empty; the product is still listed.
async fn resolve_product_images(
    gateway: &dyn RemoteGateway,
    products: Vec<Product>,
) -> Vec<Product> {
    let mut resolved: Vec<(usize, Product)> = stream::iter(products.into_iter().enumerate())
        .map(move |(index, mut product)| async move {
            let url = gateway
                .resolve_blob_url(&format!("products/{}.jpg", product.id))
                .await
                .ok();
            product.image_url = url;
            (index, product)
        })
        .buffer_unordered(IMAGE_RESOLVE_CONCURRENCY)
        .collect()
        .await;
    resolved.sort_by_key(|(index, _)| *index);
    resolved.into_iter().map(|(_, product)| product).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use async_trait::async_trait;

    use super::*;
    use crate::remote::firestore::{RemoteDocument, RemoteValue};

    struct FakeGateway {
        categories: Vec<RemoteDocument>,
        products: Vec<RemoteDocument>,
        /// Storage paths that resolve; everything else is absent.
        blobs: HashSet<String>,
        /// Storage paths that fail with a transport error instead.
        broken_blobs: HashSet<String>,
    }

    impl FakeGateway {
        fn new() -> Self {
            Self {
                categories: Vec::new(),
                products: Vec::new(),
                blobs: HashSet::new(),
                broken_blobs: HashSet::new(),
            }
        }

        fn with_blob(mut self, path: &str) -> Self {
            self.blobs.insert(path.to_string());
            self
        }

        fn with_broken_blob(mut self, path: &str) -> Self {
            self.broken_blobs.insert(path.to_string());
            self
        }
    }

    #[async_trait(?Send)]
    impl RemoteGateway for FakeGateway {
        async fn fetch_collection(
            &self,
            name: &str,
        ) -> Result<Vec<RemoteDocument>, GatewayError> {
            match name {
                "categories" => Ok(self.categories.clone()),
                "products" => Ok(self.products.clone()),
                _ => Err(GatewayError::Http(404)),
            }
        }

        async fn fetch_collection_ordered(
            &self,
            name: &str,
            order_by: &str,
            direction: SortDirection,
            limit: u32,
        ) -> Result<Vec<RemoteDocument>, GatewayError> {
            assert_eq!(order_by, "date");
            let mut docs = self.fetch_collection(name).await?;
            // Stable sort keeps the store's order for equal dates.
            docs.sort_by(|a, b| match direction {
                SortDirection::Ascending => {
                    a.field_timestamp("date").cmp(&b.field_timestamp("date"))
                }
                SortDirection::Descending => {
                    b.field_timestamp("date").cmp(&a.field_timestamp("date"))
                }
            });
            docs.truncate(limit as usize);
            Ok(docs)
        }

        async fn fetch_document(
            &self,
            name: &str,
            id: &str,
        ) -> Result<Option<RemoteDocument>, GatewayError> {
            let docs = self.fetch_collection(name).await?;
            Ok(docs.into_iter().find(|doc| doc.doc_id() == id))
        }

        async fn resolve_blob_url(&self, path: &str) -> Result<String, GatewayError> {
            if self.broken_blobs.contains(path) {
                Err(GatewayError::Network("connection reset".to_string()))
            } else if self.blobs.contains(path) {
                Ok(format!("https://blobs.test/{path}"))
            } else {
                Err(GatewayError::BlobNotFound(path.to_string()))
            }
        }
    }

    fn category_doc(name: &str) -> RemoteDocument {
        RemoteDocument {
            name: format!("projects/t/databases/(default)/documents/categories/{name}"),
            fields: HashMap::from([(
                "name".to_string(),
                RemoteValue::StringValue(name.to_string()),
            )]),
        }
    }

    fn product_doc(id: &str, price: f64, date: &str) -> RemoteDocument {
        RemoteDocument {
            name: format!("projects/t/databases/(default)/documents/products/{id}"),
            fields: HashMap::from([
                (
                    "name".to_string(),
                    RemoteValue::StringValue(format!("Product {id}")),
                ),
                ("price".to_string(), RemoteValue::DoubleValue(price)),
                (
                    "category".to_string(),
                    RemoteValue::StringValue("A".to_string()),
                ),
                (
                    "date".to_string(),
                    RemoteValue::TimestampValue(date.parse().unwrap()),
                ),
            ]),
        }
    }

    #[tokio::test]
    async fn categories_without_assets_are_dropped() {
        let mut gateway = FakeGateway::new().with_blob("categories/Bags.png");
        gateway.categories = vec![category_doc("Bags"), category_doc("Shoes")];

        let categories = load_categories(&gateway).await.unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        // "Shoes" has no asset under any probed extension and disappears.
        assert_eq!(names, vec!["Bags"]);
        assert_eq!(
            categories[0].image_url.as_deref(),
            Some("https://blobs.test/categories/Bags.png")
        );
    }

    #[tokio::test]
    async fn first_resolving_extension_wins() {
        let mut gateway = FakeGateway::new()
            .with_blob("categories/Bags.jpg")
            .with_blob("categories/Bags.webp");
        gateway.categories = vec![category_doc("Bags")];

        let categories = load_categories(&gateway).await.unwrap();
        assert_eq!(
            categories[0].image_url.as_deref(),
            Some("https://blobs.test/categories/Bags.jpg")
        );
    }

    #[tokio::test]
    async fn probe_continues_past_transport_errors() {
        // A transport failure on one extension is treated like an absent
        // object: the probe moves on instead of giving up on the category.
        let mut gateway = FakeGateway::new()
            .with_broken_blob("categories/Bags.jpg")
            .with_blob("categories/Bags.png");
        gateway.categories = vec![category_doc("Bags")];

        let categories = load_categories(&gateway).await.unwrap();
        assert_eq!(
            categories[0].image_url.as_deref(),
            Some("https://blobs.test/categories/Bags.png")
        );
    }

    #[tokio::test]
    async fn category_names_skip_image_probing() {
        let mut gateway = FakeGateway::new();
        gateway.categories = vec![category_doc("Bags"), category_doc("Shoes")];

        let names = load_category_names(&gateway).await.unwrap();
        // Both names appear even though neither has an asset.
        assert_eq!(names, vec!["Bags", "Shoes"]);
    }

    #[tokio::test]
    async fn products_without_images_stay_listed() {
        let mut gateway = FakeGateway::new().with_blob("products/p1.jpg");
        gateway.products = vec![
            product_doc("p1", 50.0, "2024-03-01T00:00:00Z"),
            product_doc("p2", 80.0, "2024-03-02T00:00:00Z"),
        ];

        let catalog = load_products(&gateway).await.unwrap();
        assert_eq!(catalog.products.len(), 2);
        assert_eq!(
            catalog.products[0].image_url.as_deref(),
            Some("https://blobs.test/products/p1.jpg")
        );
        assert_eq!(catalog.products[1].image_url, None);
        assert_eq!(catalog.max_price, 80.0);
    }

    #[tokio::test]
    async fn product_order_follows_document_order() {
        let mut gateway = FakeGateway::new();
        gateway.products = (0..10)
            .map(|i| product_doc(&format!("p{i}"), i as f64, "2024-03-01T00:00:00Z"))
            .collect();

        let catalog = load_products(&gateway).await.unwrap();
        let ids: Vec<&str> = catalog.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["p0", "p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8", "p9"]
        );
    }

    #[tokio::test]
    async fn featured_is_capped_and_newest_first() {
        let mut gateway = FakeGateway::new();
        gateway.products = vec![
            product_doc("old", 10.0, "2024-01-01T00:00:00Z"),
            product_doc("a", 10.0, "2024-03-01T00:00:00Z"),
            product_doc("b", 10.0, "2024-03-02T00:00:00Z"),
            product_doc("c", 10.0, "2024-03-03T00:00:00Z"),
            product_doc("d", 10.0, "2024-03-04T00:00:00Z"),
        ];

        let featured = load_featured(&gateway).await.unwrap();
        let ids: Vec<&str> = featured.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "c", "b", "a"]);
    }

    #[tokio::test]
    async fn missing_product_is_none() {
        let gateway = FakeGateway::new();
        assert_eq!(load_product(&gateway, "nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn single_product_resolves_image() {
        let mut gateway = FakeGateway::new().with_blob("products/p1.jpg");
        gateway.products = vec![product_doc("p1", 50.0, "2024-03-01T00:00:00Z")];

        let product = load_product(&gateway, "p1").await.unwrap().unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.price, 50.0);
        assert_eq!(
            product.image_url.as_deref(),
            Some("https://blobs.test/products/p1.jpg")
        );
    }

    #[tokio::test]
    async fn empty_catalog_has_zero_max_price() {
        let gateway = FakeGateway::new();
        let catalog = load_products(&gateway).await.unwrap();
        assert!(catalog.products.is_empty());
        assert_eq!(catalog.max_price, 0.0);
    }
}
