use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::remote::firestore::RemoteDocument;

/// A catalog product.
///
/// `id` is the remote document identifier; it doubles as the storage key
/// for the main image (`products/{id}.jpg`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,

    /// Listing date; featured products are the four most recent.
    pub date: DateTime<Utc>,

    pub rating: Option<u32>,
    pub reviews_count: Option<u32>,
    pub original_price: Option<f64>,

    #[serde(default)]
    pub additional_images: Vec<String>,

    /// Resolved storage URL; `None` renders as the placeholder asset.
    pub image_url: Option<String>,
}

impl Product {
    /// Decode from a remote document.
    ///
    /// Lenient on purpose: a document missing `name`, `price` or `category`
    /// still yields a product with empty/zero fields rather than failing the
    /// whole collection fetch. A missing `date` falls back to the Unix epoch,
    /// which sorts it last among featured candidates.
    pub fn from_remote(doc: &RemoteDocument) -> Self {
        Self {
            id: doc.doc_id().to_string(),
            name: doc.field_str("name").unwrap_or_default().to_string(),
            price: doc.field_f64("price").unwrap_or(0.0),
            category: doc.field_str("category").unwrap_or_default().to_string(),
            date: doc
                .field_timestamp("date")
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
            rating: doc.field_u32("rating"),
            reviews_count: doc.field_u32("reviewsCount"),
            original_price: doc.field_f64("originalPrice"),
            additional_images: doc.field_str_array("additionalImages").unwrap_or_default(),
            image_url: None,
        }
    }
}
