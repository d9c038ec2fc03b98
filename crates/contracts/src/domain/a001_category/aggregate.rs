use serde::{Deserialize, Serialize};

use crate::remote::firestore::RemoteDocument;

/// Product category shown in the home carousel and the list filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,

    /// Resolved storage URL. `None` until an asset resolves; the catalog
    /// loader drops carousel categories that never resolve one.
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

impl Category {
    /// Decode from a remote document. Only `name` is stored remotely;
    /// the image URL is resolved separately against object storage.
    pub fn from_remote(doc: &RemoteDocument) -> Self {
        Self {
            name: doc.field_str("name").unwrap_or_default().to_string(),
            image_url: None,
        }
    }
}
