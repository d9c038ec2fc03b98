use async_trait::async_trait;
use thiserror::Error;

use super::firestore::RemoteDocument;

/// Sort direction for ordered collection queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// Transport-level failure; nothing was received.
    #[error("network error: {0}")]
    Network(String),

    /// The remote store answered with a non-success status.
    #[error("remote store returned HTTP {0}")]
    Http(u16),

    /// The requested storage object does not exist. Callers treat this as
    /// "no image" for the current render; there are no retries.
    #[error("object not found: {0}")]
    BlobNotFound(String),

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Read-only seam to the remote document database and object storage.
///
/// Injected into the catalog use-cases (and provided as Leptos context in
/// the frontend) so every page shares one client and tests can substitute
/// an in-memory fake. `?Send` because browser futures are not `Send`.
#[async_trait(?Send)]
pub trait RemoteGateway {
    /// All documents of a collection, in the store's listing order.
    async fn fetch_collection(&self, name: &str) -> Result<Vec<RemoteDocument>, GatewayError>;

    /// Documents of a collection ordered by one field, capped at `limit`.
    /// Ties keep the store's order.
    async fn fetch_collection_ordered(
        &self,
        name: &str,
        order_by: &str,
        direction: SortDirection,
        limit: u32,
    ) -> Result<Vec<RemoteDocument>, GatewayError>;

    /// A single document by identifier; `Ok(None)` when it does not exist.
    async fn fetch_document(
        &self,
        name: &str,
        id: &str,
    ) -> Result<Option<RemoteDocument>, GatewayError>;

    /// Resolve a storage path to a downloadable URL.
    /// Fails with `BlobNotFound` when the object is absent.
    async fn resolve_blob_url(&self, path: &str) -> Result<String, GatewayError>;
}
