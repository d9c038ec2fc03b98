use async_trait::async_trait;
use contracts::remote::firestore::{
    ordered_query_body, ListDocumentsResponse, QueryResponseRow, RemoteDocument,
};
use contracts::remote::gateway::{GatewayError, RemoteGateway, SortDirection};
use gloo_net::http::Request;
use serde::Deserialize;

use super::config::StoreConfig;

/// Collections stay well under this; the store paginates past it.
const COLLECTION_PAGE_SIZE: u32 = 300;

/// HTTP client for the document database and object storage REST surface.
#[derive(Debug, Clone)]
pub struct FirestoreGateway {
    config: StoreConfig,
}

impl FirestoreGateway {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }
}

/// Storage object metadata; only the download token matters here.
#[derive(Debug, Deserialize)]
struct BlobMetadata {
    #[serde(rename = "downloadTokens", default)]
    download_tokens: String,
}

#[async_trait(?Send)]
impl RemoteGateway for FirestoreGateway {
    async fn fetch_collection(&self, name: &str) -> Result<Vec<RemoteDocument>, GatewayError> {
        let url = format!(
            "{}/{}?key={}&pageSize={}",
            self.config.documents_base(),
            name,
            self.config.api_key,
            COLLECTION_PAGE_SIZE
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(GatewayError::Http(response.status()));
        }

        let data: ListDocumentsResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))?;
        Ok(data.documents)
    }

    async fn fetch_collection_ordered(
        &self,
        name: &str,
        order_by: &str,
        direction: SortDirection,
        limit: u32,
    ) -> Result<Vec<RemoteDocument>, GatewayError> {
        let url = format!(
            "{}:runQuery?key={}",
            self.config.documents_base(),
            self.config.api_key
        );
        let body = ordered_query_body(name, order_by, direction, limit);

        let response = Request::post(&url)
            .json(&body)
            .map_err(|e| GatewayError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(GatewayError::Http(response.status()));
        }

        let rows: Vec<QueryResponseRow> = response
            .json()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))?;
        Ok(rows.into_iter().filter_map(|row| row.document).collect())
    }

    async fn fetch_document(
        &self,
        name: &str,
        id: &str,
    ) -> Result<Option<RemoteDocument>, GatewayError> {
        let url = format!(
            "{}/{}/{}?key={}",
            self.config.documents_base(),
            name,
            id,
            self.config.api_key
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        if response.status() == 404 {
            return Ok(None);
        }
        if !response.ok() {
            return Err(GatewayError::Http(response.status()));
        }

        let doc: RemoteDocument = response
            .json()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))?;
        Ok(Some(doc))
    }

    async fn resolve_blob_url(&self, path: &str) -> Result<String, GatewayError> {
        // Object keys are percent-encoded into a single path segment.
        let url = format!(
            "{}/{}",
            self.config.storage_base(),
            urlencoding::encode(path)
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        if response.status() == 404 {
            return Err(GatewayError::BlobNotFound(path.to_string()));
        }
        if !response.ok() {
            return Err(GatewayError::Http(response.status()));
        }

        let meta: BlobMetadata = response
            .json()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))?;
        // Several tokens can be minted for one object; the first one works.
        let token = meta.download_tokens.split(',').next().unwrap_or_default();
        Ok(format!("{url}?alt=media&token={token}"))
    }
}
