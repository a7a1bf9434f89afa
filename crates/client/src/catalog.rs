//! Catalog fetcher.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use storefront_catalog::Product;

use crate::error::FetchError;

/// Anything that can produce the full product list.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}

/// `GET {api_url}/products` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    api_url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(api_url, reqwest::Client::new())
    }

    pub fn with_client(api_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let url = format!("{}/products", self.api_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FetchError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        let records: Vec<JsonValue> = resp
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        Ok(decode_records(records))
    }
}

/// Decode records one by one so a single bad record does not blank the page.
fn decode_records(records: Vec<JsonValue>) -> Vec<Product> {
    let total = records.len();
    let products: Vec<Product> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let product = match serde_json::from_value::<Product>(record) {
                Ok(product) => product,
                Err(err) => {
                    tracing::warn!(index, error = %err, "skipping malformed catalog record");
                    return None;
                }
            };
            match product.validate() {
                Ok(()) => Some(product),
                Err(err) => {
                    tracing::warn!(index, error = %err, "skipping invalid catalog record");
                    None
                }
            }
        })
        .collect();

    if products.len() != total {
        tracing::warn!(kept = products.len(), total, "catalog contained unusable records");
    }
    products
}

/// Fetch the catalog for a view mount.
///
/// Never fails: a fetch error is logged and yields an empty catalog, which the
/// view renders as its "no products" state.
pub async fn load_catalog(source: &dyn CatalogSource) -> Vec<Product> {
    match source.fetch_products().await {
        Ok(products) => {
            tracing::info!(count = products.len(), "catalog loaded");
            products
        }
        Err(err) => {
            tracing::error!(error = %err, "catalog fetch failed; showing empty catalog");
            Vec::new()
        }
    }
}
