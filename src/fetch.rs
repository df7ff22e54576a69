use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const API_ENDPOINT: &str = "https://api.rainforestapi.com/request";

/// Product metadata document as returned by the remote product-data API.
/// Sections are populated inconsistently across listings, so every field
/// is optional and the lists default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductMetadata {
    #[serde(default)]
    pub specifications: Vec<SpecField>,
    #[serde(default)]
    pub details: Vec<SpecField>,
    pub title_excluding_variant_name: Option<String>,
    pub title: Option<String>,
}

/// One name/value row from the specifications or details section.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecField {
    pub name: String,
    pub value: String,
}

/// Top-level response envelope; everything of interest lives under `product`.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    product: Option<ProductMetadata>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("product metadata request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("product metadata response had no product payload")]
    MissingProduct,
}

/// Remote source of product metadata. Any implementation returning the
/// documented document shape satisfies the pipeline.
#[async_trait]
pub trait MetadataFetcher {
    async fn fetch(&self, asin: &str) -> Result<ProductMetadata, FetchError>;
}

/// Rainforest product API client.
pub struct RainforestClient {
    client: reqwest::Client,
    api_key: String,
    amazon_domain: String,
}

impl RainforestClient {
    pub fn new(api_key: String, amazon_domain: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            amazon_domain,
        }
    }

    /// Build a client keyed from the RAINFOREST_API_KEY environment variable.
    pub fn from_env(amazon_domain: String) -> anyhow::Result<Self> {
        let api_key = std::env::var("RAINFOREST_API_KEY")
            .map_err(|_| anyhow::anyhow!("RAINFOREST_API_KEY environment variable must be set"))?;
        Ok(Self::new(api_key, amazon_domain))
    }
}

#[async_trait]
impl MetadataFetcher for RainforestClient {
    async fn fetch(&self, asin: &str) -> Result<ProductMetadata, FetchError> {
        debug!("Requesting metadata for {} on {}", asin, self.amazon_domain);

        let response = self
            .client
            .get(API_ENDPOINT)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("type", "product"),
                ("amazon_domain", self.amazon_domain.as_str()),
                ("asin", asin),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<ApiResponse>()
            .await?;

        response.product.ok_or(FetchError::MissingProduct)
    }
}

// ── Tests ──
