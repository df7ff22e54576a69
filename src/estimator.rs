use tracing::info;

use crate::error::EstimateError;
use crate::fetch::MetadataFetcher;
use crate::parser;

/// Area of one reference unit, in square inches.
pub const DEFAULT_UNIT_AREA_SQ_IN: f64 = 15.0;

/// Result of a pipeline run: how many reference units it would take to
/// cover the product.
#[derive(Debug, Clone)]
pub struct Estimate {
    pub unit_count: i64,
    /// Square inches.
    pub surface_area: f64,
    pub product_name: Option<String>,
}

/// One-shot estimation pipeline: URL → ASIN → metadata fetch → dimensions →
/// surface area → reference-unit count. Stateless; every call performs
/// exactly one fetch and fails fast on the first stage that cannot proceed.
pub struct Estimator<F> {
    fetcher: F,
    unit_area_sq_in: f64,
}

impl<F: MetadataFetcher> Estimator<F> {
    pub fn new(fetcher: F, unit_area_sq_in: f64) -> Self {
        Self {
            fetcher,
            unit_area_sq_in,
        }
    }

    pub async fn estimate(&self, url: &str) -> Result<Estimate, EstimateError> {
        let asin = parser::asin::extract(url).ok_or(EstimateError::IdentifierNotFound)?;
        info!("Resolved product identifier {}", asin);

        let doc = self.fetcher.fetch(&asin).await?;
        let product = parser::surface_from_metadata(&doc)?;

        let unit_count = (product.surface_area / self.unit_area_sq_in).round() as i64;
        info!(
            "Surface area {:.1} sq in -> {} units",
            product.surface_area, unit_count
        );

        Ok(Estimate {
            unit_count,
            surface_area: product.surface_area,
            product_name: product.product_name,
        })
    }
}

// ── Tests ──
