pub mod asin;
pub mod dimensions;
pub mod locate;

use crate::error::EstimateError;
use crate::fetch::ProductMetadata;

/// Surface area of a listing, paired with its display name when the
/// document carries one.
#[derive(Debug, Clone)]
pub struct ProductSurfaceArea {
    /// Square inches.
    pub surface_area: f64,
    pub product_name: Option<String>,
}

/// Document half of the pipeline: metadata → dimensions text → inches →
/// surface area.
pub fn surface_from_metadata(doc: &ProductMetadata) -> Result<ProductSurfaceArea, EstimateError> {
    let text = locate::dimensions(doc).ok_or(EstimateError::DimensionsNotLocated)?;
    let dims = dimensions::parse(text)?;

    Ok(ProductSurfaceArea {
        surface_area: dimensions::surface_area(&dims),
        product_name: locate::display_name(doc).map(str::to_string),
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::SpecField;

    fn doc_with(name: &str, value: &str) -> ProductMetadata {
        ProductMetadata {
            specifications: vec![SpecField {
                name: name.to_string(),
                value: value.to_string(),
            }],
            title: Some("Box".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn metadata_to_surface_area() {
        let product =
            surface_from_metadata(&doc_with("Product Dimensions", "10 x 5 x 2 inches")).unwrap();
        assert_eq!(product.surface_area, 160.0);
        assert_eq!(product.product_name.as_deref(), Some("Box"));
    }

    #[test]
    fn no_dimensions_field() {
        let err = surface_from_metadata(&doc_with("Item Weight", "1.2 pounds")).unwrap_err();
        assert!(matches!(err, EstimateError::DimensionsNotLocated));
    }

    #[test]
    fn garbage_dimensions_field() {
        let err = surface_from_metadata(&doc_with("Product Dimensions", "assembly required"))
            .unwrap_err();
        assert!(matches!(err, EstimateError::DimensionsUnparsable));
    }
}
