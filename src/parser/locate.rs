use crate::fetch::ProductMetadata;

/// Find the free-text dimensions string in a metadata document.
///
/// Product data sources place dimension data inconsistently: sometimes in
/// the specifications table, sometimes only under details. Specifications
/// are searched first, in list order, then details; first match wins.
pub fn dimensions(doc: &ProductMetadata) -> Option<&str> {
    doc.specifications
        .iter()
        .chain(doc.details.iter())
        .find(|field| field.name.to_lowercase().contains("dimensions"))
        .map(|field| field.value.as_str())
}

/// Display name for the listing: the variant-free title when present,
/// otherwise the plain title. Resolved independently of the dimensions
/// search.
pub fn display_name(doc: &ProductMetadata) -> Option<&str> {
    doc.title_excluding_variant_name
        .as_deref()
        .or(doc.title.as_deref())
}

// ── Tests ──
