use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static DP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)/dp/([A-Z0-9]{10})").unwrap());

/// Extract the 10-character ASIN from a product URL.
///
/// The canonical `/dp/<asin>` path segment wins. Listing URLs that route
/// through redirects carry the ASIN in the `pd_rd_i` query parameter
/// instead. Returns None when neither form is present, including for
/// strings that are not valid URLs at all.
pub fn extract(url: &str) -> Option<String> {
    if let Some(caps) = DP_RE.captures(url) {
        return Some(caps[1].to_string());
    }

    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(name, _)| name == "pd_rd_i")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dp_path() {
        let url = "https://www.amazon.ca/Performance-Alkaline-Batteries/dp/B00MNV8E0C/ref=sr_1_3?keywords=batteries&qid=17";
        assert_eq!(extract(url).as_deref(), Some("B00MNV8E0C"));
    }

    #[test]
    fn dp_case_insensitive_keeps_casing() {
        assert_eq!(
            extract("https://www.amazon.ca/DP/b00mnv8e0c").as_deref(),
            Some("b00mnv8e0c")
        );
    }

    #[test]
    fn dp_wins_over_query() {
        let url = "https://www.amazon.ca/dp/B00MNV8E0C?pd_rd_i=B07QDR5TW2";
        assert_eq!(extract(url).as_deref(), Some("B00MNV8E0C"));
    }

    #[test]
    fn query_fallback() {
        let url =
            "https://www.amazon.ca/gp/slredirect/picassoRedirect.html?pd_rd_i=B07QDR5TW2&pf_rd_p=abc";
        assert_eq!(extract(url).as_deref(), Some("B07QDR5TW2"));
    }

    #[test]
    fn no_identifier() {
        assert_eq!(extract("https://www.amazon.ca/gp/bestsellers"), None);
    }

    #[test]
    fn empty_query_value() {
        assert_eq!(extract("https://www.amazon.ca/gp/product?pd_rd_i="), None);
    }

    #[test]
    fn malformed_url() {
        assert_eq!(extract("definitely not a url pd_rd_i=B00MNV8E0C"), None);
    }

    #[test]
    fn short_token_not_matched() {
        assert_eq!(extract("https://www.amazon.ca/dp/B00MNV8"), None);
    }

    #[test]
    fn longer_token_takes_first_ten() {
        assert_eq!(
            extract("https://www.amazon.ca/dp/B00MNV8E0C1").as_deref(),
            Some("B00MNV8E0C")
        );
    }
}
