//! Brand-lure detection: a known brand name inside a host it does not own.

use unicode_normalization::UnicodeNormalization;

use super::{Contribution, Detector, DetectorId};
use crate::normalize::NormalizedUrl;
use crate::reference::BRAND_FRAGMENTS;

/// Folds a lowercased host into a flat ASCII string for substring matching.
///
/// Applies NFKC (so full-width and compatibility forms collapse to their
/// plain equivalents) and then keeps only ASCII letters and digits.
/// NFKC is infallible here; any input yields some folded string.
pub fn fold_host(host_lower: &str) -> String {
    host_lower
        .nfkc()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// True when `host_lower` is the brand's own `.com` or `.co.uk` domain
/// (or ends with it).
fn is_brand_domain(host_lower: &str, brand: &str) -> bool {
    [".com", ".co.uk"].iter().any(|suffix| {
        host_lower
            .strip_suffix(suffix)
            .is_some_and(|rest| rest.ends_with(brand))
    })
}

pub struct BrandLure;

impl BrandLure {
    /// First brand fragment, in table order, that appears in the host
    /// outside the brand's own domain.
    pub fn matching_brand(host_lower: &str) -> Option<&'static str> {
        let flat = fold_host(host_lower);
        BRAND_FRAGMENTS
            .iter()
            .copied()
            .find(|brand| flat.contains(brand) && !is_brand_domain(host_lower, brand))
    }
}

impl Detector for BrandLure {
    fn id(&self) -> DetectorId {
        DetectorId::BrandLure
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<Contribution> {
        let brand = Self::matching_brand(url.host_lower())?;
        Some(Contribution::new(
            self.id(),
            20,
            format!("Possible typosquat / brand lure: “{brand}” in {}", url.host()),
            "Type the brand’s domain manually or use bookmarks.",
        ))
    }
}
