//! Static reference tables consulted by the host detectors.
//!
//! These are process-wide constants. Lookups are exact and case-sensitive;
//! callers pass already-lowercased hosts and labels.

/// Known URL-shortening service hostnames.
pub const SHORTENER_HOSTS: &[&str] = &[
    "bit.ly",
    "tinyurl.com",
    "t.co",
    "goo.gl",
    "ow.ly",
    "is.gd",
    "buff.ly",
    "rebrand.ly",
    "lnkd.in",
];

/// Top-level domains that are cheap, novel, or frequently abused.
pub const RISKY_TLDS: &[&str] = &["zip", "mov", "xyz", "top", "gq", "tk", "cf"];

/// Brand name fragments checked by the brand-lure detector.
///
/// Order matters: the detector reports only the first fragment that matches.
pub const BRAND_FRAGMENTS: &[&str] = &[
    "paypal",
    "microsoft",
    "google",
    "facebook",
    "apple",
    "amazon",
    "bank",
    "hsbc",
    "barclays",
    "netflix",
    "instagram",
    "linkedin",
    "github",
];

pub fn is_shortener(host_lower: &str) -> bool {
    SHORTENER_HOSTS.contains(&host_lower)
}

pub fn is_risky_tld(tld: &str) -> bool {
    RISKY_TLDS.contains(&tld)
}
