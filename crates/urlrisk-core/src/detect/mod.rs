//! Heuristic detectors.
//!
//! Each detector looks at one aspect of a [`NormalizedUrl`] and, when its
//! predicate holds, contributes a score delta with a finding and a tip.
//! Detectors are independent of each other: none reads another's outcome,
//! and all of them are total over any `NormalizedUrl`.

mod brand;
mod host;
mod href;
mod path;
mod transport;

pub use brand::{fold_host, BrandLure};
pub use host::{IpHost, ManySubdomains, PunycodeHost, RiskyTld, Shortener};
pub use href::{CredentialAt, HeavyPercentEncoding, LongUrl};
pub use path::LoginBait;
pub use transport::PlainTransport;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::normalize::NormalizedUrl;

/// Stable identifier for each detector, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectorId {
    PlainTransport,
    IpHost,
    ManySubdomains,
    CredentialAt,
    HeavyPercentEncoding,
    RiskyTld,
    Shortener,
    BrandLure,
    Punycode,
    LoginBait,
    LongUrl,
}

impl fmt::Display for DetectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetectorId::PlainTransport => "plain_transport",
            DetectorId::IpHost => "ip_host",
            DetectorId::ManySubdomains => "many_subdomains",
            DetectorId::CredentialAt => "credential_at",
            DetectorId::HeavyPercentEncoding => "heavy_percent_encoding",
            DetectorId::RiskyTld => "risky_tld",
            DetectorId::Shortener => "shortener",
            DetectorId::BrandLure => "brand_lure",
            DetectorId::Punycode => "punycode",
            DetectorId::LoginBait => "login_bait",
            DetectorId::LongUrl => "long_url",
        };
        f.write_str(name)
    }
}

/// What a firing detector adds to the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    pub detector: DetectorId,
    pub delta: i32,
    pub finding: String,
    pub tip: String,
}

impl Contribution {
    pub fn new(
        detector: DetectorId,
        delta: i32,
        finding: impl Into<String>,
        tip: impl Into<String>,
    ) -> Self {
        Self {
            detector,
            delta,
            finding: finding.into(),
            tip: tip.into(),
        }
    }
}

/// A single independent scoring rule.
pub trait Detector {
    fn id(&self) -> DetectorId;

    /// Returns `Some` when the rule fires. Must not panic for any input.
    fn evaluate(&self, url: &NormalizedUrl) -> Option<Contribution>;
}

/// Boxed detector usable from a shared, process-wide analyzer.
pub type DynDetector = Box<dyn Detector + Send + Sync>;

/// The standard detector set, in evaluation (display) order.
pub fn default_detectors() -> Vec<DynDetector> {
    vec![
        Box::new(PlainTransport),
        Box::new(IpHost),
        Box::new(ManySubdomains),
        Box::new(CredentialAt),
        Box::new(HeavyPercentEncoding),
        Box::new(RiskyTld),
        Box::new(Shortener),
        Box::new(BrandLure),
        Box::new(PunycodeHost),
        Box::new(LoginBait),
        Box::new(LongUrl),
    ]
}

#[cfg(test)]
pub(crate) fn eval(detector: &dyn Detector, input: &str) -> Option<Contribution> {
    let url = crate::normalize::normalize(input).expect("test input should parse");
    detector.evaluate(&url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_is_in_table_order() {
        let ids: Vec<DetectorId> = default_detectors().iter().map(|d| d.id()).collect();
        assert_eq!(
            ids,
            vec![
                DetectorId::PlainTransport,
                DetectorId::IpHost,
                DetectorId::ManySubdomains,
                DetectorId::CredentialAt,
                DetectorId::HeavyPercentEncoding,
                DetectorId::RiskyTld,
                DetectorId::Shortener,
                DetectorId::BrandLure,
                DetectorId::Punycode,
                DetectorId::LoginBait,
                DetectorId::LongUrl,
            ]
        );
    }

    #[test]
    fn detector_id_display_matches_serde() {
        let json = serde_json::to_string(&DetectorId::HeavyPercentEncoding).unwrap();
        assert_eq!(json, format!("\"{}\"", DetectorId::HeavyPercentEncoding));
    }

    #[test]
    fn clean_https_url_fires_nothing() {
        for d in default_detectors() {
            assert!(eval(d.as_ref(), "https://example.com").is_none(), "{} fired", d.id());
        }
    }
}
