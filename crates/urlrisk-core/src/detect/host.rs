//! Detectors that only look at the hostname.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Contribution, Detector, DetectorId};
use crate::normalize::NormalizedUrl;
use crate::reference;

/// Dotted-quad shape only; octet ranges are not checked.
static DOTTED_QUAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,3}(\.[0-9]{1,3}){3}$").expect("dotted quad pattern"));

const SUBDOMAIN_LABEL_THRESHOLD: usize = 4;

pub struct IpHost;

impl Detector for IpHost {
    fn id(&self) -> DetectorId {
        DetectorId::IpHost
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<Contribution> {
        DOTTED_QUAD.is_match(url.host()).then(|| {
            Contribution::new(
                self.id(),
                35,
                "IP address instead of domain.",
                "Attackers hide behind raw IPs; avoid.",
            )
        })
    }
}

pub struct ManySubdomains;

impl Detector for ManySubdomains {
    fn id(&self) -> DetectorId {
        DetectorId::ManySubdomains
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<Contribution> {
        (url.labels().len() >= SUBDOMAIN_LABEL_THRESHOLD).then(|| {
            Contribution::new(
                self.id(),
                15,
                format!("Many subdomains: {}", url.host()),
                "Extra subdomains can mask fake sites.",
            )
        })
    }
}

pub struct RiskyTld;

impl Detector for RiskyTld {
    fn id(&self) -> DetectorId {
        DetectorId::RiskyTld
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<Contribution> {
        let tld = url.tld();
        reference::is_risky_tld(tld).then(|| {
            Contribution::new(
                self.id(),
                10,
                format!("Suspicious TLD “.{tld}”."),
                "Be careful with novelty TLDs.",
            )
        })
    }
}

pub struct Shortener;

impl Detector for Shortener {
    fn id(&self) -> DetectorId {
        DetectorId::Shortener
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<Contribution> {
        reference::is_shortener(url.host_lower()).then(|| {
            Contribution::new(
                self.id(),
                25,
                "Known URL shortener.",
                "Unshorten and verify destination before login.",
            )
        })
    }
}

pub struct PunycodeHost;

impl Detector for PunycodeHost {
    fn id(&self) -> DetectorId {
        DetectorId::Punycode
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<Contribution> {
        url.host_lower().starts_with("xn--").then(|| {
            Contribution::new(
                self.id(),
                20,
                "Punycode domain (possible homoglyph).",
                "Visually similar letters can fake brands.",
            )
        })
    }
}
