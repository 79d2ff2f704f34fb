//! Detectors over the full serialized URL.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Contribution, Detector, DetectorId};
use crate::normalize::NormalizedUrl;

static PERCENT_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%[0-9A-Fa-f]{2}").expect("percent escape pattern"));

const PERCENT_ESCAPE_THRESHOLD: usize = 5;
const LONG_URL_THRESHOLD: usize = 120;

/// `user@host` tricks: browsers drop everything before the `@`.
pub struct CredentialAt;

impl Detector for CredentialAt {
    fn id(&self) -> DetectorId {
        DetectorId::CredentialAt
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<Contribution> {
        url.full_href().contains('@').then(|| {
            Contribution::new(
                self.id(),
                25,
                "Contains '@' which can hide the real destination.",
                "Everything before '@' can be ignored by browsers.",
            )
        })
    }
}

pub struct HeavyPercentEncoding;

impl HeavyPercentEncoding {
    pub fn count_escapes(href: &str) -> usize {
        PERCENT_ESCAPE.find_iter(href).count()
    }
}

impl Detector for HeavyPercentEncoding {
    fn id(&self) -> DetectorId {
        DetectorId::HeavyPercentEncoding
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<Contribution> {
        (Self::count_escapes(url.full_href()) >= PERCENT_ESCAPE_THRESHOLD).then(|| {
            Contribution::new(
                self.id(),
                10,
                "Heavy percent-encoding in URL.",
                "Obfuscated URLs often conceal redirects.",
            )
        })
    }
}

pub struct LongUrl;

impl Detector for LongUrl {
    fn id(&self) -> DetectorId {
        DetectorId::LongUrl
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<Contribution> {
        (url.full_href().len() > LONG_URL_THRESHOLD).then(|| {
            Contribution::new(
                self.id(),
                10,
                "Unusually long URL.",
                "Length can hide redirections and tokens.",
            )
        })
    }
}
