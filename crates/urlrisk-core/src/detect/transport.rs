//! Transport security: anything other than HTTPS.

use super::{Contribution, Detector, DetectorId};
use crate::normalize::NormalizedUrl;

pub struct PlainTransport;

impl Detector for PlainTransport {
    fn id(&self) -> DetectorId {
        DetectorId::PlainTransport
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<Contribution> {
        (url.scheme() != "https:").then(|| {
            Contribution::new(
                self.id(),
                30,
                "Uses HTTP (not encrypted).",
                "Prefer HTTPS (padlock) for logins.",
            )
        })
    }
}
