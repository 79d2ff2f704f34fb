//! Login-bait paths carrying a bulky query string.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Contribution, Detector, DetectorId};
use crate::normalize::NormalizedUrl;

// Alternation binds looser than `\b`: only "login" needs a leading boundary
// and only "pay" a trailing one.
static BAIT_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\blogin|verify|update|secure|pay\b").expect("bait words pattern")
});

/// Query length (including the `?`) above which parameters look bloated.
const QUERY_LENGTH_THRESHOLD: usize = 20;

pub struct LoginBait;

impl Detector for LoginBait {
    fn id(&self) -> DetectorId {
        DetectorId::LoginBait
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<Contribution> {
        let fires =
            url.query().len() > QUERY_LENGTH_THRESHOLD && BAIT_WORDS.is_match(url.path());
        fires.then(|| {
            Contribution::new(
                self.id(),
                10,
                "Suspicious login/verify flow with parameters.",
                "Navigate from the official homepage instead.",
            )
        })
    }
}
