//! Input normalization: trim, inject a default scheme, parse.
//!
//! Parsing goes through the WHATWG-compliant `url` crate, so hosts come back
//! lowercased and internationalized names come back in punycode.

mod error;

pub use error::{NormalizeError, Rejection};

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::aggregate::AnalysisResult;

/// Scheme assumed when the input has none. Only affects parsing; the
/// transport detector still judges the resulting scheme on its own.
const DEFAULT_SCHEME_PREFIX: &str = "https://";

static SCHEME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z]+://").expect("scheme prefix pattern"));

pub const EMPTY_PROMPT: &str = "Paste a URL to analyze.";
pub const INVALID_FINDING: &str = "Invalid URL format.";
pub const INVALID_TIP: &str = "Use full domain like example.com/login";

/// A parsed URL broken into the components the detectors inspect.
///
/// Built once per analysis and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    scheme: String,
    host: String,
    host_lower: String,
    labels: Vec<String>,
    path: String,
    full_href: String,
    query: String,
}

impl NormalizedUrl {
    fn from_parsed(parsed: &Url) -> Self {
        let host = parsed.host_str().unwrap_or_default().to_string();
        let host_lower = host.to_lowercase();
        let labels = host.split('.').map(str::to_string).collect();
        // An empty query ("?" alone) counts as no query.
        let query = match parsed.query() {
            Some(q) if !q.is_empty() => format!("?{q}"),
            _ => String::new(),
        };
        let path = format!("{}{}", parsed.path(), query);

        Self {
            scheme: format!("{}:", parsed.scheme()),
            host,
            host_lower,
            labels,
            path,
            full_href: parsed.as_str().to_string(),
            query,
        }
    }

    /// Scheme with trailing colon, e.g. `"https:"`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn host_lower(&self) -> &str {
        &self.host_lower
    }

    /// Host split on `.`; a host without dots yields a single label.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Last label of the host (empty for a trailing dot or missing host).
    pub fn tld(&self) -> &str {
        self.labels.last().map(String::as_str).unwrap_or_default()
    }

    /// Pathname followed by the query (with its `?`).
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn full_href(&self) -> &str {
        &self.full_href
    }

    /// Raw query including the leading `?`, or empty.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Prepends the default scheme when `input` has no `letters://` prefix.
pub fn with_default_scheme(input: &str) -> String {
    if SCHEME_PREFIX.is_match(input) {
        input.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{input}")
    }
}

/// Normalizes raw user input into a [`NormalizedUrl`].
///
/// # Examples
///
/// - `normalize("example.com")` parses as `https://example.com/`
/// - `normalize("   ")` → `Err(Rejection::Empty)`
/// - `normalize("not a url at all!!")` → `Err(Rejection::Malformed(_))`
pub fn normalize(input: &str) -> Result<NormalizedUrl, Rejection> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Rejection::Empty);
    }

    let candidate = with_default_scheme(trimmed);
    let parsed = Url::parse(&candidate).map_err(|source| {
        Rejection::Malformed(NormalizeError {
            candidate: candidate.clone(),
            source,
        })
    })?;

    Ok(NormalizedUrl::from_parsed(&parsed))
}

impl Rejection {
    /// The fixed result shown instead of running the detectors.
    pub fn into_result(self) -> AnalysisResult {
        match self {
            Rejection::Empty => AnalysisResult {
                score: 0,
                findings: vec![EMPTY_PROMPT.to_string()],
                tips: Vec::new(),
            },
            Rejection::Malformed(_) => AnalysisResult {
                score: 100,
                findings: vec![INVALID_FINDING.to_string()],
                tips: vec![INVALID_TIP.to_string()],
            },
        }
    }
}
