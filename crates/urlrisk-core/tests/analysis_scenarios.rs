//! End-to-end scoring scenarios through the public `analyze` entry point.

use urlrisk_core::aggregate::{DEFAULT_FINDING, DEFAULT_TIP};
use urlrisk_core::analyze;
use urlrisk_core::normalize::{EMPTY_PROMPT, INVALID_FINDING, INVALID_TIP};

#[test]
fn http_ip_login_with_long_query() {
    let r = analyze("http://192.168.1.5/login?x=aaaaaaaaaaaaaaaaaaaaaaaa");
    // HTTP (30) + IP (35) + dotted quad has four labels (15) + login bait (10).
    assert_eq!(r.score, 90);
    assert_eq!(
        r.findings,
        vec![
            "Uses HTTP (not encrypted).",
            "IP address instead of domain.",
            "Many subdomains: 192.168.1.5",
            "Suspicious login/verify flow with parameters.",
        ]
    );
    assert_eq!(r.tips.len(), r.findings.len());
}

#[test]
fn known_shortener() {
    let r = analyze("https://bit.ly/abc123");
    assert_eq!(r.score, 25);
    assert_eq!(r.findings, vec!["Known URL shortener."]);
    assert_eq!(r.tips, vec!["Unshorten and verify destination before login."]);
}

#[test]
fn brand_lure_on_risky_tld() {
    let r = analyze("https://secure-paypal-login.verify-account.xyz");
    assert_eq!(r.score, 30);
    assert_eq!(
        r.findings,
        vec![
            "Suspicious TLD “.xyz”.",
            "Possible typosquat / brand lure: “paypal” in secure-paypal-login.verify-account.xyz",
        ]
    );
}

#[test]
fn unparseable_text() {
    let r = analyze("not a url at all!!");
    assert_eq!(r.score, 100);
    assert_eq!(r.findings, vec![INVALID_FINDING]);
    assert_eq!(r.tips, vec![INVALID_TIP]);
}

#[test]
fn clean_url() {
    let r = analyze("https://example.com");
    assert_eq!(r.score, 0);
    assert_eq!(r.findings, vec![DEFAULT_FINDING]);
    assert_eq!(r.tips, vec![DEFAULT_TIP]);
}

#[test]
fn empty_input_prompts() {
    let r = analyze("");
    assert_eq!(r.score, 0);
    assert_eq!(r.findings, vec![EMPTY_PROMPT]);
    assert!(r.tips.is_empty());

    assert_eq!(analyze(" \t\n"), r);
}

#[test]
fn malformed_brackets_and_control_chars_score_max() {
    assert_eq!(analyze("http://[::1").score, 100);
    assert_eq!(analyze("https://exa\u{0001}mple.com").score, 100);
    assert_eq!(analyze("https://").score, 100);
}

#[test]
fn bare_domain_matches_explicit_https() {
    for host in ["example.com", "bit.ly/abc", "secure-paypal-login.verify-account.xyz"] {
        assert_eq!(analyze(host), analyze(&format!("https://{host}")), "{host}");
    }
}

#[test]
fn punycode_homoglyph() {
    let r = analyze("https://xn--bcher-kva.example/");
    assert_eq!(r.score, 20);
    assert_eq!(r.findings, vec!["Punycode domain (possible homoglyph)."]);
}

#[test]
fn unicode_host_is_scored_as_punycode() {
    // Cyrillic "а" in place of Latin "a".
    let r = analyze("https://аpple.com");
    assert!(r.findings.contains(&"Punycode domain (possible homoglyph).".to_string()));
}

#[test]
fn credential_forwarding_trick() {
    let r = analyze("https://www.paypal.com@203.0.113.9/");
    // IP (35) + four labels (15) + "@" (25).
    assert_eq!(r.score, 75);
    assert_eq!(r.findings[0], "IP address instead of domain.");
    assert!(r.findings.contains(&"Contains '@' which can hide the real destination.".to_string()));
}

#[test]
fn worst_case_is_clamped() {
    let long_query = "a".repeat(120);
    let input = format!(
        "http://user@paypal.login.secure.example.tk/%41%42%43%44%45/login?token={long_query}"
    );
    let r = analyze(&input);
    assert_eq!(r.score, 100);
    assert!(r.findings.len() >= 7);
    assert_eq!(r.findings.len(), r.tips.len());
}

#[test]
fn non_http_scheme_counts_as_plain_transport() {
    let r = analyze("ftp://files.example.org/pub");
    assert_eq!(r.score, 30);
    assert_eq!(r.findings, vec!["Uses HTTP (not encrypted)."]);
}
