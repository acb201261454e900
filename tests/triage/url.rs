//! URL classification over realistic phishing and benign links.

use entroscan::triage::config::UrlConfig;
use entroscan::triage::url::{assess_url, classify_url, UrlClassifier};
use entroscan::UrlRule;

#[test]
fn test_phishing_links() {
    let links = [
        "https://secure-login.example.net/login.php?redirect=https://bank.example",
        "http://account-center.example/update/billing",
        "https://www.paypa1.com/signin",
        "http://203.0.113.7/wp-admin/",
        "http://files.example.org/get?exe=dropper",
        "https://support.example/security/verify-identity",
    ];
    for link in links {
        assert!(classify_url(link), "{link}");
    }
}

#[test]
fn test_benign_links() {
    let links = [
        "https://www.rust-lang.org/learn",
        "https://docs.example.com/guide/login",
        "https://example.com/account",
        "http://localhost:8080/",
        "https://cdn.example.com/v1.2.3/app.js",
        "",
    ];
    for link in links {
        assert!(!classify_url(link), "{link}");
    }
}

#[test]
fn test_version_string_path_is_not_ip() {
    // Only the host part is scanned; dots after the first '/' are ignored.
    assert!(!classify_url("https://example.com/releases/1.2.3.4"));
}

#[test]
fn test_assessment_reports_raw_ip_only() {
    let a = assess_url("http://198.51.100.20/index.html");
    assert_eq!(a.matches, vec![UrlRule::RawIpHost]);
}

#[test]
fn test_custom_rule_set() {
    let cfg = UrlConfig {
        keyword_pairs: vec![("invoice".into(), "download".into())],
        lookalike_domains: vec!["rnicrosoft.com".into()],
        query_params: vec![],
        detect_raw_ip: false,
    };
    let classifier = UrlClassifier::new(&cfg);
    assert!(classifier.is_suspicious("https://x.example/invoice/download"));
    assert!(classifier.is_suspicious("https://login.rnicrosoft.com/"));
    assert!(!classifier.is_suspicious("http://10.0.0.1/"));
    assert!(!classifier.is_suspicious("http://x.example/?cmd=id"));
}
