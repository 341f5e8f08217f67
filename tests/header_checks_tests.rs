use webrecon::headers::checks::server_discloses_version;
use webrecon::headers::{evaluate, FindingKind, HeaderSet};

fn header_set(pairs: &[(&str, &str)]) -> HeaderSet {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn missing_hsts_is_reported() {
    let headers = header_set(&[
        ("x-frame-options", "deny"),
        ("content-security-policy", "default-src 'self'"),
    ]);
    let findings = evaluate(&headers, false);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::MissingHsts);
}

#[test]
fn fully_configured_response_is_clean() {
    let headers = header_set(&[
        ("strict-transport-security", "max-age=31536000; includesubdomains"),
        ("x-frame-options", "sameorigin"),
        ("content-security-policy", "default-src 'self'"),
        ("server", "nginx"),
    ]);
    assert!(evaluate(&headers, false).is_empty());
    assert!(evaluate(&headers, true).is_empty());
}

#[test]
fn server_version_heuristic() {
    assert!(server_discloses_version("apache/2.4.1"));
    assert!(server_discloses_version("iis 10"));
    assert!(!server_discloses_version("nginx"));
    assert!(!server_discloses_version("cloudflare"));
}

#[test]
fn bare_apache_response_yields_four_findings() {
    // The spec example: no security headers and a versioned Server banner.
    let headers = header_set(&[("server", "apache/2.4.1")]);
    let findings = evaluate(&headers, false);
    let kinds: Vec<FindingKind> = findings.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FindingKind::MissingHsts,
            FindingKind::MissingFrameOptions,
            FindingKind::MissingCsp,
            FindingKind::ServerVersionDisclosure,
        ]
    );
    assert_eq!(findings[3].detail.as_deref(), Some("apache/2.4.1"));
}

#[test]
fn strict_mode_grades_present_headers() {
    let headers = header_set(&[
        ("strict-transport-security", "max-age=300"),
        ("x-frame-options", "allow-from https://example.com"),
        ("content-security-policy", "default-src 'self'"),
    ]);
    let findings = evaluate(&headers, true);
    let kinds: Vec<FindingKind> = findings.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![FindingKind::WeakHsts, FindingKind::WeakFrameOptions]
    );
    let hsts_detail = findings[0].detail.as_deref().unwrap();
    assert!(hsts_detail.contains("max-age"));
    assert!(hsts_detail.contains("includeSubDomains"));
}

#[test]
fn non_strict_mode_ignores_weak_values() {
    let headers = header_set(&[
        ("strict-transport-security", "max-age=300"),
        ("x-frame-options", "allowall"),
        ("content-security-policy", "default-src *"),
    ]);
    assert!(evaluate(&headers, false).is_empty());
}
