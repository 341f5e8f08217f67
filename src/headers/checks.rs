use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Response headers after normalization: names and values lower-cased and
/// trimmed, one entry per name.
pub type HeaderSet = BTreeMap<String, String>;

/// Lowest max-age considered strong in strict mode (120 days).
pub const HSTS_MAX_AGE_FLOOR: u64 = 10_368_000;

pub const SERVER_HEADER: &str = "server";

/// The security headers the auditor checks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityHeader {
    Hsts,
    FrameOptions,
    Csp,
}

impl SecurityHeader {
    pub const ALL: [SecurityHeader; 3] = [
        SecurityHeader::Hsts,
        SecurityHeader::FrameOptions,
        SecurityHeader::Csp,
    ];

    /// Canonical lower-case header name on the wire.
    pub fn header_name(self) -> &'static str {
        match self {
            SecurityHeader::Hsts => "strict-transport-security",
            SecurityHeader::FrameOptions => "x-frame-options",
            SecurityHeader::Csp => "content-security-policy",
        }
    }

    fn missing_kind(self) -> FindingKind {
        match self {
            SecurityHeader::Hsts => FindingKind::MissingHsts,
            SecurityHeader::FrameOptions => FindingKind::MissingFrameOptions,
            SecurityHeader::Csp => FindingKind::MissingCsp,
        }
    }
}

/// Finding categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FindingKind {
    MissingHsts,
    WeakHsts,
    MissingFrameOptions,
    WeakFrameOptions,
    MissingCsp,
    ServerVersionDisclosure,
}

impl FindingKind {
    pub fn label(self) -> &'static str {
        match self {
            FindingKind::MissingHsts => "Missing HSTS Header",
            FindingKind::WeakHsts => "Weak HSTS Configuration",
            FindingKind::MissingFrameOptions => "Missing XFO Header",
            FindingKind::WeakFrameOptions => "Weak XFO Configuration",
            FindingKind::MissingCsp => "Missing CSP Header",
            FindingKind::ServerVersionDisclosure => "Server Header with version Information",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub kind: FindingKind,
    pub detail: Option<String>,
}

static VERSION_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

/// Crude version-disclosure heuristic: any digit in the Server value.
pub fn server_discloses_version(value: &str) -> bool {
    VERSION_DIGIT.is_match(value)
}

/// Parsed Strict-Transport-Security directives.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HstsPolicy {
    pub max_age: Option<u64>,
    pub include_subdomains: bool,
    pub preload: bool,
}

impl HstsPolicy {
    /// Split a header value on `;` and collect the known directives.
    /// Unknown directives are ignored per RFC 6797.
    pub fn parse(value: &str) -> Self {
        let mut policy = Self::default();
        for directive in value.split(';') {
            let directive = directive.trim().to_ascii_lowercase();
            if directive == "includesubdomains" {
                policy.include_subdomains = true;
            } else if directive == "preload" {
                policy.preload = true;
            } else if let Some(rest) = directive.strip_prefix("max-age") {
                // The value may be quoted.
                if let Some(raw) = rest.trim_start().strip_prefix('=') {
                    policy.max_age = raw.trim().trim_matches('"').parse().ok();
                }
            }
        }
        policy
    }

    /// Weaknesses per current best practice. Absent `preload` is not a
    /// weakness; preload list submission is opt-in.
    pub fn weaknesses(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        match self.max_age {
            None => out.push("max-age directive missing or malformed"),
            Some(age) if age <= HSTS_MAX_AGE_FLOOR => out.push("max-age at or below 10368000 seconds"),
            Some(_) => {}
        }
        if !self.include_subdomains {
            out.push("includeSubDomains not set");
        }
        out
    }
}

/// `allow-from` is obsolete and ignored by current browsers, so only the two
/// universally supported values count as strong.
pub fn frame_options_is_strong(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "deny" | "sameorigin"
    )
}

/// Evaluate one normalized header set.
///
/// Presence checks always run; `strict` additionally grades the configuration
/// of the headers that are present. CSP stays presence-only even in strict
/// mode, directive-level CSP analysis is out of scope.
pub fn evaluate(headers: &HeaderSet, strict: bool) -> Vec<Finding> {
    let mut findings = Vec::new();

    for header in SecurityHeader::ALL {
        match headers.get(header.header_name()) {
            None => findings.push(Finding {
                kind: header.missing_kind(),
                detail: None,
            }),
            Some(value) if strict => match header {
                SecurityHeader::Hsts => {
                    let weaknesses = HstsPolicy::parse(value).weaknesses();
                    if !weaknesses.is_empty() {
                        findings.push(Finding {
                            kind: FindingKind::WeakHsts,
                            detail: Some(weaknesses.join("; ")),
                        });
                    }
                }
                SecurityHeader::FrameOptions => {
                    if !frame_options_is_strong(value) {
                        findings.push(Finding {
                            kind: FindingKind::WeakFrameOptions,
                            detail: Some(value.clone()),
                        });
                    }
                }
                SecurityHeader::Csp => {}
            },
            Some(_) => {}
        }
    }

    if let Some(server) = headers.get(SERVER_HEADER) {
        if server_discloses_version(server) {
            findings.push(Finding {
                kind: FindingKind::ServerVersionDisclosure,
                detail: Some(server.clone()),
            });
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsts_parse_full_policy() {
        let policy = HstsPolicy::parse("max-age=31536000; includeSubDomains; preload");
        assert_eq!(policy.max_age, Some(31_536_000));
        assert!(policy.include_subdomains);
        assert!(policy.preload);
        assert!(policy.weaknesses().is_empty());
    }

    #[test]
    fn hsts_parse_quoted_and_cased() {
        let policy = HstsPolicy::parse("Max-Age=\"31536000\"; IncludeSubDomains");
        assert_eq!(policy.max_age, Some(31_536_000));
        assert!(policy.include_subdomains);
        assert!(!policy.preload);
    }

    #[test]
    fn hsts_short_max_age_is_weak() {
        let policy = HstsPolicy::parse("max-age=300; includeSubDomains");
        assert_eq!(
            policy.weaknesses(),
            vec!["max-age at or below 10368000 seconds"]
        );
    }

    #[test]
    fn hsts_missing_max_age_is_weak() {
        let policy = HstsPolicy::parse("includeSubDomains");
        let weaknesses = policy.weaknesses();
        assert!(weaknesses.contains(&"max-age directive missing or malformed"));
    }

    #[test]
    fn frame_options_values() {
        assert!(frame_options_is_strong("DENY"));
        assert!(frame_options_is_strong(" sameorigin "));
        assert!(!frame_options_is_strong("allow-from https://example.com"));
        assert!(!frame_options_is_strong("allowall"));
    }
}
