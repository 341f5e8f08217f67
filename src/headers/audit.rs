use std::net::IpAddr;

use anyhow::{anyhow, Context};
use hickory_resolver::TokioAsyncResolver;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use super::checks::{evaluate, FindingKind, HeaderSet};

/// Fetch the response headers for a target with a HEAD request, falling back
/// to GET once if the server answers 405.
pub async fn fetch_headers(client: &Client, url: &str) -> anyhow::Result<HeaderSet> {
    let mut resp = client.head(url).send().await.context("HEAD request failed")?;
    if resp.status() == StatusCode::METHOD_NOT_ALLOWED {
        debug!(url, "HEAD not allowed, retrying with GET");
        resp = client.get(url).send().await.context("GET fallback failed")?;
    }
    debug!(url, status = %resp.status(), "received response");

    let mut out = HeaderSet::new();
    for (name, value) in resp.headers() {
        // Skip values that are not valid UTF-8; none of the audited headers
        // legitimately carry opaque bytes.
        if let Ok(v) = value.to_str() {
            out.insert(
                name.as_str().trim().to_ascii_lowercase(),
                v.trim().to_ascii_lowercase(),
            );
        }
    }
    Ok(out)
}

/// Build the `ip | host | url` line used in report entries. Resolution
/// failure degrades the address column to `-` instead of failing the target.
pub async fn host_info(resolver: &TokioAsyncResolver, url: &str) -> anyhow::Result<String> {
    let parsed = Url::parse(url).with_context(|| format!("invalid target URL {url}"))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| anyhow!("target URL {url} has no host"))?;

    let ip = match host.parse::<IpAddr>() {
        Ok(literal) => Some(literal),
        Err(_) => match resolver.lookup_ip(host).await {
            Ok(lookup) => lookup.iter().next(),
            Err(e) => {
                debug!(host, error = %e, "DNS resolution failed");
                None
            }
        },
    };
    let ip = ip.map(|i| i.to_string()).unwrap_or_else(|| "-".to_string());

    Ok(format!("{ip} | {host} | {url}"))
}

/// Audit one target end to end: fetch, normalize, evaluate. Returns one
/// report entry per finding.
pub async fn audit_target(
    client: &Client,
    resolver: &TokioAsyncResolver,
    url: &str,
    strict: bool,
) -> anyhow::Result<Vec<(FindingKind, String)>> {
    let headers = fetch_headers(client, url).await?;
    let info = host_info(resolver, url).await?;

    let mut out = Vec::new();
    for finding in evaluate(&headers, strict) {
        let entry = match finding.detail {
            Some(detail) => format!("{info} {detail}"),
            None => info.clone(),
        };
        out.push((finding.kind, entry));
    }
    Ok(out)
}
