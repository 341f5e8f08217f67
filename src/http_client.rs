use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Build the shared HTTP client used by both tools.
///
/// Certificate validation is disabled on purpose: an audit still needs to see
/// the response headers of hosts with broken or self-signed TLS.
pub fn build(timeout_secs: u64) -> anyhow::Result<Client> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(5))
        .gzip(true)
        .use_rustls_tls()
        .redirect(reqwest::redirect::Policy::limited(5))
        .user_agent(concat!("webrecon/", env!("CARGO_PKG_VERSION")))
        .danger_accept_invalid_certs(true)
        .build()?;
    Ok(client)
}
