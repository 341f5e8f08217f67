use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use url::Url;

pub const DEFAULT_RDAP_URL: &str = "https://rdap.arin.net/registry/ip/";

#[derive(Debug, Error)]
pub enum RdapError {
    #[error("RDAP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("bad RDAP URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("RDAP lookup for {target} returned status {status}")]
    Status { target: String, status: u16 },

    #[error("RDAP response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected RDAP schema: {0}")]
    UnexpectedSchema(&'static str),
}

/// The slice of an RDAP IP response this tool reads. The vCard payload is
/// jCard (RFC 7095), a heterogeneous array, so it stays a `Value` until
/// `owner_name` walks it.
#[derive(Debug, Clone, Deserialize)]
pub struct RdapResponse {
    #[serde(default)]
    pub entities: Vec<RdapEntity>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RdapEntity {
    #[serde(rename = "vcardArray", default)]
    pub vcard_array: Option<Value>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Extract the registrant name from the first entity's jCard `fn` property.
/// Every step is checked; a response that deviates from the expected shape
/// yields `UnexpectedSchema` instead of a panic.
pub fn owner_name(resp: &RdapResponse) -> Result<String, RdapError> {
    let entity = resp
        .entities
        .first()
        .ok_or(RdapError::UnexpectedSchema("response has no entities"))?;
    let vcard = entity
        .vcard_array
        .as_ref()
        .ok_or(RdapError::UnexpectedSchema("first entity has no vcardArray"))?;

    let properties = vcard
        .as_array()
        .filter(|a| a.len() == 2 && a[0].as_str() == Some("vcard"))
        .and_then(|a| a[1].as_array())
        .ok_or(RdapError::UnexpectedSchema(
            "vcardArray is not a [\"vcard\", properties] pair",
        ))?;

    for property in properties {
        let Some(property) = property.as_array() else {
            continue;
        };
        if property.first().and_then(Value::as_str) == Some("fn") {
            return property
                .last()
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or(RdapError::UnexpectedSchema("fn property has no text value"));
        }
    }
    Err(RdapError::UnexpectedSchema(
        "first entity vCard has no fn property",
    ))
}

/// Thin client over one RDAP registry endpoint.
pub struct RdapClient {
    http: Client,
    base_url: Url,
}

impl RdapClient {
    pub fn new(http: Client, base_url: &str) -> anyhow::Result<Self> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self {
            http,
            base_url: Url::parse(&base)?,
        })
    }

    /// One GET against `<base>/<target>`; targets may be addresses or CIDR
    /// blocks, both are valid RDAP ip-network queries.
    pub async fn lookup(&self, target: &str) -> Result<RdapResponse, RdapError> {
        let url = self.base_url.join(target)?;
        debug!(%url, "querying RDAP registry");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(RdapError::Status {
                target: target.to_string(),
                status: status.as_u16(),
            });
        }
        let body = resp.text().await?;
        let parsed: RdapResponse = serde_json::from_str(&body)?;
        debug!(handle = ?parsed.handle, name = ?parsed.name, "parsed RDAP record");
        Ok(parsed)
    }

    pub async fn owner(&self, target: &str) -> Result<String, RdapError> {
        let resp = self.lookup(target).await?;
        owner_name(&resp)
    }
}
