use std::fmt;
use std::net::Ipv4Addr;

use ipnetwork::Ipv4Network;
use tracing::debug;

use crate::output::log_err;

/// A validated, in-scope target: a single public address or a public network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeTarget {
    Address(Ipv4Addr),
    Network(Ipv4Network),
}

impl fmt::Display for ScopeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeTarget::Address(addr) => write!(f, "{addr}"),
            ScopeTarget::Network(net) => write!(f, "{net}"),
        }
    }
}

/// Globally routable IPv4 semantics: everything not carved out for private,
/// local, multicast, documentation or otherwise special use.
pub fn is_public_address(addr: Ipv4Addr) -> bool {
    let octets = addr.octets();
    // Ranges std does not classify on stable: this-network (0/8), shared
    // address space (100.64/10, RFC 6598), IETF protocol assignments
    // (192.0.0/24), benchmarking (198.18/15) and reserved (240/4).
    let this_network = octets[0] == 0;
    let shared = octets[0] == 100 && (octets[1] & 0b1100_0000) == 64;
    let protocol_assignments = octets[0] == 192 && octets[1] == 0 && octets[2] == 0;
    let benchmarking = octets[0] == 198 && (octets[1] & 0xfe) == 18;
    let reserved = octets[0] & 0xf0 == 240 && !addr.is_broadcast();

    !(addr.is_private()
        || addr.is_loopback()
        || addr.is_link_local()
        || addr.is_multicast()
        || addr.is_broadcast()
        || addr.is_documentation()
        || addr.is_unspecified()
        || this_network
        || shared
        || protocol_assignments
        || benchmarking
        || reserved)
}

/// A network is in scope when its network address is publicly routable.
pub fn is_public_network(net: Ipv4Network) -> bool {
    is_public_address(net.network())
}

/// Classify raw target strings. Strings containing `/` parse as CIDR
/// networks, everything else as single addresses. Parse failures are logged
/// and dropped; parseable but non-public targets are dropped quietly.
pub fn parse_targets(raw: &[String]) -> Vec<ScopeTarget> {
    let mut out = Vec::new();
    for target in raw {
        if target.contains('/') {
            match target.parse::<Ipv4Network>() {
                Ok(net) if is_public_network(net) => out.push(ScopeTarget::Network(net)),
                Ok(net) => debug!(%net, "network is not publicly routable, skipping"),
                Err(e) => log_err(&format!("invalid network {target}: {e}")),
            }
        } else {
            match target.parse::<Ipv4Addr>() {
                Ok(addr) if is_public_address(addr) => out.push(ScopeTarget::Address(addr)),
                Ok(addr) => debug!(%addr, "address is not publicly routable, skipping"),
                Err(e) => log_err(&format!("invalid address {target}: {e}")),
            }
        }
    }
    out
}
