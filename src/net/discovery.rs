//! Local address discovery for operator-facing messages.

use std::net::{IpAddr, Ipv4Addr};

/// First non-loopback IPv4 address of this host, or an empty string.
pub fn local_address() -> String {
    match if_addrs::get_if_addrs() {
        Ok(interfaces) => select_address(interfaces.iter().map(|iface| iface.ip()))
            .map(|ip| ip.to_string())
            .unwrap_or_default(),
        Err(e) => {
            tracing::debug!(error = %e, "Failed to enumerate interface addresses");
            String::new()
        }
    }
}

/// Pick the first address that is IPv4 (or IPv4-mapped IPv6) and not loopback.
pub fn select_address<I>(addrs: I) -> Option<Ipv4Addr>
where
    I: IntoIterator<Item = IpAddr>,
{
    addrs
        .into_iter()
        .filter_map(|addr| match addr {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(v6) => v6.to_ipv4_mapped(),
        })
        .find(|v4| !v4.is_loopback())
}
