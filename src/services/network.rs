//! Network self-identification for generated URLs.

use std::env;
use std::net::UdpSocket;

use url::Url;

/// Environment variable naming a remote container engine endpoint
/// (docker-machine setups; docker-for-mac does not set it).
const DOCKER_HOST_VAR: &str = "DOCKER_HOST";

/// Probed to discover the default outbound interface. Connectionless: no
/// datagram is ever sent.
const PROBE_ADDR: &str = "8.8.8.8:80";

/// Resolve the externally reachable host address.
///
/// A `DOCKER_HOST` endpoint wins; otherwise the default outbound interface
/// address is used, falling back to local interface detection and finally to
/// loopback. Never fails the run.
pub fn resolve_host_address() -> String {
    if let Some(host) = docker_host_override() {
        return host;
    }
    if let Some(address) = probe_outbound_address() {
        return address;
    }
    local_ip_address::local_ip()
        .map(|ip| ip.to_string())
        .unwrap_or_else(|_| "127.0.0.1".to_string())
}

fn docker_host_override() -> Option<String> {
    let endpoint = env::var(DOCKER_HOST_VAR).ok().filter(|value| !value.is_empty())?;
    let url = Url::parse(&endpoint).ok()?;
    url.host_str().map(str::to_string)
}

fn probe_outbound_address() -> Option<String> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect(PROBE_ADDR).ok()?;
    socket.local_addr().ok().map(|addr| addr.ip().to_string())
}
