//! Endpoint - Backend server resolution
//!
//! Turns an optional `host:port` string into a concrete server address.
//! An empty string selects the default server for the (network, backend)
//! pair; anything else is parsed verbatim and never consults the network or
//! backend.
//!
//! ```text
//! ""                     → default table[(network, backend)]
//! "foobar:s1234"         → ("foobar", "s1234")
//! "[2001:db8::1]:s1234"  → ("2001:db8::1", "s1234")
//! ```
//!
//! Ports stay strings: Electrum prefixes TLS ports with `s`, Btcd does not.

use crate::error::{Error, Result};
use crate::network::Network;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend server kind. Selects the default server and port convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Electrum server. TLS ports carry an `s` prefix (`s50002`).
    #[default]
    Electrum,
    /// Btcd full node RPC, usually local.
    Btcd,
}

impl Backend {
    /// Every backend, in default-table order.
    pub const ALL: [Backend; 2] = [Backend::Electrum, Backend::Btcd];

    /// Lowercase name, as accepted by `FromStr` and written to config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Electrum => "electrum",
            Backend::Btcd => "btcd",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "electrum" => Ok(Backend::Electrum),
            "btcd" => Ok(Backend::Btcd),
            _ => Err(Error::invalid_enum("backend", value)),
        }
    }
}

/// A resolved server address. Host and port are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    /// Hostname, IPv4 or IPv6 address, without brackets.
    pub host: String,
    /// Port as given, including any backend prefix.
    pub port: String,
}

impl Endpoint {
    /// Build an endpoint without validation.
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self { host: host.into(), port: port.into() }
    }

    /// Default server for a network and backend.
    pub fn default_for(network: Network, backend: Backend) -> Self {
        let (host, port) = default_server(network, backend);
        Self::new(host, port)
    }

    /// Split into `(host, port)`.
    pub fn into_parts(self) -> (String, String) {
        (self.host, self.port)
    }
}

/// Renders `host:port`, bracketing hosts that contain a colon so the output
/// parses back to the same endpoint.
impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Self> {
        let malformed = || Error::MalformedEndpoint(spec.to_string());
        let has_bracket = |s: &str| s.contains(|c: char| c == '[' || c == ']');

        let (host, port) = if let Some(rest) = spec.strip_prefix('[') {
            let close = rest.find(']').ok_or_else(malformed)?;
            let port = rest[close + 1..].strip_prefix(':').ok_or_else(malformed)?;
            // A colon after `[host]:` would make the port ambiguous.
            if port.contains(':') {
                return Err(malformed());
            }
            (&rest[..close], port)
        } else {
            spec.rsplit_once(':').ok_or_else(malformed)?
        };

        if host.is_empty() || port.is_empty() || has_bracket(host) || has_bracket(port) {
            return Err(malformed());
        }
        Ok(Self::new(host, port))
    }
}

/// Static default table keyed by (network, backend).
pub const fn default_server(network: Network, backend: Backend) -> (&'static str, &'static str) {
    match (network, backend) {
        (Network::Mainnet, Backend::Electrum) => ("electrum.blockstream.info", "s50002"),
        (Network::Testnet, Backend::Electrum) => ("testnet.hsmiths.com", "s53012"),
        (Network::Mainnet, Backend::Btcd) => ("localhost", "8334"),
        (Network::Testnet, Backend::Btcd) => ("localhost", "18334"),
    }
}

/// Resolve a server address. Empty `spec` falls back to the default table.
pub fn resolve(network: Network, backend: Backend, spec: &str) -> Result<Endpoint> {
    let endpoint = if spec.is_empty() {
        Endpoint::default_for(network, backend)
    } else {
        spec.parse()?
    };
    tracing::debug!(%network, %backend, spec, endpoint = %endpoint, "resolved server");
    Ok(endpoint)
}
