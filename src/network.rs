//! Network - Which chain a key, address or server belongs to.
//!
//! Classification is prefix inspection only: no base58 checksum and no
//! key parsing. A string that merely starts like an xpub is accepted.
//!
//! | Input | Mainnet | Testnet |
//! |-------|---------|---------|
//! | Extended key | `xpub` `ypub` `zpub` `Ypub` `Zpub` | `tpub` `upub` `vpub` `Upub` `Vpub` |
//! | Address | `1…` `3…` `bc1…` | `m…` `n…` `2…` `tb1…` |

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bitcoin network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Bitcoin mainnet.
    #[default]
    Mainnet,
    /// Bitcoin testnet3.
    Testnet,
}

const MAINNET_XPUB_PREFIXES: &[&str] = &["xpub", "ypub", "zpub", "Ypub", "Zpub"];
const TESTNET_XPUB_PREFIXES: &[&str] = &["tpub", "upub", "vpub", "Upub", "Vpub"];

impl Network {
    /// Every supported network.
    pub const ALL: [Network; 2] = [Network::Mainnet, Network::Testnet];

    /// Get the network name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    /// Convert to the bitcoin crate network type. Testnet is testnet3.
    pub fn to_bitcoin(&self) -> bitcoin::Network {
        match self {
            Network::Mainnet => bitcoin::Network::Bitcoin,
            Network::Testnet => bitcoin::Network::Testnet,
        }
    }

    /// Consensus parameters for this network.
    pub fn chain_params(&self) -> bitcoin::params::Params {
        bitcoin::params::Params::new(self.to_bitcoin())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" | "bitcoin" => Ok(Network::Mainnet),
            "testnet" | "testnet3" | "test" => Ok(Network::Testnet),
            _ => Err(Error::invalid_enum("network", value)),
        }
    }
}

/// Detect the network of an extended public key from its version prefix.
pub fn xpub_to_network(xpub: &str) -> Result<Network> {
    let network = if MAINNET_XPUB_PREFIXES.iter().any(|p| xpub.starts_with(p)) {
        Network::Mainnet
    } else if TESTNET_XPUB_PREFIXES.iter().any(|p| xpub.starts_with(p)) {
        Network::Testnet
    } else {
        return Err(Error::UnknownXpubPrefix(xpub.to_string()));
    };
    tracing::debug!(network = %network, "classified extended key");
    Ok(network)
}

/// Detect the network of an address from its leading characters.
pub fn address_to_network(address: &str) -> Result<Network> {
    let lower = address.to_ascii_lowercase();
    let network = if lower.starts_with("bc1") {
        Network::Mainnet
    } else if lower.starts_with("tb1") {
        Network::Testnet
    } else {
        match address.chars().next() {
            Some('1') | Some('3') => Network::Mainnet,
            Some('m') | Some('n') | Some('2') => Network::Testnet,
            _ => return Err(Error::UnknownAddressPrefix(address.to_string())),
        }
    };
    tracing::debug!(address, network = %network, "classified address");
    Ok(network)
}

/// Genesis block hash in display (big-endian) hex.
pub fn genesis_block(network: Network) -> String {
    bitcoin::constants::genesis_block(network.to_bitcoin())
        .block_hash()
        .to_string()
}
