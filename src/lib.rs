//! btcaudit: helpers for a Bitcoin auditing tool.
//!
//! # Modules
//!
//! | Module | Provides |
//! |--------|----------|
//! | [`endpoint`] | Backend server resolution (`host:port`, `[ipv6]:port`, defaults) |
//! | [`network`] | Network sniffing for xpubs and addresses, chain params, genesis hashes |
//! | [`multisig`] | M-of-N bounds |
//! | [`util`] | `max` over a list |
//! | [`config`] | Layered configuration (JSON file, `BTCAUDIT_*` env) |
//!
//! # Features
//!
//! - `native` - CLI binary and the tracing subscriber in [`logging`]
//!
//! # Usage
//!
//! ```
//! use btcaudit::{resolve, Backend, Network};
//!
//! let server = resolve(Network::Testnet, Backend::Btcd, "").unwrap();
//! assert_eq!((server.host.as_str(), server.port.as_str()), ("localhost", "18334"));
//!
//! let server = resolve(Network::Testnet, Backend::Electrum, "[2001:db8::1]:s1234").unwrap();
//! assert_eq!(server.host, "2001:db8::1");
//! ```

pub mod config;
pub mod endpoint;
pub mod error;
pub mod multisig;
pub mod network;
pub mod util;

#[cfg(feature = "native")]
pub mod logging;

pub use config::Config;
pub use endpoint::{default_server, resolve, Backend, Endpoint};
pub use error::{Error, Result};
pub use multisig::{verify_m_and_n, MAX_MULTISIG_KEYS};
pub use network::{address_to_network, genesis_block, xpub_to_network, Network};
pub use util::max;
