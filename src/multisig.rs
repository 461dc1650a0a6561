//! Multisig threshold bounds.

use crate::error::{Error, Result};

/// Largest N accepted for an M-of-N multisig.
pub const MAX_MULTISIG_KEYS: u32 = 20;

/// Check that `1 <= m <= n <= MAX_MULTISIG_KEYS`.
pub fn verify_m_and_n(m: u32, n: u32) -> Result<()> {
    let reason = if m == 0 {
        "m must be at least 1"
    } else if m > n {
        "m cannot exceed n"
    } else if n > MAX_MULTISIG_KEYS {
        "n cannot exceed 20"
    } else {
        return Ok(());
    };
    Err(Error::InvalidMultisig { m, n, reason })
}
