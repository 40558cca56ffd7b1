// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Candidate value types.

use crate::error::{KernelError, Result};

pub mod address;
pub mod chain;
pub mod digest;

pub use address::Address;
pub use chain::ChainId;
pub use digest::{Digest32, DigestCandidate};

/// Decodes `0x`-optional hex into raw bytes.
pub fn decode_hex(what: &'static str, value: &str) -> Result<Vec<u8>> {
    let trimmed = value.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    hex::decode(body).map_err(|_| KernelError::InvalidHex {
        what,
        value: trimmed.to_string(),
    })
}

/// Decodes hex that must be exactly `N` bytes long.
pub fn decode_fixed<const N: usize>(what: &'static str, value: &str) -> Result<[u8; N]> {
    let bytes = decode_hex(what, value)?;
    if bytes.len() != N {
        return Err(KernelError::InvalidLength {
            what,
            expected: N,
            found: bytes.len(),
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}
