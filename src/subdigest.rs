// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Subdigest computation.

use crate::config::DOMAIN_PREFIX;
use crate::hash::keccak256_parts;
use crate::types::{Address, ChainId, Digest32};

/// `keccak256(0x1901 || uint256(chain_id) || pad32(address) || digest)`.
///
/// Binds `digest` to a chain and a signer so that a signature over it cannot be
/// replayed under another wallet or network. Total for any well-formed input.
pub fn subdigest_of(chain_id: ChainId, address: &Address, digest: &Digest32) -> Digest32 {
    Digest32(keccak256_parts(&[
        &DOMAIN_PREFIX[..],
        &chain_id.to_word()[..],
        &address.to_word()[..],
        &digest.as_bytes()[..],
    ]))
}
