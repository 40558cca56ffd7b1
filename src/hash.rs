// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Keccak-256 hashing.

use sha3::{Digest, Keccak256};

/// Hashes `data` with Keccak-256 (the pre-standard SHA-3 padding used by Ethereum).
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    keccak256_parts(&[data])
}

/// Hashes the concatenation of `parts` without building the buffer first.
pub fn keccak256_parts(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}
