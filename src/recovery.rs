// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! secp256k1 signer recovery.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

use crate::config::{COMPACT_SIGNATURE_LEN, SIGNATURE_LEN};
use crate::error::{KernelError, Result};
use crate::hash::keccak256;
use crate::types::{Address, Digest32};

/// Splits a raw signature into `(r || s, recovery id)`.
///
/// Accepts `r || s || v` (v in 0/1, 27/28, or EIP-155 style >= 35) and the
/// EIP-2098 compact form where the parity bit lives in the top bit of `s`.
fn split_signature(raw: &[u8]) -> Result<([u8; 64], u8)> {
    let mut rs = [0u8; 64];
    let parity = match raw.len() {
        SIGNATURE_LEN => {
            rs.copy_from_slice(&raw[..64]);
            if rs[32] & 0x80 != 0 {
                return Err(KernelError::Recovery("non-canonical s".into()));
            }
            match raw[64] {
                0 | 27 => 0,
                1 | 28 => 1,
                v if v >= 35 => (v & 1) ^ 1,
                v => return Err(KernelError::Recovery(format!("invalid v {v}"))),
            }
        }
        COMPACT_SIGNATURE_LEN => {
            rs.copy_from_slice(raw);
            let parity = rs[32] >> 7;
            rs[32] &= 0x7f;
            parity
        }
        found => {
            return Err(KernelError::InvalidLength {
                what: "signature",
                expected: SIGNATURE_LEN,
                found,
            })
        }
    };
    Ok((rs, parity))
}

/// Recovers the address that produced `signature` over the prehashed `digest`.
///
/// Only low-s signatures recover. For 65-byte input the top bit of `s` is
/// checked here, and `k256` rejects any remaining `s` in `(n/2, 2^255)`, a range
/// some Ethereum libraries still accept. Such signatures come back as
/// `KernelError::Recovery`, so the search treats them as non-matches.
pub fn recover_signer(digest: &Digest32, signature: &[u8]) -> Result<Address> {
    let (rs, parity) = split_signature(signature)?;

    let sig = Signature::from_slice(&rs).map_err(|e| KernelError::Recovery(e.to_string()))?;
    let rid = RecoveryId::from_byte(parity)
        .ok_or_else(|| KernelError::Recovery(format!("invalid recovery id {parity}")))?;
    let key = VerifyingKey::recover_from_prehash(digest.as_bytes(), &sig, rid)
        .map_err(|e| KernelError::Recovery(e.to_string()))?;

    Ok(address_of(&key))
}

/// Address of a public key: low 20 bytes of keccak256 over the uncompressed point (tag byte dropped).
pub fn address_of(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    Address::from_hash_tail(&keccak256(&point.as_bytes()[1..]))
}
