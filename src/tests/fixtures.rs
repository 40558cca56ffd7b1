// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Shared test inputs.

use k256::ecdsa::SigningKey;

use crate::recovery::address_of;
use crate::types::{Address, ChainId, Digest32, DigestCandidate};
use crate::CandidateSpace;

pub const A: Address = Address([0xaa; 20]);
pub const B: Address = Address([0xbb; 20]);
pub const C: Address = Address([0xcc; 20]);

pub fn digest(byte: u8, label: &str) -> DigestCandidate {
    DigestCandidate::new(Digest32([byte; 32]), label)
}

pub fn space(chains: &[u64], addresses: &[Address], digests: Vec<DigestCandidate>) -> CandidateSpace {
    CandidateSpace::new(
        chains.iter().copied().map(ChainId).collect(),
        addresses.to_vec(),
        digests,
    )
}

pub fn signing_key(seed: u8) -> SigningKey {
    SigningKey::from_slice(&[seed; 32]).unwrap()
}

pub fn signer_address(key: &SigningKey) -> Address {
    address_of(key.verifying_key())
}

/// `r || s || v` with `v` in 27/28.
pub fn sign(key: &SigningKey, digest: &Digest32) -> Vec<u8> {
    let (sig, rid) = key.sign_prehash_recoverable(digest.as_bytes()).unwrap();
    let mut out = sig.to_bytes().to_vec();
    out.push(27 + rid.to_byte());
    out
}
