// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use super::fixtures::{sign, signer_address, signing_key};
use crate::error::KernelError;
use crate::recovery::recover_signer;
use crate::types::Digest32;

#[test]
fn test_recover_with_legacy_v() {
    let key = signing_key(0x11);
    let digest = Digest32([0x5a; 32]);
    let sig = sign(&key, &digest);
    assert_eq!(sig.len(), 65);

    assert_eq!(recover_signer(&digest, &sig).unwrap(), signer_address(&key));
}

#[test]
fn test_recover_with_raw_parity_and_eip155_v() {
    let key = signing_key(0x22);
    let digest = Digest32([0x01; 32]);
    let mut sig = sign(&key, &digest);
    let parity = sig[64] - 27;

    sig[64] = parity;
    assert_eq!(recover_signer(&digest, &sig).unwrap(), signer_address(&key));

    // EIP-155, chain id 1: v = 37 + parity, odd means parity 0.
    sig[64] = 37 + parity;
    assert_eq!(recover_signer(&digest, &sig).unwrap(), signer_address(&key));
}

#[test]
fn test_recover_compact() {
    let key = signing_key(0x33);
    let digest = Digest32([0x77; 32]);
    let sig = sign(&key, &digest);

    let mut compact = sig[..64].to_vec();
    if sig[64] == 28 {
        compact[32] |= 0x80;
    }
    assert_eq!(recover_signer(&digest, &compact).unwrap(), signer_address(&key));
}

#[test]
fn test_wrong_digest_recovers_someone_else() {
    let key = signing_key(0x44);
    let sig = sign(&key, &Digest32([0x01; 32]));

    if let Ok(addr) = recover_signer(&Digest32([0x02; 32]), &sig) {
        assert_ne!(addr, signer_address(&key));
    }
}

#[test]
fn test_malformed_signatures_fail() {
    let digest = Digest32([0x01; 32]);

    assert_eq!(
        recover_signer(&digest, &[0u8; 10]),
        Err(KernelError::InvalidLength { what: "signature", expected: 65, found: 10 })
    );
    // Zero r and s are not valid scalars.
    assert!(matches!(recover_signer(&digest, &[0u8; 65]), Err(KernelError::Recovery(_))));

    let key = signing_key(0x55);
    let mut sig = sign(&key, &digest);
    sig[64] = 5;
    assert!(matches!(recover_signer(&digest, &sig), Err(KernelError::Recovery(_))));

    // High s is rejected outright.
    let mut sig = sign(&key, &digest);
    sig[32] |= 0x80;
    assert!(matches!(recover_signer(&digest, &sig), Err(KernelError::Recovery(_))));
}

#[test]
fn test_high_s_below_top_bit_fails() {
    let key = signing_key(0x56);
    let digest = Digest32([0x02; 32]);
    let mut sig = sign(&key, &digest);

    // Above n/2 but below 2^255: passes the top-bit check, still not low-s.
    sig[32] = 0x7f;
    for b in &mut sig[33..64] {
        *b = 0xff;
    }
    assert!(matches!(recover_signer(&digest, &sig), Err(KernelError::Recovery(_))));
}
