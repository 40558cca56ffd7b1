// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Protocol constants.

/// Domain-separation prefix hashed ahead of every subdigest preimage.
pub const DOMAIN_PREFIX: [u8; 2] = [0x19, 0x01];

/// Length of an account address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Length of a digest (and of a subdigest) in bytes.
pub const DIGEST_LEN: usize = 32;

/// Width of an ABI word; chain ids and addresses are padded to this.
pub const WORD_LEN: usize = 32;

/// EIP-2098 compact signature length (r || yParityAndS).
pub const COMPACT_SIGNATURE_LEN: usize = 64;

/// Full signature length (r || s || v).
pub const SIGNATURE_LEN: usize = 65;

/// Provenance prefix for operator-supplied digests.
pub const DIGEST_LABEL_PREFIX: &str = "digest:";
