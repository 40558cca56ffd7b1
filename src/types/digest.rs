// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! 32-byte digests and their provenance.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{DIGEST_LABEL_PREFIX, DIGEST_LEN};
use crate::error::KernelError;
use crate::types::decode_fixed;

/// A 32-byte hash. Used for both input digests and computed subdigests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Digest32(pub [u8; DIGEST_LEN]);

impl Digest32 {
    pub const ZERO: Self = Digest32([0u8; DIGEST_LEN]);

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest32 {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest32(bytes)
    }
}

impl FromStr for Digest32 {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed::<DIGEST_LEN>("digest", s).map(Digest32)
    }
}

impl fmt::Display for Digest32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for Digest32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Digest32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An initial digest together with a human-readable record of where it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DigestCandidate {
    pub digest: Digest32,
    pub label: String,
}

impl DigestCandidate {
    pub fn new(digest: Digest32, label: impl Into<String>) -> Self {
        Self {
            digest,
            label: label.into(),
        }
    }
}

impl FromStr for DigestCandidate {
    type Err = KernelError;

    /// The label keeps the operator's spelling: `digest:<input>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digest = s.parse::<Digest32>()?;
        Ok(Self::new(digest, format!("{DIGEST_LABEL_PREFIX}{s}")))
    }
}
