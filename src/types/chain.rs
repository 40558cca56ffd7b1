// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Chain identifiers.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::config::WORD_LEN;
use crate::error::KernelError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    /// Big-endian uint256 encoding.
    pub fn to_word(&self) -> [u8; WORD_LEN] {
        let mut word = [0u8; WORD_LEN];
        word[WORD_LEN - 8..].copy_from_slice(&self.0.to_be_bytes());
        word
    }
}

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        ChainId(value)
    }
}

impl FromStr for ChainId {
    type Err = KernelError;

    /// Accepts decimal (`137`) or hex (`0x89`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => s.parse::<u64>(),
        };
        parsed
            .map(ChainId)
            .map_err(|_| KernelError::InvalidChainId(s.to_string()))
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
