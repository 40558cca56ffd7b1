// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Nested folding accumulator.

use crate::subdigest::subdigest_of;
use crate::types::{Address, ChainId, Digest32, DigestCandidate};

/// Running digest plus a label describing how it was reached.
///
/// Each step consumes nothing: it returns the subdigest it computed and the
/// next accumulator, leaving `self` untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fold {
    pub digest: Digest32,
    pub label: String,
}

impl Fold {
    pub fn seed(candidate: &DigestCandidate) -> Self {
        Self {
            digest: candidate.digest,
            label: candidate.label.clone(),
        }
    }

    /// Subdigest of the running digest under `(chain_id, address)`.
    pub fn subdigest(&self, chain_id: ChainId, address: &Address) -> Digest32 {
        subdigest_of(chain_id, address, &self.digest)
    }

    /// The accumulator for the next depth, given the subdigest computed at this one.
    pub fn advance(&self, chain_id: ChainId, address: &Address, computed: Digest32) -> Fold {
        Fold {
            digest: computed,
            label: format!("subdigest(chain={chain_id},addr={address},{})", self.label),
        }
    }

    /// Folds `path` fully, returning every intermediate accumulator after the seed.
    #[cfg(test)]
    pub fn unroll(&self, chain_id: ChainId, path: &[Address]) -> Vec<Fold> {
        path.iter()
            .scan(self.clone(), |acc, address| {
                let next = acc.advance(chain_id, address, acc.subdigest(chain_id, address));
                *acc = next.clone();
                Some(next)
            })
            .collect()
    }
}
