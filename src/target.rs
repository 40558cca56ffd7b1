// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Match predicate.

use crate::error::{KernelError, Result};
use crate::recovery::recover_signer;
use crate::types::{Address, Digest32};

/// What the search is trying to reproduce. Exactly one form per run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchTarget {
    /// A known subdigest; compared byte-for-byte (hex case never matters).
    Subdigest(Digest32),
    /// A signature whose recovered signer must equal `expected`.
    Signer { signature: Vec<u8>, expected: Address },
}

/// Result of testing one computed subdigest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub matched: bool,
    /// Recovery mode only; `None` when recovery failed.
    pub recovered: Option<Address>,
}

impl SearchTarget {
    /// Builds a target from optional operator inputs, rejecting "both" and "neither".
    pub fn from_parts(
        subdigest: Option<Digest32>,
        signature: Option<Vec<u8>>,
        expected: Option<Address>,
    ) -> Result<Self> {
        match (subdigest, signature, expected) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(KernelError::ConflictingTarget),
            (Some(target), None, None) => Ok(SearchTarget::Subdigest(target)),
            (None, Some(signature), Some(expected)) => Ok(SearchTarget::Signer { signature, expected }),
            (None, Some(_), None) => Err(KernelError::IncompleteRecoveryTarget("expected signer")),
            (None, None, Some(_)) => Err(KernelError::IncompleteRecoveryTarget("signature")),
            (None, None, None) => Err(KernelError::MissingTarget),
        }
    }

    pub fn is_recovery(&self) -> bool {
        matches!(self, SearchTarget::Signer { .. })
    }

    pub fn evaluate(&self, computed: &Digest32) -> Evaluation {
        match self {
            SearchTarget::Subdigest(target) => Evaluation {
                matched: computed == target,
                recovered: None,
            },
            SearchTarget::Signer { signature, expected } => {
                // A failed recovery is a non-match, never an error.
                let recovered = recover_signer(computed, signature).ok();
                Evaluation {
                    matched: recovered.as_ref() == Some(expected),
                    recovered,
                }
            }
        }
    }

    pub fn is_match(&self, computed: &Digest32) -> bool {
        self.evaluate(computed).matched
    }
}
