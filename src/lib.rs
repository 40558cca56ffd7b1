// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! subdigest-kernel: a deterministic brute-force matcher for multisig subdigests.
//!
//! Given candidate chain ids, signer addresses and digests, the search driver
//! looks for the combination (direct, or folded through a chain of signers)
//! that reproduces a known subdigest or a subdigest recoverable to a known signer.

pub mod config;
pub mod error;
pub mod types;
pub mod hash;
pub mod subdigest;
pub mod permutation;
pub mod recovery;
pub mod target;
pub mod candidates;
pub mod search;

pub use candidates::CandidateSpace;
pub use error::{KernelError, Result};
pub use search::{search, search_with, Attempt, Phase, SearchOutcome, Witness};
pub use subdigest::subdigest_of;
pub use target::SearchTarget;
pub use types::{Address, ChainId, Digest32, DigestCandidate};

#[cfg(test)]
pub mod tests;
