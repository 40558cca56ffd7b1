// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Search driver.
//!
//! Two phases over the candidate space:
//! 1. Direct: every `(chain, address, digest)` in chains-outer, digests-inner order.
//! 2. Nested: for every chain, every ordering of the addresses and every
//!    digest, fold the digest through the ordering one signer at a time and
//!    test each intermediate subdigest.
//!
//! The first match in that order wins and stops the search. Running out of
//! combinations is a normal outcome, reported with the number of attempts.

pub mod fold;

use serde::Serialize;

use crate::candidates::CandidateSpace;
use crate::permutation::permutations_of;
use crate::subdigest::subdigest_of;
use crate::target::SearchTarget;
use crate::types::{Address, ChainId, Digest32};

pub use fold::Fold;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Phase {
    Direct,
    /// `depth` is 1-based: depth 1 is the first signer of the ordering.
    Nested { depth: usize },
}

/// One evaluated combination, handed to the progress observer.
#[derive(Clone, Debug)]
pub struct Attempt<'a> {
    /// 1-based, shared across both phases.
    pub number: u64,
    pub phase: Phase,
    pub chain_id: ChainId,
    pub address: &'a Address,
    /// Label of the digest fed into this computation.
    pub provenance: &'a str,
    pub input: &'a Digest32,
    pub subdigest: Digest32,
    /// Signer recovered from the subdigest (recovery mode, successful recovery only).
    pub recovered: Option<Address>,
    pub matched: bool,
    /// Signers applied so far, ending with `address`. Direct attempts carry just `address`.
    pub path: &'a [Address],
}

/// The combination that reproduced the target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Witness {
    pub phase: Phase,
    pub chain_id: ChainId,
    /// A single address for direct matches; the ordering prefix for nested ones.
    pub path: Vec<Address>,
    /// Provenance of the initial digest.
    pub digest: String,
    pub subdigest: Digest32,
    pub attempts: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found(Witness),
    Exhausted { attempts: u64 },
}

impl SearchOutcome {
    pub fn attempts(&self) -> u64 {
        match self {
            SearchOutcome::Found(w) => w.attempts,
            SearchOutcome::Exhausted { attempts } => *attempts,
        }
    }

    pub fn witness(&self) -> Option<&Witness> {
        match self {
            SearchOutcome::Found(w) => Some(w),
            SearchOutcome::Exhausted { .. } => None,
        }
    }
}

struct Driver<'t, F> {
    target: &'t SearchTarget,
    observer: F,
    attempts: u64,
}

impl<'t, F> Driver<'t, F>
where
    F: FnMut(&Attempt<'_>),
{
    /// Evaluates one precomputed subdigest and reports it.
    fn attempt(
        &mut self,
        phase: Phase,
        chain_id: ChainId,
        path: &[Address],
        provenance: &str,
        input: &Digest32,
        subdigest: Digest32,
    ) -> bool {
        self.attempts += 1;
        let eval = self.target.evaluate(&subdigest);

        let address = &path[path.len() - 1];
        tracing::trace!(
            attempt = self.attempts,
            chain_id = chain_id.0,
            %address,
            %subdigest,
            matched = eval.matched,
            "subdigest attempt"
        );

        (self.observer)(&Attempt {
            number: self.attempts,
            phase,
            chain_id,
            address,
            provenance,
            input,
            subdigest,
            recovered: eval.recovered,
            matched: eval.matched,
            path,
        });
        eval.matched
    }

    fn direct(&mut self, space: &CandidateSpace) -> Option<Witness> {
        for &chain_id in &space.chain_ids {
            for address in &space.addresses {
                for candidate in &space.digests {
                    let computed = subdigest_of(chain_id, address, &candidate.digest);
                    let path = core::slice::from_ref(address);
                    if self.attempt(Phase::Direct, chain_id, path, &candidate.label, &candidate.digest, computed) {
                        return Some(Witness {
                            phase: Phase::Direct,
                            chain_id,
                            path: path.to_vec(),
                            digest: candidate.label.clone(),
                            subdigest: computed,
                            attempts: self.attempts,
                        });
                    }
                }
            }
        }
        None
    }

    fn nested(&mut self, space: &CandidateSpace) -> Option<Witness> {
        if space.addresses.is_empty() {
            return None;
        }
        let orderings = permutations_of(&space.addresses);
        tracing::info!(
            permutations = orderings.len(),
            "Trying nested subdigests over address permutations"
        );

        for &chain_id in &space.chain_ids {
            for ordering in &orderings {
                for candidate in &space.digests {
                    let mut fold = Fold::seed(candidate);
                    for (i, address) in ordering.iter().enumerate() {
                        let depth = i + 1;
                        let computed = fold.subdigest(chain_id, address);
                        let phase = Phase::Nested { depth };
                        if self.attempt(phase, chain_id, &ordering[..depth], &fold.label, &fold.digest, computed) {
                            return Some(Witness {
                                phase,
                                chain_id,
                                path: ordering[..depth].to_vec(),
                                digest: candidate.label.clone(),
                                subdigest: computed,
                                attempts: self.attempts,
                            });
                        }
                        fold = fold.advance(chain_id, address, computed);
                    }
                }
            }
        }
        None
    }
}

/// Runs both phases without progress reporting.
pub fn search(space: &CandidateSpace, target: &SearchTarget) -> SearchOutcome {
    search_with(space, target, |_| {})
}

/// Runs both phases, calling `observer` once per evaluated combination.
pub fn search_with<F>(space: &CandidateSpace, target: &SearchTarget, observer: F) -> SearchOutcome
where
    F: FnMut(&Attempt<'_>),
{
    let mut driver = Driver {
        target,
        observer,
        attempts: 0,
    };

    tracing::info!(
        chain_ids = space.chain_ids.len(),
        addresses = space.addresses.len(),
        digests = space.digests.len(),
        recovery = target.is_recovery(),
        "Starting subdigest search"
    );

    let found = driver.direct(space).or_else(|| driver.nested(space));
    match found {
        Some(witness) => {
            tracing::info!(attempts = witness.attempts, chain_id = witness.chain_id.0, "Found matching combination");
            SearchOutcome::Found(witness)
        }
        None => {
            tracing::info!(attempts = driver.attempts, "No matching combination found");
            SearchOutcome::Exhausted {
                attempts: driver.attempts,
            }
        }
    }
}
