// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Candidate space builder.
//!
//! Turns the operator's comma-separated lists into validated candidate sets.
//! Everything here fails fast; the search driver assumes well-formed input.

use core::str::FromStr;

use crate::error::{KernelError, Result};
use crate::permutation::permutation_count;
use crate::types::{Address, ChainId, DigestCandidate};

fn parse_list<T>(what: &'static str, raw: &str) -> Result<Vec<T>>
where
    T: FromStr<Err = KernelError>,
{
    raw.split(',')
        .map(str::trim)
        .map(|item| {
            if item.is_empty() {
                Err(KernelError::EmptyItem(what))
            } else {
                item.parse()
            }
        })
        .collect()
}

pub fn parse_chain_ids(raw: &str) -> Result<Vec<ChainId>> {
    parse_list("chain id", raw)
}

pub fn parse_addresses(raw: &str) -> Result<Vec<Address>> {
    parse_list("address", raw)
}

/// An empty (or all-whitespace) string is an empty digest set.
pub fn parse_digests(raw: &str) -> Result<Vec<DigestCandidate>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    parse_list("digest", raw)
}

/// The three candidate sets a search enumerates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSpace {
    pub chain_ids: Vec<ChainId>,
    pub addresses: Vec<Address>,
    pub digests: Vec<DigestCandidate>,
}

impl CandidateSpace {
    pub fn new(chain_ids: Vec<ChainId>, addresses: Vec<Address>, digests: Vec<DigestCandidate>) -> Self {
        Self {
            chain_ids,
            addresses,
            digests,
        }
    }

    pub fn parse(chain_ids: &str, addresses: &str, digests: &str) -> Result<Self> {
        Ok(Self::new(
            parse_chain_ids(chain_ids)?,
            parse_addresses(addresses)?,
            parse_digests(digests)?,
        ))
    }

    /// Attempts in the direct phase: `chains * addresses * digests`.
    pub fn direct_attempts(&self) -> u64 {
        (self.chain_ids.len() as u64)
            .saturating_mul(self.addresses.len() as u64)
            .saturating_mul(self.digests.len() as u64)
    }

    /// Attempts in the nested phase: `chains * addresses! * digests * addresses`.
    pub fn nested_attempts(&self) -> u64 {
        let n = self.addresses.len();
        if n == 0 {
            return 0;
        }
        (self.chain_ids.len() as u64)
            .saturating_mul(permutation_count(n))
            .saturating_mul(self.digests.len() as u64)
            .saturating_mul(n as u64)
    }

    /// Attempts made when nothing matches.
    pub fn attempt_budget(&self) -> u64 {
        self.direct_attempts().saturating_add(self.nested_attempts())
    }
}
