// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Neither a target subdigest nor a signature/signer pair was given.
    #[error("Either a target subdigest or a signature with an expected signer must be provided")]
    MissingTarget,

    /// Both target forms were given.
    #[error("A target subdigest cannot be combined with a signature/expected signer pair")]
    ConflictingTarget,

    /// Only one half of the signature/signer pair was given.
    #[error("Signature and expected signer must be provided together (missing {0})")]
    IncompleteRecoveryTarget(&'static str),

    #[error("Invalid hex in {what}: {value}")]
    InvalidHex { what: &'static str, value: String },

    #[error("Invalid {what} length: expected {expected} bytes, found {found}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid chain id: {0}")]
    InvalidChainId(String),

    #[error("Bad address checksum: {0}")]
    InvalidChecksum(String),

    #[error("Empty entry in {0} list")]
    EmptyItem(&'static str),

    /// Signature could not be recovered to a public key.
    #[error("Signature recovery failed: {0}")]
    Recovery(String),
}

impl KernelError {
    /// True for errors that describe how the search was configured rather than what was fed to it.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            KernelError::MissingTarget
                | KernelError::ConflictingTarget
                | KernelError::IncompleteRecoveryTarget(_)
        )
    }
}

pub type KernelResult<T> = core::result::Result<T, KernelError>;
pub type Result<T> = KernelResult<T>;
