//! Errors for the governance instruction compiler.

use {
    crate::{account::GovernanceAccountType, config::ConfigError},
    solana_pubkey::Pubkey,
    thiserror::Error,
};

pub type Result<T> = std::result::Result<T, GovernanceClientError>;

/// Seed-shape violations rejected before any hashing happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("Seed {index} is {len} bytes, the maximum is {max}")]
    SeedTooLong { index: usize, len: usize, max: usize },

    #[error("{count} seeds supplied, the maximum is {max} including the bump")]
    TooManySeeds { count: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum GovernanceClientError {
    #[error("No off-curve address found for seed tag {tag:?} within the bump budget")]
    DerivationExhausted { tag: String },

    #[error("Invalid seeds: {0}")]
    InvalidSeeds(#[from] SeedError),

    #[error("Required input `{0}` was not supplied")]
    MissingRequiredInput(&'static str),

    #[error("Unrecognized label {label:?} for {field}")]
    UnrecognizedEnumLabel { field: &'static str, label: String },

    #[error("Account {0} does not exist")]
    AccountNotFound(Pubkey),

    #[error("Account type mismatch: expected {expected:?}, found tag {found}")]
    AccountTypeMismatch {
        expected: GovernanceAccountType,
        found: u8,
    },

    #[error("Instruction data does not start with a known discriminant (tag {0:?})")]
    UnknownInstruction(Option<u8>),

    #[error("Instruction targets program {found}, expected {expected}")]
    ForeignProgram { expected: Pubkey, found: Pubkey },

    #[error("Failed to encode or decode instruction data: {0}")]
    Serialization(#[from] std::io::Error),

    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Account source failed: {0}")]
    AccountSource(String),

    #[error("Failed to decode account data: {0}")]
    Deserialize(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
