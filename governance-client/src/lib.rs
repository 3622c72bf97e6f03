//! # Realms Governance Client
//!
//! Client-side instruction compiler for the SPL Governance program (v3
//! instruction layout).
//!
//! Given a realm name, token mints and per-operation parameters, the crate
//! derives every program-derived address an operation touches, fills the
//! program's positional account schema (optional accounts included), encodes
//! the arguments and returns an instruction ready to be signed.
//!
//! ## Quick start
//!
//! ```rust
//! use realms_governance_client::{
//!     compiler, params::CreateRealmParams, GovernanceContext, DEFAULT_PROGRAM_ID,
//! };
//! use solana_pubkey::Pubkey;
//!
//! let payer = Pubkey::new_from_array([7; 32]);
//! let community_mint = Pubkey::new_from_array([8; 32]);
//! let ctx = GovernanceContext::new(payer);
//!
//! let params = CreateRealmParams::new("My DAO", community_mint, 1_000_000);
//! let instruction = compiler::create_realm(&ctx, &params).unwrap();
//!
//! let realm = ctx.pda().realm("My DAO").unwrap().address;
//! assert_eq!(instruction.accounts[0].pubkey, realm);
//! // No council: its mint slot holds the program id placeholder.
//! assert_eq!(instruction.accounts[8].pubkey, DEFAULT_PROGRAM_ID);
//! ```
//!
//! [`GovernanceClient`] wraps the compiler with a caller-supplied
//! [`Transport`] to build, send and report the created account in one call.

#![allow(clippy::arithmetic_side_effects)]

pub mod account;
pub mod client;
pub mod compiler;
pub mod config;
pub mod constants;
pub mod derivation;
pub mod error;
pub mod instruction;
pub mod params;
pub mod pda;
pub mod seed;
pub mod state;
pub mod tagging;

#[cfg(test)]
mod tests;

pub use {
    client::{GovernanceClient, Submission, Transport},
    config::{GovernanceClientConfig, GovernanceContext},
    constants::DEFAULT_PROGRAM_ID,
    derivation::DerivedAddress,
    error::{GovernanceClientError, Result},
    pda::PdaClient,
    tagging::{DiscriminantTagger, InstructionPostProcessor, TaggedInstruction},
};
