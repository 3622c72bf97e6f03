//! Constants for the governance instruction compiler.
//!
//! Seed tags, derivation limits, well-known program ids and the default
//! argument values applied when a caller omits an optional parameter.

// ---------------------------------------------------------------------------
// Program identity
// ---------------------------------------------------------------------------

/// The SPL Governance program deployed on mainnet.  Every address derived by
/// this crate is anchored to a program id; this is the one used unless the
/// caller overrides it through [`crate::GovernanceContext`].
pub mod governance_program {
    solana_pubkey::declare_id!("GovER5Lthms3bLBqWub97yVrMmEogzX7xNjdXpPPCVZw");
}

pub use governance_program::ID as DEFAULT_PROGRAM_ID;

/// Instruction layout version compiled by this crate.
pub const DEFAULT_PROGRAM_VERSION: u8 = 3;

/// Oldest program version whose instruction layout matches what we emit.
pub const MIN_SUPPORTED_PROGRAM_VERSION: u8 = 3;

pub mod system_program {
    solana_pubkey::declare_id!("11111111111111111111111111111111");
}

pub mod spl_token_program {
    solana_pubkey::declare_id!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
}

pub mod rent_sysvar {
    solana_pubkey::declare_id!("SysvarRent111111111111111111111111111111111");
}

// ---------------------------------------------------------------------------
// Seed tags
// ---------------------------------------------------------------------------

/// Shared tag for realms, holding accounts, token owner records and proposals.
pub const GOVERNANCE_SEED: &[u8] = b"governance";

pub const REALM_CONFIG_SEED: &[u8] = b"realm-config";

pub const ACCOUNT_GOVERNANCE_SEED: &[u8] = b"account-governance";

pub const NATIVE_TREASURY_SEED: &[u8] = b"native-treasury";

pub const PROPOSAL_DEPOSIT_SEED: &[u8] = b"proposal-deposit";

// ---------------------------------------------------------------------------
// Derivation limits (runtime rules for program-derived addresses)
// ---------------------------------------------------------------------------

/// Maximum length of a single seed in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// Maximum number of seeds, bump included.
pub const MAX_SEEDS: usize = 16;

/// Number of bump values tried (255 down to 1) before giving up.
pub const MAX_BUMP_ATTEMPTS: usize = u8::MAX as usize;

// ---------------------------------------------------------------------------
// Argument defaults
// ---------------------------------------------------------------------------

/// Denominator of `MintMaxVoterWeightSource::SupplyFraction`.
/// 10_000_000_000 = 100% of the mint supply.
pub const SUPPLY_FRACTION_BASE: u64 = 10_000_000_000;

/// Default community max-voter-weight source: the full mint supply.
pub const FULL_SUPPLY_FRACTION: u64 = SUPPLY_FRACTION_BASE;
