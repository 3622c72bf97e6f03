//! Sources of fresh identity seeds.
//!
//! Proposals (and governances over resources with no natural address) are
//! identified by a seed that must never repeat.  The compiler takes the
//! generator as an argument so it stays deterministic under test.

use solana_pubkey::Pubkey;

pub trait SeedGenerator: Send + Sync {
    fn fresh_seed(&self) -> Pubkey;
}

/// 32 bytes from the thread-local CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSeedGenerator;

impl SeedGenerator for RandomSeedGenerator {
    fn fresh_seed(&self) -> Pubkey {
        Pubkey::new_from_array(rand::random())
    }
}

/// Always returns the same seed.  Only safe when exactly one account is
/// created with it; the program rejects a second creation at the same
/// address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub Pubkey);

impl SeedGenerator for FixedSeed {
    fn fresh_seed(&self) -> Pubkey {
        self.0
    }
}
