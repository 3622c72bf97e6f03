//! Program-derived address search.
//!
//! Addresses come from the runtime's own derivation routine in
//! `solana-pubkey`: the bump starts at 255 and walks down until the digest of
//! the seeds, bump and program id is not a valid Ed25519 point, so no private
//! key can ever sign for the result.  Seeds are checked against the runtime
//! limits first, which turns an oversized realm name into an error instead of
//! a panic inside the search.
//!
//! Everything here is a pure function of its arguments and is safe to call
//! from any number of threads.

use {
    crate::{
        constants::{MAX_BUMP_ATTEMPTS, MAX_SEEDS, MAX_SEED_LEN},
        error::{GovernanceClientError, Result, SeedError},
    },
    solana_pubkey::Pubkey,
};

/// An address together with the bump that pushed it off the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivedAddress {
    pub address: Pubkey,
    pub bump: u8,
}

/// Whether `bytes` decompress to a point on the Ed25519 curve.
pub fn is_on_curve(bytes: &[u8; 32]) -> bool {
    Pubkey::new_from_array(*bytes).is_on_curve()
}

fn check_seeds(seeds: &[&[u8]], with_bump: bool) -> std::result::Result<(), SeedError> {
    let count = seeds.len() + usize::from(with_bump);
    if count > MAX_SEEDS {
        return Err(SeedError::TooManySeeds {
            count,
            max: MAX_SEEDS,
        });
    }
    if let Some((index, seed)) = seeds
        .iter()
        .enumerate()
        .find(|(_, seed)| seed.len() > MAX_SEED_LEN)
    {
        return Err(SeedError::SeedTooLong {
            index,
            len: seed.len(),
            max: MAX_SEED_LEN,
        });
    }
    Ok(())
}

fn tagged_seeds<'a>(tag: &'a [u8], seeds: &[&'a [u8]]) -> Vec<&'a [u8]> {
    let mut all_seeds = Vec::with_capacity(seeds.len() + 2);
    all_seeds.push(tag);
    all_seeds.extend_from_slice(seeds);
    all_seeds
}

fn exhausted(tag: &[u8]) -> GovernanceClientError {
    GovernanceClientError::DerivationExhausted {
        tag: String::from_utf8_lossy(tag).into_owned(),
    }
}

/// Single derivation attempt with caller-supplied seeds (bump included, if
/// any).  Returns `Ok(None)` when the digest lands on the curve.
pub fn create_program_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> std::result::Result<Option<Pubkey>, SeedError> {
    check_seeds(seeds, false)?;
    Ok(Pubkey::create_program_address(seeds, program_id).ok())
}

/// Derive the address for `tag` followed by `seeds`.
///
/// The tag is simply the first seed; it is split out so every entity type
/// names its domain separator explicitly.
pub fn derive(tag: &[u8], seeds: &[&[u8]], program_id: &Pubkey) -> Result<DerivedAddress> {
    let all_seeds = tagged_seeds(tag, seeds);
    check_seeds(&all_seeds, true)?;

    let (address, bump) = Pubkey::try_find_program_address(&all_seeds, program_id)
        .ok_or_else(|| exhausted(tag))?;
    Ok(DerivedAddress { address, bump })
}

/// Same search as [`derive`] with an explicit bump budget, walking down from
/// 255 one attempt at a time.  A budget of zero always fails.
pub fn search(
    tag: &[u8],
    seeds: &[&[u8]],
    program_id: &Pubkey,
    attempts: usize,
) -> Result<DerivedAddress> {
    let all_seeds = tagged_seeds(tag, seeds);
    check_seeds(&all_seeds, true)?;

    for bump in (1..=u8::MAX).rev().take(attempts.min(MAX_BUMP_ATTEMPTS)) {
        let bump_seed = [bump];
        let candidate_seeds: Vec<&[u8]> = all_seeds
            .iter()
            .copied()
            .chain(std::iter::once(bump_seed.as_slice()))
            .collect();
        if let Ok(address) = Pubkey::create_program_address(&candidate_seeds, program_id) {
            return Ok(DerivedAddress { address, bump });
        }
    }

    Err(exhausted(tag))
}
