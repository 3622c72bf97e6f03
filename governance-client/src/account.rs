//! Read path: fetching and decoding governance program accounts.
//!
//! Every governance account starts with a one-byte account type.  Fetching
//! checks that byte against the entity being read before handing the data to
//! a decoder, so a realm address that actually holds a governance is reported
//! as a mismatch rather than decoded as garbage.

use {
    crate::{
        error::{GovernanceClientError, Result},
        state::MintMaxVoterWeightSource,
    },
    borsh::{BorshDeserialize, BorshSerialize},
    log::*,
    solana_pubkey::Pubkey,
    std::fmt,
};

/// Leading byte of every governance account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize)]
#[borsh(use_discriminant = true)]
#[repr(u8)]
pub enum GovernanceAccountType {
    Uninitialized = 0,
    RealmV1 = 1,
    TokenOwnerRecordV1 = 2,
    GovernanceV1 = 3,
    ProposalV1 = 5,
    RealmConfig = 11,
    ProposalV2 = 14,
    RealmV2 = 16,
    TokenOwnerRecordV2 = 17,
    GovernanceV2 = 18,
    ProposalDeposit = 23,
}

impl GovernanceAccountType {
    const ALL: [Self; 11] = [
        Self::Uninitialized,
        Self::RealmV1,
        Self::TokenOwnerRecordV1,
        Self::GovernanceV1,
        Self::ProposalV1,
        Self::RealmConfig,
        Self::ProposalV2,
        Self::RealmV2,
        Self::TokenOwnerRecordV2,
        Self::GovernanceV2,
        Self::ProposalDeposit,
    ];

    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

/// Raw account storage, typically an RPC connection.
pub trait AccountSource {
    type Error: fmt::Display;

    /// `Ok(None)` when the account does not exist.
    fn get_account_data(
        &self,
        address: &Pubkey,
    ) -> std::result::Result<Option<Vec<u8>>, Self::Error>;
}

/// Turns checked account bytes into a typed record.
pub trait AccountDeserializer {
    type Record;
    type Error: fmt::Display;

    fn decode(
        &self,
        account_type: GovernanceAccountType,
        data: &[u8],
    ) -> std::result::Result<Self::Record, Self::Error>;
}

/// Fetch `address`, check its account type and decode it.
pub fn fetch_account<S, D>(
    source: &S,
    deserializer: &D,
    address: &Pubkey,
    expected: GovernanceAccountType,
) -> Result<D::Record>
where
    S: AccountSource + ?Sized,
    D: AccountDeserializer + ?Sized,
{
    let data = source
        .get_account_data(address)
        .map_err(|err| GovernanceClientError::AccountSource(err.to_string()))?
        .ok_or(GovernanceClientError::AccountNotFound(*address))?;

    let found = data
        .first()
        .copied()
        .ok_or_else(|| {
            GovernanceClientError::Deserialize(format!("account {address} has no data"))
        })?;
    if found != expected.tag() {
        return Err(GovernanceClientError::AccountTypeMismatch { expected, found });
    }

    debug!("decoding {expected:?} account {address} ({} bytes)", data.len());
    deserializer
        .decode(expected, &data)
        .map_err(|err| GovernanceClientError::Deserialize(err.to_string()))
}

// ---------------------------------------------------------------------------
// Realm
// ---------------------------------------------------------------------------

/// Realm settings stored on chain.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct RealmConfig {
    pub legacy1: u8,
    pub legacy2: u8,
    pub reserved: [u8; 6],
    pub min_community_weight_to_create_governance: u64,
    pub community_mint_max_voter_weight_source: MintMaxVoterWeightSource,
    pub council_mint: Option<Pubkey>,
}

/// Realm account, current layout.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct RealmV2 {
    pub account_type: GovernanceAccountType,
    pub community_mint: Pubkey,
    pub config: RealmConfig,
    pub reserved: [u8; 6],
    pub legacy1: u16,
    pub authority: Option<Pubkey>,
    pub name: String,
    pub reserved_v2: [u8; 128],
}

/// Borsh decoder for [`RealmV2`] accounts.
///
/// Trailing bytes are ignored: realm accounts are allocated with padding.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealmV2Deserializer;

impl AccountDeserializer for RealmV2Deserializer {
    type Record = RealmV2;
    type Error = std::io::Error;

    fn decode(
        &self,
        account_type: GovernanceAccountType,
        mut data: &[u8],
    ) -> std::result::Result<RealmV2, std::io::Error> {
        if account_type != GovernanceAccountType::RealmV2 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("cannot decode {account_type:?} as a realm"),
            ));
        }
        RealmV2::deserialize(&mut data)
    }
}
