//! Per-operation parameters.
//!
//! Required inputs are plain fields set by `new`; everything optional is an
//! `Option` whose `None` value means "apply the documented default".  Fields
//! are public, so callers can use struct-update syntax:
//!
//! ```
//! use realms_governance_client::{params::CreateRealmParams, state::GoverningTokenType};
//! use solana_pubkey::Pubkey;
//!
//! let mint = Pubkey::new_from_array([1; 32]);
//! let params = CreateRealmParams {
//!     council_token_type: Some(GoverningTokenType::Dormant),
//!     ..CreateRealmParams::new("My DAO", mint, 1_000_000)
//! };
//! assert_eq!(params.council_token_mint, None);
//! ```

use {
    crate::state::{
        GovernanceConfig, GoverningTokenType, MintMaxVoterWeightSource, SetRealmAuthorityAction,
        VoteType,
    },
    solana_pubkey::Pubkey,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRealmParams {
    /// Realm name; also the realm's address seed, so at most 32 bytes.
    pub name: String,
    pub community_token_mint: Pubkey,
    pub min_community_weight_to_create_governance: u64,
    /// Default: the full community mint supply.
    pub community_mint_max_voter_weight_source: Option<MintMaxVoterWeightSource>,
    /// When `None` the realm has no council and `use_council_mint` is false.
    pub council_token_mint: Option<Pubkey>,
    /// Default: `Liquid`.
    pub community_token_type: Option<GoverningTokenType>,
    /// Default: `Membership`.
    pub council_token_type: Option<GoverningTokenType>,
    /// Default: the payer.
    pub realm_authority: Option<Pubkey>,
    pub community_voter_weight_addin: Option<Pubkey>,
    pub max_community_voter_weight_addin: Option<Pubkey>,
    pub council_voter_weight_addin: Option<Pubkey>,
    pub max_council_voter_weight_addin: Option<Pubkey>,
}

impl CreateRealmParams {
    pub fn new(
        name: impl Into<String>,
        community_token_mint: Pubkey,
        min_community_weight_to_create_governance: u64,
    ) -> Self {
        Self {
            name: name.into(),
            community_token_mint,
            min_community_weight_to_create_governance,
            community_mint_max_voter_weight_source: None,
            council_token_mint: None,
            community_token_type: None,
            council_token_type: None,
            realm_authority: None,
            community_voter_weight_addin: None,
            max_community_voter_weight_addin: None,
            council_voter_weight_addin: None,
            max_council_voter_weight_addin: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateTokenOwnerRecordParams {
    pub realm: Pubkey,
    pub governing_token_mint: Pubkey,
    /// Default: the payer.
    pub governing_token_owner: Option<Pubkey>,
}

impl CreateTokenOwnerRecordParams {
    pub fn new(realm: Pubkey, governing_token_mint: Pubkey) -> Self {
        Self {
            realm,
            governing_token_mint,
            governing_token_owner: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositGoverningTokensParams {
    pub realm: Pubkey,
    pub governing_token_mint: Pubkey,
    /// Token account the deposit is taken from.
    pub governing_token_source: Pubkey,
    pub governing_token_owner: Pubkey,
    pub governing_token_source_authority: Pubkey,
    pub amount: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateGovernanceParams {
    pub realm: Pubkey,
    pub config: GovernanceConfig,
    /// Signs for creation: the realm authority or the owner (or delegate) of
    /// `token_owner_record`.
    pub governance_authority: Pubkey,
    /// Default: a fresh seed.
    pub governed_account: Option<Pubkey>,
    /// Default: the system program, meaning "created by the realm authority".
    pub token_owner_record: Option<Pubkey>,
    pub voter_weight_record: Option<Pubkey>,
}

impl CreateGovernanceParams {
    pub fn new(realm: Pubkey, config: GovernanceConfig, governance_authority: Pubkey) -> Self {
        Self {
            realm,
            config,
            governance_authority,
            governed_account: None,
            token_owner_record: None,
            voter_weight_record: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateNativeTreasuryParams {
    pub governance: Pubkey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRealmAuthorityParams {
    pub realm: Pubkey,
    pub new_realm_authority: Pubkey,
    pub action: SetRealmAuthorityAction,
    /// Default: the payer.
    pub realm_authority: Option<Pubkey>,
}

impl SetRealmAuthorityParams {
    pub fn new(
        realm: Pubkey,
        new_realm_authority: Pubkey,
        action: SetRealmAuthorityAction,
    ) -> Self {
        Self {
            realm,
            new_realm_authority,
            action,
            realm_authority: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProposalParams {
    pub realm: Pubkey,
    pub governance: Pubkey,
    /// Record of the proposal owner; must belong to `governing_token_mint`.
    pub token_owner_record: Pubkey,
    pub governing_token_mint: Pubkey,
    pub governance_authority: Pubkey,
    pub name: String,
    pub description_link: String,
    pub vote_type: VoteType,
    pub options: Vec<String>,
    pub use_deny_option: bool,
    pub voter_weight_record: Option<Pubkey>,
    /// Default: a fresh seed.  Pinning a seed that was already used makes the
    /// program reject the instruction.
    pub proposal_seed: Option<Pubkey>,
}
