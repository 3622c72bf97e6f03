//! Argument types carried inside governance instructions.
//!
//! These mirror the program's Borsh layout field for field; enum variant order
//! is the wire tag, so never reorder variants.  Friendly labels accepted from
//! callers are parsed with [`FromStr`] and unknown labels are rejected.

use {
    crate::{constants::FULL_SUPPLY_FRACTION, error::GovernanceClientError},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

fn unrecognized(field: &'static str, label: &str) -> GovernanceClientError {
    GovernanceClientError::UnrecognizedEnumLabel {
        field,
        label: label.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Realm configuration
// ---------------------------------------------------------------------------

/// How deposits of a governing token behave.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum GoverningTokenType {
    /// Tokens can be deposited and withdrawn freely.
    Liquid,
    /// Tokens can be deposited but only revoked by the realm authority.
    Membership,
    /// The token is configured but deposits are disabled.
    Dormant,
}

impl FromStr for GoverningTokenType {
    type Err = GovernanceClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "liquid" => Ok(Self::Liquid),
            "membership" => Ok(Self::Membership),
            "dormant" => Ok(Self::Dormant),
            _ => Err(unrecognized("governing token type", s)),
        }
    }
}

impl fmt::Display for GoverningTokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Liquid => write!(f, "liquid"),
            Self::Membership => write!(f, "membership"),
            Self::Dormant => write!(f, "dormant"),
        }
    }
}

/// Source of the community mint's maximum voter weight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum MintMaxVoterWeightSource {
    /// Fraction of the mint supply, scaled by `SUPPLY_FRACTION_BASE`.
    SupplyFraction(u64),
    /// Fixed absolute weight, independent of supply.
    Absolute(u64),
}

impl Default for MintMaxVoterWeightSource {
    fn default() -> Self {
        Self::SupplyFraction(FULL_SUPPLY_FRACTION)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct GoverningTokenConfigArgs {
    pub use_voter_weight_addin: bool,
    pub use_max_voter_weight_addin: bool,
    pub token_type: GoverningTokenType,
}

/// `CreateRealm` configuration payload.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct RealmConfigArgs {
    /// Set exactly when a council mint account is supplied.
    pub use_council_mint: bool,
    pub min_community_weight_to_create_governance: u64,
    pub community_mint_max_voter_weight_source: MintMaxVoterWeightSource,
    pub community_token_config_args: GoverningTokenConfigArgs,
    pub council_token_config_args: GoverningTokenConfigArgs,
}

/// Action applied by `SetRealmAuthority`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
pub enum SetRealmAuthorityAction {
    /// Set without checking that the new authority is a governance of the realm.
    SetUnchecked,
    /// Set, requiring the new authority to be a governance of the realm.
    SetChecked,
    /// Remove the authority; the realm becomes immutable.
    Remove,
}

impl FromStr for SetRealmAuthorityAction {
    type Err = GovernanceClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SetUnchecked" => Ok(Self::SetUnchecked),
            "SetChecked" => Ok(Self::SetChecked),
            "Remove" => Ok(Self::Remove),
            _ => Err(unrecognized("realm authority action", s)),
        }
    }
}

impl fmt::Display for SetRealmAuthorityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetUnchecked => write!(f, "SetUnchecked"),
            Self::SetChecked => write!(f, "SetChecked"),
            Self::Remove => write!(f, "Remove"),
        }
    }
}

// ---------------------------------------------------------------------------
// Governance configuration
// ---------------------------------------------------------------------------

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum VoteThreshold {
    /// Percentage of the max voter weight that must vote yes.
    YesVotePercentage(u8),
    /// Percentage of the max voter weight that must vote at all.
    QuorumPercentage(u8),
    Disabled,
}

/// When a vote may be decided before the voting time ends.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum VoteTipping {
    /// Tip once the outcome can no longer change.
    Strict,
    /// Tip as soon as the threshold is met.
    Early,
    Disabled,
}

impl FromStr for VoteTipping {
    type Err = GovernanceClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Self::Strict),
            "early" => Ok(Self::Early),
            "disabled" => Ok(Self::Disabled),
            _ => Err(unrecognized("vote tipping", s)),
        }
    }
}

impl fmt::Display for VoteTipping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Early => write!(f, "early"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

/// Voting rules of a governance, in program field order.
///
/// Times are in seconds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceConfig {
    pub community_vote_threshold: VoteThreshold,
    pub min_community_weight_to_create_proposal: u64,
    pub min_transaction_hold_up_time: u32,
    pub voting_base_time: u32,
    pub community_vote_tipping: VoteTipping,
    pub council_vote_threshold: VoteThreshold,
    pub council_veto_vote_threshold: VoteThreshold,
    pub min_council_weight_to_create_proposal: u64,
    pub council_vote_tipping: VoteTipping,
    pub community_veto_vote_threshold: VoteThreshold,
    pub voting_cool_off_time: u32,
    pub deposit_exempt_proposal_count: u8,
}

// ---------------------------------------------------------------------------
// Proposal
// ---------------------------------------------------------------------------

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum MultiChoiceType {
    /// Voters give their full weight to every chosen option.
    FullWeight,
    /// Voters split their weight across options.
    Weighted,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum VoteType {
    SingleChoice,
    MultiChoice {
        choice_type: MultiChoiceType,
        min_voter_options: u8,
        max_voter_options: u8,
        max_winning_options: u8,
    },
}
