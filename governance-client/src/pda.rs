//! Seed tuples for every governance entity and a facade to derive them.
//!
//! Each [`GovernanceEntity`] variant owns exactly one seed definition: its
//! domain tag plus an ordered list of seeds, usually the addresses of other
//! entities.  Derivation itself is delegated to [`crate::derivation`].

use {
    crate::{
        constants::{
            ACCOUNT_GOVERNANCE_SEED, DEFAULT_PROGRAM_ID, GOVERNANCE_SEED, NATIVE_TREASURY_SEED,
            PROPOSAL_DEPOSIT_SEED, REALM_CONFIG_SEED,
        },
        derivation::{derive, DerivedAddress},
        error::Result,
    },
    solana_pubkey::Pubkey,
};

/// Every account type whose address is derived from the governance program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GovernanceEntity<'a> {
    /// Root container, identified by its name.
    Realm { name: &'a str },

    /// Custody account for deposited governing tokens of one mint (community
    /// or council).
    GoverningTokenHolding {
        realm: &'a Pubkey,
        governing_token_mint: &'a Pubkey,
    },

    /// One participant's deposit ledger for one governing mint.
    TokenOwnerRecord {
        realm: &'a Pubkey,
        governing_token_mint: &'a Pubkey,
        governing_token_owner: &'a Pubkey,
    },

    RealmConfig { realm: &'a Pubkey },

    /// Control account over `governed_account`, which may be a random seed
    /// when the governed resource has no identity of its own.
    Governance {
        realm: &'a Pubkey,
        governed_account: &'a Pubkey,
    },

    NativeTreasury { governance: &'a Pubkey },

    Proposal {
        governance: &'a Pubkey,
        governing_token_mint: &'a Pubkey,
        proposal_seed: &'a Pubkey,
    },

    ProposalDeposit {
        proposal: &'a Pubkey,
        deposit_payer: &'a Pubkey,
    },
}

impl<'a> GovernanceEntity<'a> {
    /// Domain-separation tag hashed ahead of the seeds.
    pub fn tag(&self) -> &'static [u8] {
        match self {
            Self::Realm { .. }
            | Self::GoverningTokenHolding { .. }
            | Self::TokenOwnerRecord { .. }
            | Self::Proposal { .. } => GOVERNANCE_SEED,
            Self::RealmConfig { .. } => REALM_CONFIG_SEED,
            Self::Governance { .. } => ACCOUNT_GOVERNANCE_SEED,
            Self::NativeTreasury { .. } => NATIVE_TREASURY_SEED,
            Self::ProposalDeposit { .. } => PROPOSAL_DEPOSIT_SEED,
        }
    }

    /// Seeds following the tag, in hashing order.
    pub fn seeds(&self) -> Vec<&'a [u8]> {
        match *self {
            Self::Realm { name } => vec![name.as_bytes()],
            Self::GoverningTokenHolding {
                realm,
                governing_token_mint,
            } => vec![realm.as_ref(), governing_token_mint.as_ref()],
            Self::TokenOwnerRecord {
                realm,
                governing_token_mint,
                governing_token_owner,
            } => vec![
                realm.as_ref(),
                governing_token_mint.as_ref(),
                governing_token_owner.as_ref(),
            ],
            Self::RealmConfig { realm } => vec![realm.as_ref()],
            Self::Governance {
                realm,
                governed_account,
            } => vec![realm.as_ref(), governed_account.as_ref()],
            Self::NativeTreasury { governance } => vec![governance.as_ref()],
            Self::Proposal {
                governance,
                governing_token_mint,
                proposal_seed,
            } => vec![
                governance.as_ref(),
                governing_token_mint.as_ref(),
                proposal_seed.as_ref(),
            ],
            Self::ProposalDeposit {
                proposal,
                deposit_payer,
            } => vec![proposal.as_ref(), deposit_payer.as_ref()],
        }
    }

    pub fn derive(&self, program_id: &Pubkey) -> Result<DerivedAddress> {
        derive(self.tag(), &self.seeds(), program_id)
    }
}

/// Derivation entry points, one per entity, bound to a program id.
///
/// Lets callers locate existing accounts (e.g. a realm by name) without
/// compiling an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdaClient {
    program_id: Pubkey,
}

impl Default for PdaClient {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM_ID)
    }
}

impl PdaClient {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn realm(&self, name: &str) -> Result<DerivedAddress> {
        GovernanceEntity::Realm { name }.derive(&self.program_id)
    }

    pub fn governing_token_holding(
        &self,
        realm: &Pubkey,
        governing_token_mint: &Pubkey,
    ) -> Result<DerivedAddress> {
        GovernanceEntity::GoverningTokenHolding {
            realm,
            governing_token_mint,
        }
        .derive(&self.program_id)
    }

    pub fn community_token_holding(
        &self,
        realm: &Pubkey,
        community_mint: &Pubkey,
    ) -> Result<DerivedAddress> {
        self.governing_token_holding(realm, community_mint)
    }

    pub fn council_token_holding(
        &self,
        realm: &Pubkey,
        council_mint: &Pubkey,
    ) -> Result<DerivedAddress> {
        self.governing_token_holding(realm, council_mint)
    }

    pub fn token_owner_record(
        &self,
        realm: &Pubkey,
        governing_token_mint: &Pubkey,
        governing_token_owner: &Pubkey,
    ) -> Result<DerivedAddress> {
        GovernanceEntity::TokenOwnerRecord {
            realm,
            governing_token_mint,
            governing_token_owner,
        }
        .derive(&self.program_id)
    }

    pub fn realm_config(&self, realm: &Pubkey) -> Result<DerivedAddress> {
        GovernanceEntity::RealmConfig { realm }.derive(&self.program_id)
    }

    pub fn governance(&self, realm: &Pubkey, governed_account: &Pubkey) -> Result<DerivedAddress> {
        GovernanceEntity::Governance {
            realm,
            governed_account,
        }
        .derive(&self.program_id)
    }

    pub fn native_treasury(&self, governance: &Pubkey) -> Result<DerivedAddress> {
        GovernanceEntity::NativeTreasury { governance }.derive(&self.program_id)
    }

    pub fn proposal(
        &self,
        governance: &Pubkey,
        governing_token_mint: &Pubkey,
        proposal_seed: &Pubkey,
    ) -> Result<DerivedAddress> {
        GovernanceEntity::Proposal {
            governance,
            governing_token_mint,
            proposal_seed,
        }
        .derive(&self.program_id)
    }

    pub fn proposal_deposit(
        &self,
        proposal: &Pubkey,
        deposit_payer: &Pubkey,
    ) -> Result<DerivedAddress> {
        GovernanceEntity::ProposalDeposit {
            proposal,
            deposit_payer,
        }
        .derive(&self.program_id)
    }
}
