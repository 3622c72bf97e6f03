//! Instruction payloads understood by the governance program.
//!
//! Wire format is a one-byte discriminant followed by the Borsh encoding of
//! the variant's fields.  Discriminants are the program's instruction indices
//! and are not contiguous: only the instructions this crate compiles are
//! listed here.
//!
//! ## Optional accounts
//!
//! Every instruction has a fixed positional account schema.  An optional
//! account that the caller did not supply still occupies its slot and is
//! filled with the governance program id (read-only, non-signer), which the
//! program recognises as "no account".

use {
    crate::{
        error::{GovernanceClientError, Result},
        state::{GovernanceConfig, RealmConfigArgs, SetRealmAuthorityAction, VoteType},
    },
    borsh::{BorshDeserialize, BorshSerialize},
    solana_pubkey::Pubkey,
    std::io,
};

/// Instruction identity, independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GovernanceInstructionKind {
    CreateRealm = 0,
    DepositGoverningTokens = 1,
    CreateGovernance = 4,
    CreateProposal = 6,
    SetRealmAuthority = 21,
    CreateTokenOwnerRecord = 23,
    CreateNativeTreasury = 25,
}

impl GovernanceInstructionKind {
    pub const ALL: [Self; 7] = [
        Self::CreateRealm,
        Self::DepositGoverningTokens,
        Self::CreateGovernance,
        Self::CreateProposal,
        Self::SetRealmAuthority,
        Self::CreateTokenOwnerRecord,
        Self::CreateNativeTreasury,
    ];

    pub fn discriminant(self) -> u8 {
        self as u8
    }

    pub fn from_discriminant(tag: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.discriminant() == tag)
    }

    /// Name as it appears in the program's interface description.
    pub fn name(self) -> &'static str {
        match self {
            Self::CreateRealm => "createRealm",
            Self::DepositGoverningTokens => "depositGoverningTokens",
            Self::CreateGovernance => "createGovernance",
            Self::CreateProposal => "createProposal",
            Self::SetRealmAuthority => "setRealmAuthority",
            Self::CreateTokenOwnerRecord => "createTokenOwnerRecord",
            Self::CreateNativeTreasury => "createNativeTreasury",
        }
    }

    /// Number of account slots in the instruction's positional schema.
    pub fn account_count(self) -> usize {
        match self {
            Self::CreateRealm => 15,
            Self::DepositGoverningTokens => 10,
            Self::CreateGovernance => 9,
            Self::CreateProposal => 11,
            Self::SetRealmAuthority => 3,
            Self::CreateTokenOwnerRecord => 6,
            Self::CreateNativeTreasury => 4,
        }
    }

    /// Slot of the account the operation exists to create or change.
    pub fn primary_account_index(self) -> usize {
        match self {
            Self::CreateRealm => 0,
            Self::DepositGoverningTokens
            | Self::CreateGovernance
            | Self::CreateProposal
            | Self::CreateNativeTreasury => 1,
            Self::SetRealmAuthority | Self::CreateTokenOwnerRecord => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GovernanceInstruction {
    /// Create a realm.
    ///
    /// # Accounts expected
    ///
    /// 0. `[writable]`         Realm, derived from the name.
    /// 1. `[]`                 Realm authority.
    /// 2. `[]`                 Community token mint.
    /// 3. `[writable]`         Community token holding account.
    /// 4. `[signer, writable]` Payer.
    /// 5. `[]`                 System program.
    /// 6. `[]`                 SPL Token program.
    /// 7. `[]`                 Rent sysvar.
    /// 8. `[]`                 Council token mint (optional).
    /// 9. `[writable]`         Council token holding account (optional).
    /// 10. `[writable]`        Realm config account.
    /// 11. `[]`                Community voter weight add-in (optional).
    /// 12. `[]`                Max community voter weight add-in (optional).
    /// 13. `[]`                Council voter weight add-in (optional).
    /// 14. `[]`                Max council voter weight add-in (optional).
    CreateRealm {
        name: String,
        config_args: RealmConfigArgs,
    },

    /// Deposit governing tokens, creating the token owner record on first use.
    ///
    /// # Accounts expected
    ///
    /// 0. `[]`                 Realm.
    /// 1. `[writable]`         Governing token holding account.
    /// 2. `[writable]`         Governing token source account.
    /// 3. `[signer]`           Governing token owner.
    /// 4. `[signer]`           Governing token source account authority.
    /// 5. `[writable]`         Token owner record.
    /// 6. `[signer, writable]` Payer.
    /// 7. `[]`                 System program.
    /// 8. `[]`                 SPL Token program.
    /// 9. `[]`                 Realm config account.
    DepositGoverningTokens { amount: u64 },

    /// Create a governance over an arbitrary governed account.
    ///
    /// # Accounts expected
    ///
    /// 0. `[]`                 Realm.
    /// 1. `[writable]`         Governance, derived from realm + governed account.
    /// 2. `[]`                 Governed account (seed only).
    /// 3. `[]`                 Governing token owner record (system program
    ///                           when created by the realm authority).
    /// 4. `[signer, writable]` Payer.
    /// 5. `[]`                 System program.
    /// 6. `[signer]`           Governance authority.
    /// 7. `[]`                 Realm config account.
    /// 8. `[]`                 Voter weight record (optional).
    CreateGovernance { config: GovernanceConfig },

    /// Create a proposal under a governance.
    ///
    /// # Accounts expected
    ///
    /// 0. `[]`                 Realm.
    /// 1. `[writable]`         Proposal, derived from governance + mint + seed.
    /// 2. `[writable]`         Governance.
    /// 3. `[writable]`         Proposal owner's token owner record.
    /// 4. `[]`                 Governing token mint.
    /// 5. `[signer]`           Governance authority (owner or delegate).
    /// 6. `[signer, writable]` Payer.
    /// 7. `[]`                 System program.
    /// 8. `[]`                 Realm config account.
    /// 9. `[]`                 Voter weight record (optional).
    /// 10. `[writable]`        Proposal deposit account.
    CreateProposal {
        name: String,
        description_link: String,
        vote_type: VoteType,
        options: Vec<String>,
        use_deny_option: bool,
        proposal_seed: Pubkey,
    },

    /// Change or remove the realm authority.
    ///
    /// # Accounts expected
    ///
    /// 0. `[writable]`         Realm.
    /// 1. `[signer]`           Current realm authority.
    /// 2. `[]`                 New realm authority (ignored for `Remove`).
    SetRealmAuthority { action: SetRealmAuthorityAction },

    /// Create an empty token owner record.
    ///
    /// # Accounts expected
    ///
    /// 0. `[]`                 Realm.
    /// 1. `[]`                 Governing token owner.
    /// 2. `[writable]`         Token owner record.
    /// 3. `[]`                 Governing token mint.
    /// 4. `[signer, writable]` Payer.
    /// 5. `[]`                 System program.
    CreateTokenOwnerRecord,

    /// Create the lamport treasury owned by a governance.
    ///
    /// # Accounts expected
    ///
    /// 0. `[]`                 Governance.
    /// 1. `[writable]`         Native treasury, derived from the governance.
    /// 2. `[signer, writable]` Payer.
    /// 3. `[]`                 System program.
    CreateNativeTreasury,
}

impl GovernanceInstruction {
    pub fn kind(&self) -> GovernanceInstructionKind {
        match self {
            Self::CreateRealm { .. } => GovernanceInstructionKind::CreateRealm,
            Self::DepositGoverningTokens { .. } => {
                GovernanceInstructionKind::DepositGoverningTokens
            }
            Self::CreateGovernance { .. } => GovernanceInstructionKind::CreateGovernance,
            Self::CreateProposal { .. } => GovernanceInstructionKind::CreateProposal,
            Self::SetRealmAuthority { .. } => GovernanceInstructionKind::SetRealmAuthority,
            Self::CreateTokenOwnerRecord => GovernanceInstructionKind::CreateTokenOwnerRecord,
            Self::CreateNativeTreasury => GovernanceInstructionKind::CreateNativeTreasury,
        }
    }

    /// Encode as instruction data: discriminant byte, then Borsh fields.
    pub fn pack(&self) -> Result<Vec<u8>> {
        let mut data = vec![self.kind().discriminant()];
        match self {
            Self::CreateRealm { name, config_args } => {
                name.serialize(&mut data)?;
                config_args.serialize(&mut data)?;
            }
            Self::DepositGoverningTokens { amount } => amount.serialize(&mut data)?,
            Self::CreateGovernance { config } => config.serialize(&mut data)?,
            Self::CreateProposal {
                name,
                description_link,
                vote_type,
                options,
                use_deny_option,
                proposal_seed,
            } => {
                name.serialize(&mut data)?;
                description_link.serialize(&mut data)?;
                vote_type.serialize(&mut data)?;
                options.serialize(&mut data)?;
                use_deny_option.serialize(&mut data)?;
                proposal_seed.serialize(&mut data)?;
            }
            Self::SetRealmAuthority { action } => action.serialize(&mut data)?,
            Self::CreateTokenOwnerRecord | Self::CreateNativeTreasury => {}
        }
        Ok(data)
    }

    /// Decode instruction data produced by [`Self::pack`].
    pub fn unpack(data: &[u8]) -> Result<Self> {
        let (&tag, mut rest) = data
            .split_first()
            .ok_or(GovernanceClientError::UnknownInstruction(None))?;
        let kind = GovernanceInstructionKind::from_discriminant(tag)
            .ok_or(GovernanceClientError::UnknownInstruction(Some(tag)))?;
        let buf = &mut rest;

        let instruction = match kind {
            GovernanceInstructionKind::CreateRealm => Self::CreateRealm {
                name: String::deserialize(buf)?,
                config_args: RealmConfigArgs::deserialize(buf)?,
            },
            GovernanceInstructionKind::DepositGoverningTokens => Self::DepositGoverningTokens {
                amount: u64::deserialize(buf)?,
            },
            GovernanceInstructionKind::CreateGovernance => Self::CreateGovernance {
                config: GovernanceConfig::deserialize(buf)?,
            },
            GovernanceInstructionKind::CreateProposal => Self::CreateProposal {
                name: String::deserialize(buf)?,
                description_link: String::deserialize(buf)?,
                vote_type: VoteType::deserialize(buf)?,
                options: Vec::<String>::deserialize(buf)?,
                use_deny_option: bool::deserialize(buf)?,
                proposal_seed: Pubkey::deserialize(buf)?,
            },
            GovernanceInstructionKind::SetRealmAuthority => Self::SetRealmAuthority {
                action: SetRealmAuthorityAction::deserialize(buf)?,
            },
            GovernanceInstructionKind::CreateTokenOwnerRecord => Self::CreateTokenOwnerRecord,
            GovernanceInstructionKind::CreateNativeTreasury => Self::CreateNativeTreasury,
        };

        if !buf.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} trailing bytes after {}", buf.len(), kind.name()),
            )
            .into());
        }
        Ok(instruction)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::state::{
            GoverningTokenConfigArgs, GoverningTokenType, MintMaxVoterWeightSource, VoteThreshold,
            VoteTipping,
        },
        assert_matches::assert_matches,
    };

    #[test]
    fn test_discriminants() {
        let tags: Vec<u8> = GovernanceInstructionKind::ALL
            .iter()
            .map(|kind| kind.discriminant())
            .collect();
        assert_eq!(tags, vec![0, 1, 4, 6, 21, 23, 25]);
    }

    #[test]
    fn test_from_discriminant() {
        for kind in GovernanceInstructionKind::ALL {
            assert_eq!(
                GovernanceInstructionKind::from_discriminant(kind.discriminant()),
                Some(kind)
            );
        }
        assert_eq!(GovernanceInstructionKind::from_discriminant(2), None);
        assert_eq!(GovernanceInstructionKind::from_discriminant(255), None);
    }

    #[test]
    fn test_primary_account_is_in_schema() {
        for kind in GovernanceInstructionKind::ALL {
            assert!(kind.primary_account_index() < kind.account_count(), "{kind:?}");
        }
    }

    #[test]
    fn test_pack_deposit() {
        let data = GovernanceInstruction::DepositGoverningTokens { amount: 7_000_000 }
            .pack()
            .unwrap();
        let mut expected = vec![1u8];
        expected.extend_from_slice(&7_000_000u64.to_le_bytes());
        assert_eq!(data, expected);
    }

    #[test]
    fn test_pack_payload_free_instructions() {
        assert_eq!(
            GovernanceInstruction::CreateTokenOwnerRecord.pack().unwrap(),
            vec![23]
        );
        assert_eq!(
            GovernanceInstruction::CreateNativeTreasury.pack().unwrap(),
            vec![25]
        );
    }

    #[test]
    fn test_pack_create_realm_prefix() {
        let instruction = GovernanceInstruction::CreateRealm {
            name: "dao".to_string(),
            config_args: RealmConfigArgs {
                use_council_mint: true,
                min_community_weight_to_create_governance: 1,
                community_mint_max_voter_weight_source: MintMaxVoterWeightSource::default(),
                community_token_config_args: GoverningTokenConfigArgs {
                    use_voter_weight_addin: false,
                    use_max_voter_weight_addin: false,
                    token_type: GoverningTokenType::Liquid,
                },
                council_token_config_args: GoverningTokenConfigArgs {
                    use_voter_weight_addin: false,
                    use_max_voter_weight_addin: false,
                    token_type: GoverningTokenType::Membership,
                },
            },
        };
        let data = instruction.pack().unwrap();
        // tag, u32 length, "dao", use_council_mint
        assert_eq!(&data[..9], &[0, 3, 0, 0, 0, b'd', b'a', b'o', 1]);
        assert_eq!(GovernanceInstruction::unpack(&data).unwrap(), instruction);
    }

    #[test]
    fn test_unpack_create_governance() {
        let config = GovernanceConfig {
            community_vote_threshold: VoteThreshold::YesVotePercentage(60),
            min_community_weight_to_create_proposal: 4_000,
            min_transaction_hold_up_time: 0,
            voting_base_time: 21_600,
            community_vote_tipping: VoteTipping::Disabled,
            council_vote_threshold: VoteThreshold::YesVotePercentage(40),
            council_veto_vote_threshold: VoteThreshold::YesVotePercentage(40),
            min_council_weight_to_create_proposal: 1_000_000,
            council_vote_tipping: VoteTipping::Strict,
            community_veto_vote_threshold: VoteThreshold::Disabled,
            voting_cool_off_time: 43_200,
            deposit_exempt_proposal_count: 10,
        };
        let data = GovernanceInstruction::CreateGovernance { config }.pack().unwrap();
        assert_eq!(data[0], 4);
        assert_eq!(
            GovernanceInstruction::unpack(&data).unwrap(),
            GovernanceInstruction::CreateGovernance { config }
        );
    }

    #[test]
    fn test_unpack_rejects_unknown_and_empty() {
        assert_matches!(
            GovernanceInstruction::unpack(&[]),
            Err(GovernanceClientError::UnknownInstruction(None))
        );
        assert_matches!(
            GovernanceInstruction::unpack(&[13]),
            Err(GovernanceClientError::UnknownInstruction(Some(13)))
        );
    }

    #[test]
    fn test_unpack_rejects_trailing_bytes() {
        assert_matches!(
            GovernanceInstruction::unpack(&[25, 0]),
            Err(GovernanceClientError::Serialization(_))
        );
    }

    #[test]
    fn test_unpack_rejects_truncated_payload() {
        assert_matches!(
            GovernanceInstruction::unpack(&[1, 0, 0]),
            Err(GovernanceClientError::Serialization(_))
        );
    }
}
