//! End-to-end scenarios across the compiler, tagger and client facade.

use {
    crate::{
        account::{AccountSource, GovernanceAccountType, RealmConfig, RealmV2},
        client::{GovernanceClient, Submission, Transport},
        compiler,
        config::GovernanceContext,
        constants::{spl_token_program, system_program, DEFAULT_PROGRAM_ID},
        error::GovernanceClientError,
        instruction::{GovernanceInstruction, GovernanceInstructionKind},
        params::{
            CreateGovernanceParams, CreateNativeTreasuryParams, CreateProposalParams,
            CreateRealmParams, CreateTokenOwnerRecordParams, DepositGoverningTokensParams,
            SetRealmAuthorityParams,
        },
        seed::{FixedSeed, RandomSeedGenerator},
        state::{
            GovernanceConfig, GoverningTokenType, MintMaxVoterWeightSource, MultiChoiceType,
            SetRealmAuthorityAction, VoteThreshold, VoteTipping, VoteType,
        },
        tagging::{DiscriminantTagger, InstructionPostProcessor, TaggedInstruction},
    },
    assert_matches::assert_matches,
    solana_instruction::{AccountMeta, Instruction},
    solana_pubkey::Pubkey,
    solana_signature::Signature,
    std::{cell::RefCell, collections::HashMap},
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

fn key(byte: u8) -> Pubkey {
    Pubkey::new_from_array([byte; 32])
}

const PAYER: u8 = 1;
const COMMUNITY_MINT: u8 = 2;
const COUNCIL_MINT: u8 = 3;

fn ctx() -> GovernanceContext {
    GovernanceContext::new(key(PAYER))
}

fn governance_config() -> GovernanceConfig {
    GovernanceConfig {
        community_vote_threshold: VoteThreshold::YesVotePercentage(60),
        min_community_weight_to_create_proposal: 1,
        min_transaction_hold_up_time: 0,
        voting_base_time: 259_200,
        community_vote_tipping: VoteTipping::Strict,
        council_vote_threshold: VoteThreshold::YesVotePercentage(60),
        council_veto_vote_threshold: VoteThreshold::Disabled,
        min_council_weight_to_create_proposal: 1,
        council_vote_tipping: VoteTipping::Early,
        community_veto_vote_threshold: VoteThreshold::Disabled,
        voting_cool_off_time: 0,
        deposit_exempt_proposal_count: 10,
    }
}

fn proposal_params(realm: Pubkey, governance: Pubkey, tor: Pubkey) -> CreateProposalParams {
    CreateProposalParams {
        realm,
        governance,
        token_owner_record: tor,
        governing_token_mint: key(COMMUNITY_MINT),
        governance_authority: key(PAYER),
        name: "Fund the grants program".to_string(),
        description_link: "https://example.org/proposal".to_string(),
        vote_type: VoteType::SingleChoice,
        options: vec!["Approve".to_string()],
        use_deny_option: true,
        voter_weight_record: None,
        proposal_seed: None,
    }
}

fn reference_address(seeds: &[&[u8]]) -> Pubkey {
    Pubkey::find_program_address(seeds, &DEFAULT_PROGRAM_ID).0
}

fn decode(instruction: &Instruction) -> GovernanceInstruction {
    GovernanceInstruction::unpack(&instruction.data).unwrap()
}

/// One instruction of every kind, optional accounts left empty.
fn compile_all(ctx: &GovernanceContext) -> Vec<Instruction> {
    compile_every_kind(ctx, 30, false)
}

/// One instruction of every kind.  Fresh seeds start at `seed`; with
/// `optionals` every optional account and parameter is supplied.
fn compile_every_kind(ctx: &GovernanceContext, seed: u8, optionals: bool) -> Vec<Instruction> {
    let supplied = |byte: u8| optionals.then(|| key(byte.wrapping_add(seed)));
    let realm = ctx.pda().realm("Positional").unwrap().address;
    let governance = key(40);
    let realm_params = CreateRealmParams {
        council_token_mint: supplied(100),
        realm_authority: supplied(101),
        community_voter_weight_addin: supplied(102),
        max_community_voter_weight_addin: supplied(103),
        council_voter_weight_addin: supplied(104),
        max_council_voter_weight_addin: supplied(105),
        ..CreateRealmParams::new("Positional", key(COMMUNITY_MINT), 1)
    };
    let governance_params = CreateGovernanceParams {
        governed_account: supplied(106),
        token_owner_record: supplied(107),
        voter_weight_record: supplied(108),
        ..CreateGovernanceParams::new(realm, governance_config(), ctx.payer)
    };
    let proposal = CreateProposalParams {
        voter_weight_record: supplied(109),
        proposal_seed: supplied(110),
        ..proposal_params(realm, governance, key(41))
    };
    let authority = SetRealmAuthorityParams {
        realm_authority: supplied(111),
        ..SetRealmAuthorityParams::new(realm, key(42), SetRealmAuthorityAction::Remove)
    };
    let record = CreateTokenOwnerRecordParams {
        governing_token_owner: supplied(112),
        ..CreateTokenOwnerRecordParams::new(realm, key(COMMUNITY_MINT))
    };

    vec![
        compiler::create_realm(ctx, &realm_params).unwrap(),
        compiler::deposit_governing_tokens(
            ctx,
            &DepositGoverningTokensParams {
                realm,
                governing_token_mint: key(COMMUNITY_MINT),
                governing_token_source: key(20),
                governing_token_owner: ctx.payer,
                governing_token_source_authority: ctx.payer,
                amount: 1,
            },
        )
        .unwrap(),
        compiler::create_governance(ctx, &governance_params, &FixedSeed(key(seed))).unwrap(),
        compiler::create_proposal(ctx, &proposal, &FixedSeed(key(seed.wrapping_add(1))))
            .unwrap(),
        compiler::set_realm_authority(ctx, &authority).unwrap(),
        compiler::create_token_owner_record(ctx, &record).unwrap(),
        compiler::create_native_treasury(ctx, &CreateNativeTreasuryParams { governance })
            .unwrap(),
    ]
}

fn flags(instruction: &Instruction) -> Vec<(bool, bool)> {
    instruction
        .accounts
        .iter()
        .map(|meta| (meta.is_signer, meta.is_writable))
        .collect()
}

fn addresses(instruction: &Instruction) -> Vec<Pubkey> {
    instruction.accounts.iter().map(|meta| meta.pubkey).collect()
}

#[derive(Default)]
struct RecordingTransport {
    submitted: RefCell<Vec<(TaggedInstruction, Pubkey)>>,
    fail_with: Option<String>,
}

impl Transport for RecordingTransport {
    type Error = String;

    fn submit(
        &self,
        instruction: &TaggedInstruction,
        signer: &Pubkey,
    ) -> Result<Signature, String> {
        if let Some(reason) = &self.fail_with {
            return Err(reason.clone());
        }
        let mut submitted = self.submitted.borrow_mut();
        submitted.push((instruction.clone(), *signer));
        Ok(Signature::from([submitted.len() as u8; 64]))
    }
}

#[derive(Default)]
struct MemorySource(HashMap<Pubkey, Vec<u8>>);

impl AccountSource for MemorySource {
    type Error = String;

    fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, String> {
        Ok(self.0.get(address).cloned())
    }
}

// ---------------------------------------------------------------------------
// Realm creation
// ---------------------------------------------------------------------------

#[test]
fn test_create_realm_without_council() {
    init_logging();
    let ctx = ctx();
    let name = "SDK TEST ##14";
    let instruction =
        compiler::create_realm(&ctx, &CreateRealmParams::new(name, key(COMMUNITY_MINT), 1_000_000))
            .unwrap();

    let realm = reference_address(&[b"governance", name.as_bytes()]);
    assert_eq!(instruction.program_id, DEFAULT_PROGRAM_ID);
    assert_eq!(instruction.accounts[0], AccountMeta::new(realm, false));
    assert_eq!(
        instruction.accounts[3].pubkey,
        reference_address(&[b"governance", realm.as_ref(), key(COMMUNITY_MINT).as_ref()])
    );
    assert_eq!(instruction.accounts[4], AccountMeta::new(key(PAYER), true));
    assert_eq!(instruction.accounts[5].pubkey, system_program::id());
    assert_eq!(instruction.accounts[6].pubkey, spl_token_program::id());
    assert_eq!(
        instruction.accounts[10].pubkey,
        reference_address(&[b"realm-config", realm.as_ref()])
    );

    // Council mint, council holding and the four add-in slots are placeholders.
    for index in [8, 9, 11, 12, 13, 14] {
        assert_eq!(
            instruction.accounts[index],
            AccountMeta::new_readonly(DEFAULT_PROGRAM_ID, false),
            "slot {index}"
        );
    }

    assert_matches!(
        decode(&instruction),
        GovernanceInstruction::CreateRealm { name: decoded, config_args } => {
            assert_eq!(decoded, name);
            assert!(!config_args.use_council_mint);
            assert_eq!(config_args.min_community_weight_to_create_governance, 1_000_000);
            assert_eq!(
                config_args.community_mint_max_voter_weight_source,
                MintMaxVoterWeightSource::SupplyFraction(10_000_000_000)
            );
            assert_eq!(
                config_args.community_token_config_args.token_type,
                GoverningTokenType::Liquid
            );
            assert_eq!(
                config_args.council_token_config_args.token_type,
                GoverningTokenType::Membership
            );
            assert!(!config_args.community_token_config_args.use_voter_weight_addin);
        }
    );
}

#[test]
fn test_create_realm_with_council_and_addins() {
    let ctx = ctx();
    let params = CreateRealmParams {
        community_mint_max_voter_weight_source: Some(MintMaxVoterWeightSource::Absolute(
            5_000_000,
        )),
        council_token_mint: Some(key(COUNCIL_MINT)),
        community_token_type: Some(GoverningTokenType::Membership),
        council_token_type: Some(GoverningTokenType::Dormant),
        realm_authority: Some(key(9)),
        council_voter_weight_addin: Some(key(10)),
        ..CreateRealmParams::new("Council DAO", key(COMMUNITY_MINT), 5)
    };
    let instruction = compiler::create_realm(&ctx, &params).unwrap();
    let realm = ctx.pda().realm("Council DAO").unwrap().address;

    assert_eq!(instruction.accounts[1], AccountMeta::new_readonly(key(9), false));
    assert_eq!(
        instruction.accounts[8],
        AccountMeta::new_readonly(key(COUNCIL_MINT), false)
    );
    assert_eq!(
        instruction.accounts[9],
        AccountMeta::new(
            ctx.pda()
                .council_token_holding(&realm, &key(COUNCIL_MINT))
                .unwrap()
                .address,
            false
        )
    );
    assert_eq!(instruction.accounts[13].pubkey, key(10));
    assert_eq!(instruction.accounts[11].pubkey, DEFAULT_PROGRAM_ID);

    assert_matches!(
        decode(&instruction),
        GovernanceInstruction::CreateRealm { config_args, .. } => {
            assert!(config_args.use_council_mint);
            assert_eq!(
                config_args.community_mint_max_voter_weight_source,
                MintMaxVoterWeightSource::Absolute(5_000_000)
            );
            assert_eq!(
                config_args.community_token_config_args.token_type,
                GoverningTokenType::Membership
            );
            assert_eq!(
                config_args.council_token_config_args.token_type,
                GoverningTokenType::Dormant
            );
            assert!(config_args.council_token_config_args.use_voter_weight_addin);
            assert!(!config_args.council_token_config_args.use_max_voter_weight_addin);
        }
    );
}

#[test]
fn test_custom_program_id_moves_addresses_and_placeholder() {
    let program_id = key(77);
    let ctx = ctx().with_program_id(program_id);
    let instruction =
        compiler::create_realm(&ctx, &CreateRealmParams::new("Elsewhere", key(COMMUNITY_MINT), 1))
            .unwrap();

    assert_eq!(instruction.program_id, program_id);
    assert_eq!(
        instruction.accounts[0].pubkey,
        Pubkey::find_program_address(&[b"governance", b"Elsewhere"], &program_id).0
    );
    assert_eq!(instruction.accounts[8].pubkey, program_id);
}

// ---------------------------------------------------------------------------
// Cross-operation properties
// ---------------------------------------------------------------------------

#[test]
fn test_positional_schema_is_stable() {
    let ctx = ctx();
    for instruction in compile_all(&ctx) {
        let tagged = DiscriminantTagger::default().process(instruction).unwrap();
        assert_eq!(
            tagged.instruction.accounts.len(),
            tagged.kind.account_count(),
            "{}",
            tagged.name
        );
        assert_eq!(tagged.instruction.program_id, DEFAULT_PROGRAM_ID);
    }
}

#[test]
fn test_flags_depend_only_on_supplied_optionals() {
    let first = ctx();
    let second = GovernanceContext::new(key(99)).with_program_id(key(77));

    for optionals in [false, true] {
        let left = compile_every_kind(&first, 30, optionals);
        let right = compile_every_kind(&second, 60, optionals);
        assert_eq!(left.len(), right.len());

        for (a, b) in left.iter().zip(&right) {
            let kind = DiscriminantTagger::default().process(a.clone()).unwrap().kind;
            assert_eq!(flags(a), flags(b), "{kind:?}, optionals: {optionals}");
            assert_ne!(addresses(a), addresses(b), "{kind:?}, optionals: {optionals}");
        }
    }
}

#[test]
fn test_supplied_optionals_replace_placeholders() {
    let ctx = ctx();
    let bare = compile_every_kind(&ctx, 30, false);
    let full = compile_every_kind(&ctx, 30, true);

    for (a, b) in bare.iter().zip(&full) {
        assert_eq!(a.accounts.len(), b.accounts.len());
    }
    // Council holding turns writable once a council mint is supplied.
    assert_eq!(bare[0].accounts[9], AccountMeta::new_readonly(DEFAULT_PROGRAM_ID, false));
    assert!(full[0].accounts[9].is_writable);
    assert!(full
        .iter()
        .flat_map(|instruction| instruction.accounts.iter())
        .all(|meta| meta.pubkey != DEFAULT_PROGRAM_ID));
}

#[test]
fn test_every_kind_is_compiled() {
    let kinds: Vec<GovernanceInstructionKind> = compile_all(&ctx())
        .into_iter()
        .map(|instruction| DiscriminantTagger::default().process(instruction).unwrap().kind)
        .collect();
    assert_eq!(kinds, GovernanceInstructionKind::ALL.to_vec());
}

#[test]
fn test_tagger_follows_context_program() {
    let ctx = GovernanceContext::new(key(99)).with_program_id(key(77));
    let tagger = DiscriminantTagger::new(key(77));
    for instruction in compile_all(&ctx) {
        assert!(tagger.process(instruction.clone()).is_ok());
        assert_matches!(
            DiscriminantTagger::default().process(instruction),
            Err(GovernanceClientError::ForeignProgram { expected, found })
                if expected == DEFAULT_PROGRAM_ID && found == key(77)
        );
    }
}

#[test]
fn test_compilation_is_deterministic() {
    let ctx = ctx();
    assert_eq!(compile_all(&ctx), compile_all(&ctx));
}

#[test]
fn test_payer_is_the_only_writable_signer() {
    let ctx = ctx();
    for instruction in compile_all(&ctx) {
        for meta in &instruction.accounts {
            if meta.is_signer && meta.is_writable {
                assert_eq!(meta.pubkey, ctx.payer);
            }
        }
    }
}

#[test]
fn test_token_owner_record_round_trip() {
    let ctx = ctx();
    let realm = ctx.pda().realm("Round trip").unwrap().address;
    let owner = key(12);

    let created = compiler::create_token_owner_record(
        &ctx,
        &CreateTokenOwnerRecordParams {
            governing_token_owner: Some(owner),
            ..CreateTokenOwnerRecordParams::new(realm, key(COMMUNITY_MINT))
        },
    )
    .unwrap();
    let deposit = compiler::deposit_governing_tokens(
        &ctx,
        &DepositGoverningTokensParams {
            realm,
            governing_token_mint: key(COMMUNITY_MINT),
            governing_token_source: key(13),
            governing_token_owner: owner,
            governing_token_source_authority: owner,
            amount: 7_000_000,
        },
    )
    .unwrap();

    assert_eq!(created.accounts[2].pubkey, deposit.accounts[5].pubkey);
    assert_eq!(
        deposit.accounts[5].pubkey,
        reference_address(&[
            b"governance",
            realm.as_ref(),
            key(COMMUNITY_MINT).as_ref(),
            owner.as_ref(),
        ])
    );
    assert_eq!(
        deposit.accounts[1].pubkey,
        ctx.pda()
            .community_token_holding(&realm, &key(COMMUNITY_MINT))
            .unwrap()
            .address
    );
    assert_eq!(deposit.accounts[3], AccountMeta::new_readonly(owner, true));
    assert_eq!(
        decode(&deposit),
        GovernanceInstruction::DepositGoverningTokens { amount: 7_000_000 }
    );
}

// ---------------------------------------------------------------------------
// Governance and proposals
// ---------------------------------------------------------------------------

#[test]
fn test_create_governance_defaults() {
    let ctx = ctx();
    let realm = key(5);
    let seed = key(6);
    let instruction = compiler::create_governance(
        &ctx,
        &CreateGovernanceParams::new(realm, governance_config(), key(PAYER)),
        &FixedSeed(seed),
    )
    .unwrap();

    assert_eq!(
        instruction.accounts[1],
        AccountMeta::new(
            reference_address(&[b"account-governance", realm.as_ref(), seed.as_ref()]),
            false
        )
    );
    assert_eq!(instruction.accounts[2], AccountMeta::new_readonly(seed, false));
    assert_eq!(
        instruction.accounts[3],
        AccountMeta::new_readonly(system_program::id(), false)
    );
    assert_eq!(instruction.accounts[6], AccountMeta::new_readonly(key(PAYER), true));
    assert_eq!(instruction.accounts[8].pubkey, DEFAULT_PROGRAM_ID);
    assert_eq!(
        decode(&instruction),
        GovernanceInstruction::CreateGovernance {
            config: governance_config()
        }
    );
}

#[test]
fn test_create_governance_over_existing_account() {
    let ctx = ctx();
    let params = CreateGovernanceParams {
        governed_account: Some(key(50)),
        token_owner_record: Some(key(51)),
        voter_weight_record: Some(key(52)),
        ..CreateGovernanceParams::new(key(5), governance_config(), key(PAYER))
    };
    let instruction = compiler::create_governance(&ctx, &params, &RandomSeedGenerator).unwrap();
    assert_eq!(instruction.accounts[2].pubkey, key(50));
    assert_eq!(instruction.accounts[3].pubkey, key(51));
    assert_eq!(instruction.accounts[8].pubkey, key(52));
    assert_eq!(
        instruction.accounts[1].pubkey,
        ctx.pda().governance(&key(5), &key(50)).unwrap().address
    );
}

#[test]
fn test_fresh_seeds_give_fresh_governances() {
    let ctx = ctx();
    let params = CreateGovernanceParams::new(key(5), governance_config(), key(PAYER));
    let first = compiler::create_governance(&ctx, &params, &RandomSeedGenerator).unwrap();
    let second = compiler::create_governance(&ctx, &params, &RandomSeedGenerator).unwrap();
    assert_ne!(first.accounts[1].pubkey, second.accounts[1].pubkey);
}

#[test]
fn test_create_proposal_accounts() {
    let ctx = ctx();
    let governance = key(21);
    let seed = key(22);
    let params = CreateProposalParams {
        vote_type: VoteType::MultiChoice {
            choice_type: MultiChoiceType::FullWeight,
            min_voter_options: 1,
            max_voter_options: 2,
            max_winning_options: 2,
        },
        options: vec!["A".to_string(), "B".to_string()],
        use_deny_option: false,
        ..proposal_params(key(20), governance, key(23))
    };
    let instruction = compiler::create_proposal(&ctx, &params, &FixedSeed(seed)).unwrap();

    let proposal = reference_address(&[
        b"governance",
        governance.as_ref(),
        key(COMMUNITY_MINT).as_ref(),
        seed.as_ref(),
    ]);
    assert_eq!(instruction.accounts[1], AccountMeta::new(proposal, false));
    assert_eq!(instruction.accounts[2], AccountMeta::new(governance, false));
    assert_eq!(instruction.accounts[3], AccountMeta::new(key(23), false));
    assert_eq!(instruction.accounts[9].pubkey, DEFAULT_PROGRAM_ID);
    assert_eq!(
        instruction.accounts[10],
        AccountMeta::new(
            reference_address(&[b"proposal-deposit", proposal.as_ref(), key(PAYER).as_ref()]),
            false
        )
    );

    assert_matches!(
        decode(&instruction),
        GovernanceInstruction::CreateProposal { options, proposal_seed, use_deny_option, .. } => {
            assert_eq!(options, vec!["A".to_string(), "B".to_string()]);
            assert_eq!(proposal_seed, seed);
            assert!(!use_deny_option);
        }
    );
}

#[test]
fn test_pinned_proposal_seed_wins_over_generator() {
    let ctx = ctx();
    let params = CreateProposalParams {
        proposal_seed: Some(key(60)),
        ..proposal_params(key(20), key(21), key(23))
    };
    let instruction = compiler::create_proposal(&ctx, &params, &FixedSeed(key(61))).unwrap();
    assert_eq!(
        instruction.accounts[1].pubkey,
        ctx.pda()
            .proposal(&key(21), &key(COMMUNITY_MINT), &key(60))
            .unwrap()
            .address
    );
}

#[test]
fn test_native_treasury_of_governance() {
    let ctx = ctx();
    let governance = key(70);
    let instruction =
        compiler::create_native_treasury(&ctx, &CreateNativeTreasuryParams { governance })
            .unwrap();
    assert_eq!(
        instruction.accounts[1].pubkey,
        reference_address(&[b"native-treasury", governance.as_ref()])
    );
}

// ---------------------------------------------------------------------------
// Client facade
// ---------------------------------------------------------------------------

#[test]
fn test_client_reports_primary_addresses() {
    init_logging();
    let client = GovernanceClient::new(ctx(), RecordingTransport::default())
        .with_seed_generator(FixedSeed(key(90)));
    let pda = client.pda();

    let Submission { signature, address } = client
        .create_realm(&CreateRealmParams::new("Facade", key(COMMUNITY_MINT), 1))
        .unwrap();
    let realm = pda.realm("Facade").unwrap().address;
    assert_eq!(address, realm);
    assert_eq!(signature, Signature::from([1; 64]));

    let tor = client
        .create_token_owner_record(&CreateTokenOwnerRecordParams::new(realm, key(COMMUNITY_MINT)))
        .unwrap()
        .address;
    assert_eq!(
        tor,
        pda.token_owner_record(&realm, &key(COMMUNITY_MINT), &key(PAYER))
            .unwrap()
            .address
    );

    let governance = client
        .create_governance(&CreateGovernanceParams::new(realm, governance_config(), key(PAYER)))
        .unwrap()
        .address;
    assert_eq!(governance, pda.governance(&realm, &key(90)).unwrap().address);

    let proposal = client
        .create_proposal(&proposal_params(realm, governance, tor))
        .unwrap()
        .address;
    assert_eq!(
        proposal,
        pda.proposal(&governance, &key(COMMUNITY_MINT), &key(90))
            .unwrap()
            .address
    );

    let new_authority = client
        .set_realm_authority(&SetRealmAuthorityParams::new(
            realm,
            governance,
            SetRealmAuthorityAction::SetChecked,
        ))
        .unwrap()
        .address;
    assert_eq!(new_authority, governance);

    let submitted = client.transport().submitted.borrow();
    let names: Vec<&str> = submitted.iter().map(|(tagged, _)| tagged.name).collect();
    assert_eq!(
        names,
        vec![
            "createRealm",
            "createTokenOwnerRecord",
            "createGovernance",
            "createProposal",
            "setRealmAuthority",
        ]
    );
    assert!(submitted.iter().all(|(_, signer)| *signer == key(PAYER)));
}

#[test]
fn test_client_surfaces_transport_failure() {
    let transport = RecordingTransport {
        fail_with: Some("blockhash not found".to_string()),
        ..RecordingTransport::default()
    };
    let client = GovernanceClient::new(ctx(), transport);
    assert_matches!(
        client.create_native_treasury(&CreateNativeTreasuryParams { governance: key(3) }),
        Err(GovernanceClientError::Transport(reason)) if reason == "blockhash not found"
    );
}

#[test]
fn test_client_compile_errors_skip_transport() {
    let client = GovernanceClient::new(ctx(), RecordingTransport::default());
    assert_matches!(
        client.create_realm(&CreateRealmParams::new("", key(COMMUNITY_MINT), 1)),
        Err(GovernanceClientError::MissingRequiredInput("name"))
    );
    assert!(client.transport().submitted.borrow().is_empty());
}

#[test]
fn test_fetch_realm_by_name() {
    let client = GovernanceClient::new(ctx(), RecordingTransport::default());
    let name = "SDK TEST ##14";
    let address = client.pda().realm(name).unwrap().address;
    let realm = RealmV2 {
        account_type: GovernanceAccountType::RealmV2,
        community_mint: key(COMMUNITY_MINT),
        config: RealmConfig {
            legacy1: 0,
            legacy2: 0,
            reserved: [0; 6],
            min_community_weight_to_create_governance: 1_000_000,
            community_mint_max_voter_weight_source: MintMaxVoterWeightSource::Absolute(5_000_000),
            council_mint: Some(key(COUNCIL_MINT)),
        },
        reserved: [0; 6],
        legacy1: 0,
        authority: Some(key(PAYER)),
        name: name.to_string(),
        reserved_v2: [0; 128],
    };

    let mut source = MemorySource::default();
    source.0.insert(address, borsh::to_vec(&realm).unwrap());

    assert_eq!(client.fetch_realm_by_name(&source, name).unwrap(), realm);
    assert_matches!(
        client.fetch_realm_by_name(&source, "Missing"),
        Err(GovernanceClientError::AccountNotFound(_))
    );
}
