//! One compile routine per governance operation.
//!
//! Each routine resolves every account the operation touches, fills absent
//! optional slots with the context's placeholder, encodes the arguments and
//! returns a complete [`Instruction`].  Nothing is signed, sent or cached; a
//! failure returns no instruction at all.

use {
    crate::{
        config::GovernanceContext,
        constants::{rent_sysvar, spl_token_program, system_program},
        error::{GovernanceClientError, Result},
        instruction::GovernanceInstruction,
        params::{
            CreateGovernanceParams, CreateNativeTreasuryParams, CreateProposalParams,
            CreateRealmParams, CreateTokenOwnerRecordParams, DepositGoverningTokensParams,
            SetRealmAuthorityParams,
        },
        seed::SeedGenerator,
        state::{GoverningTokenConfigArgs, GoverningTokenType, RealmConfigArgs},
    },
    log::*,
    solana_instruction::{AccountMeta, Instruction},
    solana_pubkey::Pubkey,
};

/// Meta for an optional account slot.
///
/// A supplied account keeps its role; an empty slot gets the placeholder as a
/// read-only, non-signer account.
fn optional_account(
    ctx: &GovernanceContext,
    account: Option<Pubkey>,
    writable: bool,
) -> AccountMeta {
    match account {
        Some(pubkey) if writable => AccountMeta::new(pubkey, false),
        Some(pubkey) => AccountMeta::new_readonly(pubkey, false),
        None => AccountMeta::new_readonly(ctx.absent_account(), false),
    }
}

fn require_non_empty(value: &str, field: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(GovernanceClientError::MissingRequiredInput(field));
    }
    Ok(())
}

fn emit(
    ctx: &GovernanceContext,
    instruction: GovernanceInstruction,
    accounts: Vec<AccountMeta>,
) -> Result<Instruction> {
    ctx.check_program_version()?;
    let kind = instruction.kind();
    debug_assert_eq!(accounts.len(), kind.account_count(), "{kind:?} schema");

    let data = instruction.pack()?;
    debug!(
        "compiled {} for {:?}: {} accounts, {} data bytes",
        kind.name(),
        accounts.get(kind.primary_account_index()).map(|meta| meta.pubkey),
        accounts.len(),
        data.len(),
    );
    trace!("{} accounts: {accounts:?}", kind.name());

    Ok(Instruction {
        program_id: ctx.program_id,
        accounts,
        data,
    })
}

/// `CreateRealm`
///
/// `use_council_mint` and the add-in flags follow from which optional
/// accounts were supplied.
pub fn create_realm(ctx: &GovernanceContext, params: &CreateRealmParams) -> Result<Instruction> {
    require_non_empty(&params.name, "name")?;

    let pda = ctx.pda();
    let realm = pda.realm(&params.name)?.address;
    let community_token_holding = pda
        .community_token_holding(&realm, &params.community_token_mint)?
        .address;
    let council_token_holding = params
        .council_token_mint
        .map(|council_mint| pda.council_token_holding(&realm, &council_mint))
        .transpose()?
        .map(|derived| derived.address);
    let realm_config = pda.realm_config(&realm)?.address;

    let config_args = RealmConfigArgs {
        use_council_mint: params.council_token_mint.is_some(),
        min_community_weight_to_create_governance: params
            .min_community_weight_to_create_governance,
        community_mint_max_voter_weight_source: params
            .community_mint_max_voter_weight_source
            .unwrap_or_default(),
        community_token_config_args: GoverningTokenConfigArgs {
            use_voter_weight_addin: params.community_voter_weight_addin.is_some(),
            use_max_voter_weight_addin: params.max_community_voter_weight_addin.is_some(),
            token_type: params
                .community_token_type
                .unwrap_or(GoverningTokenType::Liquid),
        },
        council_token_config_args: GoverningTokenConfigArgs {
            use_voter_weight_addin: params.council_voter_weight_addin.is_some(),
            use_max_voter_weight_addin: params.max_council_voter_weight_addin.is_some(),
            token_type: params
                .council_token_type
                .unwrap_or(GoverningTokenType::Membership),
        },
    };

    let accounts = vec![
        AccountMeta::new(realm, false),
        AccountMeta::new_readonly(params.realm_authority.unwrap_or(ctx.payer), false),
        AccountMeta::new_readonly(params.community_token_mint, false),
        AccountMeta::new(community_token_holding, false),
        AccountMeta::new(ctx.payer, true),
        AccountMeta::new_readonly(system_program::id(), false),
        AccountMeta::new_readonly(spl_token_program::id(), false),
        AccountMeta::new_readonly(rent_sysvar::id(), false),
        optional_account(ctx, params.council_token_mint, false),
        optional_account(ctx, council_token_holding, true),
        AccountMeta::new(realm_config, false),
        optional_account(ctx, params.community_voter_weight_addin, false),
        optional_account(ctx, params.max_community_voter_weight_addin, false),
        optional_account(ctx, params.council_voter_weight_addin, false),
        optional_account(ctx, params.max_council_voter_weight_addin, false),
    ];

    emit(
        ctx,
        GovernanceInstruction::CreateRealm {
            name: params.name.clone(),
            config_args,
        },
        accounts,
    )
}

/// `CreateTokenOwnerRecord`
pub fn create_token_owner_record(
    ctx: &GovernanceContext,
    params: &CreateTokenOwnerRecordParams,
) -> Result<Instruction> {
    let owner = params.governing_token_owner.unwrap_or(ctx.payer);
    let token_owner_record = ctx
        .pda()
        .token_owner_record(&params.realm, &params.governing_token_mint, &owner)?
        .address;

    let accounts = vec![
        AccountMeta::new_readonly(params.realm, false),
        AccountMeta::new_readonly(owner, false),
        AccountMeta::new(token_owner_record, false),
        AccountMeta::new_readonly(params.governing_token_mint, false),
        AccountMeta::new(ctx.payer, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    emit(ctx, GovernanceInstruction::CreateTokenOwnerRecord, accounts)
}

/// `DepositGoverningTokens`
pub fn deposit_governing_tokens(
    ctx: &GovernanceContext,
    params: &DepositGoverningTokensParams,
) -> Result<Instruction> {
    let pda = ctx.pda();
    let governing_token_holding = pda
        .governing_token_holding(&params.realm, &params.governing_token_mint)?
        .address;
    let token_owner_record = pda
        .token_owner_record(
            &params.realm,
            &params.governing_token_mint,
            &params.governing_token_owner,
        )?
        .address;
    let realm_config = pda.realm_config(&params.realm)?.address;

    let accounts = vec![
        AccountMeta::new_readonly(params.realm, false),
        AccountMeta::new(governing_token_holding, false),
        AccountMeta::new(params.governing_token_source, false),
        AccountMeta::new_readonly(params.governing_token_owner, true),
        AccountMeta::new_readonly(params.governing_token_source_authority, true),
        AccountMeta::new(token_owner_record, false),
        AccountMeta::new(ctx.payer, true),
        AccountMeta::new_readonly(system_program::id(), false),
        AccountMeta::new_readonly(spl_token_program::id(), false),
        AccountMeta::new_readonly(realm_config, false),
    ];

    emit(
        ctx,
        GovernanceInstruction::DepositGoverningTokens {
            amount: params.amount,
        },
        accounts,
    )
}

/// `CreateGovernance`
///
/// Without a governed account the governance is keyed by a fresh seed from
/// `seeds`; the seed is also passed as the governed account so the program
/// can re-derive the address.
pub fn create_governance(
    ctx: &GovernanceContext,
    params: &CreateGovernanceParams,
    seeds: &dyn SeedGenerator,
) -> Result<Instruction> {
    let governed_account = params
        .governed_account
        .unwrap_or_else(|| seeds.fresh_seed());
    let pda = ctx.pda();
    let governance = pda.governance(&params.realm, &governed_account)?.address;
    let realm_config = pda.realm_config(&params.realm)?.address;

    let accounts = vec![
        AccountMeta::new_readonly(params.realm, false),
        AccountMeta::new(governance, false),
        AccountMeta::new_readonly(governed_account, false),
        AccountMeta::new_readonly(
            params.token_owner_record.unwrap_or_else(system_program::id),
            false,
        ),
        AccountMeta::new(ctx.payer, true),
        AccountMeta::new_readonly(system_program::id(), false),
        AccountMeta::new_readonly(params.governance_authority, true),
        AccountMeta::new_readonly(realm_config, false),
        optional_account(ctx, params.voter_weight_record, false),
    ];

    emit(
        ctx,
        GovernanceInstruction::CreateGovernance {
            config: params.config,
        },
        accounts,
    )
}

/// `CreateNativeTreasury`
pub fn create_native_treasury(
    ctx: &GovernanceContext,
    params: &CreateNativeTreasuryParams,
) -> Result<Instruction> {
    let native_treasury = ctx.pda().native_treasury(&params.governance)?.address;

    let accounts = vec![
        AccountMeta::new_readonly(params.governance, false),
        AccountMeta::new(native_treasury, false),
        AccountMeta::new(ctx.payer, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    emit(ctx, GovernanceInstruction::CreateNativeTreasury, accounts)
}

/// `SetRealmAuthority`
pub fn set_realm_authority(
    ctx: &GovernanceContext,
    params: &SetRealmAuthorityParams,
) -> Result<Instruction> {
    let accounts = vec![
        AccountMeta::new(params.realm, false),
        AccountMeta::new_readonly(params.realm_authority.unwrap_or(ctx.payer), true),
        AccountMeta::new_readonly(params.new_realm_authority, false),
    ];

    emit(
        ctx,
        GovernanceInstruction::SetRealmAuthority {
            action: params.action,
        },
        accounts,
    )
}

/// `CreateProposal`
///
/// The proposal deposit is always charged to the payer.
pub fn create_proposal(
    ctx: &GovernanceContext,
    params: &CreateProposalParams,
    seeds: &dyn SeedGenerator,
) -> Result<Instruction> {
    require_non_empty(&params.name, "name")?;
    if params.options.is_empty() {
        return Err(GovernanceClientError::MissingRequiredInput("options"));
    }

    let proposal_seed = params.proposal_seed.unwrap_or_else(|| seeds.fresh_seed());
    let pda = ctx.pda();
    let proposal = pda
        .proposal(&params.governance, &params.governing_token_mint, &proposal_seed)?
        .address;
    let realm_config = pda.realm_config(&params.realm)?.address;
    let proposal_deposit = pda.proposal_deposit(&proposal, &ctx.payer)?.address;

    let accounts = vec![
        AccountMeta::new_readonly(params.realm, false),
        AccountMeta::new(proposal, false),
        AccountMeta::new(params.governance, false),
        AccountMeta::new(params.token_owner_record, false),
        AccountMeta::new_readonly(params.governing_token_mint, false),
        AccountMeta::new_readonly(params.governance_authority, true),
        AccountMeta::new(ctx.payer, true),
        AccountMeta::new_readonly(system_program::id(), false),
        AccountMeta::new_readonly(realm_config, false),
        optional_account(ctx, params.voter_weight_record, false),
        AccountMeta::new(proposal_deposit, false),
    ];

    emit(
        ctx,
        GovernanceInstruction::CreateProposal {
            name: params.name.clone(),
            description_link: params.description_link.clone(),
            vote_type: params.vote_type,
            options: params.options.clone(),
            use_deny_option: params.use_deny_option,
            proposal_seed,
        },
        accounts,
    )
}
