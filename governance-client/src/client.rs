//! Build-and-send facade over the compiler.
//!
//! [`GovernanceClient`] owns a [`GovernanceContext`], a [`Transport`] and a
//! seed generator.  Each `build_*` method compiles and tags one instruction;
//! the matching send method submits it as the payer and reports the address
//! of the account the operation created or changed.

use {
    crate::{
        account::{
            fetch_account, AccountSource, GovernanceAccountType, RealmV2, RealmV2Deserializer,
        },
        compiler,
        config::GovernanceContext,
        error::{GovernanceClientError, Result},
        params::{
            CreateGovernanceParams, CreateNativeTreasuryParams, CreateProposalParams,
            CreateRealmParams, CreateTokenOwnerRecordParams, DepositGoverningTokensParams,
            SetRealmAuthorityParams,
        },
        pda::PdaClient,
        seed::{RandomSeedGenerator, SeedGenerator},
        tagging::{DiscriminantTagger, InstructionPostProcessor, TaggedInstruction},
    },
    log::*,
    solana_instruction::Instruction,
    solana_pubkey::Pubkey,
    solana_signature::Signature,
    std::fmt,
};

/// Signs, sends and confirms a single instruction.
///
/// Retries, timeouts and commitment levels are the implementation's concern.
pub trait Transport {
    type Error: fmt::Display;

    fn submit(
        &self,
        instruction: &TaggedInstruction,
        signer: &Pubkey,
    ) -> std::result::Result<Signature, Self::Error>;
}

/// Outcome of a confirmed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub signature: Signature,
    /// The account the operation created or changed.
    pub address: Pubkey,
}

pub struct GovernanceClient<T, G = RandomSeedGenerator, P = DiscriminantTagger> {
    context: GovernanceContext,
    transport: T,
    seeds: G,
    post_processor: P,
}

impl<T: Transport> GovernanceClient<T> {
    pub fn new(context: GovernanceContext, transport: T) -> Self {
        let post_processor = DiscriminantTagger::new(context.program_id);
        Self {
            context,
            transport,
            seeds: RandomSeedGenerator,
            post_processor,
        }
    }
}

impl<T, G, P> GovernanceClient<T, G, P>
where
    T: Transport,
    G: SeedGenerator,
    P: InstructionPostProcessor<Output = TaggedInstruction>,
{
    pub fn with_seed_generator<G2: SeedGenerator>(self, seeds: G2) -> GovernanceClient<T, G2, P> {
        GovernanceClient {
            context: self.context,
            transport: self.transport,
            seeds,
            post_processor: self.post_processor,
        }
    }

    pub fn with_post_processor<P2>(self, post_processor: P2) -> GovernanceClient<T, G, P2>
    where
        P2: InstructionPostProcessor<Output = TaggedInstruction>,
    {
        GovernanceClient {
            context: self.context,
            transport: self.transport,
            seeds: self.seeds,
            post_processor,
        }
    }

    pub fn context(&self) -> &GovernanceContext {
        &self.context
    }

    pub fn pda(&self) -> PdaClient {
        self.context.pda()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn tag(&self, instruction: Instruction) -> Result<TaggedInstruction> {
        self.post_processor.process(instruction)
    }

    fn send(&self, instruction: TaggedInstruction) -> Result<Submission> {
        let address = instruction
            .primary_account()
            .ok_or(GovernanceClientError::UnknownInstruction(Some(
                instruction.discriminant(),
            )))?;
        let signature = self
            .transport
            .submit(&instruction, &self.context.payer)
            .map_err(|err| {
                warn!("{} for {address} failed: {err}", instruction.name);
                GovernanceClientError::Transport(err.to_string())
            })?;
        info!("{} for {address} confirmed: {signature}", instruction.name);
        Ok(Submission { signature, address })
    }

    // -----------------------------------------------------------------------
    // Build
    // -----------------------------------------------------------------------

    pub fn build_create_realm(&self, params: &CreateRealmParams) -> Result<TaggedInstruction> {
        self.tag(compiler::create_realm(&self.context, params)?)
    }

    pub fn build_create_token_owner_record(
        &self,
        params: &CreateTokenOwnerRecordParams,
    ) -> Result<TaggedInstruction> {
        self.tag(compiler::create_token_owner_record(&self.context, params)?)
    }

    pub fn build_deposit_governing_tokens(
        &self,
        params: &DepositGoverningTokensParams,
    ) -> Result<TaggedInstruction> {
        self.tag(compiler::deposit_governing_tokens(&self.context, params)?)
    }

    pub fn build_create_governance(
        &self,
        params: &CreateGovernanceParams,
    ) -> Result<TaggedInstruction> {
        self.tag(compiler::create_governance(&self.context, params, &self.seeds)?)
    }

    pub fn build_create_native_treasury(
        &self,
        params: &CreateNativeTreasuryParams,
    ) -> Result<TaggedInstruction> {
        self.tag(compiler::create_native_treasury(&self.context, params)?)
    }

    pub fn build_set_realm_authority(
        &self,
        params: &SetRealmAuthorityParams,
    ) -> Result<TaggedInstruction> {
        self.tag(compiler::set_realm_authority(&self.context, params)?)
    }

    pub fn build_create_proposal(
        &self,
        params: &CreateProposalParams,
    ) -> Result<TaggedInstruction> {
        self.tag(compiler::create_proposal(&self.context, params, &self.seeds)?)
    }

    // -----------------------------------------------------------------------
    // Build and send
    // -----------------------------------------------------------------------

    /// Returns the realm address.
    pub fn create_realm(&self, params: &CreateRealmParams) -> Result<Submission> {
        self.send(self.build_create_realm(params)?)
    }

    /// Returns the token owner record address.
    pub fn create_token_owner_record(
        &self,
        params: &CreateTokenOwnerRecordParams,
    ) -> Result<Submission> {
        self.send(self.build_create_token_owner_record(params)?)
    }

    /// Returns the governing token holding address.
    pub fn deposit_governing_tokens(
        &self,
        params: &DepositGoverningTokensParams,
    ) -> Result<Submission> {
        self.send(self.build_deposit_governing_tokens(params)?)
    }

    /// Returns the governance address.
    pub fn create_governance(&self, params: &CreateGovernanceParams) -> Result<Submission> {
        self.send(self.build_create_governance(params)?)
    }

    /// Returns the native treasury address.
    pub fn create_native_treasury(
        &self,
        params: &CreateNativeTreasuryParams,
    ) -> Result<Submission> {
        self.send(self.build_create_native_treasury(params)?)
    }

    /// Returns the new realm authority.
    pub fn set_realm_authority(&self, params: &SetRealmAuthorityParams) -> Result<Submission> {
        self.send(self.build_set_realm_authority(params)?)
    }

    /// Returns the proposal address.
    pub fn create_proposal(&self, params: &CreateProposalParams) -> Result<Submission> {
        self.send(self.build_create_proposal(params)?)
    }

    // -----------------------------------------------------------------------
    // Fetch
    // -----------------------------------------------------------------------

    pub fn fetch_realm<S>(&self, source: &S, realm: &Pubkey) -> Result<RealmV2>
    where
        S: AccountSource + ?Sized,
    {
        fetch_account(source, &RealmV2Deserializer, realm, GovernanceAccountType::RealmV2)
    }

    pub fn fetch_realm_by_name<S>(&self, source: &S, name: &str) -> Result<RealmV2>
    where
        S: AccountSource + ?Sized,
    {
        let realm = self.pda().realm(name)?.address;
        self.fetch_realm(source, &realm)
    }
}
