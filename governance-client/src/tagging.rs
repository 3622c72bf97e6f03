//! Post-processing of compiled instructions.
//!
//! Compilation produces a bare [`Instruction`]; a post-processor runs on
//! every compiled instruction before it reaches the caller or a transport.
//! The default processor recovers the instruction's identity from its
//! discriminant byte so callers and logs can refer to it by name.

use {
    crate::{
        constants::DEFAULT_PROGRAM_ID,
        error::{GovernanceClientError, Result},
        instruction::GovernanceInstructionKind,
    },
    log::*,
    solana_instruction::Instruction,
    solana_pubkey::Pubkey,
};

/// A compiled instruction labelled with the operation it performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedInstruction {
    pub name: &'static str,
    pub kind: GovernanceInstructionKind,
    pub instruction: Instruction,
}

impl TaggedInstruction {
    pub fn discriminant(&self) -> u8 {
        self.kind.discriminant()
    }

    /// Address of the account the operation creates or changes.
    pub fn primary_account(&self) -> Option<Pubkey> {
        self.instruction
            .accounts
            .get(self.kind.primary_account_index())
            .map(|meta| meta.pubkey)
    }
}

pub trait InstructionPostProcessor: Send + Sync {
    type Output;

    fn process(&self, instruction: Instruction) -> Result<Self::Output>;
}

/// Labels instructions by their leading discriminant byte.
///
/// Only instructions addressed to the configured governance program are
/// accepted; a leading byte means nothing for any other program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscriminantTagger {
    program_id: Pubkey,
}

impl DiscriminantTagger {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }
}

impl Default for DiscriminantTagger {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM_ID)
    }
}

impl InstructionPostProcessor for DiscriminantTagger {
    type Output = TaggedInstruction;

    fn process(&self, instruction: Instruction) -> Result<TaggedInstruction> {
        if instruction.program_id != self.program_id {
            return Err(GovernanceClientError::ForeignProgram {
                expected: self.program_id,
                found: instruction.program_id,
            });
        }
        let tag = instruction.data.first().copied();
        let kind = tag
            .and_then(GovernanceInstructionKind::from_discriminant)
            .ok_or(GovernanceClientError::UnknownInstruction(tag))?;
        trace!("tagged instruction {} as {}", kind.discriminant(), kind.name());
        Ok(TaggedInstruction {
            name: kind.name(),
            kind,
            instruction,
        })
    }
}
