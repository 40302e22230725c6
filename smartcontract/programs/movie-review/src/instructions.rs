use borsh::{BorshDeserialize, BorshSerialize};
#[allow(deprecated)] // system_program not yet migrated to solana_sdk_ids crate-wide
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

use crate::pda::get_movie_review_pda;
pub use crate::processors::movie_review::{
    create::AddMovieReviewArgs, delete::DeleteMovieReviewArgs, update::UpdateMovieReviewArgs,
};

// Instruction indices
pub const ADD_MOVIE_REVIEW: u8 = 0;
pub const UPDATE_MOVIE_REVIEW: u8 = 1;
pub const DELETE_MOVIE_REVIEW: u8 = 2;

#[derive(BorshSerialize, Debug, PartialEq, Clone)]
pub enum MovieReviewInstruction {
    AddMovieReview(AddMovieReviewArgs),
    UpdateMovieReview(UpdateMovieReviewArgs),
    DeleteMovieReview(DeleteMovieReviewArgs),
}

impl MovieReviewInstruction {
    pub fn pack(&self) -> Result<Vec<u8>, ProgramError> {
        borsh::to_vec(&self).map_err(|_| ProgramError::InvalidInstructionData)
    }

    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let (&instruction, rest) = data
            .split_first()
            .ok_or(ProgramError::InvalidInstructionData)?;

        match instruction {
            ADD_MOVIE_REVIEW => Ok(Self::AddMovieReview(
                AddMovieReviewArgs::try_from_slice(rest)
                    .map_err(|_| ProgramError::InvalidInstructionData)?,
            )),
            UPDATE_MOVIE_REVIEW => Ok(Self::UpdateMovieReview(
                UpdateMovieReviewArgs::try_from_slice(rest)
                    .map_err(|_| ProgramError::InvalidInstructionData)?,
            )),
            DELETE_MOVIE_REVIEW => Ok(Self::DeleteMovieReview(
                DeleteMovieReviewArgs::try_from_slice(rest)
                    .map_err(|_| ProgramError::InvalidInstructionData)?,
            )),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// Builds an instruction creating the review `owner` keeps under `args.title`.
///
/// Accounts:
/// 0. `[writable]` review PDA
/// 1. `[writable, signer]` owner, pays for the account
/// 2. `[]` system program
pub fn add_movie_review(program_id: &Pubkey, owner: &Pubkey, args: AddMovieReviewArgs) -> Instruction {
    let (review_pk, _) = get_movie_review_pda(program_id, owner, &args.title);
    Instruction::new_with_borsh(
        *program_id,
        &MovieReviewInstruction::AddMovieReview(args),
        vec![
            AccountMeta::new(review_pk, false),
            AccountMeta::new(*owner, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
    )
}

/// Accounts:
/// 0. `[writable]` review PDA
/// 1. `[signer]` owner
pub fn update_movie_review(
    program_id: &Pubkey,
    owner: &Pubkey,
    args: UpdateMovieReviewArgs,
) -> Instruction {
    let (review_pk, _) = get_movie_review_pda(program_id, owner, &args.title);
    Instruction::new_with_borsh(
        *program_id,
        &MovieReviewInstruction::UpdateMovieReview(args),
        vec![
            AccountMeta::new(review_pk, false),
            AccountMeta::new_readonly(*owner, true),
        ],
    )
}

/// Accounts:
/// 0. `[writable]` review PDA
/// 1. `[writable, signer]` owner, receives the refunded rent
pub fn delete_movie_review(
    program_id: &Pubkey,
    owner: &Pubkey,
    args: DeleteMovieReviewArgs,
) -> Instruction {
    let (review_pk, _) = get_movie_review_pda(program_id, owner, &args.title);
    Instruction::new_with_borsh(
        *program_id,
        &MovieReviewInstruction::DeleteMovieReview(args),
        vec![
            AccountMeta::new(review_pk, false),
            AccountMeta::new(*owner, true),
        ],
    )
}
