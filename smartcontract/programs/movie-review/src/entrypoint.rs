use crate::{
    instructions::MovieReviewInstruction,
    processors::movie_review::{
        create::process_add_movie_review, delete::process_delete_movie_review,
        update::process_update_movie_review,
    },
};

use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, msg, pubkey::Pubkey};

#[cfg(not(feature = "no-entrypoint"))]
solana_program::entrypoint!(process_instruction);

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    let instruction = MovieReviewInstruction::unpack(data)?;

    msg!("Instruction: {:?}", instruction);

    match instruction {
        MovieReviewInstruction::AddMovieReview(args) => {
            process_add_movie_review(program_id, accounts, &args)?
        }
        MovieReviewInstruction::UpdateMovieReview(args) => {
            process_update_movie_review(program_id, accounts, &args)?
        }
        MovieReviewInstruction::DeleteMovieReview(args) => {
            process_delete_movie_review(program_id, accounts, &args)?
        }
    };

    Ok(())
}
