use crate::{
    processors::load_owned_review, serializer::try_acc_close, validation::validate_title,
};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeleteMovieReviewArgs {
    pub title: String,
}

pub fn process_delete_movie_review(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    args: &DeleteMovieReviewArgs,
) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();

    let review_account = next_account_info(accounts_iter)?;
    let owner_account = next_account_info(accounts_iter)?;

    if let Err(err) = validate_title(&args.title) {
        msg!("Invalid title: {}", err);
        return Err(err.into());
    }

    let review = load_owned_review(program_id, review_account, owner_account, &args.title)?;

    if !review_account.is_writable || !owner_account.is_writable {
        msg!("MovieReview and owner accounts must be writable");
        return Err(ProgramError::InvalidAccountData);
    }

    try_acc_close(review_account, owner_account)?;

    msg!("Deleted MovieReview: {}", review.title);

    Ok(())
}
