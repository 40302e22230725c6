use crate::{
    processors::load_owned_review, serializer::try_acc_write,
    validation::validate_review_fields,
};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};

/// The title only locates the review; it is never rewritten.
#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateMovieReviewArgs {
    pub title: String,
    pub description: String,
    pub rating: u8,
}

pub fn process_update_movie_review(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    args: &UpdateMovieReviewArgs,
) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();

    let review_account = next_account_info(accounts_iter)?;
    let owner_account = next_account_info(accounts_iter)?;

    if let Err(err) = validate_review_fields(&args.title, &args.description, args.rating) {
        msg!("Invalid review fields: {}", err);
        return Err(err.into());
    }

    let mut review = load_owned_review(program_id, review_account, owner_account, &args.title)?;

    if !review_account.is_writable {
        msg!("MovieReview account must be writable");
        return Err(ProgramError::InvalidAccountData);
    }

    review.description = args.description.clone();
    review.rating = args.rating;

    try_acc_write(&review, review_account)?;

    msg!("Updated MovieReview: {}", review);

    Ok(())
}
