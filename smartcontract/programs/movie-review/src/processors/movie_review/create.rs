use crate::{
    error::MovieReviewError,
    processors::check_review_address,
    seeds::SEED_PREFIX,
    serializer::try_acc_create,
    state::movie_review::MovieReview,
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

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddMovieReviewArgs {
    pub title: String,
    pub description: String,
    pub rating: u8,
}

pub fn process_add_movie_review(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    args: &AddMovieReviewArgs,
) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();

    let review_account = next_account_info(accounts_iter)?;
    let owner_account = next_account_info(accounts_iter)?;
    let system_program = next_account_info(accounts_iter)?;

    if !owner_account.is_signer {
        msg!("Owner must be a signer");
        return Err(ProgramError::MissingRequiredSignature);
    }
    if system_program.key != &solana_program::system_program::id() {
        msg!("Invalid System Program Account");
        return Err(ProgramError::IncorrectProgramId);
    }

    if let Err(err) = validate_review_fields(&args.title, &args.description, args.rating) {
        msg!("Invalid review fields: {}", err);
        return Err(err.into());
    }

    let bump_seed =
        check_review_address(program_id, review_account, owner_account.key, &args.title)?;

    if !review_account.data_is_empty() {
        if review_account.owner == program_id && MovieReview::try_from(review_account).is_ok() {
            msg!("MovieReview already exists: {}", args.title);
            return Err(MovieReviewError::AlreadyExists.into());
        }
        msg!("Address {} holds foreign data", review_account.key);
        return Err(MovieReviewError::SchemaMismatch.into());
    }

    let review = MovieReview::new(
        *owner_account.key,
        args.title.clone(),
        args.description.clone(),
        args.rating,
    );

    try_acc_create(
        &review,
        review_account,
        owner_account,
        system_program,
        program_id,
        MovieReview::SIZE,
        &[
            SEED_PREFIX,
            args.title.as_bytes(),
            owner_account.key.as_ref(),
            &[bump_seed],
        ],
    )?;

    msg!("Created MovieReview: {}", review);

    Ok(())
}
