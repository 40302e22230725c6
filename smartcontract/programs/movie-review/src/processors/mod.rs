use crate::{error::MovieReviewError, pda::get_movie_review_pda, state::movie_review::MovieReview};
use solana_program::{account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey};

pub mod movie_review;

/// Checks that `review_account` sits at the address derived from `owner` and `title`
/// and returns the bump seed of that derivation.
pub fn check_review_address(
    program_id: &Pubkey,
    review_account: &AccountInfo,
    owner: &Pubkey,
    title: &str,
) -> Result<u8, ProgramError> {
    let (expected_pk, bump_seed) = get_movie_review_pda(program_id, owner, title);
    if review_account.key != &expected_pk {
        msg!(
            "Invalid MovieReview PubKey: expected {}, got {}",
            expected_pk,
            review_account.key
        );
        return Err(MovieReviewError::AddressMismatch.into());
    }
    Ok(bump_seed)
}

/// Loads an existing review for a mutating instruction.
///
/// Checks run in a fixed order: address, existence, schema, then ownership. The
/// first failing check decides the error.
pub fn load_owned_review(
    program_id: &Pubkey,
    review_account: &AccountInfo,
    owner_account: &AccountInfo,
    title: &str,
) -> Result<MovieReview, ProgramError> {
    check_review_address(program_id, review_account, owner_account.key, title)?;

    if review_account.data_is_empty() {
        msg!("MovieReview not found: {}", title);
        return Err(MovieReviewError::NotFound.into());
    }
    if review_account.owner != program_id {
        msg!("Invalid MovieReview Account Owner: {}", review_account.owner);
        return Err(MovieReviewError::SchemaMismatch.into());
    }

    let review = MovieReview::try_from(review_account)?;

    if !owner_account.is_signer || review.owner != *owner_account.key {
        msg!(
            "{} is not authorized to modify MovieReview {}",
            owner_account.key,
            review_account.key
        );
        return Err(MovieReviewError::Unauthorized.into());
    }

    Ok(review)
}
