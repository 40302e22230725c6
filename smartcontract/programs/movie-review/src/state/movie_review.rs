use crate::{
    error::{MovieReviewError, Validate},
    state::accounttype::AccountType,
    validation::{validate_description, validate_rating, validate_title},
    validation::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH},
};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey};
use std::fmt;

#[derive(BorshSerialize, Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieReview {
    pub account_type: AccountType, // 1
    #[cfg_attr(
        feature = "serde",
        serde(
            serialize_with = "movie_review_program_common::serializer::serialize_pubkey_as_string",
            deserialize_with = "movie_review_program_common::serializer::deserialize_pubkey_from_string"
        )
    )]
    pub owner: Pubkey, // 32
    pub rating: u8,          // 1
    pub title: String,       // 4 + len
    pub description: String, // 4 + len
}

impl MovieReview {
    /// Bytes reserved for every review account: the record with both strings at their
    /// maximum length. Shorter records leave the tail zeroed.
    pub const SIZE: usize = 1 + 32 + 1 + (4 + MAX_TITLE_LENGTH) + (4 + MAX_DESCRIPTION_LENGTH);

    pub fn new(owner: Pubkey, title: String, description: String, rating: u8) -> Self {
        Self {
            account_type: AccountType::MovieReview,
            owner,
            rating,
            title,
            description,
        }
    }
}

impl fmt::Display for MovieReview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "account_type: {}, owner: {}, rating: {}, title: {}, description: {}",
            self.account_type, self.owner, self.rating, self.title, self.description,
        )
    }
}

impl TryFrom<&[u8]> for MovieReview {
    type Error = ProgramError;

    fn try_from(mut data: &[u8]) -> Result<Self, Self::Error> {
        let account_type: AccountType =
            BorshDeserialize::deserialize(&mut data).unwrap_or_default();
        if account_type != AccountType::MovieReview {
            return Err(MovieReviewError::SchemaMismatch.into());
        }

        Ok(Self {
            account_type,
            owner: BorshDeserialize::deserialize(&mut data)
                .map_err(|_| ProgramError::InvalidAccountData)?,
            rating: BorshDeserialize::deserialize(&mut data)
                .map_err(|_| ProgramError::InvalidAccountData)?,
            title: BorshDeserialize::deserialize(&mut data)
                .map_err(|_| ProgramError::InvalidAccountData)?,
            description: BorshDeserialize::deserialize(&mut data)
                .map_err(|_| ProgramError::InvalidAccountData)?,
        })
    }
}

impl TryFrom<&AccountInfo<'_>> for MovieReview {
    type Error = ProgramError;

    fn try_from(account: &AccountInfo) -> Result<Self, Self::Error> {
        let data = account.try_borrow_data()?;
        let res = Self::try_from(&data[..]);
        if res.is_err() {
            msg!("Failed to deserialize MovieReview: {:?}", res.as_ref().err());
        }
        res
    }
}

impl Validate for MovieReview {
    fn validate(&self) -> Result<(), MovieReviewError> {
        if self.account_type != AccountType::MovieReview {
            msg!("Invalid account type: {}", self.account_type);
            return Err(MovieReviewError::SchemaMismatch);
        }
        if let Err(err) = validate_title(&self.title) {
            msg!("Title too long: {} bytes", self.title.len());
            return Err(err);
        }
        if let Err(err) = validate_description(&self.description) {
            msg!("Description too long: {} bytes", self.description.len());
            return Err(err);
        }
        if let Err(err) = validate_rating(self.rating) {
            msg!("Rating out of range: {}", self.rating);
            return Err(err);
        }
        Ok(())
    }
}
