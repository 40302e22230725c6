use solana_program::program_error::ProgramError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum MovieReviewError {
    #[error("Custom program error: {0:#x}")]
    Custom(u32),
    #[error("Account address does not match the derived review address")]
    AddressMismatch,
    #[error("Review already exists")]
    AlreadyExists,
    #[error("Review not found")]
    NotFound,
    #[error("Account does not hold a movie review")]
    SchemaMismatch,
    #[error("Signer is not the review owner")]
    Unauthorized,
    #[error("Field exceeds its maximum length")]
    FieldTooLong,
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
}

impl MovieReviewError {
    pub fn code(&self) -> u32 {
        match self {
            MovieReviewError::Custom(e) => *e,
            MovieReviewError::AddressMismatch => 1,
            MovieReviewError::AlreadyExists => 2,
            MovieReviewError::NotFound => 3,
            MovieReviewError::SchemaMismatch => 4,
            MovieReviewError::Unauthorized => 5,
            MovieReviewError::FieldTooLong => 6,
            MovieReviewError::RatingOutOfRange => 7,
        }
    }
}

impl From<MovieReviewError> for ProgramError {
    fn from(e: MovieReviewError) -> Self {
        ProgramError::Custom(e.code())
    }
}

impl From<u32> for MovieReviewError {
    fn from(e: u32) -> Self {
        match e {
            1 => MovieReviewError::AddressMismatch,
            2 => MovieReviewError::AlreadyExists,
            3 => MovieReviewError::NotFound,
            4 => MovieReviewError::SchemaMismatch,
            5 => MovieReviewError::Unauthorized,
            6 => MovieReviewError::FieldTooLong,
            7 => MovieReviewError::RatingOutOfRange,
            _ => MovieReviewError::Custom(e),
        }
    }
}

impl From<ProgramError> for MovieReviewError {
    fn from(e: ProgramError) -> Self {
        match e {
            ProgramError::Custom(e) => e.into(),
            _ => MovieReviewError::Custom(0),
        }
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), MovieReviewError>;
}
